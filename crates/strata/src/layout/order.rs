//! Orderings applied to segments before level assignment.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use strata_core::segment::Segment;

/// Built-in orderings for the stacking pass.
///
/// The names match external configuration strings (snake_case). Sorting
/// is always stable, so segments that compare equal keep their input order.
///
/// # Variants
///
/// - `Chronological` - Earliest start first, longer segments first on ties (default)
/// - `Input` - Keep the order segments were given in
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentOrder {
    /// Sort by `left`, then by `right` descending (default)
    #[default]
    Chronological,
    /// Preserve input order
    Input,
}

impl SegmentOrder {
    /// Compares two segments under this ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::cmp::Ordering;
    /// # use strata::{SegmentOrder, segment::Segment};
    /// let short = Segment::new(0.0, 5.0, 10.0);
    /// let long = Segment::new(0.0, 50.0, 10.0);
    ///
    /// assert_eq!(SegmentOrder::Chronological.compare(&long, &short), Ordering::Less);
    /// assert_eq!(SegmentOrder::Input.compare(&long, &short), Ordering::Equal);
    /// ```
    pub fn compare(self, a: &Segment, b: &Segment) -> Ordering {
        match self {
            Self::Chronological => a
                .left()
                .total_cmp(&b.left())
                .then_with(|| b.right().total_cmp(&a.right())),
            Self::Input => Ordering::Equal,
        }
    }
}

impl FromStr for SegmentOrder {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chronological" => Ok(Self::Chronological),
            "input" => Ok(Self::Input),
            _ => Err("Unsupported segment order"),
        }
    }
}

impl From<SegmentOrder> for &'static str {
    fn from(val: SegmentOrder) -> Self {
        match val {
            SegmentOrder::Chronological => "chronological",
            SegmentOrder::Input => "input",
        }
    }
}

impl fmt::Display for SegmentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
