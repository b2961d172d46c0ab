//! Example: Stacking segments from a timeline row
//!
//! This example demonstrates how a rendering layer hands pre-measured
//! segments to the stacker and applies the computed offsets afterwards.

use strata::{
    SegmentOrder, Stacker,
    config::{AppConfig, LayoutConfig},
    segment::Segment,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Stacking timeline segments...\n");

    // Horizontal extents come from a date-to-pixel mapping, heights from
    // measuring the rendered elements.
    let events = [
        ("Standup", Segment::new(0.0, 40.0, 22.0)),
        ("Design review", Segment::new(20.0, 120.0, 22.0)),
        ("Deploy window", Segment::new(40.0, 90.0, 30.0)),
        ("Lunch", Segment::new(120.0, 180.0, 22.0)),
        ("On-call handover", Segment::new(100.0, 140.0, 22.0)),
    ];
    let segments: Vec<Segment> = events.iter().map(|(_, segment)| *segment).collect();

    let config = AppConfig::default().with_layout(LayoutConfig::new(SegmentOrder::Chronological));
    let stacker = Stacker::new(config);
    let layout = stacker.stack(&segments)?;

    for placed in layout.iter() {
        let (label, segment) = &events[placed.index()];
        println!(
            "{label:<18} left={:>6.1} right={:>6.1} top={:>6.1} height={:>5.1}",
            segment.left(),
            segment.right(),
            placed.top(),
            segment.height(),
        );
    }

    println!("\nContainer height: {}", layout.total_height());
    println!("Levels used: {}", layout.level_count());

    Ok(())
}
