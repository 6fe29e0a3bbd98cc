// Demo: just-in-time measurement with a size generator, traced.
//
// Run with `RUST_LOG=virtual_sizing=trace cargo run --example lazy_measurement --features tracing`.
use tracing_subscriber::EnvFilter;
use virtual_sizing::{
    Align, ItemSize, OffsetQuery, Options, SizeAndPositionManager, VisibleRangeQuery,
};

fn main() -> Result<(), virtual_sizing::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(true)
        .init();

    // Rows alternate between one and three lines of text.
    let options = Options::new(
        10_000,
        ItemSize::generator(|i| if i % 3 == 0 { 54.0 } else { 18.0 }),
    )
    .with_estimated_item_size(30.0);
    let mut m = SizeAndPositionManager::new(options)?;
    let viewport = 300.0;

    println!("estimated total={} measured={:?}", m.total_size(), m.last_measured_index());

    let range = m.visible_range(VisibleRangeQuery::new(viewport, 0.0))?;
    println!("top: range={range:?} measured={:?}", m.last_measured_index());

    // A far jump probes exponentially instead of measuring every row.
    let range = m.visible_range(VisibleRangeQuery::new(viewport, 60_000.0))?;
    println!(
        "jump: range={range:?} measured={:?} total={}",
        m.last_measured_index(),
        m.total_size()
    );

    // Row 42 grew after a re-layout: drop it and everything after it.
    m.reset_item(42);
    println!("after reset: measured={:?}", m.last_measured_index());

    let off = m.updated_offset_for_index(
        OffsetQuery::new(5_000, viewport).with_align(Align::Center),
    )?;
    println!("center row 5000: offset={off} measured={:?}", m.last_measured_index());
    Ok(())
}
