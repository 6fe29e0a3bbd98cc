// Demo: fixed-size rows, visible range and scroll-to helpers.
use virtual_sizing::{
    Align, ItemSize, OffsetQuery, Options, SizeAndPositionManager, VisibleRangeQuery,
};

fn main() -> Result<(), virtual_sizing::Error> {
    let mut m = SizeAndPositionManager::new(Options::new(1_000_000, ItemSize::constant(20.0)))?;
    let viewport = 400.0;

    let mut items = Vec::new();
    m.collect_visible_items(VisibleRangeQuery::new(viewport, 123_456.0), &mut items)?;
    println!("total_size={}", m.total_size());
    println!(
        "visible_range={:?}",
        m.visible_range(VisibleRangeQuery::new(viewport, 123_456.0))?
    );
    println!("first_rendered={:?}", items.first());

    let off = m.updated_offset_for_index(
        OffsetQuery::new(999_999, viewport)
            .with_align(Align::End)
            .with_current_offset(123_456.0),
    )?;
    println!("scroll to last item: offset={off}");
    Ok(())
}
