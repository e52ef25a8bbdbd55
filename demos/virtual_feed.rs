// Example: windowed rendering of a large feed.
use brickwork::{Masonry, MasonryOptions, ViewportHeight};

fn main() {
    let mut m = Masonry::new(
        MasonryOptions::new(100_000)
            .with_available_width(1280)
            .with_min_col_width(300)
            .with_gap(16)
            .with_estimate_height(Some(|i: usize| 280 + (i as u32 % 5) * 60))
            .with_virtualize(true)
            .with_viewport_height(ViewportHeight::Px(900))
            .with_overscan(2),
    );
    println!(
        "columns={} content_height={}",
        m.column_count(),
        m.content_height_estimate()
    );

    m.set_scroll_offset(250_000);
    for (col, win) in m.windows().iter().enumerate() {
        println!(
            "col{col}: render [{}, {}) leading={} trailing={}",
            win.start_index, win.end_index, win.leading_px, win.trailing_px
        );
    }

    // Only the windowed slice mounts. Measurements reported by mounting items
    // update the height cache but never reshuffle columns while virtualizing.
    let mut entries = Vec::new();
    m.collect_visible_entries(0, &mut entries);
    println!(
        "col0 mounts {} items, first={:?}",
        entries.len(),
        entries.first().map(|e| e.index)
    );
}
