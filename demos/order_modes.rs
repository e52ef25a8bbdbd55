// Example: the five ordering policies over the same collection.
use brickwork::{Masonry, MasonryOptions, OrderMode};

fn main() {
    let heights = [300u32, 500, 200, 700, 250, 400, 350];
    for order in [
        OrderMode::Balanced,
        OrderMode::BalancedStable,
        OrderMode::RowFirst,
        OrderMode::ColumnSequential,
        OrderMode::ColumnBalanced,
    ] {
        let mut m = Masonry::new(
            MasonryOptions::new(heights.len())
                .with_available_width(370)
                .with_min_col_width(100)
                .with_gap(10)
                .with_order(order)
                .with_estimate_height(Some(move |i: usize| heights[i])),
        );
        m.measure_many(heights.iter().copied().enumerate());

        let mut indexes = Vec::new();
        let mut columns = Vec::new();
        for col in 0..m.column_count() {
            m.collect_column_indexes(col, &mut indexes);
            columns.push(indexes.clone());
        }
        println!("{order:?}: {columns:?}");
    }
}
