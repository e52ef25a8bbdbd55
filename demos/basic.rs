// Example: column resolution and balanced distribution.
use brickwork::{Masonry, MasonryOptions};

fn main() {
    let mut m = Masonry::new(
        MasonryOptions::new(8)
            .with_available_width(690)
            .with_min_col_width(330)
            .with_gap(20),
    );
    println!("columns={}", m.column_count());

    let mut indexes = Vec::new();
    for col in 0..m.column_count() {
        m.collect_column_indexes(col, &mut indexes);
        println!("col{col}: {indexes:?}");
    }

    // Report real heights as items mount; the default balanced order
    // redistributes so column heights stay close.
    m.measure_many([(0, 420), (1, 180), (2, 640), (3, 300)]);
    for col in 0..m.column_count() {
        m.collect_column_indexes(col, &mut indexes);
        println!("after measure, col{col}: {indexes:?}");
    }
}
