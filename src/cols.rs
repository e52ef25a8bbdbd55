//! Column-count resolution from container geometry.

use crate::options::MasonryOptions;

/// The width used for column math: the measured container width, or the
/// configured hint while the container has not been measured yet (width 0).
///
/// Server-side renders go through the hint so the first hydrated layout picks
/// the count a full-width viewport would, instead of collapsing to one column
/// and reflowing.
pub(crate) fn effective_width<K>(options: &MasonryOptions<K>) -> u32 {
    if options.available_width > 0 {
        options.available_width
    } else {
        options.width_hint
    }
}

/// Resolves the column count for the current geometry.
///
/// `floor((width + gap) / (min_col_width + gap))`, clamped to
/// `[1, item_count]`. A zero `min_col_width` is treated as 1. A configured
/// override closure replaces the whole computation and is clamped to >= 1
/// only; it may return more columns than there are items.
pub(crate) fn resolve<K>(options: &MasonryOptions<K>) -> usize {
    let width = effective_width(options);
    if let Some(calc) = &options.column_count {
        return calc(width, options.min_col_width, options.gap).max(1);
    }

    let min = options.min_col_width.max(1) as u64;
    let gap = options.gap as u64;
    let cols = ((width as u64 + gap) / (min + gap)) as usize;
    cols.clamp(1, options.count.max(1))
}
