//! Per-column visibility windows over estimated heights.
//!
//! Windows never read measured heights. Measurements arriving while the user
//! scrolls would otherwise shift the padding under the scrollbar; estimates
//! are stable, so two passes over the same column produce identical windows.

use alloc::vec::Vec;
use core::cmp;

use crate::ColumnWindow;

/// Builds one column's prefix table: entry `j` is the summed estimated extent
/// of slots `[0, j)`. Each slot contributes its estimate plus the gap, except
/// the last slot which has no trailing gap. The final entry is the column's
/// full estimated height.
pub(crate) fn prefix_heights(items: &[usize], estimates: &[u32], gap: u32) -> Vec<u64> {
    let mut prefix = Vec::with_capacity(items.len() + 1);
    prefix.push(0u64);
    let mut acc = 0u64;
    for (j, &i) in items.iter().enumerate() {
        acc = acc.saturating_add(estimates[i] as u64);
        if gap > 0 && j + 1 < items.len() {
            acc = acc.saturating_add(gap as u64);
        }
        prefix.push(acc);
    }
    prefix
}

/// Computes the rendered slice of one column from its prefix table.
///
/// An offset falling inside a slot's trailing gap selects that slot. Past the
/// column's end the window is empty with the full height as leading padding,
/// which keeps short columns from collapsing the scroll range.
pub(crate) fn compute(
    prefix: &[u64],
    scroll_offset: u64,
    viewport: u32,
    overscan: usize,
) -> ColumnWindow {
    let len = prefix.len().saturating_sub(1);
    let total = prefix.last().copied().unwrap_or(0);
    if len == 0 || viewport == 0 {
        return ColumnWindow {
            start_index: 0,
            end_index: len,
            leading_px: 0,
            trailing_px: 0,
        };
    }

    let scroll_end = scroll_offset.saturating_add(viewport as u64);
    // Slots whose (gap-inclusive) end sits at or before the offset are above
    // the viewport; slots starting past `scroll_end` are below it.
    let mut start = prefix[1..].partition_point(|&end| end <= scroll_offset);
    let mut end = prefix[..len].partition_point(|&s| s < scroll_end);

    if start >= end {
        return ColumnWindow {
            start_index: len,
            end_index: len,
            leading_px: total,
            trailing_px: 0,
        };
    }

    start = start.saturating_sub(overscan);
    end = cmp::min(len, end.saturating_add(overscan));

    ColumnWindow {
        start_index: start,
        end_index: end,
        leading_px: prefix[start],
        trailing_px: total.saturating_sub(prefix[end]),
    }
}
