//! Item-to-column distribution under the five ordering policies.
//!
//! Every function returns the assigned column per collection index. Items are
//! walked in collection order, so within any column the indexes come out
//! ascending for all modes.

use alloc::vec::Vec;

use crate::key::{CacheKey, KeyMap};

/// `column = index % n_cols`.
pub(crate) fn row_first(count: usize, n_cols: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        out.push(i % n_cols);
    }
    out
}

/// Chunks of `ceil(count / n_cols)` consecutive items per column. The last
/// column (or columns, for small collections) may come up short.
pub(crate) fn column_sequential(count: usize, n_cols: usize) -> Vec<usize> {
    let chunk = count.div_ceil(n_cols).max(1);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        out.push(i / chunk);
    }
    out
}

/// Greedy shortest-column placement. `heights` holds one extent per item in
/// collection order; ties go to the lowest column index.
pub(crate) fn balanced(heights: &[u64], n_cols: usize) -> Vec<usize> {
    let mut totals = alloc::vec![0u64; n_cols];
    let mut out = Vec::with_capacity(heights.len());
    for &h in heights {
        let col = shortest_column(&totals);
        totals[col] = totals[col].saturating_add(h);
        out.push(col);
    }
    out
}

/// Like [`balanced`], but `pinned[i]` fixes item `i` to a column up front.
/// Pinned items still contribute their heights to the running totals, so new
/// items balance against everything already placed. A pin outside `n_cols`
/// is stale (older column count) and ignored.
pub(crate) fn balanced_stable(
    heights: &[u64],
    n_cols: usize,
    pinned: &[Option<usize>],
) -> Vec<usize> {
    debug_assert_eq!(heights.len(), pinned.len());
    let mut totals = alloc::vec![0u64; n_cols];
    let mut out = Vec::with_capacity(heights.len());
    for (i, &h) in heights.iter().enumerate() {
        let col = match pinned[i] {
            Some(c) if c < n_cols => c,
            _ => shortest_column(&totals),
        };
        totals[col] = totals[col].saturating_add(h);
        out.push(col);
    }
    out
}

/// Forward walk: stay in the current column until its accumulated height
/// reaches `total / n_cols`, then advance. Never moves backward, so reading
/// order across columns matches collection order.
pub(crate) fn column_balanced(heights: &[u64], n_cols: usize) -> Vec<usize> {
    let total = heights
        .iter()
        .fold(0u64, |acc, &h| acc.saturating_add(h));
    let target = total / n_cols as u64;
    let mut out = Vec::with_capacity(heights.len());
    let mut col = 0usize;
    let mut acc = 0u64;
    for &h in heights {
        out.push(col);
        acc = acc.saturating_add(h);
        if acc >= target && col + 1 < n_cols {
            col += 1;
            acc = 0;
        }
    }
    out
}

fn shortest_column(totals: &[u64]) -> usize {
    totals
        .iter()
        .enumerate()
        .min_by_key(|&(_, &t)| t)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Sticky column assignments for [`crate::OrderMode::BalancedStable`].
///
/// Once an identity is recorded it keeps its column until the identity leaves
/// the collection (pruned) or the column count changes (cleared).
#[derive(Clone, Debug)]
pub(crate) struct AssignmentCache<K> {
    columns: KeyMap<K, usize>,
}

impl<K: CacheKey> AssignmentCache<K> {
    pub(crate) fn new() -> Self {
        Self {
            columns: KeyMap::new(),
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<usize> {
        self.columns.get(key).copied()
    }

    pub(crate) fn insert(&mut self, key: K, col: usize) {
        self.columns.insert(key, col);
    }

    pub(crate) fn retain_keys(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.columns.retain(|k, _| keep(k));
    }

    pub(crate) fn clear(&mut self) {
        self.columns.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.columns.len()
    }
}
