use alloc::string::String;

pub type ItemKey = u64;

/// How items are distributed into columns.
///
/// All modes preserve collection order *within* a column; they differ in how
/// items are split *across* columns and in what stays put when the collection
/// or the measured heights change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderMode {
    /// Greedy shortest-column placement, recomputed from scratch on every
    /// pass. Best height balance; items may move between columns when
    /// measurements arrive.
    #[default]
    Balanced,
    /// Like [`OrderMode::Balanced`], but an item keeps its column for as long
    /// as its identity remains in the collection. Only new items are placed.
    BalancedStable,
    /// `column = index % column_count`. Ignores heights entirely. This is the
    /// mode used while virtualizing.
    RowFirst,
    /// Consecutive chunks of `ceil(count / column_count)` items per column.
    ColumnSequential,
    /// Forward walk that advances to the next column once the accumulated
    /// height reaches `total / column_count`. Reading order across columns
    /// is preserved; the last column absorbs rounding.
    ColumnBalanced,
}

impl OrderMode {
    /// Whether this mode re-reads item heights, i.e. whether a measurement
    /// can change the distribution.
    pub fn uses_heights(&self) -> bool {
        matches!(
            self,
            Self::Balanced | Self::BalancedStable | Self::ColumnBalanced
        )
    }
}

/// The viewport height used for windowing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportHeight {
    /// An explicit pixel height. Windowing activates immediately.
    Px(u32),
    /// A relative unit resolved by the host (e.g. `"100vh"`). Windowing waits
    /// for [`crate::Masonry::set_measured_height`]; until then every column
    /// renders in full.
    Relative(String),
}

impl Default for ViewportHeight {
    fn default() -> Self {
        Self::Relative(String::from("100vh"))
    }
}

/// The slice of one column to render, plus the padding standing in for
/// everything outside it.
///
/// Padding is computed from estimated heights only, so it is identical across
/// passes as long as the estimates are: measurements arriving mid-scroll never
/// move the scrollbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnWindow {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    /// Estimated extent of the column's items before `start_index`.
    pub leading_px: u64,
    /// Estimated extent of the column's items from `end_index` on.
    pub trailing_px: u64,
}

impl ColumnWindow {
    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }
}

/// An item slot within a column: the item's identity plus its position in the
/// source collection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnEntry<K> {
    pub key: K,
    pub index: usize,
}
