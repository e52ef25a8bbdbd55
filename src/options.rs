use alloc::sync::Arc;

use crate::masonry::Masonry;
use crate::{ItemKey, OrderMode, ViewportHeight};

/// A callback fired after a recompute pass changes engine state.
pub type OnChangeCallback<K> = Arc<dyn Fn(&Masonry<K>) + Send + Sync>;

/// Replaces the built-in column-count computation.
///
/// Receives the effective container width (the hint while unmeasured), the
/// minimum column width and the gap, and returns the number of columns. The
/// result is clamped to >= 1 but otherwise trusted; returning more columns
/// than there are items leaves the extra columns empty.
pub type ColumnCountCallback = Arc<dyn Fn(u32, u32, u32) -> usize + Send + Sync>;

/// Estimated height in px for the item at an index, used for windowing math
/// and for [`OrderMode::ColumnBalanced`] targets until the item is measured.
pub type EstimateHeightCallback = Arc<dyn Fn(usize) -> u32 + Send + Sync>;

/// Configuration for [`crate::Masonry`].
///
/// Cheap to clone: callbacks are stored in `Arc`s so hosts can tweak a few
/// fields and call `Masonry::set_options` without reallocating closures.
pub struct MasonryOptions<K = ItemKey> {
    pub count: usize,

    /// Stable identity for the item at an index.
    ///
    /// Measured heights and sticky column assignments follow this identity
    /// across reorders and replacements. The default maps an index to itself,
    /// which loses those guarantees whenever the collection is reordered or
    /// filtered.
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,

    /// Optional height estimate per item. `None` falls back to
    /// [`crate::DEFAULT_ITEM_HEIGHT_PX`] for every item.
    pub estimate_height: Option<EstimateHeightCallback>,

    pub order: OrderMode,

    /// Measured container width in px; 0 means "not measured yet" and routes
    /// column math through `width_hint`.
    pub available_width: u32,

    pub min_col_width: u32,

    /// Upper bound the host may apply to rendered column widths. Only
    /// validated here: a value below `min_col_width` is reported once and
    /// then ignored.
    pub max_col_width: Option<u32>,

    /// Vertical space between items within a column, in px.
    pub gap: u32,

    /// Width assumed while `available_width` is 0 (e.g. server-side renders).
    pub width_hint: u32,

    /// Optional replacement for the built-in column-count computation.
    pub column_count: Option<ColumnCountCallback>,

    /// Whether a width change that keeps the column count still redistributes
    /// height-sensitive orders. Measured heights go stale when column widths
    /// change, so this defaults to on.
    pub balance_on_resize: bool,

    /// Window each column to the viewport instead of rendering everything.
    /// Forces [`OrderMode::RowFirst`] while set.
    pub virtualize: bool,

    pub viewport_height: ViewportHeight,

    /// Extra items rendered on each side of a column's visible slice.
    pub overscan: usize,

    /// Optional callback fired when the engine's state changes.
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K> Clone for MasonryOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            get_item_key: Arc::clone(&self.get_item_key),
            estimate_height: self.estimate_height.clone(),
            order: self.order,
            available_width: self.available_width,
            min_col_width: self.min_col_width,
            max_col_width: self.max_col_width,
            gap: self.gap,
            width_hint: self.width_hint,
            column_count: self.column_count.clone(),
            balance_on_resize: self.balance_on_resize,
            virtualize: self.virtualize,
            viewport_height: self.viewport_height.clone(),
            overscan: self.overscan,
            on_change: self.on_change.clone(),
        }
    }
}

impl MasonryOptions<ItemKey> {
    /// Creates options for a collection keyed by index (`ItemKey = u64`).
    pub fn new(count: usize) -> Self {
        Self::new_with_key(count, |i| i as u64)
    }
}

impl<K> MasonryOptions<K> {
    /// Creates options with a custom identity mapping.
    ///
    /// Use this when items can be reordered, inserted or removed:
    /// `get_item_key(i)` should return a stable identity for the item at
    /// index `i`, so its measured height and (in
    /// [`OrderMode::BalancedStable`]) its column follow it around.
    pub fn new_with_key(count: usize, get_item_key: impl Fn(usize) -> K + Send + Sync + 'static) -> Self {
        Self {
            count,
            get_item_key: Arc::new(get_item_key),
            estimate_height: None,
            order: OrderMode::default(),
            available_width: 0,
            min_col_width: 330,
            max_col_width: None,
            gap: 20,
            width_hint: 1920,
            column_count: None,
            balance_on_resize: true,
            virtualize: false,
            viewport_height: ViewportHeight::default(),
            overscan: 1,
            on_change: None,
        }
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_estimate_height(
        mut self,
        estimate_height: Option<impl Fn(usize) -> u32 + Send + Sync + 'static>,
    ) -> Self {
        self.estimate_height = estimate_height.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_order(mut self, order: OrderMode) -> Self {
        self.order = order;
        self
    }

    pub fn with_available_width(mut self, available_width: u32) -> Self {
        self.available_width = available_width;
        self
    }

    pub fn with_min_col_width(mut self, min_col_width: u32) -> Self {
        self.min_col_width = min_col_width;
        self
    }

    pub fn with_max_col_width(mut self, max_col_width: Option<u32>) -> Self {
        self.max_col_width = max_col_width;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_width_hint(mut self, width_hint: u32) -> Self {
        self.width_hint = width_hint;
        self
    }

    pub fn with_column_count(
        mut self,
        column_count: Option<impl Fn(u32, u32, u32) -> usize + Send + Sync + 'static>,
    ) -> Self {
        self.column_count = column_count.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_balance_on_resize(mut self, balance_on_resize: bool) -> Self {
        self.balance_on_resize = balance_on_resize;
        self
    }

    pub fn with_virtualize(mut self, virtualize: bool) -> Self {
        self.virtualize = virtualize;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: ViewportHeight) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Masonry<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> core::fmt::Debug for MasonryOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MasonryOptions")
            .field("count", &self.count)
            .field("order", &self.order)
            .field("available_width", &self.available_width)
            .field("min_col_width", &self.min_col_width)
            .field("max_col_width", &self.max_col_width)
            .field("gap", &self.gap)
            .field("width_hint", &self.width_hint)
            .field("balance_on_resize", &self.balance_on_resize)
            .field("virtualize", &self.virtualize)
            .field("viewport_height", &self.viewport_height)
            .field("overscan", &self.overscan)
            .finish_non_exhaustive()
    }
}
