use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::distribute::{self, AssignmentCache};
use crate::key::{CacheKey, KeyMap};
use crate::{ColumnEntry, ColumnWindow, DEFAULT_ITEM_HEIGHT_PX, ItemKey, MasonryOptions};
use crate::{OrderMode, ViewportHeight};
use crate::{cols, window};

/// A headless masonry layout engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your host drives it by reporting container geometry, scroll offsets and
///   measured item heights.
/// - Layout is exposed via zero-allocation iteration APIs
///   (`for_each_column_entry`, `for_each_visible_entry`) plus `collect_*`
///   conveniences.
///
/// All recomputation is synchronous and single-threaded. Group several
/// updates with [`Masonry::batch_update`] to coalesce `on_change`
/// notifications.
#[derive(Clone, Debug)]
pub struct Masonry<K = ItemKey> {
    options: MasonryOptions<K>,

    // Per-index views, rebuilt from the key-based caches whenever the
    // collection or its closures change.
    index_of: KeyMap<K, usize>,
    est: Vec<u32>,
    measured: Vec<Option<u32>>,

    key_heights: KeyMap<K, u32>,
    assignments: AssignmentCache<K>,

    n_cols: usize,
    assignment: Vec<usize>,
    columns: Vec<Vec<usize>>,
    col_prefix: Vec<Vec<u64>>,
    windows: Vec<ColumnWindow>,

    measured_height: Option<u32>,
    scroll_offset: u64,

    warned_col_width: bool,
    warned_viewport: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K: CacheKey> Masonry<K> {
    /// Creates a new engine from options and computes the initial layout.
    ///
    /// No `on_change` notification is fired for the initial computation.
    pub fn new(options: MasonryOptions<K>) -> Self {
        bdebug!(
            count = options.count,
            virtualize = options.virtualize,
            "Masonry::new"
        );
        let mut m = Self {
            index_of: KeyMap::new(),
            est: Vec::new(),
            measured: Vec::new(),
            key_heights: KeyMap::new(),
            assignments: AssignmentCache::new(),
            n_cols: 0,
            assignment: Vec::new(),
            columns: Vec::new(),
            col_prefix: Vec::new(),
            windows: Vec::new(),
            measured_height: None,
            scroll_offset: 0,
            warned_col_width: false,
            warned_viewport: false,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        m.rebuild_items();
        m.rebuild_layout();
        m
    }

    pub fn options(&self) -> &MasonryOptions<K> {
        &self.options
    }

    /// Replaces the options wholesale and recomputes the minimal set of
    /// stages the change requires.
    ///
    /// Closure fields are compared by `Arc` identity: reuse the existing
    /// `Arc`s (e.g. via [`Masonry::update_options`]) to avoid needless
    /// rebuilds.
    pub fn set_options(&mut self, options: MasonryOptions<K>) {
        let prev_count = self.options.count;
        let prev_order = self.options.order;
        let prev_width = self.options.available_width;
        let prev_min = self.options.min_col_width;
        let prev_max = self.options.max_col_width;
        let prev_gap = self.options.gap;
        let prev_hint = self.options.width_hint;
        let prev_virtualize = self.options.virtualize;
        let prev_viewport = self.options.viewport_height.clone();
        let prev_overscan = self.options.overscan;
        let get_item_key_unchanged =
            Arc::ptr_eq(&self.options.get_item_key, &options.get_item_key);
        let estimate_unchanged =
            same_callback(&self.options.estimate_height, &options.estimate_height);
        let column_count_unchanged =
            same_callback(&self.options.column_count, &options.column_count);
        self.options = options;
        btrace!(
            count = self.options.count,
            virtualize = self.options.virtualize,
            "Masonry::set_options"
        );

        let collection_changed =
            self.options.count != prev_count || !get_item_key_unchanged || !estimate_unchanged;
        let order_changed =
            self.options.order != prev_order || self.options.virtualize != prev_virtualize;
        let window_changed = self.options.viewport_height != prev_viewport
            || self.options.overscan != prev_overscan
            || self.options.gap != prev_gap
            || self.options.virtualize != prev_virtualize;

        if collection_changed {
            self.rebuild_items();
            self.rebuild_layout();
        } else {
            let cols_changed = self.options.available_width != prev_width
                || self.options.min_col_width != prev_min
                || self.options.max_col_width != prev_max
                || self.options.gap != prev_gap
                || self.options.width_hint != prev_hint
                || !column_count_unchanged;
            let n_cols_changed = cols_changed && self.resolve_columns();
            let rebalance = self.options.available_width != prev_width
                && self.options.balance_on_resize
                && self.effective_order().uses_heights();
            if n_cols_changed || order_changed || rebalance {
                self.redistribute();
            } else if window_changed {
                self.rebuild_windows();
            }
        }

        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// [`Masonry::set_options`].
    pub fn update_options(&mut self, f: impl FnOnce(&mut MasonryOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Masonry<K>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended whenever one external trigger maps to several setters
    /// (e.g. a container resize reporting width and height): without
    /// batching, each setter may fire `on_change`, which can be expensive if
    /// the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.rebuild_items();
        self.rebuild_layout();
        self.notify();
    }

    /// Replaces the identity mapping and rebinds cached heights and column
    /// assignments to the new mapping.
    pub fn set_get_item_key(&mut self, f: impl Fn(usize) -> K + Send + Sync + 'static) {
        self.options.get_item_key = Arc::new(f);
        self.rebuild_items();
        self.rebuild_layout();
        self.notify();
    }

    /// Re-reads the identity mapping after the underlying data was reordered
    /// or replaced while `count` stayed the same.
    ///
    /// Cached heights and sticky columns follow their identities to the new
    /// indexes.
    pub fn sync_item_keys(&mut self) {
        self.rebuild_items();
        self.rebuild_layout();
        self.notify();
    }

    pub fn set_estimate_height(
        &mut self,
        f: Option<impl Fn(usize) -> u32 + Send + Sync + 'static>,
    ) {
        self.options.estimate_height = f.map(|f| Arc::new(f) as _);
        self.rebuild_items();
        self.rebuild_layout();
        self.notify();
    }

    pub fn order(&self) -> OrderMode {
        self.options.order
    }

    /// The distribution mode actually in effect: [`OrderMode::RowFirst`]
    /// whenever `virtualize` is set, the configured mode otherwise.
    ///
    /// Scrolling a window continuously mounts and unmounts items, and each
    /// mount reports a measurement; any height-sensitive mode would reshuffle
    /// columns on every such report. Forcing row-first while virtualized is a
    /// hard rule, not a heuristic.
    pub fn effective_order(&self) -> OrderMode {
        if self.options.virtualize {
            OrderMode::RowFirst
        } else {
            self.options.order
        }
    }

    /// Switches the ordering policy. No cached state is discarded: switching
    /// to [`OrderMode::BalancedStable`] and back keeps its sticky columns.
    pub fn set_order(&mut self, order: OrderMode) {
        if self.options.order == order {
            return;
        }
        self.options.order = order;
        self.redistribute();
        self.notify();
    }

    pub fn available_width(&self) -> u32 {
        self.options.available_width
    }

    /// Reports the measured container width. 0 means "not measured"; column
    /// math then falls back to the configured `width_hint`.
    pub fn set_available_width(&mut self, px: u32) {
        if self.options.available_width == px {
            return;
        }
        self.options.available_width = px;
        let rebalance =
            self.options.balance_on_resize && self.effective_order().uses_heights();
        if self.resolve_columns() || rebalance {
            self.redistribute();
        }
        self.notify();
    }

    pub fn set_min_col_width(&mut self, px: u32) {
        if self.options.min_col_width == px {
            return;
        }
        self.options.min_col_width = px;
        if self.resolve_columns() {
            self.redistribute();
        }
        self.notify();
    }

    pub fn set_max_col_width(&mut self, px: Option<u32>) {
        if self.options.max_col_width == px {
            return;
        }
        self.options.max_col_width = px;
        // Does not participate in the count; resolve only re-checks validity.
        self.resolve_columns();
        self.notify();
    }

    pub fn set_gap(&mut self, gap: u32) {
        if self.options.gap == gap {
            return;
        }
        self.options.gap = gap;
        if self.resolve_columns() {
            self.redistribute();
        } else {
            self.rebuild_windows();
        }
        self.notify();
    }

    pub fn set_width_hint(&mut self, px: u32) {
        if self.options.width_hint == px {
            return;
        }
        self.options.width_hint = px;
        if self.resolve_columns() {
            self.redistribute();
        }
        self.notify();
    }

    pub fn set_column_count_override(
        &mut self,
        f: Option<impl Fn(u32, u32, u32) -> usize + Send + Sync + 'static>,
    ) {
        self.options.column_count = f.map(|f| Arc::new(f) as _);
        if self.resolve_columns() {
            self.redistribute();
        }
        self.notify();
    }

    pub fn set_balance_on_resize(&mut self, balance_on_resize: bool) {
        if self.options.balance_on_resize == balance_on_resize {
            return;
        }
        self.options.balance_on_resize = balance_on_resize;
        self.notify();
    }

    pub fn set_virtualize(&mut self, virtualize: bool) {
        if self.options.virtualize == virtualize {
            return;
        }
        self.options.virtualize = virtualize;
        // The effective order flips between row-first and the configured mode.
        self.redistribute();
        self.notify();
    }

    pub fn set_viewport_height(&mut self, viewport_height: ViewportHeight) {
        if self.options.viewport_height == viewport_height {
            return;
        }
        self.options.viewport_height = viewport_height;
        self.rebuild_windows();
        self.notify();
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.options.overscan == overscan {
            return;
        }
        self.options.overscan = overscan;
        self.rebuild_windows();
        self.notify();
    }

    pub fn measured_height(&self) -> Option<u32> {
        self.measured_height
    }

    /// Reports the measured container height in px, activating windowing for
    /// a relative `viewport_height` once known.
    pub fn set_measured_height(&mut self, px: u32) {
        if self.measured_height == Some(px) {
            return;
        }
        self.measured_height = Some(px);
        self.rebuild_windows();
        self.notify();
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        self.scroll_offset = offset;
        if self.is_virtualizing() {
            self.rebuild_windows();
        }
        self.notify();
    }

    /// Applies a container resize (width and height) in a single coalesced
    /// update.
    pub fn apply_container_resize(&mut self, width: u32, height: u32) {
        btrace!(width, height, "apply_container_resize");
        self.batch_update(|m| {
            m.set_available_width(width);
            m.set_measured_height(height);
        });
    }

    /// Reports a measured item height by index.
    pub fn measure(&mut self, index: usize, px: u32) {
        if index >= self.options.count {
            return;
        }
        let key = self.key_for(index);
        self.measure_keyed(key, px);
    }

    /// Reports a measured item height by identity.
    ///
    /// Reports for identities no longer in the collection are dropped: an
    /// unmounting item's last callback must not resurrect cache entries or
    /// trigger a recompute.
    pub fn measure_keyed(&mut self, key: K, px: u32) {
        let Some(&index) = self.index_of.get(&key) else {
            return;
        };
        btrace!(index, px, "measure_keyed");
        let changed = self.measured[index] != Some(px);
        self.measured[index] = Some(px);
        self.key_heights.insert(key, px);
        if changed && self.effective_order().uses_heights() {
            self.redistribute();
        }
        self.notify();
    }

    /// Reports a batch of `(index, px)` measurements with at most one
    /// redistribution and one notification.
    pub fn measure_many(&mut self, measurements: impl IntoIterator<Item = (usize, u32)>) {
        let mut changed = false;
        for (index, px) in measurements {
            if index >= self.options.count {
                continue;
            }
            let key = self.key_for(index);
            if self.measured[index] != Some(px) {
                changed = true;
            }
            self.measured[index] = Some(px);
            self.key_heights.insert(key, px);
        }
        if changed && self.effective_order().uses_heights() {
            self.redistribute();
        }
        self.notify();
    }

    /// Drops every cached measurement and falls back to estimates.
    pub fn reset_measurements(&mut self) {
        self.key_heights.clear();
        self.rebuild_items();
        self.rebuild_layout();
        self.notify();
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured_height_of(index).is_some()
    }

    pub fn measured_height_of(&self, index: usize) -> Option<u32> {
        self.measured.get(index).copied().flatten()
    }

    pub fn estimated_height_of(&self, index: usize) -> Option<u32> {
        self.est.get(index).copied()
    }

    /// Returns the number of cached measured heights (identity → px).
    pub fn height_cache_len(&self) -> usize {
        self.key_heights.len()
    }

    /// Iterates over the cached measured heights without allocations.
    pub fn for_each_cached_height(&self, mut f: impl FnMut(&K, u32)) {
        for (k, v) in self.key_heights.iter() {
            f(k, *v);
        }
    }

    /// Exports the cached measured heights (useful for persistence across
    /// mounts).
    pub fn export_height_cache(&self) -> Vec<(K, u32)>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.key_heights.len());
        self.for_each_cached_height(|k, v| out.push((k.clone(), v)));
        out
    }

    /// Replaces the cached measured heights from an iterator and rebinds them
    /// to the current identity mapping.
    pub fn import_height_cache(&mut self, entries: impl IntoIterator<Item = (K, u32)>) {
        self.key_heights.clear();
        let mut n = 0usize;
        for (k, v) in entries {
            self.key_heights.insert(k, v);
            n = n.saturating_add(1);
        }
        bdebug!(entries = n, "import_height_cache");
        self.rebuild_items();
        self.rebuild_layout();
        self.notify();
    }

    /// Number of sticky column assignments currently cached for
    /// [`OrderMode::BalancedStable`].
    pub fn assignment_cache_len(&self) -> usize {
        self.assignments.len()
    }

    /// Forgets every sticky column assignment and redistributes from scratch.
    pub fn reset_assignments(&mut self) {
        self.assignments.clear();
        self.redistribute();
        self.notify();
    }

    pub fn key_for(&self, index: usize) -> K {
        (self.options.get_item_key)(index)
    }

    pub fn item_key(&self, index: usize) -> Option<K> {
        (index < self.options.count).then(|| self.key_for(index))
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.index_of.get(key).copied()
    }

    /// The number of columns in the current layout. Always >= 1, even for an
    /// empty collection.
    pub fn column_count(&self) -> usize {
        self.n_cols
    }

    pub fn column_len(&self, col: usize) -> usize {
        self.columns.get(col).map_or(0, Vec::len)
    }

    pub fn column_of_index(&self, index: usize) -> Option<usize> {
        self.assignment.get(index).copied()
    }

    pub fn column_of(&self, key: &K) -> Option<usize> {
        let index = self.index_of.get(key)?;
        self.column_of_index(*index)
    }

    /// Iterates one column's entries in collection order, without
    /// allocations.
    pub fn for_each_column_entry(&self, col: usize, mut f: impl FnMut(ColumnEntry<K>)) {
        let Some(items) = self.columns.get(col) else {
            return;
        };
        for &i in items {
            f(ColumnEntry {
                key: self.key_for(i),
                index: i,
            });
        }
    }

    /// Iterates the slice of one column selected by its current window.
    ///
    /// Equal to [`Masonry::for_each_column_entry`] while not virtualizing.
    pub fn for_each_visible_entry(&self, col: usize, mut f: impl FnMut(ColumnEntry<K>)) {
        let (Some(items), Some(win)) = (self.columns.get(col), self.windows.get(col)) else {
            return;
        };
        let start = win.start_index.min(items.len());
        let end = win.end_index.min(items.len());
        for &i in &items[start..end] {
            f(ColumnEntry {
                key: self.key_for(i),
                index: i,
            });
        }
    }

    /// Collects one column's entries into `out` (clears `out` first).
    pub fn collect_column_entries(&self, col: usize, out: &mut Vec<ColumnEntry<K>>) {
        out.clear();
        self.for_each_column_entry(col, |e| out.push(e));
    }

    /// Collects one column's collection indexes into `out` (clears `out`
    /// first).
    pub fn collect_column_indexes(&self, col: usize, out: &mut Vec<usize>) {
        out.clear();
        self.for_each_column_entry(col, |e| out.push(e.index));
    }

    /// Collects one column's identities into `out` (clears `out` first).
    pub fn collect_column_keys(&self, col: usize, out: &mut Vec<K>) {
        out.clear();
        self.for_each_column_entry(col, |e| out.push(e.key));
    }

    /// Collects the windowed slice of one column into `out` (clears `out`
    /// first).
    pub fn collect_visible_entries(&self, col: usize, out: &mut Vec<ColumnEntry<K>>) {
        out.clear();
        self.for_each_visible_entry(col, |e| out.push(e));
    }

    /// The current window for a column. While not virtualizing (or while the
    /// viewport height is unknown) every window spans its whole column with
    /// zero padding.
    pub fn window(&self, col: usize) -> Option<ColumnWindow> {
        self.windows.get(col).copied()
    }

    pub fn windows(&self) -> &[ColumnWindow] {
        &self.windows
    }

    /// Estimated pixel height of one column's content, gaps included.
    pub fn column_height_estimate(&self, col: usize) -> u64 {
        self.col_prefix
            .get(col)
            .and_then(|p| p.last())
            .copied()
            .unwrap_or(0)
    }

    /// Estimated pixel height of the whole layout: the tallest column.
    pub fn content_height_estimate(&self) -> u64 {
        let mut max = 0u64;
        for col in 0..self.n_cols {
            max = max.max(self.column_height_estimate(col));
        }
        max
    }

    /// Whether windowing is active: `virtualize` is set and a usable pixel
    /// viewport height is known.
    pub fn is_virtualizing(&self) -> bool {
        self.options.virtualize && self.resolved_viewport().is_some()
    }

    fn resolved_viewport(&self) -> Option<u32> {
        if let ViewportHeight::Px(px) = self.options.viewport_height {
            return Some(px);
        }
        self.measured_height
    }

    /// Rebuilds the per-index views (identity index, estimates, measured
    /// heights) from the key-based caches, then prunes sticky assignments of
    /// identities that left the collection.
    fn rebuild_items(&mut self) {
        bdebug!(
            count = self.options.count,
            cached = self.key_heights.len(),
            "rebuild_items"
        );
        let count = self.options.count;
        self.index_of.clear();
        self.est.clear();
        self.measured.clear();
        self.est.reserve_exact(count);
        self.measured.reserve_exact(count);

        for i in 0..count {
            let key = (self.options.get_item_key)(i);
            self.measured.push(self.key_heights.get(&key).copied());
            self.est.push(match &self.options.estimate_height {
                Some(f) => f(i),
                None => DEFAULT_ITEM_HEIGHT_PX,
            });
            let prev = self.index_of.insert(key, i);
            debug_assert!(prev.is_none(), "duplicate item key at index {i}");
        }

        self.assignments
            .retain_keys(|k| self.index_of.contains_key(k));
    }

    fn rebuild_layout(&mut self) {
        self.resolve_columns();
        self.redistribute();
    }

    /// Re-resolves the column count. Returns whether it changed; on change
    /// the sticky assignment cache is cleared, since column indexes under a
    /// different count are meaningless.
    fn resolve_columns(&mut self) -> bool {
        match self.options.max_col_width {
            Some(max) if max < self.options.min_col_width => {
                if !self.warned_col_width {
                    bwarn!(
                        min_col_width = self.options.min_col_width,
                        max_col_width = max,
                        "max_col_width is below min_col_width; proceeding with min-derived columns"
                    );
                    self.warned_col_width = true;
                }
            }
            _ => self.warned_col_width = false,
        }

        let next = cols::resolve(&self.options);
        if next == self.n_cols {
            return false;
        }
        btrace!(prev = self.n_cols, next, "column count changed");
        self.n_cols = next;
        self.assignments.clear();
        true
    }

    /// Runs the effective ordering policy and rebuilds the per-column state.
    fn redistribute(&mut self) {
        let count = self.options.count;
        let n_cols = self.n_cols.max(1);

        self.assignment = match self.effective_order() {
            OrderMode::RowFirst => distribute::row_first(count, n_cols),
            OrderMode::ColumnSequential => distribute::column_sequential(count, n_cols),
            OrderMode::Balanced => {
                let heights = self.distribution_heights(false);
                distribute::balanced(&heights, n_cols)
            }
            OrderMode::ColumnBalanced => {
                let heights = self.distribution_heights(true);
                distribute::column_balanced(&heights, n_cols)
            }
            OrderMode::BalancedStable => {
                let heights = self.distribution_heights(false);
                let pinned = self.pinned_columns();
                let assignment = distribute::balanced_stable(&heights, n_cols, &pinned);
                for (i, &col) in assignment.iter().enumerate() {
                    if pinned[i] != Some(col) {
                        self.assignments.insert((self.options.get_item_key)(i), col);
                    }
                }
                assignment
            }
        };

        self.columns.clear();
        self.columns.resize_with(n_cols, Vec::new);
        for (i, &col) in self.assignment.iter().enumerate() {
            self.columns[col].push(i);
        }

        self.rebuild_windows();
    }

    /// Per-item extents for the height-sensitive modes.
    ///
    /// The balanced modes treat every unmeasured item as the uniform default;
    /// column-balanced works against estimated totals and falls back to the
    /// per-item estimate instead.
    fn distribution_heights(&self, estimate_fallback: bool) -> Vec<u64> {
        let mut out = Vec::with_capacity(self.options.count);
        for i in 0..self.options.count {
            let px = match (self.measured[i], estimate_fallback) {
                (Some(px), _) => px,
                (None, true) => self.est[i],
                (None, false) => DEFAULT_ITEM_HEIGHT_PX,
            };
            out.push(px as u64);
        }
        out
    }

    fn pinned_columns(&self) -> Vec<Option<usize>> {
        let mut out = Vec::with_capacity(self.options.count);
        for i in 0..self.options.count {
            let key = (self.options.get_item_key)(i);
            out.push(self.assignments.get(&key));
        }
        out
    }

    /// Rebuilds the per-column estimate prefixes and windows.
    ///
    /// While windowing is inactive (virtualize off, or the viewport height
    /// not yet known) every window spans its whole column with zero padding,
    /// so hosts can render unconditionally through the window APIs.
    fn rebuild_windows(&mut self) {
        self.col_prefix.clear();
        for items in &self.columns {
            self.col_prefix
                .push(window::prefix_heights(items, &self.est, self.options.gap));
        }

        if self.options.virtualize && self.resolved_viewport().is_none() {
            if !self.warned_viewport {
                bwarn!(
                    viewport = ?self.options.viewport_height,
                    "virtualize enabled without a usable viewport height; rendering all items"
                );
                self.warned_viewport = true;
            }
        } else {
            self.warned_viewport = false;
        }

        self.windows.clear();
        if self.options.virtualize {
            if let Some(view) = self.resolved_viewport() {
                for prefix in &self.col_prefix {
                    self.windows.push(window::compute(
                        prefix,
                        self.scroll_offset,
                        view,
                        self.options.overscan,
                    ));
                }
                return;
            }
        }
        for items in &self.columns {
            self.windows.push(ColumnWindow {
                start_index: 0,
                end_index: items.len(),
                leading_px: 0,
                trailing_px: 0,
            });
        }
    }
}

fn same_callback<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}
