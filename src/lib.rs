//! A headless masonry layout engine.
//!
//! Distributes an ordered collection into columns under five selectable
//! ordering policies with different stability guarantees, feeds measured item
//! heights back into the layout, and can window very large collections so
//! only the items near the viewport are rendered.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - container width (and height, when virtualizing)
//! - scroll offset
//! - measured item heights and (optionally) per-item height estimates
//!
//! The engine reports back which item belongs in which column and, when
//! virtualizing, which contiguous slice of each column to render along with
//! the padding standing in for the rest.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cols;
mod distribute;
mod key;
mod masonry;
mod options;
mod types;
mod window;


pub use masonry::Masonry;
pub use options::{
    ColumnCountCallback, EstimateHeightCallback, MasonryOptions, OnChangeCallback,
};
pub use types::{ColumnEntry, ColumnWindow, ItemKey, OrderMode, ViewportHeight};

#[doc(hidden)]
pub use key::CacheKey;

/// Height assumed for items that have never been measured.
///
/// The balanced modes treat every unmeasured item as this uniform height, and
/// it is the estimate of last resort when no estimate callback is configured.
pub const DEFAULT_ITEM_HEIGHT_PX: u32 = 400;
