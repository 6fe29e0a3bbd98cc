//! A size and position index for virtualized lists.
//!
//! Given a long one-dimensional list of items, this crate answers the questions a rendering
//! layer asks on every scroll tick:
//!
//! - where does item `i` start, and how large is it?
//! - which items are visible in the viewport `[offset, offset + container_size)`?
//! - which scroll offset brings item `k` into view with a given [`Align`]ment?
//!
//! Item sizes come from an [`ItemSize`] source: a constant, a per-index sequence, or a
//! generator closure invoked on demand. Constant and sequence sources are laid out eagerly
//! when the configuration changes. Generator sources are measured just in time, up to the
//! highest index ever requested, and the total size of the unmeasured suffix is estimated
//! from [`Options::estimated_item_size`].
//!
//! The crate is UI-agnostic. The caller owns the scrollable element, feeds observed offsets
//! in, turns [`VisibleRange`] plus per-index [`SizeAndPosition`] into visual placement, and
//! calls [`SizeAndPositionManager::reset_item`] when an item changes size.
//!
//! ```rust
//! use virtual_sizing::{ItemSize, Options, SizeAndPositionManager, VisibleRangeQuery};
//!
//! let mut m = SizeAndPositionManager::new(Options::new(100, ItemSize::constant(10.0)))?;
//! let range = m
//!     .visible_range(VisibleRangeQuery::new(50.0, 425.0).with_overscan_count(0))?
//!     .expect("non-empty list");
//! assert_eq!((range.start, range.stop), (42, 47));
//! # Ok::<(), virtual_sizing::Error>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod error;
mod manager;
mod options;
mod size;
mod types;


pub use error::Error;
pub use manager::SizeAndPositionManager;
pub use options::{DEFAULT_ESTIMATED_ITEM_SIZE, Options, OptionsUpdate};
pub use size::{ItemSize, SizeGenerator};
pub use types::{
    Align, DEFAULT_OVERSCAN_COUNT, OffsetQuery, SizeAndPosition, VisibleItem, VisibleRange,
    VisibleRangeQuery,
};
