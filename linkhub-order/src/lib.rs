//! Ordering and reordering engine for Linkhub.
//!
//! Two pure operations over the link collection:
//! - [`sort`] — the canonical display order. Every mutation funnels its
//!   result through this before it counts as the current state.
//! - [`reorder`] — interprets a "move `from` next to `to`" drag gesture by
//!   renumbering the smallest affected subgroup, then re-sorting.
//!
//! Neither function mutates its input, performs I/O, or raises errors:
//! `reorder` degrades to returning the input unchanged whenever the gesture
//! is invalid. Both are safe to call concurrently on independent snapshots.

mod collate;
mod reorder;
mod sort;

pub use collate::compare_titles;
pub use reorder::reorder;
pub use sort::{compare, sort};
