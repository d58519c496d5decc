//! The canonical comparator.

use crate::collate::compare_titles;
use linkhub_types::Link;
use std::cmp::Ordering;

/// Compares two links in canonical display order:
///
/// 1. Pinned links come first, regardless of anything else.
/// 2. Two pinned links compare by rank, then Korean-collated title —
///    category is ignored inside the pinned group.
/// 3. Two non-pinned links compare by category name (plain lexicographic,
///    not locale-aware), then rank, then title.
///
/// Rank is the stored `order` with absence read as `0`; the stored value
/// is never touched.
#[must_use]
pub fn compare(a: &Link, b: &Link) -> Ordering {
    if a.pinned != b.pinned {
        return if a.pinned {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    if a.pinned {
        return by_rank_then_title(a, b);
    }

    a.category
        .as_str()
        .cmp(b.category.as_str())
        .then_with(|| by_rank_then_title(a, b))
}

/// The shared tie-break: rank ascending, then Korean-collated title.
pub(crate) fn by_rank_then_title(a: &Link, b: &Link) -> Ordering {
    a.rank()
        .cmp(&b.rank())
        .then_with(|| compare_titles(&a.title, &b.title))
}

/// Returns a new collection in canonical display order.
///
/// Pure and stable: equal-rank links keep their relative input order, so
/// sorting an already-sorted collection reproduces it exactly.
#[must_use]
pub fn sort(links: &[Link]) -> Vec<Link> {
    let mut sorted = links.to_vec();
    sorted.sort_by(compare);
    sorted
}
