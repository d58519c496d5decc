//! The drag-reorder engine.

use crate::sort;
use crate::sort::by_rank_then_title;
use linkhub_types::{Category, Link};
use std::collections::HashMap;

/// Applies a "move `from_id` next to `to_id`" drag gesture and returns the
/// collection in canonical order.
///
/// The move is scoped to the smallest group the source belongs to: all
/// pinned links when the source is pinned, otherwise all non-pinned links
/// sharing the source's category. That group is renumbered to a dense
/// `10, 20, 30, …` sequence reflecting the new arrangement; every link
/// outside the group keeps its stored `order` untouched.
///
/// Invalid gestures are a silent no-op — the input is returned unchanged,
/// never an error. That covers: empty or equal ids, ids that don't resolve,
/// a pinned source over a non-pinned target, and any move across the
/// pinned boundary or across categories from the non-pinned side.
#[must_use]
pub fn reorder(links: &[Link], from_id: &str, to_id: &str) -> Vec<Link> {
    if from_id.is_empty() || to_id.is_empty() || from_id == to_id {
        return links.to_vec();
    }

    let Some(from) = links.iter().find(|l| l.id == from_id) else {
        return links.to_vec();
    };
    let Some(to) = links.iter().find(|l| l.id == to_id) else {
        return links.to_vec();
    };

    // None selects the pinned group; Some(cat) a non-pinned category group.
    let group: Option<Category> = if from.pinned {
        if !to.pinned {
            return links.to_vec();
        }
        None
    } else {
        if to.pinned || from.category != to.category {
            return links.to_vec();
        }
        Some(from.category)
    };
    let in_group = |l: &Link| match group {
        None => l.pinned,
        Some(cat) => !l.pinned && l.category == cat,
    };

    let mut members: Vec<&Link> = links.iter().filter(|l| in_group(l)).collect();
    members.sort_by(|a, b| by_rank_then_title(a, b));
    let mut ids: Vec<&str> = members.iter().map(|l| l.id.as_str()).collect();

    // Both ids must sit inside the computed group; anything else means the
    // snapshot is inconsistent and the gesture is dropped.
    let Some(from_idx) = ids.iter().position(|id| *id == from_id) else {
        return links.to_vec();
    };
    if !ids.contains(&to_id) {
        return links.to_vec();
    }

    ids.remove(from_idx);
    let Some(to_idx) = ids.iter().position(|id| *id == to_id) else {
        return links.to_vec();
    };
    ids.insert(to_idx, from_id);

    let ranks: HashMap<&str, i64> = ids
        .iter()
        .enumerate()
        .map(|(pos, id)| (*id, (pos as i64 + 1) * 10))
        .collect();

    let renumbered: Vec<Link> = links
        .iter()
        .map(|l| match ranks.get(l.id.as_str()) {
            Some(&rank) => {
                let mut l = l.clone();
                l.order = Some(rank);
                l
            }
            None => l.clone(),
        })
        .collect();

    sort::sort(&renumbered)
}
