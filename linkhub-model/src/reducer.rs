//! The state transition function.

use crate::{Action, ModelError, Result};
use chrono::{DateTime, Utc};
use linkhub_order::{reorder, sort};
use linkhub_types::{Link, LinkDraft, LinkPatch, generate_id};

/// Outcome of a transition: the new collection (already in canonical
/// order) and, for create/edit, the link the caller acted on.
#[derive(Debug, Clone)]
pub struct Applied {
    pub links: Vec<Link>,
    pub affected: Option<Link>,
}

/// Applies one [`Action`] to a snapshot of the collection.
///
/// Pure: the input slice is never mutated and the clock comes in as an
/// argument. Validation failures surface as [`ModelError`]; a rejected
/// drag does not — it is an `Ok` with the collection unchanged.
pub fn apply(links: &[Link], action: Action, now: DateTime<Utc>) -> Result<Applied> {
    match action {
        Action::Create(draft) => create(links, draft, now),
        Action::Edit { id, patch } => edit(links, &id, patch, now),
        Action::Delete { id } => delete(links, &id),
        Action::Drop { from_id, to_id } => Ok(Applied {
            links: reorder(links, &from_id, &to_id),
            affected: None,
        }),
        Action::Import(replacement) => Ok(Applied {
            links: sort(&replacement),
            affected: None,
        }),
    }
}

fn create(links: &[Link], draft: LinkDraft, now: DateTime<Utc>) -> Result<Applied> {
    let title = required(&draft.title, "title")?;
    let url = required(&draft.url, "url")?;

    let max_rank = links.iter().map(Link::rank).max().unwrap_or(0);
    let order = draft.order.unwrap_or(max_rank + 10);

    let link = Link {
        id: generate_id(&title, links),
        title,
        url,
        icon: icon_or_default(&draft.icon),
        category: draft.category,
        pinned: draft.pinned,
        notes: clean_notes(draft.notes.as_deref()),
        order: Some(order),
        created_at: now,
        updated_at: now,
        visibility: draft.visibility,
    };

    let mut next = links.to_vec();
    next.push(link.clone());
    Ok(Applied {
        links: sort(&next),
        affected: Some(link),
    })
}

fn edit(links: &[Link], id: &str, patch: LinkPatch, now: DateTime<Utc>) -> Result<Applied> {
    let idx = links
        .iter()
        .position(|l| l.id == id)
        .ok_or_else(|| ModelError::NotFound(id.to_string()))?;
    let current = &links[idx];

    let title = match patch.title {
        Some(raw) => required(&raw, "title")?,
        None => current.title.clone(),
    };
    let url = match patch.url {
        Some(raw) => required(&raw, "url")?,
        None => current.url.clone(),
    };
    let icon = match patch.icon.as_deref() {
        Some(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => icon_or_default(&current.icon),
    };
    let notes = match patch.notes.as_deref() {
        Some(raw) => clean_notes(Some(raw)),
        None => current.notes.clone(),
    };

    let updated = Link {
        id: current.id.clone(),
        title,
        url,
        icon,
        category: patch.category.unwrap_or(current.category),
        pinned: patch.pinned.unwrap_or(current.pinned),
        notes,
        order: patch.order.or(current.order),
        created_at: current.created_at,
        updated_at: now,
        visibility: patch.visibility.unwrap_or(current.visibility),
    };

    let next: Vec<Link> = links
        .iter()
        .enumerate()
        .map(|(i, l)| if i == idx { updated.clone() } else { l.clone() })
        .collect();
    Ok(Applied {
        links: sort(&next),
        affected: Some(updated),
    })
}

fn delete(links: &[Link], id: &str) -> Result<Applied> {
    if !links.iter().any(|l| l.id == id) {
        return Err(ModelError::NotFound(id.to_string()));
    }
    Ok(Applied {
        links: links.iter().filter(|l| l.id != id).cloned().collect(),
        affected: None,
    })
}

fn required(raw: &str, field: &'static str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ModelError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn icon_or_default(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Link::DEFAULT_ICON.to_string()
    } else {
        trimmed.to_string()
    }
}

fn clean_notes(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
