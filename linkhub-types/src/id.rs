//! Title-derived link ids.
//!
//! Ids are human-readable slugs of the form `link-<slug>`, derived from the
//! title at creation time and immutable afterwards. Collisions get a numeric
//! suffix (`-2`, `-3`, …).

use crate::Link;
use std::collections::HashSet;

const SLUG_MAX_CHARS: usize = 40;

fn is_slug_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '가'..='힣')
}

/// Generates a unique id for a link titled `title`, given the links that
/// already exist in the collection.
///
/// The title is lowercased, every run of characters outside `[a-z0-9가-힣]`
/// collapses to a single `-`, leading/trailing dashes are dropped, and the
/// slug is capped at 40 characters.
#[must_use]
pub fn generate_id(title: &str, existing: &[Link]) -> String {
    let mut slug = String::new();
    let mut gap = false;
    for c in title.to_lowercase().chars() {
        if is_slug_char(c) {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(c);
        } else {
            gap = true;
        }
    }
    let slug: String = slug.chars().take(SLUG_MAX_CHARS).collect();
    let base = format!("link-{slug}");

    let taken: HashSet<&str> = existing.iter().map(|l| l.id.as_str()).collect();
    if !taken.contains(base.as_str()) {
        return base;
    }
    let mut n = 2u32;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}
