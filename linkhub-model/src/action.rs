//! Mutations over the link collection.

use linkhub_types::{Link, LinkDraft, LinkPatch};

/// A single state transition. Applied by [`crate::apply`].
#[derive(Debug, Clone)]
pub enum Action {
    /// Add a new link from raw draft fields.
    Create(LinkDraft),
    /// Partially update an existing link.
    Edit { id: String, patch: LinkPatch },
    /// Remove a link. Survivors keep their ranks; nothing is renumbered.
    Delete { id: String },
    /// A drag gesture: move `from_id` next to `to_id`. Invalid gestures
    /// leave the state unchanged without erroring.
    Drop { from_id: String, to_id: String },
    /// Replace the whole collection (backup restore).
    Import(Vec<Link>),
}
