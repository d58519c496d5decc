//! Pure mutation layer for Linkhub.
//!
//! Every way the link collection can change — create, edit, delete, drag,
//! bulk import — is expressed as an [`Action`] applied by [`apply`], a pure
//! `(state, action) → state'` transition. The caller supplies the clock, so
//! the reducer itself has no side effects and is trivially testable.
//!
//! All mutations funnel their result through the ordering engine before the
//! new collection counts as current state; the drag action delegates to the
//! reorder engine and inherits its silent-no-op policy.

mod action;
mod reducer;

pub use action::Action;
pub use reducer::{Applied, apply};

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors a mutation can produce. The ordering engine itself never fails;
/// these belong to validation and lookup in the mutation layer.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("link not found: {0}")]
    NotFound(String),

    #[error("{0} is required")]
    MissingField(&'static str),
}
