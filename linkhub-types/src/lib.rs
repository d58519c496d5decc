//! Core type definitions for Linkhub.
//!
//! This crate defines the fundamental types shared by every other Linkhub
//! crate:
//! - The [`Link`] entity and its fixed vocabularies ([`Category`],
//!   [`Visibility`])
//! - Boundary types for mutations ([`LinkDraft`], [`LinkPatch`])
//! - Title-derived id generation ([`generate_id`])
//!
//! Nothing here performs I/O. Ordering logic lives in `linkhub-order`,
//! mutation logic in `linkhub-model`.

mod category;
mod id;
mod link;

pub use category::Category;
pub use id::generate_id;
pub use link::{Link, LinkDraft, LinkPatch, Visibility};
