//! The link entity and its mutation boundary types.

use crate::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who may see a link. Anything other than `"private"` normalizes to
/// public on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Visibility {
    Public,
    Private,
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Public
    }
}

impl From<String> for Visibility {
    fn from(raw: String) -> Self {
        if raw == "private" {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// A single bookmark entry.
///
/// Serialized in camelCase to stay compatible with the established file
/// and wire format. `order` is a sparse integer rank; it is optional on
/// disk and treated as `0` by the ordering engine without ever being
/// rewritten into the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Link {
    /// Icon used when a link has none.
    pub const DEFAULT_ICON: &'static str = "emoji:🔗";

    /// The rank the ordering engine compares by: the stored `order`, or
    /// `0` when absent.
    #[must_use]
    pub fn rank(&self) -> i64 {
        self.order.unwrap_or(0)
    }
}

fn default_icon() -> String {
    Link::DEFAULT_ICON.to_string()
}

/// Incoming fields for a new link. Raw and untrimmed; validation and
/// normalization happen in the mutation layer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub visibility: Visibility,
}

/// Partial update for an existing link. `None` means "leave the current
/// value alone"; a present-but-blank `notes` clears the field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub pinned: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
}
