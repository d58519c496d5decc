//! The fixed category vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a link is filed under.
///
/// The set is closed; anything outside it normalizes to [`Category::Project`]
/// when parsed or deserialized, so stored data never carries unknown
/// categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Category {
    Project,
    Study,
    Server,
    Tool,
    Docs,
    Etc,
}

impl Category {
    /// All categories in presentation order (the order sections appear in
    /// the UI, not the order the comparator uses).
    pub const ALL: [Category; 6] = [
        Category::Project,
        Category::Study,
        Category::Server,
        Category::Tool,
        Category::Docs,
        Category::Etc,
    ];

    /// The category's canonical name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Project => "Project",
            Category::Study => "Study",
            Category::Server => "Server",
            Category::Tool => "Tool",
            Category::Docs => "Docs",
            Category::Etc => "Etc",
        }
    }

    /// Parses a raw category name, falling back to [`Category::Project`]
    /// for anything unrecognized.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw {
            "Project" => Category::Project,
            "Study" => Category::Study,
            "Server" => Category::Server,
            "Tool" => Category::Tool,
            "Docs" => Category::Docs,
            "Etc" => Category::Etc,
            _ => Category::Project,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Project
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Category::normalize(&raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
