use serde::{Deserialize, Serialize};

/// Message collection a catalog entry belongs to.
///
/// Categories round-trip through their string form. Unrecognized names are
/// preserved verbatim as [`Category::Other`] rather than erased, so a build
/// never loses information about message kinds it does not know yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Events,
    Commands,
    Queries,
    Other(String),
}

impl Category {
    /// The categories this engine knows default styling for.
    pub const KNOWN: [Self; 3] = [Self::Events, Self::Commands, Self::Queries];

    /// Canonical string form, as used in source documents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Events => "events",
            Self::Commands => "commands",
            Self::Queries => "queries",
            Self::Other(name) => name,
        }
    }

    /// Fallback node label when neither a style override nor a badge is set.
    #[must_use]
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::Events => "Event",
            Self::Commands => "Command",
            Self::Queries => "Query",
            Self::Other(_) => "Message",
        }
    }

    /// True when the category name is absent, i.e. the record carried none.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Other(name) if name.is_empty())
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "events" => Self::Events,
            "commands" => Self::Commands,
            "queries" => Self::Queries,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
