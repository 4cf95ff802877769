use crate::category::Category;
use serde::{Deserialize, Serialize};

/// A single catalog entry describing an event, command, or query.
///
/// Records are immutable once ingested. Every field except the identifier
/// and category degrades to a default when absent, so a sparse document
/// still yields a usable record; validation of the two required fields
/// happens at normalization time, per record, never per batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct MessageRecord {
    /// Unique identifier within one catalog build
    pub id: String,

    /// Human-facing display name
    pub name: String,

    /// Version string, e.g. "0.0.1"
    pub version: String,

    /// Collection the message belongs to
    #[schemars(with = "String")]
    pub category: Category,

    /// Short description, surfaced in full render mode
    pub summary: String,

    /// Owning team/service ids, in document order
    pub owners: Vec<String>,

    /// Producer service ids, in document order
    pub producers: Vec<String>,

    /// Consumer service ids, in document order
    pub consumers: Vec<String>,

    /// Sidebar badge, used as a node label fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,

    /// Per-record presentation overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleOverride>,
}

/// Optional per-record presentation overrides.
///
/// Each field stands alone; anything left unset falls back to the palette
/// defaults the classifier resolves for the record's category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct StyleOverride {
    /// Color token understood by the rendering layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Icon reference understood by the rendering layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Custom node label, taking precedence over badge and category default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}
