use serde::{Deserialize, Serialize};

/// Render detail level, chosen by the embedding view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Simple,
    Full,
}

/// Side of the node a connection handle attaches to.
///
/// Defaults follow the catalog's left-to-right flow (producers on the
/// left, consumers on the right); the layout collaborator may reposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlePosition {
    Left,
    Right,
    Top,
    Bottom,
}

/// Connection handles for one node.
///
/// A side is `None` when the node carries no edges on it, so the renderer
/// draws no dead handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleSpec {
    /// Where incoming edges attach
    pub target: Option<HandlePosition>,

    /// Where outgoing edges attach
    pub source: Option<HandlePosition>,
}

/// Presentation-ready projection of a message node.
///
/// The simple/full split is a pair of explicit tagged variants rather than
/// one struct of optional fields; serde tags serialized output by mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RenderDescriptor {
    /// Identity only: compact list and overview rendering
    Simple {
        id: String,
        name: String,
        version: String,
        label: String,
        color: String,
        icon: String,
        font_size: String,
        handles: HandleSpec,
    },

    /// Identity plus summary and relationship counts
    Full {
        id: String,
        name: String,
        version: String,
        label: String,
        color: String,
        icon: String,
        font_size: String,
        handles: HandleSpec,
        summary: String,
        producer_count: usize,
        consumer_count: usize,
        owner_count: usize,
    },
}

impl RenderDescriptor {
    #[must_use]
    pub fn mode(&self) -> RenderMode {
        match self {
            Self::Simple { .. } => RenderMode::Simple,
            Self::Full { .. } => RenderMode::Full,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Simple { id, .. } | Self::Full { id, .. } => id,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Simple { label, .. } | Self::Full { label, .. } => label,
        }
    }
}
