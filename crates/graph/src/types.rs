use catalog_protocol::Category;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Labels longer than this many characters render in the compact tier.
pub const LABEL_SIZE_THRESHOLD: usize = 10;

/// Two-tier display size for the rotated node label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSize {
    Regular,
    Compact,
}

impl LabelSize {
    /// Classify a resolved label into its display tier.
    #[must_use]
    pub fn for_label(label: &str) -> Self {
        if label.chars().count() > LABEL_SIZE_THRESHOLD {
            Self::Compact
        } else {
            Self::Regular
        }
    }
}

/// Normalized, style-resolved node derived from one message record.
///
/// Counts are cached at construction and never recomputed; a node is
/// immutable after normalization, and a changed source record requires
/// rebuilding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageNode {
    /// Record identifier, unique within one graph
    pub id: String,

    /// Human-facing display name
    pub name: String,

    /// Version string
    pub version: String,

    /// Collection the message belongs to
    pub category: Category,

    /// Short description, surfaced in full render mode
    pub summary: String,

    /// Resolved label: style override, else badge, else category default
    pub label: String,

    /// Resolved color token
    pub color: String,

    /// Resolved icon reference
    pub icon: String,

    /// Display tier derived from the resolved label
    pub label_size: LabelSize,

    pub producer_count: usize,
    pub consumer_count: usize,
    pub owner_count: usize,
}

/// Direction of an actor's relationship to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeRole {
    Produces,
    Consumes,
}

/// Directed relationship between an actor node and a message node.
///
/// Edges are never deduplicated across roles (an actor that both produces
/// and consumes a message yields two edges) but the builder emits each
/// (source, target, role) triple at most once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageEdge {
    pub source: String,
    pub target: String,
    pub role: EdgeRole,
}

/// Directed message graph for one catalog build.
///
/// Wraps a petgraph [`DiGraph`] with an id lookup. Node and edge indices
/// follow insertion order, which the builder keeps equal to record order,
/// so iteration is stable across rebuilds from the same input.
#[derive(Debug, Default)]
pub struct CatalogGraph {
    pub(crate) graph: DiGraph<MessageNode, EdgeRole>,
    node_ids: HashMap<String, NodeIndex>,
}

impl CatalogGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and index it by id.
    pub fn add_node(&mut self, node: MessageNode) -> NodeIndex {
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_ids.insert(id, idx);
        idx
    }

    /// Add a directed edge between two existing nodes.
    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, role: EdgeRole) {
        self.graph.add_edge(source, target, role);
    }

    /// Look up a node index by record identifier.
    #[must_use]
    pub fn find_node(&self, id: &str) -> Option<NodeIndex> {
        self.node_ids.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.node_ids.contains_key(id)
    }

    #[must_use]
    pub fn get_node(&self, idx: NodeIndex) -> Option<&MessageNode> {
        self.graph.node_weight(idx)
    }

    /// Nodes in insertion (record) order.
    pub fn nodes(&self) -> impl Iterator<Item = &MessageNode> {
        self.graph.node_weights()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// (node count, edge count) for build summaries.
    #[must_use]
    pub fn stats(&self) -> (usize, usize) {
        (self.graph.node_count(), self.graph.edge_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_label_size_tiers() {
        assert_eq!(LabelSize::for_label("Query"), LabelSize::Regular);
        // Exactly at the threshold stays regular
        assert_eq!(LabelSize::for_label("HelloWorld"), LabelSize::Regular);
        assert_eq!(LabelSize::for_label("Notification"), LabelSize::Compact);
    }

    #[test]
    fn test_label_size_counts_chars_not_bytes() {
        // Ten multibyte characters must still fit the regular tier
        assert_eq!(LabelSize::for_label("éééééééééé"), LabelSize::Regular);
    }

    #[test]
    fn test_edge_role_serde_names() {
        assert_eq!(serde_json::to_string(&EdgeRole::Produces).unwrap(), "\"produces\"");
        assert_eq!(serde_json::to_string(&EdgeRole::Consumes).unwrap(), "\"consumes\"");
    }
}
