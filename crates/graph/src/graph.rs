use crate::types::{CatalogGraph, EdgeRole, MessageEdge};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;

impl CatalogGraph {
    /// Actors that produce the given message (incoming `produces` edges)
    #[must_use]
    pub fn producers_of(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .edges_directed(node, Direction::Incoming)
            .filter(|e| matches!(e.weight(), EdgeRole::Produces))
            .map(|e| e.source())
            .collect()
    }

    /// Actors that consume the given message (outgoing `consumes` edges)
    #[must_use]
    pub fn consumers_of(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .edges(node)
            .filter(|e| matches!(e.weight(), EdgeRole::Consumes))
            .map(|e| e.target())
            .collect()
    }

    /// Messages the given actor produces (outgoing `produces` edges)
    #[must_use]
    pub fn produced_by(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .edges(node)
            .filter(|e| matches!(e.weight(), EdgeRole::Produces))
            .map(|e| e.target())
            .collect()
    }

    /// Messages the given actor consumes (incoming `consumes` edges)
    #[must_use]
    pub fn consumed_by(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .edges_directed(node, Direction::Incoming)
            .filter(|e| matches!(e.weight(), EdgeRole::Consumes))
            .map(|e| e.source())
            .collect()
    }

    /// Edges as (source id, target id, role) triples, in insertion order.
    ///
    /// Insertion order equals emission order of the edge builder, so the
    /// returned sequence is stable across rebuilds from the same input.
    #[must_use]
    pub fn edges(&self) -> Vec<MessageEdge> {
        self.graph
            .edge_references()
            .map(|e| MessageEdge {
                source: self.graph[e.source()].id.clone(),
                target: self.graph[e.target()].id.clone(),
                role: *e.weight(),
            })
            .collect()
    }
}
