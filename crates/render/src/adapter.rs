use crate::descriptor::{HandlePosition, HandleSpec, RenderDescriptor, RenderMode};
use catalog_graph::{LabelSize, MessageEdge, MessageNode};

/// Font size for each label tier, kept for visual compatibility with the
/// original catalog styling.
#[must_use]
pub fn font_size(size: LabelSize) -> &'static str {
    match size {
        LabelSize::Regular => "9px",
        LabelSize::Compact => "7px",
    }
}

/// Project one classified node into its renderable descriptor.
///
/// Pure projection: no filtering and no counting beyond checking which
/// sides of the node actually carry edges. Simple mode surfaces only the
/// identity fields; full mode adds the summary and the counts cached at
/// normalization time.
#[must_use]
pub fn to_renderable(
    node: &MessageNode,
    edges: &[MessageEdge],
    mode: RenderMode,
) -> RenderDescriptor {
    let handles = handle_spec(node, edges);

    match mode {
        RenderMode::Simple => RenderDescriptor::Simple {
            id: node.id.clone(),
            name: node.name.clone(),
            version: node.version.clone(),
            label: node.label.clone(),
            color: node.color.clone(),
            icon: node.icon.clone(),
            font_size: font_size(node.label_size).to_string(),
            handles,
        },
        RenderMode::Full => RenderDescriptor::Full {
            id: node.id.clone(),
            name: node.name.clone(),
            version: node.version.clone(),
            label: node.label.clone(),
            color: node.color.clone(),
            icon: node.icon.clone(),
            font_size: font_size(node.label_size).to_string(),
            handles,
            summary: node.summary.clone(),
            producer_count: node.producer_count,
            consumer_count: node.consumer_count,
            owner_count: node.owner_count,
        },
    }
}

fn handle_spec(node: &MessageNode, edges: &[MessageEdge]) -> HandleSpec {
    let incoming = edges.iter().any(|edge| edge.target == node.id);
    let outgoing = edges.iter().any(|edge| edge.source == node.id);

    HandleSpec {
        target: incoming.then_some(HandlePosition::Left),
        source: outgoing.then_some(HandlePosition::Right),
    }
}
