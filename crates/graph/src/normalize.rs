use crate::error::{GraphError, Result};
use crate::style::StylePalette;
use crate::types::{LabelSize, MessageNode};
use catalog_protocol::MessageRecord;

/// Normalize one raw record into a style-resolved graph node.
///
/// Label precedence: style override, then sidebar badge, then the category
/// default; the first non-empty value wins. Color and icon overrides win
/// over the palette defaults. Only a missing identifier or category is
/// fatal; every other field degrades to its default.
///
/// Pure transformation: the same record always yields the same node.
pub fn normalize(record: &MessageRecord, palette: &StylePalette) -> Result<MessageNode> {
    if record.id.is_empty() {
        return Err(GraphError::MissingIdentifier(record.name.clone()));
    }
    if record.category.is_empty() {
        return Err(GraphError::MissingCategory(record.id.clone()));
    }

    let defaults = palette.classify(&record.category);
    let style = record.style.clone().unwrap_or_default();

    let label = style
        .label
        .filter(|label| !label.is_empty())
        .or_else(|| record.badge.clone().filter(|badge| !badge.is_empty()))
        .unwrap_or_else(|| record.category.default_label().to_string());
    let color = style
        .color
        .filter(|color| !color.is_empty())
        .unwrap_or_else(|| defaults.color.clone());
    let icon = style
        .icon
        .filter(|icon| !icon.is_empty())
        .unwrap_or_else(|| defaults.icon.clone());
    let label_size = LabelSize::for_label(&label);

    Ok(MessageNode {
        id: record.id.clone(),
        name: record.name.clone(),
        version: record.version.clone(),
        category: record.category.clone(),
        summary: record.summary.clone(),
        label,
        color,
        icon,
        label_size,
        producer_count: record.producers.len(),
        consumer_count: record.consumers.len(),
        owner_count: record.owners.len(),
    })
}
