use catalog_protocol::Category;
use serde::{Deserialize, Serialize};

/// Default visual classification for one message category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    /// Color token understood by the rendering layer ("orange", "gray", ...)
    pub color: String,

    /// Icon reference understood by the rendering layer
    pub icon: String,
}

impl StyleDescriptor {
    #[must_use]
    pub fn new(color: &str, icon: &str) -> Self {
        Self {
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Category-to-style mapping used by the node normalizer.
///
/// The palette enumerates every recognized category plus a fallback, so
/// classification is a total function: unknown or future categories resolve
/// to the fallback descriptor instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePalette {
    pub events: StyleDescriptor,
    pub commands: StyleDescriptor,
    pub queries: StyleDescriptor,
    pub fallback: StyleDescriptor,
}

impl Default for StylePalette {
    fn default() -> Self {
        Self {
            events: StyleDescriptor::new("orange", "BoltIcon"),
            commands: StyleDescriptor::new("blue", "ChatBubbleLeftIcon"),
            queries: StyleDescriptor::new("green", "MagnifyingGlassIcon"),
            fallback: StyleDescriptor::new("gray", "EnvelopeIcon"),
        }
    }
}

impl StylePalette {
    /// Resolve the default style for a category.
    #[must_use]
    pub fn classify(&self, category: &Category) -> &StyleDescriptor {
        match category {
            Category::Events => &self.events,
            Category::Commands => &self.commands,
            Category::Queries => &self.queries,
            Category::Other(_) => &self.fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_categories_have_distinct_defaults() {
        let palette = StylePalette::default();

        assert_eq!(palette.classify(&Category::Events).color, "orange");
        assert_eq!(palette.classify(&Category::Commands).color, "blue");
        assert_eq!(palette.classify(&Category::Queries).color, "green");
        assert_eq!(palette.classify(&Category::Queries).icon, "MagnifyingGlassIcon");
    }

    #[test]
    fn test_unknown_categories_resolve_to_fallback() {
        let palette = StylePalette::default();

        for name in ["channels", "notifications", "", "EVENTS"] {
            let descriptor = palette.classify(&Category::from(name));
            assert_eq!(descriptor.color, "gray");
            assert_eq!(descriptor.icon, "EnvelopeIcon");
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let palette = StylePalette::default();
        let category = Category::from("events");

        assert_eq!(palette.classify(&category), palette.classify(&category));
    }
}
