use rig_catalog::{CatalogItem, Category};
use serde::{Deserialize, Serialize};

/// One component recognized in the raw input, optionally bound to a
/// catalog item. Never mutated after creation; lives for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedComponent {
    pub category: Category,

    /// The input fragment this component was recognized in
    pub raw_text: String,

    /// Bound catalog item when resolution succeeded
    pub item: Option<CatalogItem>,

    /// How reliable the text-to-item binding is, in [0, 1]
    pub confidence: f32,

    /// Price carried by the text itself, only kept when no catalog item
    /// was bound (the item's own price wins otherwise)
    pub price: Option<u32>,

    /// Product URL the component was derived from, when applicable
    pub source_url: Option<String>,
}

/// Result of one extraction pass over raw user input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedBuild {
    /// Detected components, input order
    pub components: Vec<DetectedComponent>,

    /// Fragments that matched no category or no catalog item
    pub unmatched: Vec<String>,
}

impl ParsedBuild {
    /// Components that bound to a catalog item.
    pub fn resolved(&self) -> impl Iterator<Item = &DetectedComponent> {
        self.components.iter().filter(|c| c.item.is_some())
    }

    /// First component detected for a category, resolved or not.
    #[must_use]
    pub fn component_for(&self, category: Category) -> Option<&DetectedComponent> {
        self.components.iter().find(|c| c.category == category)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
