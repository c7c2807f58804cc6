use crate::error::{CatalogError, Result};
use crate::registry::ReferenceRegistry;
use crate::types::{CatalogItem, Category};
use std::collections::HashMap;
use std::path::Path;

/// Immutable view of the catalog one request pipeline runs against.
///
/// Built once per catalog load and shared freely across threads; a refresh
/// constructs a new snapshot and swaps the handle, it never mutates this
/// one in place.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    items: Vec<CatalogItem>,
    by_id: HashMap<String, usize>,
    registry: Option<ReferenceRegistry>,
}

impl CatalogSnapshot {
    /// Build a snapshot, validating item invariants (unique non-empty id,
    /// positive price).
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(CatalogError::invalid_item(&item.name, "empty id"));
            }
            if item.price == 0 {
                return Err(CatalogError::invalid_item(&item.id, "price must be positive"));
            }
            if by_id.insert(item.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        log::info!("Catalog snapshot built: {} items", items.len());
        Ok(Self {
            items,
            by_id,
            registry: None,
        })
    }

    /// Attach per-item embedding vectors produced by the external embedding
    /// service, keyed by item id. Unknown ids are ignored.
    #[must_use]
    pub fn with_embeddings(mut self, embeddings: HashMap<String, Vec<f32>>) -> Self {
        let mut attached = 0usize;
        for (id, vector) in embeddings {
            if let Some(&idx) = self.by_id.get(&id) {
                self.items[idx].embedding = Some(vector);
                attached += 1;
            }
        }
        log::debug!("Attached {} embedding vectors", attached);
        self
    }

    /// Attach the optional reference component registry.
    #[must_use]
    pub fn with_registry(mut self, registry: ReferenceRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Parse a snapshot from catalog JSON (an array of items).
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Load a snapshot from a catalog JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        log::info!("Loading catalog from {:?}", path.as_ref());
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    #[must_use]
    pub fn registry(&self) -> Option<&ReferenceRegistry> {
        self.registry.as_ref()
    }

    /// All items of one category, catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(move |i| i.category == category)
    }

    /// In-stock items of one category.
    pub fn in_stock(&self, category: Category) -> impl Iterator<Item = &CatalogItem> {
        self.in_category(category).filter(|i| i.in_stock)
    }

    /// Cheapest in-stock item of a category, if the category has any.
    #[must_use]
    pub fn cheapest_in(&self, category: Category) -> Option<&CatalogItem> {
        self.in_stock(category).min_by_key(|i| i.price)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
