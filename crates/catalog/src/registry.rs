use crate::types::{CatalogItem, PerformanceTier};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Curated reference data for well-known components, keyed by normalized
/// name. Scraped catalog specs are spotty; when an entry exists here it is
/// used to fill gaps (socket, brand, tier) and to down-weight components
/// that are poor picks for gaming builds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceRegistry {
    entries: HashMap<String, ReferenceEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceEntry {
    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub socket: Option<String>,

    #[serde(default)]
    pub tier: Option<PerformanceTier>,

    /// `Some(false)` marks components known to be unsuitable for gaming
    /// (workstation GPUs, low-power embedded CPUs); `None` means unknown.
    #[serde(default)]
    pub gaming_suitable: Option<bool>,
}

impl ReferenceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, normalized_name: impl Into<String>, entry: ReferenceEntry) {
        self.entries.insert(normalized_name.into(), entry);
    }

    #[must_use]
    pub fn lookup(&self, normalized_name: &str) -> Option<&ReferenceEntry> {
        self.entries.get(normalized_name)
    }

    /// Gaming suitability for a catalog item; `None` when the registry has
    /// no opinion, which callers must treat as "fine".
    #[must_use]
    pub fn gaming_suitable(&self, item: &CatalogItem) -> Option<bool> {
        self.lookup(&item.normalized_name)?.gaming_suitable
    }

    /// Socket with registry data taking precedence over nothing-at-all.
    #[must_use]
    pub fn socket_for(&self, item: &CatalogItem) -> Option<&str> {
        self.lookup(&item.normalized_name)?.socket.as_deref()
    }

    #[must_use]
    pub fn brand_for(&self, item: &CatalogItem) -> Option<&str> {
        self.lookup(&item.normalized_name)?.brand.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
