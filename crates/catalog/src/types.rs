use crate::specs::Specs;
use serde::{Deserialize, Serialize};

/// Hardware category of a catalog item.
///
/// Closed set: analyzer rules and ranking weights are looked up per
/// category, so adding a variant forces every match site to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Gpu,
    Ram,
    Motherboard,
    Psu,
    Case,
    Storage,
    Cooler,
}

impl Category {
    /// All categories, in budget-allocation order (largest share first).
    pub const ALL: [Category; 8] = [
        Category::Gpu,
        Category::Cpu,
        Category::Motherboard,
        Category::Ram,
        Category::Storage,
        Category::Psu,
        Category::Case,
        Category::Cooler,
    ];

    /// Categories a build cannot function without. Case and cooler are
    /// optional (stock coolers, open benches).
    pub const REQUIRED: [Category; 6] = [
        Category::Cpu,
        Category::Gpu,
        Category::Ram,
        Category::Motherboard,
        Category::Psu,
        Category::Storage,
    ];

    /// Stable lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Gpu => "gpu",
            Category::Ram => "ram",
            Category::Motherboard => "motherboard",
            Category::Psu => "psu",
            Category::Case => "case",
            Category::Storage => "storage",
            Category::Cooler => "cooler",
        }
    }

    /// Human-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Gpu => "GPU",
            Category::Ram => "RAM",
            Category::Motherboard => "Motherboard",
            Category::Psu => "Power Supply",
            Category::Case => "Case",
            Category::Storage => "Storage",
            Category::Cooler => "CPU Cooler",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse price/performance classification used for tier-relative rules
/// (bottleneck detection, overspending alternatives).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceTier {
    Budget,
    MidRange,
    HighEnd,
}

/// Per-category price cutoffs for tier inference: (budget ceiling,
/// mid-range ceiling), in whole currency units. Empirical, tunable.
const TIER_BANDS: [(Category, u32, u32); 8] = [
    (Category::Gpu, 20_000, 45_000),
    (Category::Cpu, 12_000, 28_000),
    (Category::Motherboard, 10_000, 20_000),
    (Category::Ram, 4_000, 9_000),
    (Category::Storage, 4_000, 10_000),
    (Category::Psu, 5_000, 10_000),
    (Category::Case, 5_000, 12_000),
    (Category::Cooler, 3_000, 8_000),
];

impl PerformanceTier {
    /// Ordinal rank for tier comparisons (budget=1, mid=2, high=3).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            PerformanceTier::Budget => 1,
            PerformanceTier::MidRange => 2,
            PerformanceTier::HighEnd => 3,
        }
    }

    /// Infer a tier from price banding when upstream data carries none.
    #[must_use]
    pub fn from_price(category: Category, price: u32) -> Self {
        let (_, budget_max, mid_max) = TIER_BANDS
            .iter()
            .find(|(c, _, _)| *c == category)
            .copied()
            .unwrap_or((category, 5_000, 15_000));
        if price <= budget_max {
            PerformanceTier::Budget
        } else if price <= mid_max {
            PerformanceTier::MidRange
        } else {
            PerformanceTier::HighEnd
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PerformanceTier::Budget => "budget",
            PerformanceTier::MidRange => "mid-range",
            PerformanceTier::HighEnd => "high-end",
        }
    }
}

/// A purchasable catalog entry. Created once per catalog load and never
/// mutated afterwards; a refresh builds a whole new snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Unique id within one snapshot
    pub id: String,

    /// Display name as scraped from the retailer
    pub name: String,

    /// Lowercased canonical form used for matching
    pub normalized_name: String,

    pub category: Category,

    pub brand: String,

    /// Price in whole currency units, always positive
    pub price: u32,

    pub retailer: String,

    /// Absent in upstream feeds means "purchasable"
    #[serde(default = "default_true")]
    pub in_stock: bool,

    /// Category-dependent specification sheet
    #[serde(default)]
    pub specs: Specs,

    /// Explicit tier when the upstream feed provides one
    #[serde(default)]
    pub tier: Option<PerformanceTier>,

    /// Marketing use-cases ("gaming", "workstation", ...), searchable
    #[serde(default)]
    pub use_cases: Vec<String>,

    /// Precomputed semantic vector from the embedding service
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

fn default_true() -> bool {
    true
}

impl CatalogItem {
    /// Effective tier: explicit when set, otherwise inferred from the
    /// category price band.
    #[must_use]
    pub fn tier(&self) -> PerformanceTier {
        self.tier
            .unwrap_or_else(|| PerformanceTier::from_price(self.category, self.price))
    }

    /// Lowercased concatenation of every token-searchable field.
    #[must_use]
    pub fn search_blob(&self) -> String {
        let mut blob = String::with_capacity(
            self.name.len() + self.normalized_name.len() + self.brand.len() + 32,
        );
        blob.push_str(&self.name.to_lowercase());
        blob.push(' ');
        blob.push_str(&self.normalized_name);
        blob.push(' ');
        blob.push_str(self.category.as_str());
        blob.push(' ');
        blob.push_str(&self.brand.to_lowercase());
        for use_case in &self.use_cases {
            blob.push(' ');
            blob.push_str(&use_case.to_lowercase());
        }
        blob
    }

    /// Deduplication key: two listings of the same product at the same
    /// price are interchangeable even across retailers.
    #[must_use]
    pub fn dedup_key(&self) -> (Category, &str, u32) {
        (self.category, self.normalized_name.as_str(), self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(category: Category, price: u32) -> CatalogItem {
        CatalogItem {
            id: "x1".into(),
            name: "AMD Ryzen 5 7600".into(),
            normalized_name: "amd ryzen 5 7600".into(),
            category,
            brand: "AMD".into(),
            price,
            retailer: "shop".into(),
            in_stock: true,
            specs: Specs::default(),
            tier: None,
            use_cases: vec!["Gaming".into()],
            embedding: None,
        }
    }

    #[test]
    fn tier_inferred_from_price_band() {
        assert_eq!(item(Category::Gpu, 15_000).tier(), PerformanceTier::Budget);
        assert_eq!(item(Category::Gpu, 30_000).tier(), PerformanceTier::MidRange);
        assert_eq!(item(Category::Gpu, 90_000).tier(), PerformanceTier::HighEnd);
    }

    #[test]
    fn explicit_tier_wins_over_band() {
        let mut cheap = item(Category::Gpu, 5_000);
        cheap.tier = Some(PerformanceTier::HighEnd);
        assert_eq!(cheap.tier(), PerformanceTier::HighEnd);
    }

    #[test]
    fn search_blob_is_lowercased_and_contains_use_cases() {
        let blob = item(Category::Cpu, 18_000).search_blob();
        assert!(blob.contains("amd ryzen 5 7600"));
        assert!(blob.contains("cpu"));
        assert!(blob.contains("gaming"));
    }

    #[test]
    fn category_wire_names_round_trip() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn tier_rank_is_monotonic_in_price() {
        let cheap = item(Category::Cpu, 5_000).tier().rank();
        let mid = item(Category::Cpu, 20_000).tier().rank();
        let dear = item(Category::Cpu, 60_000).tier().rank();
        assert!(cheap <= mid && mid <= dear);
    }
}
