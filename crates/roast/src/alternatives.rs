use rig_catalog::{CatalogItem, CatalogSnapshot};

/// How an alternative should relate to the reference item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlternativeCriterion {
    /// Same category and tier, strictly cheaper
    Cheaper,
    /// Same category, strictly higher tier
    Better,
    /// Same category and tier, within 20% of the price
    Similar,
}

/// Price window for [`AlternativeCriterion::Similar`].
const SIMILAR_PRICE_DELTA: f32 = 0.2;

/// Find in-stock alternatives to a catalog item, cheapest first.
#[must_use]
pub fn find_alternatives(
    catalog: &CatalogSnapshot,
    item: &CatalogItem,
    criterion: AlternativeCriterion,
    max: usize,
) -> Vec<CatalogItem> {
    let tier = item.tier();
    let mut matches: Vec<&CatalogItem> = catalog
        .in_stock(item.category)
        .filter(|alt| alt.id != item.id)
        .filter(|alt| match criterion {
            AlternativeCriterion::Cheaper => alt.tier() == tier && alt.price < item.price,
            AlternativeCriterion::Better => alt.tier().rank() > tier.rank(),
            AlternativeCriterion::Similar => {
                let delta = (item.price as f32 * SIMILAR_PRICE_DELTA) as u32;
                alt.tier() == tier && alt.price.abs_diff(item.price) <= delta
            }
        })
        .collect();
    matches.sort_by_key(|alt| alt.price);
    matches.into_iter().take(max).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig_catalog::{Category, PerformanceTier, Specs};

    fn gpu(id: &str, price: u32, tier: PerformanceTier) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            name: format!("GPU {id}"),
            normalized_name: format!("gpu {id}"),
            category: Category::Gpu,
            brand: "Brand".into(),
            price,
            retailer: "shop".into(),
            in_stock: true,
            specs: Specs::default(),
            tier: Some(tier),
            use_cases: Vec::new(),
            embedding: None,
        }
    }

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot::new(vec![
            gpu("a", 30_000, PerformanceTier::MidRange),
            gpu("b", 26_000, PerformanceTier::MidRange),
            gpu("c", 22_000, PerformanceTier::MidRange),
            gpu("d", 60_000, PerformanceTier::HighEnd),
            gpu("e", 33_000, PerformanceTier::MidRange),
        ])
        .unwrap()
    }

    #[test]
    fn cheaper_is_same_tier_lower_price_cheapest_first() {
        let catalog = catalog();
        let reference = catalog.get("a").unwrap().clone();
        let alts = find_alternatives(&catalog, &reference, AlternativeCriterion::Cheaper, 5);
        let ids: Vec<&str> = alts.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
    }

    #[test]
    fn better_is_strictly_higher_tier() {
        let catalog = catalog();
        let reference = catalog.get("a").unwrap().clone();
        let alts = find_alternatives(&catalog, &reference, AlternativeCriterion::Better, 5);
        assert_eq!(alts.len(), 1);
        assert_eq!(alts[0].id, "d");
    }

    #[test]
    fn similar_stays_inside_the_price_window() {
        let catalog = catalog();
        let reference = catalog.get("a").unwrap().clone();
        let alts = find_alternatives(&catalog, &reference, AlternativeCriterion::Similar, 5);
        let ids: Vec<&str> = alts.iter().map(|i| i.id.as_str()).collect();
        // 20% of 30,000 is 6,000: b (26k) and e (33k) qualify, c (22k) not.
        assert_eq!(ids, vec!["b", "e"]);
    }

    #[test]
    fn max_truncates() {
        let catalog = catalog();
        let reference = catalog.get("a").unwrap().clone();
        let alts = find_alternatives(&catalog, &reference, AlternativeCriterion::Cheaper, 1);
        assert_eq!(alts.len(), 1);
    }
}
