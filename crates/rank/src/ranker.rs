use crate::budget::{category_share, detect_budget, is_build_query};
use rig_catalog::{cosine_similarity, CatalogItem, CatalogSnapshot, Category};
use std::collections::HashSet;

/// Semantic scores below this floor are noise, not matches.
pub const MIN_SIMILARITY: f32 = 0.1;

/// How far past its budget share a category pick may stretch.
pub const ALLOCATION_SLACK: f32 = 1.5;

/// Similarity multiplier for GPUs the reference registry marks unsuitable
/// for gaming. Down-weights only; a hard filter could empty the results.
const GPU_UNSUITABLE_WEIGHT: f32 = 0.3;
/// Same idea for CPUs.
const CPU_UNSUITABLE_WEIGHT: f32 = 0.7;

/// Lexical scoring bonuses.
const TOKEN_HIT: f32 = 1.0;
const CATEGORY_TOKEN_BONUS: f32 = 2.0;
const BRAND_TOKEN_BONUS: f32 = 1.5;
const IN_BUDGET_BONUS: f32 = 1.0;

/// Ranks catalog items for a query, semantically when an embedding vector
/// for the query is supplied and lexically otherwise. Pure function of the
/// snapshot: no internal state, freely shareable.
pub struct Ranker<'a> {
    catalog: &'a CatalogSnapshot,
}

impl<'a> Ranker<'a> {
    #[must_use]
    pub fn new(catalog: &'a CatalogSnapshot) -> Self {
        Self { catalog }
    }

    /// Rank catalog items for a query.
    ///
    /// Build queries with a detected budget get a balanced result: one slot
    /// per category within that category's budget share, topped up with the
    /// remaining highest-scored items. Everything else gets a plain ranked
    /// list. Never errors; an unusable query yields an empty list.
    #[must_use]
    pub fn rank(&self, query: &str, vector: Option<&[f32]>, limit: usize) -> Vec<CatalogItem> {
        if limit == 0 {
            return Vec::new();
        }

        let budget = detect_budget(query);
        let scored = match vector {
            Some(vector) => self.score_semantic(vector),
            None => self.score_lexical(query, budget),
        };
        log::debug!(
            "rank: query='{}', {} raw candidates, budget={:?}",
            query,
            scored.len(),
            budget
        );

        let ranked = dedup(scored);

        if let (true, Some(budget)) = (is_build_query(query), budget) {
            self.balance(ranked, budget, limit)
        } else {
            ranked.into_iter().take(limit).map(|(item, _)| item.clone()).collect()
        }
    }

    /// Cosine similarity against each in-stock item's precomputed vector,
    /// floored, then down-weighted for gaming-unsuitable components.
    fn score_semantic(&self, vector: &[f32]) -> Vec<(&CatalogItem, f32)> {
        let mut scored: Vec<(&CatalogItem, f32)> = self
            .catalog
            .items()
            .iter()
            .filter(|item| item.in_stock)
            .filter_map(|item| {
                let embedding = item.embedding.as_deref()?;
                let similarity = cosine_similarity(vector, embedding);
                (similarity >= MIN_SIMILARITY).then_some((item, similarity))
            })
            .map(|(item, similarity)| (item, similarity * self.suitability_weight(item)))
            .collect();
        sort_desc(&mut scored);
        scored
    }

    /// Token-overlap scoring over each item's searchable text.
    fn score_lexical(&self, query: &str, budget: Option<u32>) -> Vec<(&CatalogItem, f32)> {
        let query = query.to_lowercase();
        let tokens: Vec<&str> = query
            .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
            .filter(|t| !t.is_empty())
            .collect();

        let mut scored: Vec<(&CatalogItem, f32)> = self
            .catalog
            .items()
            .iter()
            .filter(|item| item.in_stock)
            .filter_map(|item| {
                let blob = item.search_blob();
                let brand = item.brand.to_lowercase();
                let mut score = 0.0;
                for token in &tokens {
                    if blob.contains(token) {
                        score += TOKEN_HIT;
                    }
                    if *token == item.category.as_str() {
                        score += CATEGORY_TOKEN_BONUS;
                    }
                    if *token == brand {
                        score += BRAND_TOKEN_BONUS;
                    }
                }
                if budget.is_some_and(|b| item.price <= b) && score > 0.0 {
                    score += IN_BUDGET_BONUS;
                }
                (score > 0.0).then_some((item, score))
            })
            .collect();
        sort_desc(&mut scored);
        scored
    }

    fn suitability_weight(&self, item: &CatalogItem) -> f32 {
        let Some(registry) = self.catalog.registry() else {
            return 1.0;
        };
        match (item.category, registry.gaming_suitable(item)) {
            (Category::Gpu, Some(false)) => GPU_UNSUITABLE_WEIGHT,
            (Category::Cpu, Some(false)) => CPU_UNSUITABLE_WEIGHT,
            _ => 1.0,
        }
    }

    /// One slot per category in allocation order: the top raw-scored item
    /// of the category when there is one, otherwise the cheapest in-stock
    /// item inside the category's budget share (with slack), falling back
    /// to the overall cheapest. Categories the catalog simply lacks are
    /// omitted. Remaining raw results of still-uncovered categories top up
    /// to the limit.
    fn balance(
        &self,
        ranked: Vec<(&CatalogItem, f32)>,
        budget: u32,
        limit: usize,
    ) -> Vec<CatalogItem> {
        let mut picked: Vec<&CatalogItem> = Vec::new();
        let mut covered: HashSet<Category> = HashSet::new();

        for category in Category::ALL {
            if picked.len() >= limit {
                break;
            }
            let slot = ranked
                .iter()
                .find(|(item, _)| item.category == category)
                .map(|(item, _)| *item)
                .or_else(|| self.slot_fallback(category, budget));
            if let Some(item) = slot {
                covered.insert(category);
                picked.push(item);
            } else {
                log::debug!("balance: no candidate for {category}");
            }
        }

        // Top up with leftovers from uncovered categories only, so the
        // one-item-per-category shape survives.
        for (item, _) in &ranked {
            if picked.len() >= limit {
                break;
            }
            if covered.insert(item.category) {
                picked.push(item);
            }
        }

        picked.into_iter().take(limit).cloned().collect()
    }

    fn slot_fallback(&self, category: Category, budget: u32) -> Option<&CatalogItem> {
        let target = budget as f32 * category_share(category);
        let ceiling = (target * ALLOCATION_SLACK) as u32;
        self.catalog
            .in_stock(category)
            .filter(|item| item.price <= ceiling)
            .min_by_key(|item| item.price)
            .or_else(|| self.catalog.cheapest_in(category))
    }
}

fn sort_desc(scored: &mut [(&CatalogItem, f32)]) {
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
}

/// Drop later duplicates by (category, normalized name, price).
fn dedup<'c>(scored: Vec<(&'c CatalogItem, f32)>) -> Vec<(&'c CatalogItem, f32)> {
    let mut seen: HashSet<(Category, String, u32)> = HashSet::new();
    scored
        .into_iter()
        .filter(|(item, _)| {
            let (category, name, price) = item.dedup_key();
            seen.insert((category, name.to_string(), price))
        })
        .collect()
}
