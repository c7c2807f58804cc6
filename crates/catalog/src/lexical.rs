use crate::snapshot::CatalogSnapshot;
use crate::types::{CatalogItem, Category};

/// Minimum word-overlap score for a fragment to bind to a catalog item.
/// Below this the extractor reports "no match" instead of a wrong match.
pub const MIN_MATCH_SCORE: f32 = 0.3;

/// Score a free-text fragment against one catalog item.
///
/// For each of the item's matchable terms (normalized name, display name,
/// brand) take the fraction of that term's words — skipping words of three
/// characters or fewer — that occur as substrings of the fragment, and keep
/// the best. A user pasting "MSI RTX 4060 Ventus 2X" should bind to the
/// item even when word order and casing differ.
#[must_use]
pub fn score_fragment(item: &CatalogItem, fragment: &str) -> f32 {
    let fragment = fragment.to_lowercase();
    let name = item.name.to_lowercase();
    let brand = item.brand.to_lowercase();

    [item.normalized_name.as_str(), name.as_str(), brand.as_str()]
        .iter()
        .map(|term| word_overlap(term, &fragment))
        .fold(0.0f32, f32::max)
}

fn word_overlap(term: &str, fragment: &str) -> f32 {
    let words: Vec<&str> = term
        .split_whitespace()
        .filter(|word| word.len() > 2)
        .collect();
    if words.is_empty() {
        return 0.0;
    }
    let hits = words
        .iter()
        .filter(|word| fragment.contains(*word))
        .count();
    hits as f32 / words.len() as f32
}

/// Resolve a text fragment to the best-matching catalog item of one
/// category. Returns the item and its match score, or `None` when nothing
/// clears [`MIN_MATCH_SCORE`].
#[must_use]
pub fn resolve_in_category<'a>(
    catalog: &'a CatalogSnapshot,
    category: Category,
    fragment: &str,
) -> Option<(&'a CatalogItem, f32)> {
    let mut best: Option<(&CatalogItem, f32)> = None;
    for item in catalog.in_category(category) {
        let score = score_fragment(item, fragment);
        if score > best.map_or(MIN_MATCH_SCORE, |(_, s)| s) {
            best = Some((item, score));
        }
    }
    best
}
