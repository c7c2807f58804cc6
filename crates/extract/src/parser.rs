use crate::patterns::{category_from_label, detect_all_categories, detect_category};
use crate::types::{DetectedComponent, ParsedBuild};
use crate::urls;
use once_cell::sync::Lazy;
use regex::Regex;
use rig_catalog::{resolve_in_category, CatalogItem, CatalogSnapshot, Category};
use std::collections::HashSet;

/// Confidence when the fragment contains the item's full normalized name.
const CONFIDENCE_FULL_NAME: f32 = 0.95;
/// Confidence when only the brand is recognizable in the fragment.
const CONFIDENCE_BRAND: f32 = 0.8;
/// Confidence for any other successful catalog binding.
const CONFIDENCE_PARTIAL: f32 = 0.6;
/// Confidence for a URL-derived component that resolved to no item.
const CONFIDENCE_UNRESOLVED_URL: f32 = 0.3;
/// Confidence for a table- or text-derived component with no item.
const CONFIDENCE_UNRESOLVED_TEXT: f32 = 0.4;

/// A currency-marked amount embedded in a line, e.g. "₹12,499" or "Rs. 4999".
static PRICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:₹|\$|€|£|rs\.?|inr)\s*([\d,]+)").expect("price pattern")
});

/// A pipe-delimited table row with at least two cells.
static TABLE_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\|?([^|]+)\|([^|]+)").expect("table row pattern"));

/// A "Category: item" line, bold markers tolerated.
static LABELED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:\*\*)?([A-Za-z ]{2,20})(?:\*\*)?\s*[:\-]\s+(.+)$").expect("label pattern")
});

/// Turns raw user input (free text, marketplace URLs, pasted tables) into a
/// structured [`ParsedBuild`]. Extraction is total: the worst input yields
/// an empty component list with everything preserved as unmatched text.
pub struct ComponentExtractor<'a> {
    catalog: &'a CatalogSnapshot,
}

impl<'a> ComponentExtractor<'a> {
    #[must_use]
    pub fn new(catalog: &'a CatalogSnapshot) -> Self {
        Self { catalog }
    }

    /// Parse raw input into detected components.
    ///
    /// Paths are tried in priority order: tabular paste, marketplace URLs,
    /// line-by-line free text, then a whole-input sweep when nothing else
    /// produced a component. Each category binds at most once per request;
    /// later detections of an already-claimed category are ignored.
    #[must_use]
    pub fn parse(&self, raw: &str) -> ParsedBuild {
        let mut build = ParsedBuild::default();
        let mut claimed: HashSet<Category> = HashSet::new();

        if looks_like_table(raw) {
            self.parse_table(raw, &mut build, &mut claimed);
            if !build.components.is_empty() {
                log::debug!("Extracted {} components from table input", build.components.len());
                return build;
            }
        }

        self.parse_urls(raw, &mut build, &mut claimed);
        self.parse_lines(raw, &mut build, &mut claimed);

        if build.components.is_empty() {
            self.whole_input_fallback(raw, &mut build, &mut claimed);
        }

        log::debug!(
            "Extracted {} components, {} unmatched fragments",
            build.components.len(),
            build.unmatched.len()
        );
        build
    }

    /// Step 1: pipe tables, bolded labels and "Category: item" lines.
    fn parse_table(&self, raw: &str, build: &mut ParsedBuild, claimed: &mut HashSet<Category>) {
        for line in raw.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || is_separator_row(trimmed) {
                continue;
            }

            let (label, item_text) = if let Some(caps) = TABLE_ROW.captures(trimmed) {
                (caps[1].trim().to_string(), caps[2].trim().to_string())
            } else if let Some(caps) = LABELED_LINE.captures(trimmed) {
                (caps[1].trim().to_string(), caps[2].trim().to_string())
            } else {
                continue;
            };

            let Some(category) = category_from_label(&label) else {
                build.unmatched.push(trimmed.to_string());
                continue;
            };
            if !claimed.insert(category) {
                continue;
            }
            build.components.push(self.resolve(
                category,
                &item_text,
                None,
                CONFIDENCE_UNRESOLVED_TEXT,
            ));
        }
    }

    /// Step 2: marketplace product URLs.
    fn parse_urls(&self, raw: &str, build: &mut ParsedBuild, claimed: &mut HashSet<Category>) {
        for url in urls::find_urls(raw) {
            let Some(fragment) = urls::slug_fragment(url) else {
                build.unmatched.push(url.to_string());
                continue;
            };
            let Some(category) = detect_category(&fragment) else {
                build.unmatched.push(url.to_string());
                continue;
            };
            if !claimed.insert(category) {
                continue;
            }
            let mut component = self.resolve(
                category,
                &fragment,
                Some(url.to_string()),
                CONFIDENCE_UNRESOLVED_URL,
            );
            component.raw_text = url.to_string();
            build.components.push(component);
        }
    }

    /// Step 3: split the remaining input on newlines/commas/semicolons and
    /// detect a category per fragment.
    fn parse_lines(&self, raw: &str, build: &mut ParsedBuild, claimed: &mut HashSet<Category>) {
        for fragment in split_fragments(raw) {
            let fragment = fragment.trim();
            if fragment.is_empty() || urls::is_url(fragment) {
                continue;
            }
            let Some(category) = detect_category(fragment) else {
                build.unmatched.push(fragment.to_string());
                continue;
            };
            if !claimed.insert(category) {
                continue;
            }
            build.components.push(self.resolve(
                category,
                fragment,
                None,
                CONFIDENCE_UNRESOLVED_TEXT,
            ));
        }
    }

    /// Step 4: nothing line-shaped matched; sweep the whole input once per
    /// category pattern and emit at most one component per category.
    fn whole_input_fallback(
        &self,
        raw: &str,
        build: &mut ParsedBuild,
        claimed: &mut HashSet<Category>,
    ) {
        for category in detect_all_categories(raw) {
            if !claimed.insert(category) {
                continue;
            }
            build.components.push(self.resolve(
                category,
                raw.trim(),
                None,
                CONFIDENCE_UNRESOLVED_TEXT,
            ));
        }
    }

    /// Bind a fragment to the best catalog item of its category.
    fn resolve(
        &self,
        category: Category,
        fragment: &str,
        source_url: Option<String>,
        unresolved_confidence: f32,
    ) -> DetectedComponent {
        match resolve_in_category(self.catalog, category, fragment) {
            Some((item, _)) => DetectedComponent {
                category,
                raw_text: fragment.to_string(),
                confidence: binding_confidence(item, fragment),
                item: Some(item.clone()),
                price: None,
                source_url,
            },
            None => DetectedComponent {
                category,
                raw_text: fragment.to_string(),
                item: None,
                confidence: unresolved_confidence,
                price: extract_price(fragment),
                source_url,
            },
        }
    }
}

fn binding_confidence(item: &CatalogItem, fragment: &str) -> f32 {
    let fragment = fragment.to_lowercase();
    if fragment.contains(&item.normalized_name) {
        CONFIDENCE_FULL_NAME
    } else if fragment.contains(&item.brand.to_lowercase()) {
        CONFIDENCE_BRAND
    } else {
        CONFIDENCE_PARTIAL
    }
}

/// Input looks tabular when any line is pipe-delimited, carries a bolded
/// label, or reads "Category: item".
fn looks_like_table(raw: &str) -> bool {
    raw.lines().any(|line| {
        let trimmed = line.trim();
        trimmed.matches('|').count() >= 1 && TABLE_ROW.is_match(trimmed)
            || LABELED_LINE
                .captures(trimmed)
                .is_some_and(|caps| category_from_label(&caps[1]).is_some())
    })
}

/// Split free text on newlines, semicolons and commas, except commas that
/// sit between two digits (thousands separators in prices like "₹9,999").
fn split_fragments(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    let mut fragments = Vec::new();
    let mut start = 0;
    for (i, c) in raw.char_indices() {
        let grouping_comma = c == ','
            && i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if (c == ',' && !grouping_comma) || c == '\n' || c == ';' {
            fragments.push(&raw[start..i]);
            start = i + 1;
        }
    }
    fragments.push(&raw[start..]);
    fragments
}

fn is_separator_row(line: &str) -> bool {
    line.chars().all(|c| matches!(c, '|' | '-' | ':' | ' '))
}

/// Parse a currency-marked amount; malformed numbers are silently dropped.
fn extract_price(text: &str) -> Option<u32> {
    let caps = PRICE.captures(text)?;
    caps[1].replace(',', "").parse::<u32>().ok()
}
