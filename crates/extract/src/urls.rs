use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s<>()\[\]]+").expect("url pattern"));

/// Path segments that carry routing noise instead of product names.
const JUNK_SEGMENTS: [&str; 6] = ["dp", "gp", "p", "product", "itm", "buy"];

/// All URLs present in the input, in order.
pub fn find_urls(text: &str) -> Vec<&str> {
    URL.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn is_url(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with("http://") || trimmed.starts_with("https://")
}

/// Derive a product-name fragment from a marketplace URL path.
///
/// Picks the longest slug segment (marketplaces encode the product name
/// there), drops routing noise and opaque ids, and de-hyphenates. Returns
/// `None` when the path carries nothing name-like.
#[must_use]
pub fn slug_fragment(url: &str) -> Option<String> {
    let path = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path = path.split(['?', '#']).next().unwrap_or(path);

    let candidate = path
        .split('/')
        .skip(1) // host
        .map(str::trim)
        .filter(|seg| !seg.is_empty())
        .filter(|seg| !JUNK_SEGMENTS.contains(&seg.to_lowercase().as_str()))
        .filter(|seg| !is_opaque_id(seg))
        .max_by_key(|seg| seg.len())?;

    let fragment = candidate
        .replace(['-', '_', '+'], " ")
        .replace("%20", " ")
        .trim()
        .to_lowercase();
    if fragment.len() < 3 {
        return None;
    }
    Some(fragment)
}

/// Opaque ids: all alphanumeric with digits and no separators, e.g. Amazon
/// ASINs ("B0C6W8ZQ2K") or numeric listing ids.
fn is_opaque_id(segment: &str) -> bool {
    segment.len() >= 8
        && !segment.contains(['-', '_', '+'])
        && segment.chars().all(|c| c.is_ascii_alphanumeric())
        && segment.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slug_comes_from_longest_name_segment() {
        let url = "https://www.amazon.in/MSI-GeForce-RTX-4060-Ventus/dp/B0C6W8ZQ2K";
        assert_eq!(
            slug_fragment(url).as_deref(),
            Some("msi geforce rtx 4060 ventus")
        );
    }

    #[test]
    fn query_and_ids_are_ignored() {
        let url = "https://shop.example/p/intel-core-i5-12400f?ref=42&tag=xyz";
        assert_eq!(slug_fragment(url).as_deref(), Some("intel core i5 12400f"));
    }

    #[test]
    fn bare_host_has_no_slug() {
        assert_eq!(slug_fragment("https://example.com/"), None);
    }

    #[test]
    fn urls_are_found_inside_prose() {
        let found = find_urls("check https://a.example/x-y and https://b.example/z");
        assert_eq!(found.len(), 2);
    }
}
