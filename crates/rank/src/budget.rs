use once_cell::sync::Lazy;
use regex::Regex;
use rig_catalog::Category;

/// A number with an optional currency marker and optional "k" suffix.
static BUDGET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:₹|\$|€|£|rs\.?|inr)?\s*(\d{1,3}(?:,\d{3})+|\d+(?:\.\d+)?)\s*(k)?\b")
        .expect("budget pattern")
});

/// Words that signal the user wants a whole build, not one part.
const BUILD_WORDS: [&str; 8] = [
    "build", "pc", "rig", "setup", "gaming", "computer", "workstation", "budget",
];

/// Share of the total budget each category gets in a balanced build.
/// Empirical splits; allocation order follows [`Category::ALL`].
const BUDGET_SHARES: [(Category, f32); 8] = [
    (Category::Gpu, 0.35),
    (Category::Cpu, 0.25),
    (Category::Motherboard, 0.15),
    (Category::Ram, 0.10),
    (Category::Storage, 0.08),
    (Category::Psu, 0.08),
    (Category::Case, 0.08),
    (Category::Cooler, 0.05),
];

/// Budget share for one category.
#[must_use]
pub fn category_share(category: Category) -> f32 {
    BUDGET_SHARES
        .iter()
        .find(|(c, _)| *c == category)
        .map_or(0.0, |(_, share)| *share)
}

/// Detect a budget in a free-text query.
///
/// "₹80k", "80k" and plain "80" all mean 80,000: people quote PC budgets
/// in thousands, so values under 1000 are scaled up. No numeric token
/// means no budget.
#[must_use]
pub fn detect_budget(query: &str) -> Option<u32> {
    let caps = BUDGET.captures(query)?;
    let number: f32 = caps[1].replace(',', "").parse().ok()?;
    if number <= 0.0 {
        return None;
    }
    let mut amount = if caps.get(2).is_some() {
        number * 1000.0
    } else {
        number
    };
    if amount < 1000.0 {
        amount *= 1000.0;
    }
    Some(amount as u32)
}

/// A query counts as a build query when it uses build vocabulary or names
/// a budget.
#[must_use]
pub fn is_build_query(query: &str) -> bool {
    let query = query.to_lowercase();
    BUILD_WORDS
        .iter()
        .any(|word| query.split_whitespace().any(|token| token == *word))
        || detect_budget(&query).is_some()
}
