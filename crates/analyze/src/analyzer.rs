use crate::rules::{RuleCtx, RULES};
use crate::types::{BuildAnalysis, IssueKind};
use rig_catalog::{CatalogSnapshot, Category};
use rig_extract::ParsedBuild;
use std::collections::BTreeMap;

/// Run the full compatibility/value rule set over a parsed build.
///
/// Only components that resolved to a catalog item participate; the first
/// resolved component per category wins. Pure function of the snapshot and
/// the build: the same inputs always produce the same analysis.
#[must_use]
pub fn analyze(catalog: &CatalogSnapshot, build: &ParsedBuild) -> BuildAnalysis {
    let mut picks = BTreeMap::new();
    for component in &build.components {
        if let Some(item) = &component.item {
            picks.entry(component.category).or_insert(item);
        }
    }

    let ctx = RuleCtx {
        catalog,
        picks: picks.clone(),
    };

    let mut issues = Vec::new();
    for rule in RULES {
        rule(&ctx, &mut issues);
    }

    let total_price = picks.values().map(|item| item.price).sum();
    let missing: Vec<Category> = Category::REQUIRED
        .iter()
        .copied()
        .filter(|c| !picks.contains_key(c))
        .collect();
    let score = BuildAnalysis::score_from_issues(&issues);

    log::debug!(
        "analyze: {} picks, {} issues, score {}",
        picks.len(),
        issues.len(),
        score
    );

    BuildAnalysis {
        issues,
        total_price,
        missing,
        score,
    }
}

/// Convenience: does the analysis contain an issue of this kind?
#[must_use]
pub fn has_issue(analysis: &BuildAnalysis, kind: IssueKind) -> bool {
    analysis.issues.iter().any(|i| i.kind == kind)
}
