use crate::types::{Grade, Priority, RoastResult, RoastSuggestion, SuggestedAction};
use rig_analyze::{AnalysisIssue, BuildAnalysis, IssueKind, Severity};
use rig_catalog::CatalogSnapshot;
use rig_extract::ParsedBuild;

/// How many fixes make the headline list.
const TOP_FIX_COUNT: usize = 3;

/// Turn an analysis into prioritized, actionable suggestions.
///
/// Pure function of its inputs; the catalog is only read for the build
/// summary totals.
#[must_use]
pub fn suggest(
    _catalog: &CatalogSnapshot,
    analysis: &BuildAnalysis,
    build: &ParsedBuild,
) -> RoastResult {
    let mut suggestions: Vec<RoastSuggestion> =
        analysis.issues.iter().map(to_suggestion).collect();
    suggestions.sort_by_key(|s| s.priority);

    let top_fixes: Vec<RoastSuggestion> = suggestions
        .iter()
        .filter(|s| s.priority.is_urgent())
        .take(TOP_FIX_COUNT)
        .cloned()
        .collect();

    let total_savings = suggestions.iter().filter_map(|s| s.savings).sum();
    let grade = Grade::from_score(analysis.score);

    log::debug!(
        "suggest: {} suggestions, grade {}, savings {}",
        suggestions.len(),
        grade,
        total_savings
    );

    RoastResult {
        grade,
        score: analysis.score,
        suggestions,
        top_fixes,
        total_savings,
        summary: summarize(build, analysis),
    }
}

/// Fixed issue-kind → action/priority mapping. Compatibility breakers and
/// power problems are always critical; a bottleneck is always high even
/// though the analyzer only warns.
fn to_suggestion(issue: &AnalysisIssue) -> RoastSuggestion {
    let (action, priority) = match issue.kind {
        IssueKind::PsuInsufficient
        | IssueKind::SocketMismatch
        | IssueKind::RamTypeMismatch
        | IssueKind::PlatformMismatch
        | IssueKind::CoolerClearance
        | IssueKind::GpuClearance => (SuggestedAction::Replace, Priority::Critical),
        IssueKind::Bottleneck => (SuggestedAction::Upgrade, Priority::High),
        IssueKind::CoolingInadequate => (SuggestedAction::Add, Priority::High),
        IssueKind::Overspending => (SuggestedAction::Downgrade, Priority::Low),
        IssueKind::MissingCategory => (SuggestedAction::Add, Priority::Medium),
    };
    // The issue's own severity can only raise urgency, never lower it, so
    // a critical finding of any kind stays critical.
    let priority = priority.min(severity_priority(issue.severity));

    RoastSuggestion {
        action,
        priority,
        reason: issue.title.clone(),
        explanation: issue.suggestion.clone(),
        suggested: issue.alternative.clone(),
        savings: issue.savings,
    }
}

const fn severity_priority(severity: Severity) -> Priority {
    match severity {
        Severity::Critical => Priority::Critical,
        Severity::Warning => Priority::High,
        Severity::Info => Priority::Low,
    }
}

/// One line: the resolved parts plus what they add up to.
fn summarize(build: &ParsedBuild, analysis: &BuildAnalysis) -> String {
    let parts: Vec<String> = build
        .resolved()
        .filter_map(|component| {
            component
                .item
                .as_ref()
                .map(|item| format!("{}: {}", item.category.label(), item.name))
        })
        .collect();
    if parts.is_empty() {
        return "No recognizable parts in this build.".to_string();
    }
    format!("{} — {} total", parts.join(", "), analysis.total_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rig_analyze::AnalysisIssue;
    use rig_catalog::{CatalogItem, Category, Specs};
    use rig_extract::DetectedComponent;

    fn issue(kind: IssueKind, severity: Severity) -> AnalysisIssue {
        AnalysisIssue::new(kind, severity, "title", "description", "do something")
    }

    fn analysis_with(issues: Vec<AnalysisIssue>, score: u32) -> BuildAnalysis {
        BuildAnalysis {
            issues,
            total_price: 50_000,
            missing: Vec::new(),
            score,
        }
    }

    fn empty_catalog() -> CatalogSnapshot {
        CatalogSnapshot::new(Vec::new()).unwrap()
    }

    #[test]
    fn suggestions_sort_most_urgent_first() {
        let analysis = analysis_with(
            vec![
                issue(IssueKind::Overspending, Severity::Info),
                issue(IssueKind::SocketMismatch, Severity::Critical),
                issue(IssueKind::MissingCategory, Severity::Info),
                issue(IssueKind::Bottleneck, Severity::Warning),
            ],
            40,
        );
        let result = suggest(&empty_catalog(), &analysis, &ParsedBuild::default());
        let priorities: Vec<Priority> = result.suggestions.iter().map(|s| s.priority).collect();
        assert_eq!(
            priorities,
            vec![Priority::Critical, Priority::High, Priority::Medium, Priority::Low]
        );
    }

    #[test]
    fn bottleneck_maps_to_high_despite_warning_severity() {
        let analysis = analysis_with(vec![issue(IssueKind::Bottleneck, Severity::Info)], 95);
        let result = suggest(&empty_catalog(), &analysis, &ParsedBuild::default());
        // Even an info-level GPU bottleneck is worth a high-priority look.
        assert_eq!(result.suggestions[0].priority, Priority::High);
        assert_eq!(result.suggestions[0].action, SuggestedAction::Upgrade);
    }

    #[test]
    fn top_fixes_are_first_three_urgent() {
        let analysis = analysis_with(
            vec![
                issue(IssueKind::SocketMismatch, Severity::Critical),
                issue(IssueKind::PsuInsufficient, Severity::Critical),
                issue(IssueKind::RamTypeMismatch, Severity::Critical),
                issue(IssueKind::Bottleneck, Severity::Warning),
                issue(IssueKind::Overspending, Severity::Info),
            ],
            0,
        );
        let result = suggest(&empty_catalog(), &analysis, &ParsedBuild::default());
        assert_eq!(result.top_fixes.len(), 3);
        assert!(result.top_fixes.iter().all(|s| s.priority.is_urgent()));
    }

    #[test]
    fn savings_sum_treats_missing_as_zero() {
        let mut with_savings = issue(IssueKind::Overspending, Severity::Info);
        with_savings.savings = Some(7_000);
        let analysis = analysis_with(
            vec![with_savings, issue(IssueKind::MissingCategory, Severity::Info)],
            90,
        );
        let result = suggest(&empty_catalog(), &analysis, &ParsedBuild::default());
        assert_eq!(result.total_savings, 7_000);
    }

    #[test]
    fn summary_lists_resolved_parts_and_total() {
        let item = CatalogItem {
            id: "c".into(),
            name: "Ryzen 5 7600".into(),
            normalized_name: "ryzen 5 7600".into(),
            category: Category::Cpu,
            brand: "AMD".into(),
            price: 18_000,
            retailer: "shop".into(),
            in_stock: true,
            specs: Specs::default(),
            tier: None,
            use_cases: Vec::new(),
            embedding: None,
        };
        let build = ParsedBuild {
            components: vec![DetectedComponent {
                category: Category::Cpu,
                raw_text: "ryzen".into(),
                item: Some(item),
                confidence: 0.9,
                price: None,
                source_url: None,
            }],
            unmatched: Vec::new(),
        };
        let analysis = analysis_with(Vec::new(), 100);
        let result = suggest(&empty_catalog(), &analysis, &build);
        assert!(result.summary.contains("CPU: Ryzen 5 7600"));
        assert!(result.summary.contains("50000"));
        assert_eq!(result.grade, Grade::S);
    }
}
