use rig_analyze::{BuildAnalysis, Severity};
use rig_catalog::CatalogItem;
use rig_extract::ParsedBuild;
use rig_roast::RoastResult;

pub fn render_ranking(query: &str, ranked: &[CatalogItem]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Results for \"{query}\"\n\n"));
    if ranked.is_empty() {
        out.push_str("  (nothing matched)\n");
        return out;
    }
    for (i, item) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. [{}] {} — {} ({})\n",
            i + 1,
            item.category.label(),
            item.name,
            item.price,
            item.retailer
        ));
    }
    out
}

pub fn render_build(build: &ParsedBuild) -> String {
    let mut out = String::new();
    out.push_str(&format!("Detected {} component(s)\n\n", build.components.len()));
    for component in &build.components {
        match &component.item {
            Some(item) => out.push_str(&format!(
                "  {} -> {} ({} @ {:.0}% confidence)\n",
                component.category.label(),
                item.name,
                item.price,
                component.confidence * 100.0
            )),
            None => out.push_str(&format!(
                "  {} -> unresolved \"{}\"{}\n",
                component.category.label(),
                component.raw_text,
                component
                    .price
                    .map(|p| format!(" (listed at {p})"))
                    .unwrap_or_default()
            )),
        }
    }
    if !build.unmatched.is_empty() {
        out.push_str("\nUnmatched:\n");
        for fragment in &build.unmatched {
            out.push_str(&format!("  - {fragment}\n"));
        }
    }
    out
}

pub fn render_analysis(analysis: &BuildAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Score {}/100, total {}\n",
        analysis.score, analysis.total_price
    ));
    if !analysis.missing.is_empty() {
        let labels: Vec<&str> = analysis.missing.iter().map(|c| c.label()).collect();
        out.push_str(&format!("Missing: {}\n", labels.join(", ")));
    }
    if analysis.issues.is_empty() {
        out.push_str("No issues found.\n");
        return out;
    }
    out.push('\n');
    for issue in &analysis.issues {
        out.push_str(&format!("{} {}\n", severity_tag(issue.severity), issue.title));
        out.push_str(&format!("    {}\n", issue.description));
    }
    out
}

pub fn render_roast(analysis: &BuildAnalysis, roast: &RoastResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Grade {}  (score {}/100, total {})\n",
        roast.grade, roast.score, analysis.total_price
    ));
    out.push_str(&format!("{}\n\n", roast.summary));

    if analysis.issues.is_empty() {
        out.push_str("No issues found. Ship it.\n");
        return out;
    }

    for issue in &analysis.issues {
        out.push_str(&format!("{} {}\n", severity_tag(issue.severity), issue.title));
        out.push_str(&format!("    {}\n", issue.description));
        if let Some(alt) = &issue.alternative {
            out.push_str(&format!("    try: {} ({})\n", alt.name, alt.price));
        }
    }

    if !roast.top_fixes.is_empty() {
        out.push_str("\nFix first:\n");
        for (i, fix) in roast.top_fixes.iter().enumerate() {
            out.push_str(&format!("  {}. {} — {}\n", i + 1, fix.reason, fix.explanation));
        }
    }
    if roast.total_savings > 0 {
        out.push_str(&format!("\nPotential savings: {}\n", roast.total_savings));
    }
    out
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "[CRIT]",
        Severity::Warning => "[WARN]",
        Severity::Info => "[info]",
    }
}
