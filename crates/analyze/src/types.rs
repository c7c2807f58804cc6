use rig_catalog::{CatalogItem, Category};
use serde::{Deserialize, Serialize};

/// What a rule found wrong with the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    Bottleneck,
    PsuInsufficient,
    SocketMismatch,
    RamTypeMismatch,
    PlatformMismatch,
    CoolerClearance,
    GpuClearance,
    CoolingInadequate,
    Overspending,
    MissingCategory,
}

/// Issue criticality; drives both the score penalty and the suggestion
/// priority downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    /// Points this severity costs against the 100-point score.
    #[must_use]
    pub const fn penalty(self) -> u32 {
        match self {
            Severity::Critical => 25,
            Severity::Warning => 10,
            Severity::Info => 5,
        }
    }
}

/// One finding from the compatibility/value rules. Immutable; consumed by
/// the suggestion engine and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisIssue {
    pub kind: IssueKind,
    pub severity: Severity,

    /// Short human title, e.g. "Power supply undersized"
    pub title: String,

    /// What is wrong, with the relevant numbers
    pub description: String,

    /// What to do about it
    pub suggestion: String,

    /// Concrete replacement/addition from the catalog, when one exists
    pub alternative: Option<CatalogItem>,

    /// Money saved by taking the alternative, when that is the point
    pub savings: Option<u32>,
}

impl AnalysisIssue {
    pub fn new(
        kind: IssueKind,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            title: title.into(),
            description: description.into(),
            suggestion: suggestion.into(),
            alternative: None,
            savings: None,
        }
    }

    #[must_use]
    pub fn with_alternative(mut self, alternative: CatalogItem) -> Self {
        self.alternative = Some(alternative);
        self
    }

    #[must_use]
    pub fn with_savings(mut self, savings: u32) -> Self {
        self.savings = Some(savings);
        self
    }
}

/// Deterministic verdict on one parsed build against one catalog snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildAnalysis {
    pub issues: Vec<AnalysisIssue>,

    /// Sum of resolved items' prices; unresolved categories contribute 0
    pub total_price: u32,

    /// Required categories the build lacks
    pub missing: Vec<Category>,

    /// 0-100, floored at 0
    pub score: u32,
}

impl BuildAnalysis {
    /// Apply the severity penalties to a perfect score.
    #[must_use]
    pub fn score_from_issues(issues: &[AnalysisIssue]) -> u32 {
        let penalty: u32 = issues.iter().map(|i| i.severity.penalty()).sum();
        100u32.saturating_sub(penalty)
    }
}
