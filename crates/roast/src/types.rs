use rig_catalog::CatalogItem;
use serde::{Deserialize, Serialize};

/// What to do about an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestedAction {
    Replace,
    Add,
    Remove,
    Upgrade,
    Downgrade,
}

/// Fix urgency. Declared most-urgent-first so the derived `Ord` sorts
/// critical fixes to the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn is_urgent(self) -> bool {
        matches!(self, Priority::Critical | Priority::High)
    }
}

/// Letter grade for the whole build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Grade thresholds over the 0-100 analysis score.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            95.. => Grade::S,
            85..=94 => Grade::A,
            70..=84 => Grade::B,
            55..=69 => Grade::C,
            40..=54 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        })
    }
}

/// One actionable fix derived from an analysis issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoastSuggestion {
    pub action: SuggestedAction,
    pub priority: Priority,

    /// Why this fix exists (the issue's title)
    pub reason: String,

    /// What to actually do
    pub explanation: String,

    /// Concrete catalog item to buy instead/additionally
    pub suggested: Option<CatalogItem>,

    pub savings: Option<u32>,
}

/// The full verdict handed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoastResult {
    pub grade: Grade,
    pub score: u32,

    /// All suggestions, most urgent first
    pub suggestions: Vec<RoastSuggestion>,

    /// The first three critical-or-high fixes
    pub top_fixes: Vec<RoastSuggestion>,

    /// Sum of every suggestion's savings
    pub total_savings: u32,

    /// One-line human description of the build
    pub summary: String,
}
