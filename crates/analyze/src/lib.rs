mod analyzer;
mod detect;
mod rules;
mod types;

pub use analyzer::{analyze, has_issue};
pub use detect::{board_ddr_gen, board_platform, cpu_vendor, ram_ddr_gen, DdrGen, Vendor};
pub use types::{AnalysisIssue, BuildAnalysis, IssueKind, Severity};
