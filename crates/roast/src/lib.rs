mod alternatives;
mod engine;
mod types;

pub use alternatives::{find_alternatives, AlternativeCriterion};
pub use engine::suggest;
pub use types::{Grade, Priority, RoastResult, RoastSuggestion, SuggestedAction};
