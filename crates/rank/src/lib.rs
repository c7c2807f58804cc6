mod budget;
mod ranker;

pub use budget::{detect_budget, is_build_query, category_share};
pub use ranker::{Ranker, ALLOCATION_SLACK, MIN_SIMILARITY};
