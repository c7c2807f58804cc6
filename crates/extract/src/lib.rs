mod parser;
mod patterns;
mod types;
mod urls;

pub use parser::ComponentExtractor;
pub use patterns::{category_from_label, detect_category};
pub use types::{DetectedComponent, ParsedBuild};
