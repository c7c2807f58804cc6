mod error;
mod lexical;
mod registry;
mod similarity;
mod snapshot;
mod specs;
mod types;
mod units;

pub use error::{CatalogError, Result};
pub use lexical::{resolve_in_category, score_fragment, MIN_MATCH_SCORE};
pub use registry::{ReferenceEntry, ReferenceRegistry};
pub use similarity::cosine_similarity;
pub use snapshot::CatalogSnapshot;
pub use specs::{
    BoardSpec, CaseSpec, CoolerSpec, CpuSpec, GpuSpec, PsuSpec, RamSpec, Specs, StorageSpec,
};
pub use types::{CatalogItem, Category, PerformanceTier};
pub use units::{parse_millimeters, parse_watts};
