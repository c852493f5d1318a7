//! ArtCatalog Core - Portfolio and Shop Query Engine
//!
//! # Guarantees
//! 1. The catalog is loaded once and never mutated
//! 2. Queries are pure: same items + same criteria = same sequence
//! 3. Sorting is stable
//! 4. Criteria are replaced, never edited in place

pub mod error;
pub mod items;
pub mod catalog;
pub mod criteria;
pub mod rules;
pub mod engine;
pub mod hashing;
pub mod session;

pub use error::CatalogError;
pub use items::{CatalogItem, CatalogFile, ItemKind, ProjectRecord};
pub use catalog::{Catalog, Facets};
pub use criteria::{FilterCriteria, FilterEvent, Selection, SortKey};
pub use rules::FilterRule;
pub use engine::{CatalogQueryEngine, QueryResult};
pub use hashing::{canonical_json, criteria_fingerprint};
pub use session::{GallerySession, Scope};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const MIN_CATALOG_VERSION: &str = "1.0.0";

/// Filter and order `items` with the default rule set.
pub fn query(
    items: &[CatalogItem],
    criteria: &FilterCriteria,
) -> Result<Vec<CatalogItem>, CatalogError> {
    Ok(CatalogQueryEngine::new()?.query(items, criteria))
}
