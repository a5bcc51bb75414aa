//! In-memory catalog querying.
//!
//! A catalog is a fixed, read-only collection of records. Queries combine a
//! free-text match, categorical facets and at most one numeric range, then
//! order the survivors with a stable sort. Nothing here allocates state
//! between calls: the same query over the same store always returns the same
//! sequence.

pub mod comparator;
pub mod predicate;
pub mod query;
pub mod record;
pub mod store;

pub use comparator::{SortKey, compare, sort_records};
pub use predicate::{Facets, TextQuery, matches};
pub use query::{Partitioned, Query, partition_featured, search};
pub use record::{Bucket, NumericKey, RangeFilter, Record};
pub use store::{CatalogError, CatalogSource, JsonFileSource, RecordStore, StaticSource};
