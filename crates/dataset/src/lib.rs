//! # Dataset Crate
//!
//! In-process collection engine for the vectorization layer.
//!
//! ## Components
//!
//! - **dataset**: `Dataset<T>`, an immutable Arc-backed record collection
//!   with grouping/aggregation operations
//! - **catalog**: `Catalog`, a registry of datasets under logical names
//!
//! ## Example Usage
//!
//! ```ignore
//! use dataset::{Catalog, Dataset};
//!
//! let tags = Dataset::from_records(tag_records);
//!
//! let mut catalog = Catalog::new();
//! catalog.register("tags", tags.clone());
//!
//! // Frequency of each tag, keys in first-encounter order
//! let frequencies = tags.group_count(|t| t.tag.clone());
//! ```

pub mod catalog;
pub mod dataset;

// Re-export main types
pub use catalog::Catalog;
pub use dataset::Dataset;
