//! # Vectorizer Crate
//!
//! This crate turns raw MovieLens records into fixed-shape numeric vectors
//! for recommendation-model training.
//!
//! ## Components
//!
//! - **recipe**: closed recipe selectors (`UserVectorType`,
//!   `ContentVectorType`) with string parsing for the CLI boundary
//! - **features**: vector records and the pure per-record mappings
//!   (rating polarity, genre multi-hot)
//! - **tags**: top-K tag vocabulary selection and tag multi-hot vectors
//! - **vectorizer**: the `Vectorizer` orchestrating both vector streams
//!
//! ## Architecture
//! The vectorizer produces two independent streams:
//! 1. User vectors: one (user, movie, signal) per interaction record
//! 2. Content vectors: one (movie, features) per content record, with a
//!    constant feature length per invocation (18, or 18+K with tags)
//!
//! ## Example Usage
//! ```ignore
//! use dataset::{Catalog, Dataset};
//! use vectorizer::{ContentVectorType, UserVectorType, VectorizeConfig, Vectorizer};
//!
//! let mut vectorizer = Vectorizer::new(
//!     Dataset::from_records(data.ratings),
//!     Dataset::from_records(data.movies),
//!     UserVectorType::Ratings,
//!     ContentVectorType::Tags,
//!     Catalog::new(),
//!     VectorizeConfig {
//!         tag_source: data.tags.map(Dataset::from_records),
//!         ..VectorizeConfig::default()
//!     },
//! );
//!
//! let user_vectors = vectorizer.user_vectors();
//! let content_vectors = vectorizer.content_vectors();
//! ```

pub mod features;
pub mod recipe;
pub mod tags;
pub mod vectorizer;

// Re-export main types
pub use features::{ContentVector, GENRE_DIMENSIONS, UserVector, genre_vector, rating_to_interaction};
pub use recipe::{ContentVectorType, UnknownRecipe, UserVectorType};
pub use tags::{DEFAULT_VOCABULARY_SIZE, TagVocabulary};
pub use vectorizer::{VectorizeConfig, Vectorizer};
