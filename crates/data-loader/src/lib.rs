//! # Data Loader Crate
//!
//! This crate handles loading the MovieLens datasets into typed records.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Rating, Movie, TagRecord, Genre)
//! - **parser**: Parse .dat files into Rust structs
//! - **load**: Load a dataset directory in one call
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieLens;
//! use std::path::Path;
//!
//! // Load the entire dataset
//! let data = MovieLens::load_from_files(Path::new("data/ml-10m"))?;
//!
//! let (ratings, movies, tags) = data.counts();
//! println!("{} ratings over {} movies ({} tags)", ratings, movies, tags);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod load;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use load::MovieLens;
pub use types::{
    // Type aliases
    UserId,
    MovieId,
    // Core types
    Rating,
    Movie,
    TagRecord,
    // Enums
    Genre,
};
