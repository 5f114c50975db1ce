//! Loading a full MovieLens dataset directory.
//!
//! Steps:
//! 1. Parse ratings.dat and movies.dat (tags.dat too when present)
//! 2. Validate the rating range
//! 3. Hand back the raw record collections

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::{Movie, Rating, TagRecord};
use std::path::Path;

/// The raw record collections of one MovieLens dataset.
///
/// Tags are optional: the 1M dataset ships without a tags.dat file, and the
/// tags content recipe is the only consumer.
#[derive(Debug)]
pub struct MovieLens {
    pub ratings: Vec<Rating>,
    pub movies: Vec<Movie>,
    pub tags: Option<Vec<TagRecord>>,
}

impl MovieLens {
    /// Load a MovieLens dataset from a directory of .dat files.
    ///
    /// The three files are parsed in parallel; tags.dat is skipped when the
    /// directory doesn't have one.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        tracing::info!("loading MovieLens dataset from {}", data_dir.display());

        let ratings_path = data_dir.join("ratings.dat");
        let movies_path = data_dir.join("movies.dat");
        let tags_path = data_dir.join("tags.dat");

        // Rayon's `join` runs two closures in parallel; nesting the joins
        // gives three-way parallelism across the files.
        let ((ratings, movies), tags) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_ratings(&ratings_path),
                    || parser::parse_movies(&movies_path),
                )
            },
            || {
                if tags_path.exists() {
                    parser::parse_tags(&tags_path).map(Some)
                } else {
                    Ok(None)
                }
            },
        );

        let ratings = ratings?;
        let movies = movies?;
        let tags = tags?;

        validate_ratings(&ratings)?;

        tracing::info!(
            "loaded {} ratings, {} movies, {} tags",
            ratings.len(),
            movies.len(),
            tags.as_ref().map(|t| t.len()).unwrap_or(0)
        );

        Ok(Self {
            ratings,
            movies,
            tags,
        })
    }

    /// Record counts for reporting: (ratings, movies, tags).
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.ratings.len(),
            self.movies.len(),
            self.tags.as_ref().map(|t| t.len()).unwrap_or(0),
        )
    }
}

/// Ratings run 0.5-5.0 across the MovieLens datasets.
fn validate_ratings(ratings: &[Rating]) -> Result<()> {
    for rating in ratings {
        if rating.rating < 0.5 || rating.rating > 5.0 {
            return Err(DataLoadError::InvalidValue {
                field: "rating".to_string(),
                value: rating.rating.to_string(),
            });
        }
    }
    Ok(())
}
