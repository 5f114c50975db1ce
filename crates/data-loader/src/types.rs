//! Core domain types for the MovieLens dataset.
//!
//! This module defines the record types the vectorization layer consumes:
//! ratings, movie content, and free-text tags.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user IDs with movie IDs

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

// =============================================================================
// Rating Type
// =============================================================================

/// A single rating a user gave a movie.
///
/// Ratings run 1.0-5.0 in MovieLens 1M and 0.5-5.0 (half-star steps) in the
/// 10M dataset. The timestamp is carried through from the raw file; the
/// vectorization layer ignores it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: f32,
    /// Unix timestamp when the rating was made
    pub timestamp: i64,
}

// =============================================================================
// Movie-related Types
// =============================================================================

/// A movie and its content attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Year extracted from the title (e.g., "Toy Story (1995)")
    pub year: Option<u16>,
    /// Genres flagged for this movie
    pub genres: Vec<Genre>,
}

impl Movie {
    /// Whether this movie carries the given genre flag.
    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }
}

/// The 18 MovieLens genres.
///
/// Variant order is the canonical feature order: a genre's position in
/// [`Genre::ALL`] is its position in every genre feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Children,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Fantasy,
    FilmNoir,
    Horror,
    Musical,
    Mystery,
    Romance,
    SciFi,
    Thriller,
    War,
    Western,
}

impl Genre {
    /// Every genre in canonical feature order.
    pub const ALL: [Genre; 18] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Children,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Fantasy,
        Genre::FilmNoir,
        Genre::Horror,
        Genre::Musical,
        Genre::Mystery,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::War,
        Genre::Western,
    ];
}

// =============================================================================
// Tag Type
// =============================================================================

/// A free-text tag a user applied to a movie.
///
/// Zero or more per movie. Only the movie/tag pair matters downstream, so
/// the tagging user and timestamp are dropped at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub movie_id: MovieId,
    pub tag: String,
}
