//! Vector records and the pure per-record mappings.

use data_loader::{Genre, Movie, MovieId, UserId};
use serde::{Deserialize, Serialize};

/// Number of positions in the genre segment of every content vector.
pub const GENRE_DIMENSIONS: usize = Genre::ALL.len();

/// One user-interaction signal: a recipe-dependent transform of a rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserVector {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub signal: f32,
}

/// One item's content features.
///
/// Layout: genre segment (length 18) first, tag segment (length K) appended
/// when the tags recipe is used. Length is constant across all items within
/// one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentVector {
    pub movie_id: MovieId,
    pub features: Vec<f32>,
}

/// Map a raw rating onto an interaction polarity.
///
/// Total over all ratings: below 3 is a negative interaction, 3 and above a
/// positive one. Note the boundary differs from the `pos_ratings` recipe,
/// which keeps strictly-greater-than-3 only.
pub fn rating_to_interaction(rating: f32) -> f32 {
    if rating < 3.0 { -1.0 } else { 1.0 }
}

/// Multi-hot genre vector in the canonical order of [`Genre::ALL`].
///
/// Each flagged genre contributes a 1.0 at its fixed position.
pub fn genre_vector(movie: &Movie) -> Vec<f32> {
    Genre::ALL
        .iter()
        .map(|&genre| if movie.has_genre(genre) { 1.0 } else { 0.0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(genres: Vec<Genre>) -> Movie {
        Movie {
            id: 1,
            title: "Test Movie (2000)".to_string(),
            year: Some(2000),
            genres,
        }
    }

    #[test]
    fn test_rating_to_interaction_boundary() {
        assert_eq!(rating_to_interaction(1.0), -1.0);
        assert_eq!(rating_to_interaction(2.5), -1.0);
        // 3 itself is positive
        assert_eq!(rating_to_interaction(3.0), 1.0);
        assert_eq!(rating_to_interaction(5.0), 1.0);
    }

    #[test]
    fn test_rating_to_interaction_is_total() {
        for rating in [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0] {
            let signal = rating_to_interaction(rating);
            assert!(signal == -1.0 || signal == 1.0);
            assert_eq!(signal == -1.0, rating < 3.0);
        }
    }

    #[test]
    fn test_genre_vector_action_only() {
        let vector = genre_vector(&movie(vec![Genre::Action]));

        assert_eq!(vector.len(), GENRE_DIMENSIONS);
        assert_eq!(vector[0], 1.0);
        assert!(vector[1..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_genre_vector_positions() {
        let vector = genre_vector(&movie(vec![Genre::Western, Genre::FilmNoir]));

        assert_eq!(vector[9], 1.0); // filmnoir
        assert_eq!(vector[17], 1.0); // western
        assert_eq!(vector.iter().filter(|&&v| v == 1.0).count(), 2);
    }

    #[test]
    fn test_genre_vector_empty() {
        let vector = genre_vector(&movie(Vec::new()));
        assert_eq!(vector, vec![0.0; GENRE_DIMENSIONS]);
    }
}
