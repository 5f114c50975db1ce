//! Integration tests for the vectorization layer.
//!
//! These tests run both vector streams over a small but realistic dataset
//! and verify the joined output shape end to end.

use data_loader::{Genre, Movie, Rating, TagRecord};
use dataset::{Catalog, Dataset};
use vectorizer::{
    ContentVectorType, GENRE_DIMENSIONS, UserVectorType, VectorizeConfig, Vectorizer,
};

fn create_test_data() -> (Dataset<Rating>, Dataset<Movie>, Dataset<TagRecord>) {
    let ratings = Dataset::from_records(vec![
        Rating {
            user_id: 1,
            movie_id: 1,
            rating: 5.0,
            timestamp: 978300760,
        },
        Rating {
            user_id: 1,
            movie_id: 2,
            rating: 3.0,
            timestamp: 978300761,
        },
        Rating {
            user_id: 2,
            movie_id: 1,
            rating: 2.0,
            timestamp: 978300762,
        },
        Rating {
            user_id: 2,
            movie_id: 3,
            rating: 4.0,
            timestamp: 978300763,
        },
    ]);

    let movies = Dataset::from_records(vec![
        Movie {
            id: 1,
            title: "High Rated Action (2000)".to_string(),
            year: Some(2000),
            genres: vec![Genre::Action, Genre::Adventure],
        },
        Movie {
            id: 2,
            title: "Quiet Drama (1995)".to_string(),
            year: Some(1995),
            genres: vec![Genre::Drama],
        },
        Movie {
            id: 3,
            title: "Untagged Western (1970)".to_string(),
            year: Some(1970),
            genres: vec![Genre::Western],
        },
    ]);

    let tags = Dataset::from_records(vec![
        TagRecord {
            movie_id: 1,
            tag: "explosions".to_string(),
        },
        TagRecord {
            movie_id: 1,
            tag: "classic".to_string(),
        },
        TagRecord {
            movie_id: 2,
            tag: "classic".to_string(),
        },
        TagRecord {
            movie_id: 2,
            tag: "slow burn".to_string(),
        },
        // movie 3 has content but no tags
    ]);

    (ratings, movies, tags)
}

#[test]
fn test_user_and_content_streams_are_independent() {
    let (ratings, movies, tags) = create_test_data();

    let mut vectorizer = Vectorizer::new(
        ratings,
        movies,
        UserVectorType::RatingsToInteract,
        ContentVectorType::Tags,
        Catalog::new(),
        VectorizeConfig {
            tag_source: Some(tags),
            vocabulary_size: 3,
        },
    );

    let signals: Vec<f32> = vectorizer
        .user_vectors()
        .expect("user vectors requested")
        .map(|v| v.signal)
        .collect();
    // Rating 3 maps to +1, below 3 to -1
    assert_eq!(signals, vec![1.0, 1.0, -1.0, 1.0]);

    let content: Vec<_> = vectorizer
        .content_vectors()
        .expect("content vectors requested")
        .collect();
    assert_eq!(content.len(), 3);
}

#[test]
fn test_tags_output_covers_every_content_item() {
    let (ratings, movies, tags) = create_test_data();

    let mut vectorizer = Vectorizer::new(
        ratings,
        movies,
        UserVectorType::None,
        ContentVectorType::Tags,
        Catalog::new(),
        VectorizeConfig {
            tag_source: Some(tags),
            vocabulary_size: 3,
        },
    );

    let content: Vec<_> = vectorizer.content_vectors().unwrap().collect();

    // Left outer join: all three movies present exactly once, in content order
    let ids: Vec<u32> = content.iter().map(|v| v.movie_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    // Constant vector length 18+K across the invocation
    for vector in &content {
        assert_eq!(vector.features.len(), GENRE_DIMENSIONS + 3);
    }

    // Vocabulary order: "classic" twice, then "explosions" and "slow burn"
    // once each in encounter order
    let movie1 = &content[0].features[GENRE_DIMENSIONS..];
    assert_eq!(movie1, [1.0, 1.0, 0.0]);

    let movie2 = &content[1].features[GENRE_DIMENSIONS..];
    assert_eq!(movie2, [1.0, 0.0, 1.0]);

    // Movie 3 has no tag records: zero-filled segment, genre segment intact
    let movie3 = &content[2];
    assert_eq!(movie3.features[17], 1.0); // western
    assert!(movie3.features[GENRE_DIMENSIONS..].iter().all(|&v| v == 0.0));
}

#[test]
fn test_tag_vectorization_is_deterministic() {
    let run = || {
        let (ratings, movies, tags) = create_test_data();
        let mut vectorizer = Vectorizer::new(
            ratings,
            movies,
            UserVectorType::None,
            ContentVectorType::Tags,
            Catalog::new(),
            VectorizeConfig {
                tag_source: Some(tags),
                vocabulary_size: 3,
            },
        );
        vectorizer
            .content_vectors()
            .unwrap()
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_genre_only_vectors() {
    let (ratings, movies, _tags) = create_test_data();

    let mut vectorizer = Vectorizer::new(
        ratings,
        movies,
        UserVectorType::Ratings,
        ContentVectorType::Genre,
        Catalog::new(),
        VectorizeConfig::default(),
    );

    let content: Vec<_> = vectorizer.content_vectors().unwrap().collect();
    assert_eq!(content.len(), 3);
    for vector in &content {
        assert_eq!(vector.features.len(), GENRE_DIMENSIONS);
    }
}

#[test]
fn test_missing_tag_source_is_recoverable() {
    let (ratings, movies, _tags) = create_test_data();

    let mut vectorizer = Vectorizer::new(
        ratings,
        movies,
        UserVectorType::Ratings,
        ContentVectorType::Tags,
        Catalog::new(),
        VectorizeConfig::default(),
    );

    // No tag source: content vectors unavailable, user vectors unaffected
    assert!(vectorizer.content_vectors().is_none());
    assert_eq!(vectorizer.user_vectors().unwrap().count(), 4);
}
