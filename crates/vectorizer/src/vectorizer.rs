//! The Vectorizer: recipe-driven user and content vector production.

use crate::features::{ContentVector, UserVector, genre_vector, rating_to_interaction};
use crate::recipe::{ContentVectorType, UserVectorType};
use crate::tags::{DEFAULT_VOCABULARY_SIZE, TagVocabulary};
use data_loader::{Movie, MovieId, Rating, TagRecord};
use dataset::{Catalog, Dataset};
use rayon::prelude::*;
use std::collections::HashMap;

/// Auxiliary inputs for content vectorization.
pub struct VectorizeConfig {
    /// Tag records; required by the tags recipe, unused otherwise.
    pub tag_source: Option<Dataset<TagRecord>>,
    /// Size of the tag vocabulary (the K in the tag segment length).
    pub vocabulary_size: usize,
}

impl Default for VectorizeConfig {
    fn default() -> Self {
        Self {
            tag_source: None,
            vocabulary_size: DEFAULT_VOCABULARY_SIZE,
        }
    }
}

/// Turns raw interaction and content datasets into model-ready vector
/// streams according to the recipes fixed at construction.
///
/// ## Design Note
/// Both produce operations hand back lazy iterators; the only eager work is
/// the tag-frequency aggregate and the per-item tag-vector map, which must
/// exist before the first content vector can be emitted.
pub struct Vectorizer {
    interactions: Dataset<Rating>,
    content: Dataset<Movie>,
    user_vector_type: UserVectorType,
    content_vector_type: ContentVectorType,
    catalog: Catalog,
    config: VectorizeConfig,
}

impl Vectorizer {
    /// Create a Vectorizer over the given datasets and recipes.
    ///
    /// Registers the interaction and content datasets in the catalog under
    /// the logical names "ratings" and "content".
    pub fn new(
        interactions: Dataset<Rating>,
        content: Dataset<Movie>,
        user_vector_type: UserVectorType,
        content_vector_type: ContentVectorType,
        mut catalog: Catalog,
        config: VectorizeConfig,
    ) -> Self {
        catalog.register("ratings", interactions.clone());
        catalog.register("content", content.clone());

        Self {
            interactions,
            content,
            user_vector_type,
            content_vector_type,
            catalog,
            config,
        }
    }

    pub fn user_vector_type(&self) -> UserVectorType {
        self.user_vector_type
    }

    pub fn content_vector_type(&self) -> ContentVectorType {
        self.content_vector_type
    }

    /// One signal per interaction record, lazily.
    ///
    /// Returns None when the recipe is `none`.
    pub fn user_vectors(&self) -> Option<Box<dyn Iterator<Item = UserVector> + '_>> {
        match self.user_vector_type {
            UserVectorType::Ratings => Some(Box::new(self.interactions.iter().map(|r| {
                UserVector {
                    user_id: r.user_id,
                    movie_id: r.movie_id,
                    signal: r.rating,
                }
            }))),
            UserVectorType::PosRatings => Some(Box::new(
                self.interactions
                    .iter()
                    .filter(|r| r.rating > 3.0)
                    .map(|r| UserVector {
                        user_id: r.user_id,
                        movie_id: r.movie_id,
                        signal: r.rating,
                    }),
            )),
            UserVectorType::RatingsToInteract => {
                Some(Box::new(self.interactions.iter().map(|r| UserVector {
                    user_id: r.user_id,
                    movie_id: r.movie_id,
                    signal: rating_to_interaction(r.rating),
                })))
            }
            UserVectorType::None => None,
        }
    }

    /// One feature vector per content record, lazily.
    ///
    /// Returns None when the recipe is `none`, or when the tags recipe was
    /// requested without a tag source (a warning is logged; the caller must
    /// treat None as "no vector available").
    pub fn content_vectors(&mut self) -> Option<Box<dyn Iterator<Item = ContentVector> + '_>> {
        match self.content_vector_type {
            ContentVectorType::Genre => Some(Box::new(self.content.iter().map(|movie| {
                ContentVector {
                    movie_id: movie.id,
                    features: genre_vector(movie),
                }
            }))),
            ContentVectorType::Tags => self.tag_content_vectors(),
            ContentVectorType::None => None,
        }
    }

    /// The tags recipe: genre segment left-outer-joined with a top-K tag
    /// multi-hot segment.
    fn tag_content_vectors(&mut self) -> Option<Box<dyn Iterator<Item = ContentVector> + '_>> {
        let Some(tag_source) = self.config.tag_source.clone() else {
            tracing::warn!(
                "tags content vectors requested without a tag source; \
                 supply one via VectorizeConfig::tag_source"
            );
            return None;
        };

        self.catalog.register("tags", tag_source);
        let tags = self.catalog.dataset::<TagRecord>("tags")?;

        // The vocabulary must be fixed before any per-item vector is built.
        let frequencies = tags.group_count(|t| t.tag.clone());
        let vocabulary =
            TagVocabulary::from_frequencies(frequencies, self.config.vocabulary_size);
        tracing::debug!("tag vocabulary holds {} tags", vocabulary.len());

        let grouped = tags.group_by(|t| (t.movie_id, t.tag.clone()));
        let tag_vectors: HashMap<MovieId, Vec<f32>> = grouped
            .into_par_iter()
            .map(|(movie_id, item_tags)| (movie_id, vocabulary.vector(&item_tags)))
            .collect();

        // Left outer join on the content stream: every item with content
        // data is kept, untagged items get a zero-filled tag segment.
        let tag_dimensions = vocabulary.len();
        Some(Box::new(self.content.iter().map(move |movie| {
            let mut features = genre_vector(movie);
            match tag_vectors.get(&movie.id) {
                Some(tag_vector) => features.extend_from_slice(tag_vector),
                None => features.resize(features.len() + tag_dimensions, 0.0),
            }
            ContentVector {
                movie_id: movie.id,
                features,
            }
        })))
    }
}
