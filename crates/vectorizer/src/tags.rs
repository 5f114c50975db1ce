//! Tag vocabulary selection and tag-vector construction.

use std::collections::HashMap;

/// Default size of the tag vocabulary.
pub const DEFAULT_VOCABULARY_SIZE: usize = 300;

/// The fixed, ordered vocabulary of the most frequent tags.
///
/// Vocabulary index is feature position: the vocabulary is computed once per
/// invocation and reused for every item's tag segment.
#[derive(Debug, Clone)]
pub struct TagVocabulary {
    tags: Vec<String>,
    positions: HashMap<String, usize>,
}

impl TagVocabulary {
    /// Select the top-k tags from (tag, frequency) pairs.
    ///
    /// The sort is stable and descending on frequency, so equal-frequency
    /// tags keep their input order. With frequencies coming from
    /// `Dataset::group_count` that is first-encounter order, making the
    /// selection deterministic for a fixed input.
    pub fn from_frequencies(mut frequencies: Vec<(String, u64)>, k: usize) -> Self {
        frequencies.sort_by(|a, b| b.1.cmp(&a.1));
        frequencies.truncate(k);

        let tags: Vec<String> = frequencies.into_iter().map(|(tag, _)| tag).collect();
        let positions = tags
            .iter()
            .enumerate()
            .map(|(position, tag)| (tag.clone(), position))
            .collect();

        Self { tags, positions }
    }

    /// Number of feature positions in the tag segment.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The vocabulary tags in feature order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Feature position of a tag, if it made the vocabulary.
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.positions.get(tag).copied()
    }

    /// Multi-hot vector over the vocabulary for one item's tags.
    ///
    /// A position is 1.0 iff the vocabulary tag appears at least once.
    /// Out-of-vocabulary tags are ignored; no tags in the vocabulary yields
    /// an all-zero vector.
    pub fn vector(&self, item_tags: &[String]) -> Vec<f32> {
        let mut vector = vec![0.0; self.tags.len()];
        for tag in item_tags {
            if let Some(position) = self.position(tag) {
                vector[position] = 1.0;
            }
        }
        vector
    }

    /// The zero-filled segment for items with no tag data.
    pub fn zero_vector(&self) -> Vec<f32> {
        vec![0.0; self.tags.len()]
    }
}
