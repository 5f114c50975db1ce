//! Recipe selectors for user and content vectorization.
//!
//! The recipes form closed sets, so an unrecognized name can only occur at
//! the string boundary (CLI flags, config files) and is rejected there.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How raw interactions map to user-vector signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserVectorType {
    /// Signal = raw rating, every interaction kept
    Ratings,
    /// Signal = raw rating, interactions with rating <= 3 dropped
    PosRatings,
    /// Signal = -1 below rating 3, +1 at 3 and above
    RatingsToInteract,
    /// No user vectors
    None,
}

/// How item content maps to feature vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentVectorType {
    /// 18-position genre multi-hot vector
    Genre,
    /// Genre vector plus a top-K tag multi-hot segment
    Tags,
    /// No content vectors
    None,
}

/// A recipe name that doesn't match any known recipe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnknownRecipe {
    #[error(
        "unknown user vector type '{0}', expected one of: ratings, pos_ratings, ratings_to_interact, none"
    )]
    User(String),

    #[error("unknown content vector type '{0}', expected one of: genre, tags, none")]
    Content(String),
}

impl FromStr for UserVectorType {
    type Err = UnknownRecipe;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ratings" => Ok(UserVectorType::Ratings),
            "pos_ratings" => Ok(UserVectorType::PosRatings),
            "ratings_to_interact" => Ok(UserVectorType::RatingsToInteract),
            "none" => Ok(UserVectorType::None),
            other => Err(UnknownRecipe::User(other.to_string())),
        }
    }
}

impl fmt::Display for UserVectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UserVectorType::Ratings => "ratings",
            UserVectorType::PosRatings => "pos_ratings",
            UserVectorType::RatingsToInteract => "ratings_to_interact",
            UserVectorType::None => "none",
        };
        f.write_str(name)
    }
}

impl FromStr for ContentVectorType {
    type Err = UnknownRecipe;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "genre" => Ok(ContentVectorType::Genre),
            "tags" => Ok(ContentVectorType::Tags),
            "none" => Ok(ContentVectorType::None),
            other => Err(UnknownRecipe::Content(other.to_string())),
        }
    }
}

impl fmt::Display for ContentVectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentVectorType::Genre => "genre",
            ContentVectorType::Tags => "tags",
            ContentVectorType::None => "none",
        };
        f.write_str(name)
    }
}
