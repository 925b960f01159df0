/// Ranking Module
///
/// The three scoring strategies behind the hybrid ranking and the blender
/// that combines them:
/// - **Content Layer**: cosine similarity against the user taste profile
/// - **Pairwise Layer**: per-request pairwise ranker trained on like labels
/// - **Amenity Layer**: required-amenity match counting
/// - **Blend Layer**: per-batch normalization, weighted sum, descending sort
pub mod amenity;
pub mod blend;
pub mod content;
pub mod pairwise;

pub use amenity::amenity_score;
pub use blend::blend_and_sort;
pub use content::content_scores;
pub use pairwise::PairwiseRanker;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Feature matrix construction failed: {0}")]
    FeatureMatrix(String),

    #[error("Empty candidate pool")]
    EmptyCandidatePool,

    #[error("Degenerate label distribution: {positives} positive, {negatives} negative")]
    DegenerateLabels { positives: usize, negatives: usize },

    #[error("Too few samples to train: {0}")]
    TooFewSamples(usize),
}

pub type Result<T> = std::result::Result<T, RankingError>;
