/// Content Scorer
///
/// Cosine similarity between each candidate row and the taste profile.
/// A zero-norm operand (all-zero candidate or profile) scores 0.0 instead of
/// propagating NaN into the blender.
use super::{RankingError, Result};
use ndarray::{Array1, Array2};

/// One similarity scalar per candidate row, in row order.
pub fn content_scores(matrix: &Array2<f32>, profile: &Array1<f32>) -> Result<Array1<f32>> {
    if matrix.ncols() != profile.len() {
        return Err(RankingError::InvalidInput(format!(
            "Profile dimension {} does not match feature dimension {}",
            profile.len(),
            matrix.ncols()
        )));
    }

    let profile_norm = profile.dot(profile).sqrt();

    let scores = matrix
        .rows()
        .into_iter()
        .map(|row| {
            let row_norm = row.dot(&row).sqrt();
            if row_norm == 0.0 || profile_norm == 0.0 {
                0.0
            } else {
                row.dot(profile) / (row_norm * profile_norm)
            }
        })
        .collect();

    Ok(Array1::from_vec(scores))
}
