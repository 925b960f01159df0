/// Preference Profile Builder
///
/// Derives a single taste vector from the feature vectors of candidates the
/// user previously liked. Cold start (no like history inside the pool) falls
/// back to the element-wise mean of the whole candidate matrix, so a profile
/// with the candidate dimensionality always exists.
use crate::models::Listing;
use crate::services::ranking::{RankingError, Result};
use ndarray::{Array1, Array2, Axis};
use std::collections::HashSet;
use tracing::debug;

/// Build the user taste vector for the current candidate pool.
///
/// Returns the profile vector and whether the cold-start fallback was used.
pub fn build_profile(
    candidates: &[Listing],
    matrix: &Array2<f32>,
    liked_ids: &HashSet<&str>,
) -> Result<(Array1<f32>, bool)> {
    if candidates.is_empty() {
        return Err(RankingError::EmptyCandidatePool);
    }
    if matrix.nrows() != candidates.len() {
        return Err(RankingError::InvalidInput(format!(
            "Matrix rows {} do not match candidate count {}",
            matrix.nrows(),
            candidates.len()
        )));
    }

    let liked_rows: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, listing)| liked_ids.contains(listing.id.as_str()))
        .map(|(row, _)| row)
        .collect();

    let cold_start = liked_rows.is_empty();
    let profile = if cold_start {
        matrix.mean_axis(Axis(0))
    } else {
        matrix.select(Axis(0), &liked_rows).mean_axis(Axis(0))
    }
    .ok_or(RankingError::EmptyCandidatePool)?;

    debug!(
        liked_in_pool = liked_rows.len(),
        cold_start = cold_start,
        "Taste profile built"
    );

    Ok((profile, cold_start))
}
