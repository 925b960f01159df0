/// Feature Vectorizer
///
/// Deterministic listing → feature vector mapping. `FEATURE_ORDER` is the
/// single source of truth for field order; the same layout is used for
/// filtering diagnostics, profile building, content scoring, and the
/// pairwise ranker's training and prediction matrices.
use crate::models::Listing;
use crate::services::ranking::{RankingError, Result};
use ndarray::{Array1, Array2};

/// Feature layout: the 8 amenity flags in vocabulary order, then
/// vacancies, price, capacity, rating.
pub const FEATURE_ORDER: [&str; 12] = [
    "wifi",
    "food",
    "ac",
    "parking",
    "laundry",
    "power_backup",
    "security",
    "cctv",
    "vacancies",
    "price",
    "capacity",
    "rating",
];

pub const FEATURE_DIM: usize = FEATURE_ORDER.len();

/// Extract the fixed-order feature vector for one listing.
pub fn feature_vector(listing: &Listing) -> Array1<f32> {
    let flags = listing.amenities.as_features();
    let mut values = Vec::with_capacity(FEATURE_DIM);
    values.extend_from_slice(&flags);
    values.push(listing.vacancies);
    values.push(listing.price);
    values.push(listing.capacity);
    values.push(listing.rating);
    Array1::from_vec(values)
}

/// Build the candidate feature matrix (candidate count × FEATURE_DIM).
pub fn feature_matrix(listings: &[Listing]) -> Result<Array2<f32>> {
    let flat: Vec<f32> = listings
        .iter()
        .flat_map(|listing| feature_vector(listing).to_vec())
        .collect();

    Array2::from_shape_vec((listings.len(), FEATURE_DIM), flat)
        .map_err(|e| RankingError::FeatureMatrix(format!("Failed to build feature matrix: {}", e)))
}
