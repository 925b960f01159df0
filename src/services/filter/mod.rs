/// Candidate Filter
///
/// Applies the hard budget constraint before any scoring runs. The output
/// order preserves input order; downstream tie-breaking relies on it.
use crate::models::Listing;
use tracing::debug;

/// Keep listings with `price <= max_budget`.
pub fn budget_candidates(listings: &[Listing], max_budget: f32) -> Vec<Listing> {
    let candidates: Vec<Listing> = listings
        .iter()
        .filter(|listing| listing.price <= max_budget)
        .cloned()
        .collect();

    debug!(
        total = listings.len(),
        candidates = candidates.len(),
        max_budget = max_budget,
        "Budget filter applied"
    );

    candidates
}
