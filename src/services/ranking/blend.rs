/// Score Blender
///
/// Combines the component scores into one final ranking score and sorts
/// descending. The primary signal is the learned ranker's output when
/// training succeeded, otherwise the content score, each with its own
/// weight.
///
/// Component scores live on very different scales (amenity counts are small
/// integers, similarities sit in [0, 1], ranker output is unbounded), so by
/// default each component is min-max normalized over the batch before
/// weighting. The raw-scale blend is still available behind
/// `normalize_scores = false`.
use crate::config::BlendConfig;
use crate::models::{Listing, RankedListing};
use crate::utils::{extent, normalize_score};
use ndarray::Array1;
use tracing::debug;

pub fn blend_and_sort(
    candidates: Vec<Listing>,
    content_scores: &Array1<f32>,
    rank_scores: Option<&Array1<f32>>,
    amenity_scores: &[u32],
    config: &BlendConfig,
) -> Vec<RankedListing> {
    let (primary, primary_weight) = match rank_scores {
        Some(scores) => (scores, config.rank_weight),
        None => (content_scores, config.content_weight),
    };

    let primary_blended = component(primary.to_vec(), config.normalize_scores);
    let amenity_blended = component(
        amenity_scores.iter().map(|&c| c as f32).collect(),
        config.normalize_scores,
    );

    let mut ranked: Vec<RankedListing> = candidates
        .into_iter()
        .enumerate()
        .map(|(i, listing)| RankedListing {
            listing,
            content_score: content_scores[i],
            rank_score: rank_scores.map(|scores| scores[i]),
            amenity_score: amenity_scores[i],
            final_score: primary_weight * primary_blended[i]
                + config.amenity_weight * amenity_blended[i],
        })
        .collect();

    // Stable descending sort: equal final scores keep candidate input order.
    // NaN cannot occur here (zero-norm cosine is defined as 0), but an equal
    // ordering keeps the sort total regardless.
    ranked.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        ranked = ranked.len(),
        top_score = ranked.first().map(|r| r.final_score),
        "Blend complete"
    );

    ranked
}

/// A component's values, min-max normalized over the batch when enabled.
fn component(values: Vec<f32>, normalize: bool) -> Vec<f32> {
    if !normalize {
        return values;
    }
    let (min, max) = extent(values.iter().copied());
    values
        .into_iter()
        .map(|v| normalize_score(v, min, max))
        .collect()
}
