/// Ranking Engine
///
/// Wires the pipeline: budget filter → feature vectorizer → {profile builder
/// → content scorer, pairwise ranker, amenity scorer} → blender. One call is
/// a pure, synchronous function of its three inputs; nothing is cached or
/// shared between calls, so concurrent invocations need no coordination.
use crate::config::{BlendConfig, Config};
use crate::models::{Interaction, Listing, RankingResponse, RankingStats, UserPreference};
use crate::services::features::feature_matrix;
use crate::services::filter::budget_candidates;
use crate::services::profile::build_profile;
use crate::services::ranking::{
    amenity_score, blend_and_sort, content_scores, PairwiseRanker, RankingError, Result,
};
use std::collections::HashSet;
use tracing::{info, warn};

pub struct RankingEngine {
    blend: BlendConfig,
    ranker: PairwiseRanker,
}

impl RankingEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            blend: config.blend.clone(),
            ranker: PairwiseRanker::new(&config.trainer),
        }
    }

    /// Rank listings for one user request.
    ///
    /// Zero candidates after the budget filter is a valid outcome: the
    /// response carries an empty recommendation list, never an error.
    /// A ranker that cannot train (single label class, too few rows) drops
    /// the engine into degraded mode, where the content score becomes the
    /// primary blend signal and `rank_score` is omitted from the output.
    pub fn rank(
        &self,
        listings: &[Listing],
        preference: &UserPreference,
        interactions: &[Interaction],
    ) -> Result<RankingResponse> {
        let candidates = budget_candidates(listings, preference.max_budget);
        if candidates.is_empty() {
            warn!(
                total_listings = listings.len(),
                max_budget = preference.max_budget,
                "No candidates within budget"
            );
            return Ok(RankingResponse {
                recommendations: Vec::new(),
                stats: RankingStats {
                    total_listings: listings.len(),
                    ..RankingStats::default()
                },
            });
        }

        let matrix = feature_matrix(&candidates)?;

        let liked_ids: HashSet<&str> = interactions
            .iter()
            .filter(|interaction| interaction.liked)
            .map(|interaction| interaction.id.as_str())
            .collect();

        let (profile, cold_start) = build_profile(&candidates, &matrix, &liked_ids)?;
        let content = content_scores(&matrix, &profile)?;

        // Absent interactions are implicit negatives, not missing data.
        let labels: Vec<f32> = candidates
            .iter()
            .map(|c| {
                if liked_ids.contains(c.id.as_str()) {
                    1.0
                } else {
                    0.0
                }
            })
            .collect();
        let liked_in_pool = labels.iter().filter(|&&l| l > 0.5).count();

        let rank_scores = match self.ranker.fit_predict(&matrix, &labels) {
            Ok(scores) => Some(scores),
            Err(
                err @ (RankingError::DegenerateLabels { .. } | RankingError::TooFewSamples(_)),
            ) => {
                warn!(error = %err, "Ranker training skipped, using content score as primary");
                None
            }
            Err(err) => return Err(err),
        };

        let amenity: Vec<u32> = candidates
            .iter()
            .map(|c| amenity_score(c, &preference.required_amenities))
            .collect();

        let stats = RankingStats {
            total_listings: listings.len(),
            candidate_count: candidates.len(),
            liked_in_pool,
            used_learned_ranker: rank_scores.is_some(),
            cold_start,
        };

        let recommendations = blend_and_sort(
            candidates,
            &content,
            rank_scores.as_ref(),
            &amenity,
            &self.blend,
        );

        info!(
            candidates = stats.candidate_count,
            liked_in_pool = stats.liked_in_pool,
            used_learned_ranker = stats.used_learned_ranker,
            cold_start = stats.cold_start,
            "Ranking pass complete"
        );

        Ok(RankingResponse {
            recommendations,
            stats,
        })
    }
}
