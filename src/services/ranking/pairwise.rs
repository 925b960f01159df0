/// Pairwise Learned Ranker
///
/// Linear pairwise ranker (logistic pairwise loss) trained from scratch on
/// every ranking call, with the whole candidate pool as one ranking group.
/// Candidates without an interaction are implicit negatives.
///
/// Retraining per request only holds up at demo-scale pools; decoupling
/// training from scoring changes the engine contract and lives outside it.
use super::{RankingError, Result};
use crate::config::TrainerConfig;
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

pub struct PairwiseRanker {
    epochs: usize,
    learning_rate: f32,
    seed: u64,
}

impl PairwiseRanker {
    pub fn new(config: &TrainerConfig) -> Self {
        Self {
            epochs: config.epochs,
            learning_rate: config.learning_rate,
            seed: config.seed,
        }
    }

    /// Train on (features, liked-label) rows and score every row.
    ///
    /// The seed pins weight initialization and pair shuffling, so identical
    /// inputs always produce identical scores. Scores are unnormalized and
    /// unbounded; the blender normalizes per batch.
    ///
    /// Errors with `TooFewSamples` or `DegenerateLabels` when no ranking
    /// pair exists; callers recover with a fallback score, never abort.
    pub fn fit_predict(&self, features: &Array2<f32>, labels: &[f32]) -> Result<Array1<f32>> {
        let rows = features.nrows();
        if rows != labels.len() {
            return Err(RankingError::InvalidInput(format!(
                "Label count {} does not match row count {}",
                labels.len(),
                rows
            )));
        }
        if rows < 2 {
            return Err(RankingError::TooFewSamples(rows));
        }

        let positives: Vec<usize> = (0..rows).filter(|&i| labels[i] > 0.5).collect();
        let negatives: Vec<usize> = (0..rows).filter(|&i| labels[i] <= 0.5).collect();
        if positives.is_empty() || negatives.is_empty() {
            return Err(RankingError::DegenerateLabels {
                positives: positives.len(),
                negatives: negatives.len(),
            });
        }

        // Per-column min-max scaling keeps the gradient steps comparable
        // across features with wildly different ranges (price vs. flags).
        let scaled = min_max_scale(features);

        let mut rng = StdRng::seed_from_u64(self.seed);
        let dim = scaled.ncols();
        let mut weights = Array1::from_shape_fn(dim, |_| rng.gen_range(-0.01..0.01f32));

        let mut pairs: Vec<(usize, usize)> = positives
            .iter()
            .flat_map(|&i| negatives.iter().map(move |&j| (i, j)))
            .collect();

        for _ in 0..self.epochs {
            pairs.shuffle(&mut rng);
            for &(liked, other) in &pairs {
                let diff = &scaled.row(liked) - &scaled.row(other);
                let margin = weights.dot(&diff);
                // gradient of ln(1 + exp(-margin)) pushes the liked row above
                let step = self.learning_rate / (1.0 + margin.exp());
                weights.scaled_add(step, &diff);
            }
        }

        debug!(
            rows = rows,
            positives = positives.len(),
            pairs = pairs.len(),
            epochs = self.epochs,
            "Pairwise ranker trained"
        );

        Ok(scaled.dot(&weights))
    }
}

/// Scale each column to [0, 1]; constant columns collapse to 0.
fn min_max_scale(features: &Array2<f32>) -> Array2<f32> {
    let mut scaled = features.to_owned();
    for mut column in scaled.axis_iter_mut(Axis(1)) {
        let min = column.fold(f32::INFINITY, |acc, &v| acc.min(v));
        let max = column.fold(f32::NEG_INFINITY, |acc, &v| acc.max(v));
        if max - min < f32::EPSILON {
            column.fill(0.0);
        } else {
            column.mapv_inplace(|v| (v - min) / (max - min));
        }
    }
    scaled
}
