use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub blend: BlendConfig,
    pub trainer: TrainerConfig,
}

/// Blend weights and normalization policy.
///
/// `rank_weight` applies to the learned ranker's score when training
/// succeeded; `content_weight` applies to the content score when the engine
/// runs in degraded mode. `normalize_scores = false` reproduces the legacy
/// raw-scale blend, where a small-integer amenity count dominates a [0, 1]
/// similarity.
#[derive(Debug, Clone, Deserialize)]
pub struct BlendConfig {
    pub rank_weight: f32,
    pub content_weight: f32,
    pub amenity_weight: f32,
    pub normalize_scores: bool,
}

/// Hyperparameters for the per-request pairwise ranker. The seed is fixed so
/// identical inputs rank identically across calls.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainerConfig {
    pub epochs: usize,
    pub learning_rate: f32,
    pub seed: u64,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            rank_weight: 0.7,
            content_weight: 0.6,
            amenity_weight: 0.3,
            normalize_scores: true,
        }
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            epochs: 60,
            learning_rate: 0.1,
            seed: 42,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blend: BlendConfig::default(),
            trainer: TrainerConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Config {
            blend: BlendConfig {
                rank_weight: env::var("RANK_WEIGHT")
                    .unwrap_or_else(|_| "0.7".to_string())
                    .parse()
                    .expect("RANK_WEIGHT must be a valid f32"),
                content_weight: env::var("CONTENT_WEIGHT")
                    .unwrap_or_else(|_| "0.6".to_string())
                    .parse()
                    .expect("CONTENT_WEIGHT must be a valid f32"),
                amenity_weight: env::var("AMENITY_WEIGHT")
                    .unwrap_or_else(|_| "0.3".to_string())
                    .parse()
                    .expect("AMENITY_WEIGHT must be a valid f32"),
                normalize_scores: env::var("NORMALIZE_SCORES")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .expect("NORMALIZE_SCORES must be true or false"),
            },
            trainer: TrainerConfig {
                epochs: env::var("TRAIN_EPOCHS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()
                    .expect("TRAIN_EPOCHS must be a valid usize"),
                learning_rate: env::var("TRAIN_LEARNING_RATE")
                    .unwrap_or_else(|_| "0.1".to_string())
                    .parse()
                    .expect("TRAIN_LEARNING_RATE must be a valid f32"),
                seed: env::var("TRAIN_SEED")
                    .unwrap_or_else(|_| "42".to_string())
                    .parse()
                    .expect("TRAIN_SEED must be a valid u64"),
            },
        }
    }
}
