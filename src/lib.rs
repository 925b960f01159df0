pub mod config;
pub mod engine;
pub mod models;
pub mod services;
pub mod synth;
pub mod utils;

pub use config::Config;
pub use engine::RankingEngine;
pub use models::{Interaction, Listing, RankedListing, RankingResponse, UserPreference};
