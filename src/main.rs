use anyhow::Result;
use pg_ranking::{synth, Config, Interaction, RankingEngine, UserPreference};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Demo runner: one ranking pass over a synthetic listing pool, printed as
/// JSON. Preferences and interactions are explicit locals handed to the
/// engine; the engine itself keeps no request state.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let engine = RankingEngine::new(&config);

    let listings = synth::generate_listings(50, 7);
    let preference = UserPreference {
        max_budget: 8000.0,
        required_amenities: vec!["wifi".to_string(), "food".to_string()],
    };
    let interactions = vec![
        Interaction {
            id: "hst1".to_string(),
            liked: true,
        },
        Interaction {
            id: "hst3".to_string(),
            liked: true,
        },
    ];

    let response = engine.rank(&listings, &preference, &interactions)?;

    info!(
        candidates = response.stats.candidate_count,
        recommendations = response.recommendations.len(),
        used_learned_ranker = response.stats.used_learned_ranker,
        "Demo ranking pass finished"
    );

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
