use pg_ranking::models::AmenityFlags;
use pg_ranking::services::features::feature_matrix;
use pg_ranking::services::profile::build_profile;
use pg_ranking::{synth, Config, Interaction, Listing, RankingEngine, UserPreference};
use ndarray::Axis;
use std::collections::HashSet;

fn listing(id: &str, price: f32, rating: f32, capacity: f32, amenities: &str) -> Listing {
    Listing {
        id: id.to_string(),
        price,
        capacity,
        rating,
        vacancies: 1.0,
        amenities: AmenityFlags::from_text(amenities),
    }
}

fn preference(max_budget: f32, required: &[&str]) -> UserPreference {
    UserPreference {
        max_budget,
        required_amenities: required.iter().map(|s| s.to_string()).collect(),
    }
}

fn liked(id: &str) -> Interaction {
    Interaction {
        id: id.to_string(),
        liked: true,
    }
}

fn engine() -> RankingEngine {
    RankingEngine::new(&Config::default())
}

#[test]
fn every_recommendation_respects_the_budget() {
    let listings = synth::generate_listings(50, 7);
    let pref = preference(8000.0, &["wifi", "food"]);
    let interactions = vec![liked("hst1"), liked("hst3")];

    let response = engine().rank(&listings, &pref, &interactions).unwrap();

    assert!(!response.recommendations.is_empty());
    for rec in &response.recommendations {
        assert!(rec.listing.price <= pref.max_budget);
    }
}

#[test]
fn output_is_sorted_descending_by_final_score() {
    let listings = synth::generate_listings(50, 7);
    let pref = preference(9000.0, &["wifi"]);
    let interactions = vec![liked("hst2"), liked("hst5")];

    let response = engine().rank(&listings, &pref, &interactions).unwrap();

    for pair in response.recommendations.windows(2) {
        assert!(pair[0].final_score >= pair[1].final_score);
    }
}

#[test]
fn cold_start_profile_equals_pool_mean() {
    let listings = vec![
        listing("hst1", 4000.0, 4.0, 2.0, "wifi, food"),
        listing("hst2", 6000.0, 3.0, 3.0, "ac"),
        listing("hst3", 5000.0, 4.5, 1.0, "wifi, cctv"),
    ];
    let matrix = feature_matrix(&listings).unwrap();

    // interactions exist but none are likes
    let liked_ids: HashSet<&str> = HashSet::new();
    let (profile, cold_start) = build_profile(&listings, &matrix, &liked_ids).unwrap();

    assert!(cold_start);
    let expected = matrix.mean_axis(Axis(0)).unwrap();
    for (got, want) in profile.iter().zip(expected.iter()) {
        assert!((got - want).abs() < 1e-6);
    }
}

#[test]
fn amenity_scores_match_required_amenities() {
    let listings = vec![listing("hst1", 6000.0, 4.0, 2.0, "wifi, food")];

    let with_both = engine()
        .rank(&listings, &preference(8000.0, &["wifi", "food"]), &[])
        .unwrap();
    assert_eq!(with_both.recommendations[0].amenity_score, 2);

    let with_ac = engine()
        .rank(&listings, &preference(8000.0, &["ac"]), &[])
        .unwrap();
    assert_eq!(with_ac.recommendations[0].amenity_score, 0);
}

#[test]
fn empty_candidate_pool_returns_empty_result() {
    let listings = vec![
        listing("hst1", 9000.0, 4.0, 2.0, "wifi"),
        listing("hst2", 9500.0, 3.0, 2.0, "food"),
    ];

    let response = engine()
        .rank(&listings, &preference(5000.0, &["wifi"]), &[liked("hst1")])
        .unwrap();

    assert!(response.recommendations.is_empty());
    assert_eq!(response.stats.candidate_count, 0);
    assert_eq!(response.stats.total_listings, 2);
}

#[test]
fn budget_scenario_keeps_only_the_affordable_listing() {
    let listings = vec![
        listing("a", 6000.0, 4.0, 2.0, "wifi, food"),
        listing("b", 9000.0, 4.0, 2.0, "wifi, food"),
    ];

    let response = engine()
        .rank(&listings, &preference(8000.0, &["wifi"]), &[])
        .unwrap();

    assert_eq!(response.recommendations.len(), 1);
    assert_eq!(response.recommendations[0].listing.id, "a");
}

#[test]
fn identical_inputs_rank_identically() {
    let listings = synth::generate_listings(30, 11);
    let pref = preference(10000.0, &["wifi", "security"]);
    let interactions = vec![liked("hst0"), liked("hst4")];

    let first = engine().rank(&listings, &pref, &interactions).unwrap();
    let second = engine().rank(&listings, &pref, &interactions).unwrap();

    let first_ids: Vec<&str> = first
        .recommendations
        .iter()
        .map(|r| r.listing.id.as_str())
        .collect();
    let second_ids: Vec<&str> = second
        .recommendations
        .iter()
        .map(|r| r.listing.id.as_str())
        .collect();

    assert_eq!(first_ids, second_ids);
    for (a, b) in first
        .recommendations
        .iter()
        .zip(second.recommendations.iter())
    {
        assert_eq!(a.final_score, b.final_score);
    }
}

#[test]
fn liked_listings_rise_with_the_learned_ranker() {
    // liked listings share a clear amenity/rating pattern
    let listings = vec![
        listing("hst1", 5000.0, 4.5, 2.0, "wifi, food, ac"),
        listing("hst2", 5200.0, 2.0, 2.0, ""),
        listing("hst3", 5100.0, 4.0, 2.0, "wifi, food"),
        listing("hst4", 5300.0, 1.5, 2.0, "parking"),
    ];
    let interactions = vec![liked("hst1"), liked("hst3")];

    let response = engine()
        .rank(&listings, &preference(8000.0, &[]), &interactions)
        .unwrap();

    assert!(response.stats.used_learned_ranker);
    let top_two: HashSet<&str> = response.recommendations[..2]
        .iter()
        .map(|r| r.listing.id.as_str())
        .collect();
    assert!(top_two.contains("hst1"));
    assert!(top_two.contains("hst3"));
}
