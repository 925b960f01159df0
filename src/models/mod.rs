use serde::{Deserialize, Deserializer, Serialize};

/// The closed set of amenity names the engine recognizes, in canonical order.
pub const AMENITY_VOCABULARY: [&str; 8] = [
    "wifi",
    "food",
    "ac",
    "parking",
    "laundry",
    "power_backup",
    "security",
    "cctv",
];

/// Accept `true`/`false` as well as `0`/`1` (and their float forms) for
/// amenity and liked flags. Upstream records mix both encodings.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Num(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Bool(b) => b,
        Raw::Num(n) => n != 0.0,
    })
}

/// Amenity flags for a single listing.
///
/// Serialized flat into the listing record, one boolean per vocabulary entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenityFlags {
    #[serde(default, deserialize_with = "flag")]
    pub wifi: bool,
    #[serde(default, deserialize_with = "flag")]
    pub food: bool,
    #[serde(default, deserialize_with = "flag")]
    pub ac: bool,
    #[serde(default, deserialize_with = "flag")]
    pub parking: bool,
    #[serde(default, deserialize_with = "flag")]
    pub laundry: bool,
    #[serde(default, deserialize_with = "flag")]
    pub power_backup: bool,
    #[serde(default, deserialize_with = "flag")]
    pub security: bool,
    #[serde(default, deserialize_with = "flag")]
    pub cctv: bool,
}

impl AmenityFlags {
    /// Look up a flag by vocabulary name. `None` for names outside the vocabulary.
    pub fn get(&self, name: &str) -> Option<bool> {
        match name {
            "wifi" => Some(self.wifi),
            "food" => Some(self.food),
            "ac" => Some(self.ac),
            "parking" => Some(self.parking),
            "laundry" => Some(self.laundry),
            "power_backup" => Some(self.power_backup),
            "security" => Some(self.security),
            "cctv" => Some(self.cctv),
            _ => None,
        }
    }

    /// Flags as 0/1 features in vocabulary order.
    pub fn as_features(&self) -> [f32; 8] {
        let to_f = |b: bool| if b { 1.0 } else { 0.0 };
        [
            to_f(self.wifi),
            to_f(self.food),
            to_f(self.ac),
            to_f(self.parking),
            to_f(self.laundry),
            to_f(self.power_backup),
            to_f(self.security),
            to_f(self.cctv),
        ]
    }

    /// Parse a free-text amenities field (e.g. `"wifi, ac, parking"`) by
    /// case-insensitive containment against the vocabulary. Some upstream
    /// records store amenities as a single comma-joined string instead of
    /// per-amenity columns.
    pub fn from_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        Self {
            wifi: lower.contains("wifi"),
            food: lower.contains("food"),
            ac: lower.contains("ac"),
            parking: lower.contains("parking"),
            laundry: lower.contains("laundry"),
            power_backup: lower.contains("power_backup"),
            security: lower.contains("security"),
            cctv: lower.contains("cctv"),
        }
    }
}

/// A rental listing (hostel/PG). Immutable for the duration of a ranking pass.
///
/// Numeric and amenity fields default to zero when absent from the source
/// record, so a partially populated listing never fails the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    #[serde(default)]
    pub price: f32,
    #[serde(default)]
    pub capacity: f32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub vacancies: f32,
    #[serde(flatten)]
    pub amenities: AmenityFlags,
}

/// Hard constraints and explicit wants for one ranking request. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreference {
    pub max_budget: f32,
    #[serde(default)]
    pub required_amenities: Vec<String>,
}

/// One historical like/dislike event on a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    #[serde(deserialize_with = "flag")]
    pub liked: bool,
}

/// A listing with its computed scores. `rank_score` is present only when the
/// learned ranker trained successfully for this request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub content_score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_score: Option<f32>,
    pub amenity_score: u32,
    pub final_score: f32,
}

/// Diagnostic counters for one ranking pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingStats {
    pub total_listings: usize,
    pub candidate_count: usize,
    pub liked_in_pool: usize,
    pub used_learned_ranker: bool,
    pub cold_start: bool,
}

/// Ordered recommendations plus pass diagnostics. An empty `recommendations`
/// vector is the "no candidates" outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResponse {
    pub recommendations: Vec<RankedListing>,
    pub stats: RankingStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_coercion_from_ints_and_bools() {
        let listing: Listing = serde_json::from_str(
            r#"{"id": "hst1", "price": 6000, "wifi": 1, "food": true, "ac": 0, "cctv": false}"#,
        )
        .unwrap();

        assert!(listing.amenities.wifi);
        assert!(listing.amenities.food);
        assert!(!listing.amenities.ac);
        assert!(!listing.amenities.cctv);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let listing: Listing = serde_json::from_str(r#"{"id": "hst2"}"#).unwrap();

        assert_eq!(listing.price, 0.0);
        assert_eq!(listing.rating, 0.0);
        assert_eq!(listing.vacancies, 0.0);
        assert_eq!(listing.amenities, AmenityFlags::default());
    }

    #[test]
    fn test_amenities_from_text() {
        let flags = AmenityFlags::from_text("WiFi, AC, parking, food");

        assert!(flags.wifi);
        assert!(flags.ac);
        assert!(flags.parking);
        assert!(flags.food);
        assert!(!flags.laundry);
        assert!(!flags.cctv);
    }

    #[test]
    fn test_get_rejects_unknown_amenity() {
        let flags = AmenityFlags::from_text("wifi");

        assert_eq!(flags.get("wifi"), Some(true));
        assert_eq!(flags.get("pool"), None);
    }

    #[test]
    fn test_interaction_liked_from_int() {
        let interactions: Vec<Interaction> =
            serde_json::from_str(r#"[{"id": "hst1", "liked": 1}, {"id": "hst3", "liked": 0}]"#)
                .unwrap();

        assert!(interactions[0].liked);
        assert!(!interactions[1].liked);
    }

    #[test]
    fn test_ranked_listing_serializes_flat() {
        let ranked = RankedListing {
            listing: Listing {
                id: "hst1".to_string(),
                price: 6000.0,
                capacity: 2.0,
                rating: 4.0,
                vacancies: 1.0,
                amenities: AmenityFlags::from_text("wifi, food"),
            },
            content_score: 0.9,
            rank_score: None,
            amenity_score: 2,
            final_score: 1.1,
        };

        let json = serde_json::to_value(&ranked).unwrap();
        assert_eq!(json["id"], "hst1");
        assert_eq!(json["wifi"], true);
        assert_eq!(json["amenity_score"], 2);
        // rank_score is omitted when the learned ranker did not run
        assert!(json.get("rank_score").is_none());
    }
}
