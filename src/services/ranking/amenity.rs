/// Amenity Scorer
///
/// Counts how many of the user's required amenities a candidate satisfies.
/// Range: [0, required amenity count]. Names outside the amenity vocabulary
/// never match.
use crate::models::Listing;
use tracing::debug;

pub fn amenity_score(listing: &Listing, required_amenities: &[String]) -> u32 {
    required_amenities
        .iter()
        .filter(|name| match listing.amenities.get(name) {
            Some(present) => present,
            None => {
                debug!(amenity = %name, "Required amenity outside vocabulary");
                false
            }
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AmenityFlags;

    fn listing(amenities: &str) -> Listing {
        Listing {
            id: "hst1".to_string(),
            price: 6000.0,
            capacity: 2.0,
            rating: 4.0,
            vacancies: 1.0,
            amenities: AmenityFlags::from_text(amenities),
        }
    }

    fn required(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_counts_matched_amenities() {
        let listing = listing("wifi, food");

        assert_eq!(amenity_score(&listing, &required(&["wifi", "food"])), 2);
        assert_eq!(amenity_score(&listing, &required(&["ac"])), 0);
        assert_eq!(amenity_score(&listing, &required(&["wifi", "ac"])), 1);
    }

    #[test]
    fn test_no_requirements_scores_zero() {
        assert_eq!(amenity_score(&listing("wifi, food, cctv"), &[]), 0);
    }

    #[test]
    fn test_unknown_amenity_never_matches() {
        assert_eq!(amenity_score(&listing("wifi"), &required(&["pool"])), 0);
    }
}
