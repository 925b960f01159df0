/// Synthetic listing generator for demos and tests.
///
/// Mirrors the shape of the production seed data: ids `hst{i}`, random
/// amenity flags, vacancies 0-3, prices between 2000 and 12000, capacity
/// 1-4, half-star ratings up to 5.0. Seeded so generated pools are
/// reproducible.
use crate::models::{AmenityFlags, Listing};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn generate_listings(count: usize, seed: u64) -> Vec<Listing> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| Listing {
            id: format!("hst{}", i),
            amenities: AmenityFlags {
                wifi: rng.gen_bool(0.5),
                food: rng.gen_bool(0.5),
                ac: rng.gen_bool(0.5),
                parking: rng.gen_bool(0.5),
                laundry: rng.gen_bool(0.5),
                power_backup: rng.gen_bool(0.5),
                security: rng.gen_bool(0.5),
                cctv: rng.gen_bool(0.5),
            },
            vacancies: rng.gen_range(0..=3) as f32,
            price: rng.gen_range(2000..=12000) as f32,
            capacity: rng.gen_range(1..=4) as f32,
            rating: rng.gen_range(1..=10) as f32 / 2.0,
        })
        .collect()
}
