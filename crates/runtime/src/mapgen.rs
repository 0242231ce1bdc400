//! Weighted map generation used to seed a new game account.
//!
//! The client, not the program, draws the initial 400-tile map and submits
//! it with the initialize-game transaction.
use rand::{Rng, SeedableRng, rngs::StdRng};

use game_core::TILE_COUNT;

/// Weighted display-index pool for terrain variety.
const WEIGHTED_TILE_INDICES: [u8; 20] = [
    1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 4, 4, 4, 4, 5, 6, 7, 8, 8, 8,
];

/// Draw one weighted display index.
pub fn weighted_random_tile(rng: &mut impl Rng) -> u8 {
    WEIGHTED_TILE_INDICES[rng.gen_range(0..WEIGHTED_TILE_INDICES.len())]
}

/// Generate a full 400-entry display-index map.
///
/// A fixed `seed` produces a reproducible map, which the integration tests
/// rely on.
pub fn generate_map(seed: Option<u64>) -> Vec<u8> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..TILE_COUNT)
        .map(|_| weighted_random_tile(&mut rng))
        .collect()
}
