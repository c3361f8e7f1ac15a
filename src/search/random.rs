//! Seeded random number generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator for one run: reproducible when `seed` is set,
/// seeded from thread-local entropy otherwise.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}
