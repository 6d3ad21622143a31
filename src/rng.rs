//! Seeded RNG construction shared by the stochastic engines.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds the engine RNG: seeded for reproducible runs, otherwise
/// seeded from entropy.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
