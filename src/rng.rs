use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Deterministic RNG factory for a given (seed, stream) pair.
///
/// Implementation detail:
/// - Derives a 64-bit seed as `seed ^ stream`.
/// - Uses PCG 64-bit generator (rand_pcg::Pcg64) for reproducible sequences.
/// - Returned RNG is deterministic and reproducible across runs when inputs are equal.
///
/// The search core never draws randomness; this exists for the
/// scrambling binaries and for tests that want reproducible walks.
#[inline]
pub fn rng_for_seed(seed: u64, stream: u64) -> impl Rng {
    Pcg64::seed_from_u64(seed ^ stream)
}
