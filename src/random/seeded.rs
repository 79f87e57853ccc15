//! String-seeded deterministic random stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// A deterministic random stream derived from an arbitrary string seed.
///
/// The seed bytes are folded into a 64-bit value by two independent
/// XOR-multiply accumulators, which then seeds a ChaCha8 generator. ChaCha
/// output is portable, so the same seed yields the same stream on every
/// platform.
///
/// # Examples
///
/// ```
/// use q_routing::random::SeededRandom;
///
/// let mut a = SeededRandom::new("12345");
/// let mut b = SeededRandom::new("12345");
/// assert_eq!(a.next_int(100), b.next_int(100));
/// assert_eq!(a.next_double(), b.next_double());
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Creates a stream from the given seed string.
    pub fn new(seed: &str) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(mix_seed(seed)),
        }
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn next_int(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }

    /// Uniform integer in `[origin, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `origin >= bound`.
    pub fn next_int_range(&mut self, origin: i64, bound: i64) -> i64 {
        self.rng.random_range(origin..bound)
    }

    /// Uniform double in `[0, 1)`.
    pub fn next_double(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform double in `[origin, bound)`.
    pub fn next_double_range(&mut self, origin: f64, bound: f64) -> f64 {
        origin + (bound - origin) * self.next_double()
    }

    /// Gaussian sample with the given mean and standard deviation.
    pub fn next_gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        mean + std_dev * z
    }
}

/// Folds seed bytes into a 64-bit seed.
///
/// Bytes are sign-extended before mixing.
pub(crate) fn mix_seed(seed: &str) -> u64 {
    let mut h1: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut h2: u64 = 0xC2B2_AE3D_27D4_EB4F;
    for &b in seed.as_bytes() {
        let v = b as i8 as i64 as u64;
        h1 ^= v;
        h1 = h1.wrapping_mul(0xBF58_476D_1CE4_E5B9);
        h2 ^= v << 1;
        h2 = h2.wrapping_mul(0x94D0_49BB_1331_11EB);
    }
    h1 ^ h2
}
