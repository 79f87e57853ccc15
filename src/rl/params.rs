//! Q-learning hyperparameters.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Validated solver parameters.
///
/// Fields are only reachable through [`QParams::new`], [`Default`], or
/// deserialization, all of which validate. Omitted fields in serialized form
/// fall back to the defaults.
///
/// # Examples
///
/// ```
/// use q_routing::rl::QParams;
///
/// let p = QParams::default();
/// assert_eq!(p.episodes(), 200);
/// assert_eq!(p.seed(), "12345");
///
/// assert!(QParams::new(10, 0.0, 0.9, 0.1, 5, 100, "s").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QParamsSpec", rename_all = "camelCase")]
pub struct QParams {
    episodes: usize,
    alpha: f64,
    gamma: f64,
    epsilon: f64,
    bucket_size: usize,
    max_steps: usize,
    seed: String,
}

#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct QParamsSpec {
    episodes: usize,
    alpha: f64,
    gamma: f64,
    epsilon: f64,
    bucket_size: usize,
    max_steps: usize,
    seed: String,
}

impl Default for QParamsSpec {
    fn default() -> Self {
        let p = QParams::default();
        Self {
            episodes: p.episodes,
            alpha: p.alpha,
            gamma: p.gamma,
            epsilon: p.epsilon,
            bucket_size: p.bucket_size,
            max_steps: p.max_steps,
            seed: p.seed,
        }
    }
}

impl TryFrom<QParamsSpec> for QParams {
    type Error = ValidationError;

    fn try_from(s: QParamsSpec) -> Result<Self, Self::Error> {
        Self::new(
            s.episodes,
            s.alpha,
            s.gamma,
            s.epsilon,
            s.bucket_size,
            s.max_steps,
            s.seed,
        )
    }
}

impl Default for QParams {
    fn default() -> Self {
        Self {
            episodes: 200,
            alpha: 0.3,
            gamma: 0.9,
            epsilon: 0.1,
            bucket_size: 5,
            max_steps: 5_000,
            seed: "12345".to_string(),
        }
    }
}

impl QParams {
    /// Creates a parameter set.
    ///
    /// Requires `alpha` in (0, 1], `gamma` and `epsilon` in [0, 1], at least
    /// one episode, step, and bucket unit, and a non-blank seed.
    pub fn new(
        episodes: usize,
        alpha: f64,
        gamma: f64,
        epsilon: f64,
        bucket_size: usize,
        max_steps: usize,
        seed: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let seed = seed.into();
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(ValidationError::LearningRate(alpha));
        }
        if !(0.0..=1.0).contains(&gamma) {
            return Err(ValidationError::DiscountFactor(gamma));
        }
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(ValidationError::ExplorationRate(epsilon));
        }
        if episodes < 1 {
            return Err(ValidationError::Episodes);
        }
        if bucket_size < 1 {
            return Err(ValidationError::BucketSize);
        }
        if max_steps < 1 {
            return Err(ValidationError::MaxSteps);
        }
        if seed.trim().is_empty() {
            return Err(ValidationError::BlankSeed);
        }
        Ok(Self {
            episodes,
            alpha,
            gamma,
            epsilon,
            bucket_size,
            max_steps,
            seed,
        })
    }

    /// Number of training episodes.
    pub fn episodes(&self) -> usize {
        self.episodes
    }

    /// Learning rate.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Discount factor.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Exploration rate.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Configured state-bucket size.
    pub fn bucket_size(&self) -> usize {
        self.bucket_size
    }

    /// Bucket size clamped to at least 1.
    pub fn effective_bucket_size(&self) -> usize {
        self.bucket_size.max(1)
    }

    /// Step cap per episode.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Seed string for the random stream.
    pub fn seed(&self) -> &str {
        &self.seed
    }
}
