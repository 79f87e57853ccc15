//! Deterministic random number generation.

mod seeded;

pub use seeded::SeededRandom;
