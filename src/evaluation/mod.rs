//! Solution evaluation.
//!
//! Computes capacity violations of reported routes and assembles the final
//! [`SolveResult`](crate::models::SolveResult).

mod evaluator;

pub use evaluator::{capacity_violation, Candidate, ResultAssembler};
