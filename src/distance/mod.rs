//! Distance matrices.
//!
//! Provides a dense Euclidean distance matrix over the depot and customers.

mod matrix;

pub use matrix::DistanceMatrix;
