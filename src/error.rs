//! Validation errors for instances and solver parameters.

use thiserror::Error;

/// Reasons an [`Instance`](crate::models::Instance) or
/// [`QParams`](crate::rl::QParams) is rejected before solving.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The instance identifier is empty or whitespace.
    #[error("instance id must not be blank")]
    EmptyId,

    /// The instance defines no customers.
    #[error("instance must define at least one customer")]
    NoCustomers,

    /// The vehicle list is empty.
    #[error("vehicle list must not be empty")]
    NoVehicles,

    /// A vehicle has zero or negative capacity.
    #[error("vehicle {vehicle} capacity must be positive, got {capacity}")]
    NonPositiveCapacity { vehicle: usize, capacity: i32 },

    /// A customer has zero or negative demand.
    #[error("customer {customer} demand must be positive, got {demand}")]
    NonPositiveDemand { customer: usize, demand: i32 },

    /// A depot or customer coordinate is NaN or infinite.
    #[error("location {id} has a non-finite coordinate")]
    NonFiniteCoordinate { id: usize },

    #[error("alpha must be in (0, 1], got {0}")]
    LearningRate(f64),

    #[error("gamma must be in [0, 1], got {0}")]
    DiscountFactor(f64),

    #[error("epsilon must be in [0, 1], got {0}")]
    ExplorationRate(f64),

    #[error("episodes must be at least 1")]
    Episodes,

    #[error("bucket size must be at least 1")]
    BucketSize,

    #[error("max steps must be at least 1")]
    MaxSteps,

    #[error("seed must not be blank")]
    BlankSeed,
}

/// Failure of the JSON solve entry point.
#[cfg(feature = "json")]
#[derive(Error, Debug)]
pub enum SolveError {
    /// The request or response could not be (de)serialized, including a
    /// request whose instance or parameters fail validation.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
