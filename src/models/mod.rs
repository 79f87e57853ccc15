//! Domain model types for capacitated vehicle routing.
//!
//! Provides the value types the solver consumes (depot, customers, fleet,
//! instance) and produces (route plans, solve result).

mod customer;
mod instance;
mod route;
mod solution;
mod vehicle;

pub use customer::{Customer, Depot};
pub use instance::Instance;
pub use route::RoutePlan;
pub use solution::SolveResult;
pub use vehicle::{Vehicle, VehicleConfig};
