//! # q-routing
//!
//! Capacitated vehicle routing (CVRP) solved with a tabular Q-learning
//! construction heuristic. Each episode builds a full set of depot-to-depot
//! routes by epsilon-greedy moves over a bucketed state space; the best
//! feasible episode (or, failing that, the best attempt) is reported.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Depot, Customer, Vehicle, Instance, RoutePlan, SolveResult)
//! - [`distance`] — Euclidean distance matrix
//! - [`random`] — String-seeded deterministic random stream
//! - [`rl`] — Q-table, epsilon-greedy policy, episode simulator, and trainer
//! - [`evaluation`] — Capacity-violation accounting and result assembly
//! - [`instances`] — Seeded demo instances
//! - `json` — JSON entry point (feature `json`)
//!
//! ## Example
//!
//! ```
//! use q_routing::{instances, rl};
//!
//! let instance = instances::tiny15("demo").unwrap();
//! let params = rl::QParams::new(20, 0.3, 0.9, 0.1, 5, 5_000, "demo").unwrap();
//! let result = rl::solve(&instance, &params);
//! assert!(result.distance.is_finite());
//! assert_eq!(result.vehicles_used, result.routes.len());
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod instances;
#[cfg(feature = "json")]
pub mod json;
pub mod models;
pub mod random;
pub mod rl;

pub use error::ValidationError;
pub use models::{Instance, SolveResult};
pub use rl::{solve, QParams};
