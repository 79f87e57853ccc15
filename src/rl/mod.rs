//! Tabular Q-learning for capacitated vehicle routing.
//!
//! - [`solve`] — Train for the configured number of episodes and report the best solution
//! - [`EpisodeSimulator`] — One epsilon-greedy construction of a full solution
//! - [`EpsilonGreedy`] — Action selection with canonical tie-breaking
//! - [`QTable`] — State-action estimates keyed by bucketed [`StateKey`]s
//! - [`QParams`] — Validated hyperparameters

mod episode;
mod params;
mod policy;
mod run_log;
mod solver;
mod state;

pub use episode::{EpisodeOutcome, EpisodeSimulator, COMPLETION_BONUS};
pub use params::QParams;
pub use policy::EpsilonGreedy;
pub use run_log::RunLog;
pub use solver::{solve, QLearningTrainer};
pub use state::{Action, ActionValues, QTable, StateKey};
