//! Epsilon-greedy action selection.

use super::state::{Action, ActionValues};
use crate::random::SeededRandom;

/// Estimates closer than this are treated as equal.
const TIE_TOLERANCE: f64 = 1e-9;

/// Acts greedily on the current estimates except with probability `epsilon`,
/// where it picks uniformly among the admissible actions.
///
/// Greedy ties are sorted into canonical [`Action`] order before a uniform
/// draw picks one, so a fixed random stream always yields the same choice.
///
/// # Examples
///
/// ```
/// use q_routing::random::SeededRandom;
/// use q_routing::rl::{Action, ActionValues, EpsilonGreedy};
///
/// let mut values = ActionValues::default();
/// values.insert(Action::Visit(1), -4.0);
/// values.insert(Action::Visit(2), -1.0);
///
/// let policy = EpsilonGreedy::new(0.0);
/// let mut rng = SeededRandom::new("doc");
/// let action = policy.select(&[Action::Visit(1), Action::Visit(2)], &values, &mut rng);
/// assert_eq!(action, Action::Visit(2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Creates a new instance of `EpsilonGreedy`.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Selects one of `actions`.
    ///
    /// Actions missing from `values` are valued at 0.0.
    ///
    /// # Panics
    ///
    /// Panics if `actions` is empty; callers end the episode before that.
    pub fn select(
        &self,
        actions: &[Action],
        values: &ActionValues,
        rng: &mut SeededRandom,
    ) -> Action {
        assert!(
            !actions.is_empty(),
            "epsilon-greedy selection requires at least one admissible action"
        );

        if rng.next_double() < self.epsilon {
            return actions[rng.next_int(actions.len())];
        }

        let mut best_value = f64::NEG_INFINITY;
        let mut best = Vec::new();
        for &action in actions {
            let value = values.get(&action).copied().unwrap_or(0.0);
            if value > best_value + TIE_TOLERANCE {
                best_value = value;
                best.clear();
                best.push(action);
            } else if (value - best_value).abs() <= TIE_TOLERANCE {
                best.push(action);
            }
        }

        if best.is_empty() {
            return actions[0];
        }
        best.sort_unstable();
        best[rng.next_int(best.len())]
    }
}
