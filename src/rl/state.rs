//! State abstraction and the state-action value table.

use rustc_hash::FxHashMap;

/// A move available at a decision point.
///
/// Ordering is canonical: `ReturnToDepot` sorts before every customer, and
/// customers sort by node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Close the active route at the depot.
    ReturnToDepot,
    /// Serve the customer at this node index (1..=N).
    Visit(usize),
}

/// Bucketed decision point.
///
/// Remaining capacity and remaining customer count are divided by the
/// bucket size so that the table stays small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    /// Node the active vehicle stands at.
    pub node: usize,
    /// `max(0, remaining capacity) / bucket`.
    pub capacity_bucket: usize,
    /// `remaining unserved customers / bucket`.
    pub remaining_bucket: usize,
    /// 0-based active vehicle position.
    pub vehicle: usize,
}

impl StateKey {
    /// Builds a key from raw quantities. `bucket` must be at least 1.
    pub fn new(
        node: usize,
        remaining_capacity: i32,
        remaining_customers: usize,
        vehicle: usize,
        bucket: usize,
    ) -> Self {
        Self {
            node,
            capacity_bucket: remaining_capacity.max(0) as usize / bucket,
            remaining_bucket: remaining_customers / bucket,
            vehicle,
        }
    }
}

/// Per-state action estimates.
pub type ActionValues = FxHashMap<Action, f64>;

/// Tabular Q-function shared by all episodes of one solve call.
#[derive(Debug, Default, Clone)]
pub struct QTable {
    values: FxHashMap<StateKey, ActionValues>,
}

impl QTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state's estimates, inserting a 0.0 default for every
    /// listed action that has none yet.
    pub fn ensure(&mut self, state: StateKey, actions: &[Action]) -> &mut ActionValues {
        let entry = self.values.entry(state).or_default();
        for &action in actions {
            entry.entry(action).or_insert(0.0);
        }
        entry
    }

    /// Estimates recorded for a state, if any.
    pub fn get(&self, state: &StateKey) -> Option<&ActionValues> {
        self.values.get(state)
    }

    /// Estimate of one state-action pair (0.0 if unseen).
    pub fn value(&self, state: &StateKey, action: Action) -> f64 {
        self.values
            .get(state)
            .and_then(|v| v.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Highest recorded estimate for a state (0.0 if none).
    pub fn max_value(&self, state: &StateKey) -> f64 {
        self.values
            .get(state)
            .and_then(|v| v.values().copied().reduce(f64::max))
            .unwrap_or(0.0)
    }

    /// Stores an estimate.
    pub fn set(&mut self, state: StateKey, action: Action, value: f64) {
        self.values.entry(state).or_default().insert(action, value);
    }

    /// Number of states with at least one entry.
    pub fn num_states(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_ordering() {
        let mut actions = vec![Action::Visit(3), Action::ReturnToDepot, Action::Visit(1)];
        actions.sort();
        assert_eq!(
            actions,
            vec![Action::ReturnToDepot, Action::Visit(1), Action::Visit(3)]
        );
    }

    #[test]
    fn test_state_key_buckets() {
        let key = StateKey::new(4, 23, 12, 1, 5);
        assert_eq!(key.node, 4);
        assert_eq!(key.capacity_bucket, 4);
        assert_eq!(key.remaining_bucket, 2);
        assert_eq!(key.vehicle, 1);
    }

    #[test]
    fn test_state_key_negative_capacity_clamped() {
        let key = StateKey::new(0, -7, 3, 0, 5);
        assert_eq!(key.capacity_bucket, 0);
    }

    #[test]
    fn test_state_key_value_equality() {
        // Different raw capacities falling in the same bucket share a key
        assert_eq!(StateKey::new(2, 20, 9, 0, 5), StateKey::new(2, 24, 5, 0, 5));
        assert_ne!(StateKey::new(2, 20, 9, 0, 5), StateKey::new(2, 25, 9, 0, 5));
    }

    #[test]
    fn test_ensure_inserts_defaults_once() {
        let mut q = QTable::new();
        let s = StateKey::new(0, 10, 2, 0, 1);
        q.set(s, Action::Visit(1), -3.0);
        let values = q.ensure(s, &[Action::Visit(1), Action::Visit(2)]);
        assert_eq!(values[&Action::Visit(1)], -3.0);
        assert_eq!(values[&Action::Visit(2)], 0.0);
        assert_eq!(q.num_states(), 1);
    }

    #[test]
    fn test_max_value() {
        let mut q = QTable::new();
        let s = StateKey::new(1, 10, 2, 0, 1);
        assert_eq!(q.max_value(&s), 0.0);
        q.set(s, Action::Visit(2), -5.0);
        q.set(s, Action::ReturnToDepot, -2.0);
        assert_eq!(q.max_value(&s), -2.0);
        assert_eq!(q.value(&s, Action::Visit(2)), -5.0);
        assert_eq!(q.value(&s, Action::Visit(9)), 0.0);
    }
}
