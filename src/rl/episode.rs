//! One simulated construction of a full routing solution.
//!
//! Each step reads the bucketed state, picks an admissible action with the
//! epsilon-greedy policy, applies it, and updates the shared table with the
//! one-step Q-learning rule:
//!
//! ```text
//! Q(s, a) += alpha * (reward + gamma * max Q(s', ·) - Q(s, a))
//! ```
//!
//! The reward is the negated travel distance of the move, plus a completion
//! bonus for serving the last customer.

use super::params::QParams;
use super::policy::EpsilonGreedy;
use super::state::{Action, QTable, StateKey};
use crate::distance::DistanceMatrix;
use crate::models::{Customer, Instance, RoutePlan, VehicleConfig};
use crate::random::SeededRandom;

const DEPOT: usize = 0;

/// Reward added when the last unserved customer is visited.
pub const COMPLETION_BONUS: f64 = 10.0;

/// Result of a single episode.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeOutcome {
    /// Distance travelled over all emitted routes.
    pub total_distance: f64,
    /// All customers served without running out of vehicles.
    pub feasible: bool,
    /// Routes in the order they were closed.
    pub routes: Vec<RoutePlan>,
}

impl EpisodeOutcome {
    /// Number of routes emitted.
    pub fn vehicles_used(&self) -> usize {
        self.routes.len()
    }
}

/// Runs episodes against a shared [`QTable`].
///
/// # Examples
///
/// ```
/// use q_routing::distance::DistanceMatrix;
/// use q_routing::models::{Customer, Depot, Instance, Vehicle, VehicleConfig};
/// use q_routing::random::SeededRandom;
/// use q_routing::rl::{EpisodeSimulator, QParams, QTable};
///
/// let instance = Instance::new(
///     "one",
///     Depot::new(0, 0.0, 0.0),
///     vec![Customer::new(1, 3.0, 4.0, 5)],
///     VehicleConfig::new(vec![Vehicle::new(0, 10)]).unwrap(),
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
/// let params = QParams::default();
/// let sim = EpisodeSimulator::new(&instance, &dm, &params);
///
/// let mut table = QTable::new();
/// let mut rng = SeededRandom::new(params.seed());
/// let outcome = sim.run(&mut table, &mut rng);
/// assert!(outcome.feasible);
/// assert!((outcome.total_distance - 10.0).abs() < 1e-10);
/// ```
pub struct EpisodeSimulator<'a> {
    instance: &'a Instance,
    distances: &'a DistanceMatrix,
    params: &'a QParams,
    policy: EpsilonGreedy,
}

impl<'a> EpisodeSimulator<'a> {
    /// Creates a simulator for the given problem data.
    pub fn new(instance: &'a Instance, distances: &'a DistanceMatrix, params: &'a QParams) -> Self {
        Self {
            instance,
            distances,
            params,
            policy: EpsilonGreedy::new(params.epsilon()),
        }
    }

    /// Runs one episode, reading and updating `table`.
    pub fn run(&self, table: &mut QTable, rng: &mut SeededRandom) -> EpisodeOutcome {
        let mut episode = Episode::start(
            self.instance.customers(),
            self.instance.vehicles(),
            self.distances,
            self.params.effective_bucket_size(),
        );

        for _ in 0..self.params.max_steps() {
            if episode.is_complete() {
                break;
            }

            let actions = episode.admissible_actions();
            if actions.is_empty() {
                episode.feasible = false;
                break;
            }

            let state = episode.state_key();
            let values = table.ensure(state, &actions);
            let action = self.policy.select(&actions, values, rng);

            let Transition { reward, mut terminal } = episode.apply(action);

            let mut next_max = 0.0;
            if !terminal {
                let next_state = episode.state_key();
                let next_actions = episode.admissible_actions();
                if next_actions.is_empty() {
                    terminal = true;
                    episode.feasible &= episode.is_complete();
                } else {
                    table.ensure(next_state, &next_actions);
                    next_max = table.max_value(&next_state);
                }
            }

            let old = table.value(&state, action);
            let target = reward + self.params.gamma() * next_max;
            table.set(state, action, old + self.params.alpha() * (target - old));

            if terminal {
                break;
            }
        }

        episode.close_route();
        episode.finish()
    }
}

struct Transition {
    reward: f64,
    terminal: bool,
}

/// Mutable per-episode state.
struct Episode<'a> {
    customers: &'a [Customer],
    fleet: &'a VehicleConfig,
    distances: &'a DistanceMatrix,
    bucket: usize,
    /// Indexed by node; slot 0 (depot) is unused.
    served: Vec<bool>,
    served_count: usize,
    node: usize,
    vehicle: usize,
    remaining_capacity: i32,
    route_nodes: Vec<usize>,
    route_load: i32,
    route_distance: f64,
    total_distance: f64,
    feasible: bool,
    routes: Vec<RoutePlan>,
}

impl<'a> Episode<'a> {
    fn start(
        customers: &'a [Customer],
        fleet: &'a VehicleConfig,
        distances: &'a DistanceMatrix,
        bucket: usize,
    ) -> Self {
        Self {
            customers,
            fleet,
            distances,
            bucket,
            served: vec![false; customers.len() + 1],
            served_count: 0,
            node: DEPOT,
            vehicle: 0,
            remaining_capacity: fleet.capacity_of(0).unwrap_or(0),
            route_nodes: vec![DEPOT],
            route_load: 0,
            route_distance: 0.0,
            total_distance: 0.0,
            feasible: true,
            routes: Vec::new(),
        }
    }

    fn remaining_customers(&self) -> usize {
        self.customers.len() - self.served_count
    }

    fn is_complete(&self) -> bool {
        self.remaining_customers() == 0 && self.node == DEPOT
    }

    fn state_key(&self) -> StateKey {
        StateKey::new(
            self.node,
            self.remaining_capacity,
            self.remaining_customers(),
            self.vehicle,
            self.bucket,
        )
    }

    /// Unserved customers that fit, then return-to-depot when away from it.
    /// With everything served only the return remains.
    fn admissible_actions(&self) -> Vec<Action> {
        if self.remaining_customers() == 0 {
            return if self.node == DEPOT {
                Vec::new()
            } else {
                vec![Action::ReturnToDepot]
            };
        }

        let mut actions: Vec<Action> = self
            .customers
            .iter()
            .enumerate()
            .filter(|&(i, c)| !self.served[i + 1] && c.demand() <= self.remaining_capacity)
            .map(|(i, _)| Action::Visit(i + 1))
            .collect();
        if self.node != DEPOT {
            actions.push(Action::ReturnToDepot);
        }
        actions
    }

    fn apply(&mut self, action: Action) -> Transition {
        match action {
            Action::Visit(customer) => self.visit(customer),
            Action::ReturnToDepot => self.return_to_depot(),
        }
    }

    fn visit(&mut self, customer: usize) -> Transition {
        let added = self.distances.get(self.node, customer);
        let demand = self.customers[customer - 1].demand();

        self.served[customer] = true;
        self.served_count += 1;
        self.node = customer;
        self.remaining_capacity -= demand;
        self.route_nodes.push(customer);
        self.route_load += demand;
        self.route_distance += added;
        self.total_distance += added;

        let mut reward = -added;
        if self.remaining_customers() == 0 {
            reward += COMPLETION_BONUS;
        }
        Transition {
            reward,
            terminal: false,
        }
    }

    fn return_to_depot(&mut self) -> Transition {
        let added = if self.node == DEPOT {
            0.0
        } else {
            self.distances.get(self.node, DEPOT)
        };
        self.close_route();

        let terminal = if self.remaining_customers() == 0 {
            true
        } else if self.vehicle + 1 >= self.fleet.count() {
            self.feasible = false;
            true
        } else {
            self.vehicle += 1;
            self.remaining_capacity = self.fleet.capacity_of(self.vehicle).unwrap_or(0);
            false
        };

        Transition {
            reward: -added,
            terminal,
        }
    }

    /// Emits the open route if it left the depot, then resets it.
    fn close_route(&mut self) {
        if self.route_nodes.len() > 1 {
            if self.route_nodes.last() != Some(&DEPOT) {
                let back = self.distances.get(self.node, DEPOT);
                self.route_nodes.push(DEPOT);
                self.route_distance += back;
                self.total_distance += back;
            }
            let nodes = std::mem::replace(&mut self.route_nodes, vec![DEPOT]);
            self.routes.push(RoutePlan::new(
                self.vehicle + 1,
                nodes,
                self.route_load,
                self.route_distance,
            ));
        }
        self.node = DEPOT;
        self.route_nodes.truncate(1);
        self.route_load = 0;
        self.route_distance = 0.0;
    }

    fn finish(self) -> EpisodeOutcome {
        EpisodeOutcome {
            total_distance: self.total_distance,
            feasible: self.feasible && self.served_count == self.customers.len(),
            routes: self.routes,
        }
    }
}
