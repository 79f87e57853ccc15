//! Capacity-violation accounting and result assembly.

use crate::models::{RoutePlan, SolveResult, VehicleConfig};

/// A solution chosen by the trainer for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Total travel distance.
    pub distance: f64,
    /// Whether the episode that produced it was feasible.
    pub feasible: bool,
    /// Closed routes.
    pub routes: Vec<RoutePlan>,
}

/// Sum of `max(0, load - capacity)` over all routes.
///
/// Routes whose 1-based vehicle index is outside the fleet are skipped.
///
/// # Examples
///
/// ```
/// use q_routing::evaluation::capacity_violation;
/// use q_routing::models::{RoutePlan, Vehicle, VehicleConfig};
///
/// let fleet = VehicleConfig::new(vec![Vehicle::new(0, 10), Vehicle::new(1, 10)]).unwrap();
/// let routes = vec![
///     RoutePlan::new(1, vec![0, 1, 0], 14, 2.0),
///     RoutePlan::new(2, vec![0, 2, 0], 6, 2.0),
/// ];
/// assert_eq!(capacity_violation(&routes, &fleet), 4);
/// ```
pub fn capacity_violation(routes: &[RoutePlan], fleet: &VehicleConfig) -> i64 {
    routes
        .iter()
        .filter_map(|route| {
            let index = route.vehicle().checked_sub(1)?;
            let capacity = fleet.capacity_of(index)?;
            Some((route.load() as i64 - capacity as i64).max(0))
        })
        .sum()
}

/// Builds the final [`SolveResult`] from the trainer's chosen solution.
pub struct ResultAssembler<'a> {
    fleet: &'a VehicleConfig,
}

impl<'a> ResultAssembler<'a> {
    /// Creates an assembler for the given fleet.
    pub fn new(fleet: &'a VehicleConfig) -> Self {
        Self { fleet }
    }

    /// Assembles a result. With no candidate the distance is NaN.
    pub fn assemble(
        &self,
        candidate: Option<Candidate>,
        log: Vec<String>,
        runtime_ms: u64,
    ) -> SolveResult {
        let Candidate {
            distance,
            feasible,
            routes,
        } = candidate.unwrap_or(Candidate {
            distance: f64::NAN,
            feasible: false,
            routes: Vec::new(),
        });

        SolveResult {
            distance,
            feasible,
            vehicles_used: routes.len(),
            capacity_violations: capacity_violation(&routes, self.fleet),
            routes,
            log,
            runtime_ms,
        }
    }
}
