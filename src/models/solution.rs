//! Solve result type.

use serde::Serialize;

use super::RoutePlan;

/// Outcome of one solve call.
///
/// `distance` is NaN only when no episode produced any route. When
/// `feasible` is `false` the routes are a best-effort attempt and
/// `capacity_violations` reports how far over capacity they are.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    /// Total distance of the reported routes.
    pub distance: f64,
    /// Whether every customer is served within capacity.
    pub feasible: bool,
    /// Number of routes (vehicles) used.
    pub vehicles_used: usize,
    /// Reported routes in dispatch order.
    pub routes: Vec<RoutePlan>,
    /// Progress log produced during training.
    pub log: Vec<String>,
    /// Wall-clock training time.
    pub runtime_ms: u64,
    /// Sum of load-over-capacity across routes.
    pub capacity_violations: i64,
}

impl SolveResult {
    /// Sum of the individual route distances.
    pub fn route_distance_sum(&self) -> f64 {
        self.routes.iter().map(RoutePlan::distance).sum()
    }

    /// Total number of customer visits across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.customer_indices().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SolveResult {
        SolveResult {
            distance: 30.0,
            feasible: true,
            vehicles_used: 2,
            routes: vec![
                RoutePlan::new(1, vec![0, 1, 0], 10, 10.0),
                RoutePlan::new(2, vec![0, 2, 3, 0], 15, 20.0),
            ],
            log: vec![],
            runtime_ms: 3,
            capacity_violations: 0,
        }
    }

    #[test]
    fn test_route_distance_sum() {
        assert!((sample().route_distance_sum() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_num_served() {
        assert_eq!(sample().num_served(), 3);
    }

    #[test]
    fn test_serialize_camel_case_and_nan() {
        let mut result = sample();
        result.distance = f64::NAN;
        let json = serde_json::to_value(&result).expect("serialize");
        assert!(json["distance"].is_null());
        assert_eq!(json["vehiclesUsed"], 2);
        assert_eq!(json["capacityViolations"], 0);
        assert_eq!(json["runtimeMs"], 3);
    }
}
