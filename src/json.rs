//! JSON request/response entry point.

use serde::Deserialize;

use crate::error::SolveError;
use crate::models::Instance;
use crate::rl::{solve, QParams};

/// A solve request: an instance plus optional parameters.
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    /// Problem to solve.
    pub instance: Instance,
    /// Parameters; defaults apply when absent.
    #[serde(default)]
    pub params: Option<QParams>,
}

impl SolveRequest {
    /// Explicit parameters, or the defaults.
    pub fn resolved_params(&self) -> QParams {
        self.params.clone().unwrap_or_default()
    }
}

/// Solves a JSON-encoded [`SolveRequest`] and returns the JSON-encoded
/// [`SolveResult`](crate::models::SolveResult).
///
/// A NaN distance is encoded as `null`.
///
/// # Examples
///
/// ```
/// let request = r#"{
///     "instance": {
///         "id": "one",
///         "depot": {"id": 0, "x": 0.0, "y": 0.0},
///         "customers": [{"id": 1, "x": 3.0, "y": 4.0, "demand": 2}],
///         "vehicles": [{"id": 0, "capacity": 5}]
///     },
///     "params": {"episodes": 5}
/// }"#;
/// let response = q_routing::json::solve_json(request).unwrap();
/// assert!(response.contains("\"feasible\":true"));
/// ```
pub fn solve_json(request: &str) -> Result<String, SolveError> {
    let request: SolveRequest = serde_json::from_str(request)?;
    let params = request.resolved_params();
    let result = solve(&request.instance, &params);
    Ok(serde_json::to_string(&result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSTANCE: &str = r#"{
        "id": "two",
        "depot": {"id": 0, "x": 0.0, "y": 0.0},
        "customers": [
            {"id": 1, "x": 3.0, "y": 4.0, "demand": 2},
            {"id": 2, "x": -3.0, "y": 4.0, "demand": 2}
        ],
        "vehicles": [{"id": 0, "capacity": 5}, {"id": 1, "capacity": 5}]
    }"#;

    #[test]
    fn test_missing_params_use_defaults() {
        let request: SolveRequest =
            serde_json::from_str(&format!(r#"{{"instance": {INSTANCE}}}"#)).expect("valid");
        assert_eq!(request.resolved_params(), QParams::default());
    }

    #[test]
    fn test_solve_json_round() {
        let body = format!(r#"{{"instance": {INSTANCE}, "params": {{"episodes": 20, "seed": "json"}}}}"#);
        let response = solve_json(&body).expect("solved");
        let value: serde_json::Value = serde_json::from_str(&response).expect("json");
        assert_eq!(value["feasible"], true);
        assert!(value["distance"].as_f64().expect("finite") > 0.0);
        assert!(value["routes"].as_array().expect("routes").len() >= 1);
        assert_eq!(value["capacityViolations"], 0);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let body = format!(r#"{{"instance": {INSTANCE}, "params": {{"alpha": 0.0}}}}"#);
        let err = solve_json(&body).expect_err("alpha out of range");
        assert!(matches!(err, SolveError::Serialization(_)));
        assert!(err.to_string().contains("alpha must be in (0, 1]"));
    }

    #[test]
    fn test_invalid_instance_rejected() {
        let body = r#"{"instance": {
            "id": "bad",
            "depot": {"id": 0, "x": 0.0, "y": 0.0},
            "customers": [{"id": 1, "x": 1.0, "y": 1.0, "demand": 0}],
            "vehicles": [{"id": 0, "capacity": 5}]
        }}"#;
        let err = solve_json(body).expect_err("zero demand");
        assert!(err.to_string().contains("demand must be positive"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(solve_json("{not json").is_err());
    }
}
