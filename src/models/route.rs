//! Closed vehicle route.

use serde::{Deserialize, Serialize};

/// A closed route driven by one vehicle: depot, customers, depot.
///
/// `vehicle` is the 1-based position of the vehicle in the fleet. `nodes`
/// holds node indices (0 = depot, `i` = `i`-th customer).
///
/// # Examples
///
/// ```
/// use q_routing::models::RoutePlan;
///
/// let route = RoutePlan::new(1, vec![0, 2, 1, 0], 15, 12.5);
/// assert_eq!(route.vehicle(), 1);
/// assert_eq!(route.customer_indices(), &[2, 1]);
/// assert!(route.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    vehicle: usize,
    nodes: Vec<usize>,
    load: i32,
    distance: f64,
}

impl RoutePlan {
    /// Creates a route.
    pub fn new(vehicle: usize, nodes: Vec<usize>, load: i32, distance: f64) -> Self {
        Self {
            vehicle,
            nodes,
            load,
            distance,
        }
    }

    /// 1-based vehicle position in the fleet.
    pub fn vehicle(&self) -> usize {
        self.vehicle
    }

    /// Node sequence including the depot at both ends.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Total demand delivered on this route.
    pub fn load(&self) -> i32 {
        self.load
    }

    /// Travel distance of this route.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Customer node indices in visit order (depot stripped).
    pub fn customer_indices(&self) -> &[usize] {
        match self.nodes.len() {
            0 | 1 => &[],
            n => &self.nodes[1..n - 1],
        }
    }

    /// Returns `true` if the route starts and ends at the depot.
    pub fn is_closed(&self) -> bool {
        self.nodes.len() >= 2 && self.nodes.first() == Some(&0) && self.nodes.last() == Some(&0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_accessors() {
        let r = RoutePlan::new(2, vec![0, 5, 3, 0], 35, 20.0);
        assert_eq!(r.vehicle(), 2);
        assert_eq!(r.nodes(), &[0, 5, 3, 0]);
        assert_eq!(r.load(), 35);
        assert_eq!(r.distance(), 20.0);
        assert_eq!(r.customer_indices(), &[5, 3]);
    }

    #[test]
    fn test_route_closed() {
        assert!(RoutePlan::new(1, vec![0, 1, 0], 1, 2.0).is_closed());
        assert!(!RoutePlan::new(1, vec![0, 1], 1, 1.0).is_closed());
        assert!(!RoutePlan::new(1, vec![0], 0, 0.0).is_closed());
    }

    #[test]
    fn test_customer_indices_degenerate() {
        assert!(RoutePlan::new(1, vec![], 0, 0.0).customer_indices().is_empty());
        assert!(RoutePlan::new(1, vec![0], 0, 0.0).customer_indices().is_empty());
    }
}
