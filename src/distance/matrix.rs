//! Dense distance matrix.

use crate::models::Instance;

/// A dense n×n distance matrix stored in row-major order.
///
/// Index 0 is the depot and index `i` (1..=N) is the `i`-th customer.
///
/// # Examples
///
/// ```
/// use q_routing::models::{Customer, Depot, Instance, Vehicle, VehicleConfig};
/// use q_routing::distance::DistanceMatrix;
///
/// let instance = Instance::new(
///     "demo",
///     Depot::new(0, 0.0, 0.0),
///     vec![Customer::new(1, 3.0, 4.0, 10), Customer::new(2, 6.0, 8.0, 20)],
///     VehicleConfig::new(vec![Vehicle::new(0, 50)]).unwrap(),
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the Euclidean matrix over the depot followed by the customers.
    pub fn from_instance(instance: &Instance) -> Self {
        let points: Vec<(f64, f64)> = (0..=instance.num_customers())
            .map(|node| instance.location(node))
            .collect();
        Self::from_points(&points)
    }

    /// Computes a Euclidean distance matrix from raw coordinates.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let (x1, y1) = points[i];
                let (x2, y2) = points[j];
                let d = (x1 - x2).hypot(y1 - y2);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}
