//! Problem instance: depot, customers, and fleet.

use serde::{Deserialize, Serialize};

use super::{Customer, Depot, VehicleConfig};
use crate::error::ValidationError;

/// An immutable CVRP instance.
///
/// Node index 0 is the depot and node index `i` (1..=N) is the `i`-th
/// customer in list order. These indices stay stable for a whole solve.
///
/// # Examples
///
/// ```
/// use q_routing::models::{Customer, Depot, Instance, Vehicle, VehicleConfig};
///
/// let fleet = VehicleConfig::new(vec![Vehicle::new(0, 30)]).unwrap();
/// let instance = Instance::new(
///     "demo",
///     Depot::new(0, 0.0, 0.0),
///     vec![Customer::new(1, 3.0, 4.0, 10)],
///     fleet,
/// )
/// .unwrap();
/// assert_eq!(instance.num_customers(), 1);
/// assert_eq!(instance.total_demand(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InstanceSpec")]
pub struct Instance {
    id: String,
    depot: Depot,
    customers: Vec<Customer>,
    vehicles: VehicleConfig,
}

/// Unvalidated wire form of [`Instance`].
#[derive(Deserialize)]
struct InstanceSpec {
    id: String,
    depot: Depot,
    customers: Vec<Customer>,
    vehicles: VehicleConfig,
}

impl Instance {
    /// Creates an instance, rejecting blank ids, empty customer lists,
    /// non-positive demands, and non-finite coordinates.
    pub fn new(
        id: impl Into<String>,
        depot: Depot,
        customers: Vec<Customer>,
        vehicles: VehicleConfig,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if customers.is_empty() {
            return Err(ValidationError::NoCustomers);
        }
        if !depot.x().is_finite() || !depot.y().is_finite() {
            return Err(ValidationError::NonFiniteCoordinate { id: depot.id() });
        }
        for c in &customers {
            if !c.x().is_finite() || !c.y().is_finite() {
                return Err(ValidationError::NonFiniteCoordinate { id: c.id() });
            }
            if c.demand() <= 0 {
                return Err(ValidationError::NonPositiveDemand {
                    customer: c.id(),
                    demand: c.demand(),
                });
            }
        }
        Ok(Self {
            id,
            depot,
            customers,
            vehicles,
        })
    }

    /// Instance identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The depot (node index 0).
    pub fn depot(&self) -> &Depot {
        &self.depot
    }

    /// Customers in node-index order (customer `i` is at `customers()[i - 1]`).
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// The fleet.
    pub fn vehicles(&self) -> &VehicleConfig {
        &self.vehicles
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.customers.len()
    }

    /// Sum of all customer demands.
    pub fn total_demand(&self) -> i64 {
        self.customers.iter().map(|c| c.demand() as i64).sum()
    }

    /// Coordinates of a node index (0 = depot).
    pub fn location(&self, node: usize) -> (f64, f64) {
        if node == 0 {
            (self.depot.x(), self.depot.y())
        } else {
            let c = &self.customers[node - 1];
            (c.x(), c.y())
        }
    }
}

impl TryFrom<InstanceSpec> for Instance {
    type Error = ValidationError;

    fn try_from(spec: InstanceSpec) -> Result<Self, Self::Error> {
        Self::new(spec.id, spec.depot, spec.customers, spec.vehicles)
    }
}
