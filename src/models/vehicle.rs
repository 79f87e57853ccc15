//! Vehicle and fleet configuration types.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A vehicle with a fixed load capacity.
///
/// # Examples
///
/// ```
/// use q_routing::models::Vehicle;
///
/// let v = Vehicle::new(0, 200);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    capacity: i32,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity.
    pub fn new(id: usize, capacity: i32) -> Self {
        Self { id, capacity }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }
}

/// The ordered fleet available to a solve call.
///
/// Vehicles are dispatched in list order; the list is never empty and every
/// capacity is positive.
///
/// # Examples
///
/// ```
/// use q_routing::models::{Vehicle, VehicleConfig};
///
/// let fleet = VehicleConfig::new(vec![Vehicle::new(0, 40), Vehicle::new(1, 30)]).unwrap();
/// assert_eq!(fleet.count(), 2);
/// assert_eq!(fleet.capacity_of(1), Some(30));
/// assert_eq!(fleet.total_capacity(), 70);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vehicle>", into = "Vec<Vehicle>")]
pub struct VehicleConfig {
    vehicles: Vec<Vehicle>,
}

impl VehicleConfig {
    /// Creates a fleet, rejecting an empty list or non-positive capacities.
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self, ValidationError> {
        if vehicles.is_empty() {
            return Err(ValidationError::NoVehicles);
        }
        if let Some(v) = vehicles.iter().find(|v| v.capacity() <= 0) {
            return Err(ValidationError::NonPositiveCapacity {
                vehicle: v.id(),
                capacity: v.capacity(),
            });
        }
        Ok(Self { vehicles })
    }

    /// Number of vehicles.
    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    /// Capacity of the vehicle at the given 0-based position.
    pub fn capacity_of(&self, index: usize) -> Option<i32> {
        self.vehicles.get(index).map(Vehicle::capacity)
    }

    /// Sum of all vehicle capacities.
    pub fn total_capacity(&self) -> i64 {
        self.vehicles.iter().map(|v| v.capacity() as i64).sum()
    }

    /// Vehicles in dispatch order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }
}

impl TryFrom<Vec<Vehicle>> for VehicleConfig {
    type Error = ValidationError;

    fn try_from(vehicles: Vec<Vehicle>) -> Result<Self, Self::Error> {
        Self::new(vehicles)
    }
}

impl From<VehicleConfig> for Vec<Vehicle> {
    fn from(config: VehicleConfig) -> Self {
        config.vehicles
    }
}
