//! Seeded demo instances.
//!
//! - [`tiny15`] — 15 customers on a noisy circle around the depot, 4 vehicles
//! - [`grid20`] — 20 customers on a jittered 5×4 grid, 5 vehicles
//!
//! Both generators are deterministic for a given seed.

use std::f64::consts::PI;

use crate::error::ValidationError;
use crate::models::{Customer, Depot, Instance, Vehicle, VehicleConfig};
use crate::random::SeededRandom;

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 2] = ["tiny15", "grid20"];

/// Builds a named demo instance, or `None` for an unknown name.
///
/// # Examples
///
/// ```
/// use q_routing::instances;
///
/// let inst = instances::by_name("grid20", "42").unwrap().unwrap();
/// assert_eq!(inst.num_customers(), 20);
/// assert!(instances::by_name("nope", "42").is_none());
/// ```
pub fn by_name(name: &str, seed: &str) -> Option<Result<Instance, ValidationError>> {
    match name {
        "tiny15" => Some(tiny15(seed)),
        "grid20" => Some(grid20(seed)),
        _ => None,
    }
}

/// 15 customers spread on a ring of radius 18..26 around the depot at
/// (50, 50), with demands 5..=10 and four vehicles of capacity 36..=42.
pub fn tiny15(seed: &str) -> Result<Instance, ValidationError> {
    let mut random = SeededRandom::new(&format!("tiny15-{seed}"));
    let depot = Depot::new(0, 50.0, 50.0);
    let count = 15;

    let customers = (0..count)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / count as f64;
            let radius = 18.0 + random.next_double_range(0.0, 8.0);
            let x = depot.x() + angle.cos() * radius + random.next_gaussian(0.0, 0.8);
            let y = depot.y() + angle.sin() * radius + random.next_gaussian(0.0, 0.8);
            let demand = 5 + random.next_int(6) as i32;
            Customer::new(i + 1, x, y, demand)
        })
        .collect();

    Instance::new("tiny15", depot, customers, fleet(&[42, 38, 40, 36])?)
}

/// 20 customers on a 5×4 grid with spacing 10 starting at (10, 10), jittered
/// by σ = 0.5, with demands 4..=9 and five vehicles of capacity 34..=42.
pub fn grid20(seed: &str) -> Result<Instance, ValidationError> {
    let mut random = SeededRandom::new(&format!("grid20-{seed}"));
    let depot = Depot::new(0, 25.0, 25.0);
    let (columns, rows, spacing) = (5, 4, 10.0);

    let mut customers = Vec::with_capacity(columns * rows);
    for r in 0..rows {
        for c in 0..columns {
            let x = 10.0 + c as f64 * spacing + random.next_gaussian(0.0, 0.5);
            let y = 10.0 + r as f64 * spacing + random.next_gaussian(0.0, 0.5);
            let demand = 4 + random.next_int(6) as i32;
            customers.push(Customer::new(r * columns + c + 1, x, y, demand));
        }
    }

    Instance::new("grid20", depot, customers, fleet(&[36, 40, 34, 38, 42])?)
}

fn fleet(capacities: &[i32]) -> Result<VehicleConfig, ValidationError> {
    VehicleConfig::new(
        capacities
            .iter()
            .enumerate()
            .map(|(id, &capacity)| Vehicle::new(id, capacity))
            .collect(),
    )
}
