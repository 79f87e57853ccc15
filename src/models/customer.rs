//! Depot and customer location types.

use serde::{Deserialize, Serialize};

/// The single depot every route starts from and returns to.
///
/// # Examples
///
/// ```
/// use q_routing::models::Depot;
///
/// let depot = Depot::new(0, 50.0, 50.0);
/// assert_eq!(depot.id(), 0);
/// assert_eq!(depot.x(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    id: usize,
    x: f64,
    y: f64,
}

impl Depot {
    /// Creates a depot at the given coordinates.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Depot ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }
}

/// A customer with a location and a delivery demand.
///
/// The solver refers to customers by their 1-based position in the
/// instance's customer list, not by `id`.
///
/// # Examples
///
/// ```
/// use q_routing::models::Customer;
///
/// let c = Customer::new(7, 41.0, 49.0, 10);
/// assert_eq!(c.id(), 7);
/// assert_eq!(c.demand(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: usize,
    x: f64,
    y: f64,
    demand: i32,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(id: usize, x: f64, y: f64, demand: i32) -> Self {
        Self { id, x, y, demand }
    }

    /// Customer ID as supplied by the caller.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Units to deliver.
    pub fn demand(&self) -> i32 {
        self.demand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depot_new() {
        let d = Depot::new(0, 35.0, 36.0);
        assert_eq!(d.id(), 0);
        assert_eq!(d.x(), 35.0);
        assert_eq!(d.y(), 36.0);
    }

    #[test]
    fn test_customer_new() {
        let c = Customer::new(1, 10.0, 20.0, 5);
        assert_eq!(c.id(), 1);
        assert_eq!(c.x(), 10.0);
        assert_eq!(c.y(), 20.0);
        assert_eq!(c.demand(), 5);
    }

    #[test]
    fn test_customer_serde() {
        let c = Customer::new(3, 1.5, -2.0, 4);
        let json = serde_json::to_string(&c).expect("serialize");
        let back: Customer = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(c, back);
    }
}
