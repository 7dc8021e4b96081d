//! Delivery partner type.

/// Identifier of a delivery partner.
pub type PartnerId = i64;

/// A partner who receives a subset of stops and a visiting order.
///
/// `capacity` is a soft proxy used by the backtracking strategy, not a
/// physical load limit.
///
/// # Examples
///
/// ```
/// use u_delivery::models::DeliveryPartner;
///
/// let p = DeliveryPartner::new(1, "John Doe", "Bike", 5);
/// assert_eq!(p.id(), 1);
/// assert_eq!(p.capacity(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryPartner {
    id: PartnerId,
    name: String,
    vehicle: String,
    capacity: i32,
}

impl DeliveryPartner {
    /// Creates a new partner.
    pub fn new(
        id: PartnerId,
        name: impl Into<String>,
        vehicle: impl Into<String>,
        capacity: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            vehicle: vehicle.into(),
            capacity,
        }
    }

    /// Partner ID.
    pub fn id(&self) -> PartnerId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form vehicle descriptor.
    pub fn vehicle(&self) -> &str {
        &self.vehicle
    }

    /// Capacity proxy.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_new() {
        let p = DeliveryPartner::new(2, "Jane Smith", "Car", 10);
        assert_eq!(p.id(), 2);
        assert_eq!(p.name(), "Jane Smith");
        assert_eq!(p.vehicle(), "Car");
        assert_eq!(p.capacity(), 10);
    }
}
