//! Route type.

use serde::{Deserialize, Serialize};

use super::{LocationId, PartnerId};

/// The visiting order assigned to one partner.
///
/// The path starts and ends at the depot. A route is produced once by a
/// strategy and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Route;
///
/// let route = Route::new(1, vec![1, 3, 2, 1], 4.5);
/// assert_eq!(route.partner_id(), 1);
/// assert_eq!(route.num_stops(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    partner_id: PartnerId,
    path: Vec<LocationId>,
    distance: f64,
}

impl Route {
    /// Creates a route.
    pub fn new(partner_id: PartnerId, path: Vec<LocationId>, distance: f64) -> Self {
        Self {
            partner_id,
            path,
            distance,
        }
    }

    /// Partner this route is assigned to.
    pub fn partner_id(&self) -> PartnerId {
        self.partner_id
    }

    /// Location IDs in visiting order, depot first and last.
    pub fn path(&self) -> &[LocationId] {
        &self.path
    }

    /// Total travelled distance.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of path entries other than the opening and closing depot.
    pub fn num_stops(&self) -> usize {
        self.path.len().saturating_sub(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_accessors() {
        let r = Route::new(3, vec![1, 2, 1], 2.0);
        assert_eq!(r.partner_id(), 3);
        assert_eq!(r.path(), &[1, 2, 1]);
        assert_eq!(r.distance(), 2.0);
        assert_eq!(r.num_stops(), 1);
    }

    #[test]
    fn test_route_single_node() {
        let r = Route::new(1, vec![1], 0.0);
        assert_eq!(r.num_stops(), 0);
    }

    #[test]
    fn test_route_serializes_camel_case() {
        let r = Route::new(5, vec![1, 4, 1], 1.5);
        let json = serde_json::to_value(&r).expect("serializable");
        assert_eq!(json["partnerId"], 5);
        assert_eq!(json["path"], serde_json::json!([1, 4, 1]));
        assert_eq!(json["distance"], 1.5);
    }
}
