//! Location and location kind types.

use serde::{Deserialize, Serialize};

/// Identifier of a location, unique within one problem instance.
pub type LocationId = i64;

/// Category of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// The fixed start and end point of every route.
    Depot,
    /// A stop that must be visited by some partner.
    #[default]
    Delivery,
}

/// A point on the plane: the depot or a delivery stop.
///
/// Latitude and longitude are treated as planar coordinates.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Location, LocationKind};
///
/// let depot = Location::depot(1, "Warehouse", 0.0, 0.0);
/// assert!(depot.is_depot());
///
/// let stop = Location::delivery(2, "Customer A", 3.0, 4.0);
/// assert_eq!(stop.kind(), LocationKind::Delivery);
/// assert!((depot.distance_to(&stop) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    id: LocationId,
    name: String,
    lat: f64,
    lng: f64,
    kind: LocationKind,
}

impl Location {
    /// Creates a new location.
    pub fn new(
        id: LocationId,
        name: impl Into<String>,
        lat: f64,
        lng: f64,
        kind: LocationKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            lat,
            lng,
            kind,
        }
    }

    /// Creates a depot location.
    pub fn depot(id: LocationId, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self::new(id, name, lat, lng, LocationKind::Depot)
    }

    /// Creates a delivery location.
    pub fn delivery(id: LocationId, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self::new(id, name, lat, lng, LocationKind::Delivery)
    }

    /// Location ID.
    pub fn id(&self) -> LocationId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude, used as the first planar coordinate.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude, used as the second planar coordinate.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Depot or delivery.
    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    /// Returns `true` if this location is tagged `depot`.
    pub fn is_depot(&self) -> bool {
        self.kind == LocationKind::Depot
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        (dlat * dlat + dlng * dlng).sqrt()
    }
}

impl AsRef<Location> for Location {
    fn as_ref(&self) -> &Location {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_new() {
        let l = Location::new(7, "Shop", 1.5, -2.5, LocationKind::Delivery);
        assert_eq!(l.id(), 7);
        assert_eq!(l.name(), "Shop");
        assert_eq!(l.lat(), 1.5);
        assert_eq!(l.lng(), -2.5);
        assert!(!l.is_depot());
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Location::delivery(1, "a", 1.0, 2.0);
        let b = Location::delivery(2, "b", 4.0, 6.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }
}
