//! Raw input records accepted at the request boundary.
//!
//! Records carry the optional fields and defaults of the wire format and are
//! converted into domain objects by the dispatcher.

use serde::{Deserialize, Serialize};

use super::{DeliveryPartner, Location, LocationId, LocationKind, PartnerId};

/// Vehicle descriptor assumed when a partner record omits one.
pub const DEFAULT_VEHICLE: &str = "Car";

/// Capacity assumed when a partner record omits one.
pub const DEFAULT_CAPACITY: i32 = 100;

/// A location as received: `{id, name, lat, lng, type?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: LocationId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Defaults to `delivery` when absent.
    #[serde(rename = "type", default)]
    pub kind: LocationKind,
}

/// A partner as received: `{id, name, vehicle?, capacity?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRecord {
    pub id: PartnerId,
    pub name: String,
    #[serde(default = "default_vehicle")]
    pub vehicle: String,
    #[serde(default = "default_capacity")]
    pub capacity: i32,
}

fn default_vehicle() -> String {
    DEFAULT_VEHICLE.to_string()
}

fn default_capacity() -> i32 {
    DEFAULT_CAPACITY
}

impl LocationRecord {
    /// Creates a delivery record.
    pub fn new(id: LocationId, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id,
            name: name.into(),
            lat,
            lng,
            kind: LocationKind::Delivery,
        }
    }

    /// Sets the location kind.
    pub fn with_kind(mut self, kind: LocationKind) -> Self {
        self.kind = kind;
        self
    }
}

impl PartnerRecord {
    /// Creates a record with the default vehicle and capacity.
    pub fn new(id: PartnerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            vehicle: default_vehicle(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the vehicle descriptor.
    pub fn with_vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle = vehicle.into();
        self
    }
}

impl From<&LocationRecord> for Location {
    fn from(r: &LocationRecord) -> Self {
        Location::new(r.id, r.name.clone(), r.lat, r.lng, r.kind)
    }
}

impl From<&PartnerRecord> for DeliveryPartner {
    fn from(r: &PartnerRecord) -> Self {
        DeliveryPartner::new(r.id, r.name.clone(), r.vehicle.clone(), r.capacity)
    }
}
