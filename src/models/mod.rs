//! Domain model types for delivery route assignment.
//!
//! Provides locations (one depot plus delivery points), delivery partners,
//! the routes produced for them, an id-indexed problem instance, and the raw
//! records accepted at the request boundary.

mod location;
mod partner;
mod problem;
mod record;
mod route;

pub use location::{Location, LocationId, LocationKind};
pub use partner::{DeliveryPartner, PartnerId};
pub use problem::DeliveryProblem;
pub use record::{LocationRecord, PartnerRecord, DEFAULT_CAPACITY, DEFAULT_VEHICLE};
pub use route::Route;
