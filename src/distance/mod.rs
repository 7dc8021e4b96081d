//! Planar geometry and distance matrices.
//!
//! Distances are straight-line Euclidean over (lat, lng) treated as planar
//! coordinates; no geodesic correction is applied.

mod geometry;
mod matrix;

pub use geometry::{distance, route_length};
pub use matrix::DistanceMatrix;
