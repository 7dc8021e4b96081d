//! # u-delivery
//!
//! Delivery route assignment: splits a set of delivery points among a
//! roster of partners and orders each partner's stops, starting and ending
//! at a single depot. Four interchangeable strategies work on the same
//! problem model.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Location, DeliveryPartner, Route, DeliveryProblem, input records)
//! - [`distance`] — Planar distance, route length, and distance matrix
//! - [`strategy`] — Merge-sort partitioning, Kruskal MST, bitmask DP TSP, backtracking
//! - [`dispatch`] — Strategy selection by name
//! - [`api`] — JSON request validation and response rendering
//! - [`config`] — Optimizer tunables
//! - [`error`] — Error type

pub mod api;
pub mod config;
pub mod dispatch;
pub mod distance;
pub mod error;
pub mod models;
pub mod strategy;

pub use config::OptimizerConfig;
pub use dispatch::{optimize, optimize_with_config, OptimizationResult};
pub use error::{OptimizeError, Result};
pub use strategy::Strategy;
