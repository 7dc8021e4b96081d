//! JSON request boundary.
//!
//! Decodes an optimize request, enforces the preconditions the engine
//! relies on, dispatches, and renders a status code with a JSON body. No
//! transport is provided; callers embed [`handle`] in whatever server they
//! run.
//!
//! # Examples
//!
//! ```
//! use u_delivery::api;
//!
//! let body = r#"{
//!     "algorithm": "dynamic",
//!     "locations": [
//!         {"id": 1, "name": "Warehouse", "lat": 0.0, "lng": 0.0, "type": "depot"},
//!         {"id": 2, "name": "Customer A", "lat": 3.0, "lng": 4.0}
//!     ],
//!     "partners": [{"id": 1, "name": "John Doe"}]
//! }"#;
//! let response = api::handle(body);
//! assert_eq!(response.status, 200);
//! assert_eq!(response.body["routes"][0]["path"], serde_json::json!([1, 2, 1]));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::dispatch::{optimize, OptimizationResult};
use crate::error::{OptimizeError, Result};
use crate::models::{LocationKind, LocationRecord, PartnerRecord};

/// Strategy used when a request names none.
pub const DEFAULT_ALGORITHM: &str = "greedy";

/// An optimize request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Strategy selector.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
    #[serde(default)]
    pub partners: Vec<PartnerRecord>,
}

fn default_algorithm() -> String {
    DEFAULT_ALGORITHM.to_string()
}

impl OptimizeRequest {
    /// Checks the preconditions the engine assumes.
    ///
    /// # Errors
    ///
    /// In order: [`OptimizeError::NoLocations`],
    /// [`OptimizeError::MissingDepot`], [`OptimizeError::NoPartners`].
    pub fn validate(&self) -> Result<()> {
        if self.locations.is_empty() {
            return Err(OptimizeError::NoLocations);
        }
        if !self.locations.iter().any(|l| l.kind == LocationKind::Depot) {
            return Err(OptimizeError::MissingDepot);
        }
        if self.partners.is_empty() {
            return Err(OptimizeError::NoPartners);
        }
        Ok(())
    }

    /// Validates and runs the request.
    pub fn run(&self) -> Result<OptimizationResult> {
        self.validate()?;
        optimize(&self.locations, &self.partners, &self.algorithm)
    }
}

/// A status code and JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(err: &OptimizeError) -> Self {
        let status = if err.is_invalid_request() { 400 } else { 500 };
        Self {
            status,
            body: json!({ "error": err.to_string() }),
        }
    }
}

/// Handles one optimize request body.
///
/// Returns `200` with `{algorithm, routes}`, `400` with `{error}` for
/// malformed or incomplete requests, and `500` with `{error}` when the
/// engine rejects the request.
pub fn handle(body: &str) -> ApiResponse {
    let outcome = serde_json::from_str::<OptimizeRequest>(body)
        .map_err(OptimizeError::from)
        .and_then(|request| request.run())
        .and_then(|result| serde_json::to_value(result).map_err(OptimizeError::from));

    match outcome {
        Ok(value) => ApiResponse::ok(value),
        Err(err) => {
            warn!(error = %err, "optimize request rejected");
            ApiResponse::error(&err)
        }
    }
}

/// Liveness probe body.
pub fn health() -> ApiResponse {
    ApiResponse::ok(json!({ "status": "healthy" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPOT: &str = r#"{"id": 1, "name": "W", "lat": 0.0, "lng": 0.0, "type": "depot"}"#;
    const STOP: &str = r#"{"id": 2, "name": "A", "lat": 1.0, "lng": 0.0}"#;
    const PARTNER: &str = r#"{"id": 1, "name": "P"}"#;

    fn request(algorithm: Option<&str>, locations: &[&str], partners: &[&str]) -> String {
        let algorithm = algorithm
            .map(|a| format!(r#""algorithm": "{a}","#))
            .unwrap_or_default();
        format!(
            r#"{{{algorithm} "locations": [{}], "partners": [{}]}}"#,
            locations.join(","),
            partners.join(",")
        )
    }

    #[test]
    fn test_default_algorithm_is_greedy() {
        let response = handle(&request(None, &[DEPOT, STOP], &[PARTNER]));
        assert_eq!(response.status, 200);
        assert_eq!(response.body["algorithm"], "Greedy Method (Kruskal's Algorithm)");
        assert_eq!(response.body["routes"][0]["partnerId"], 1);
        assert_eq!(response.body["routes"][0]["path"], json!([1, 2, 1]));
        assert_eq!(response.body["routes"][0]["distance"], 2.0);
    }

    #[test]
    fn test_depot_only_distance_is_positive_zero() {
        let response = handle(&request(Some("greedy"), &[DEPOT], &[PARTNER]));
        assert_eq!(response.status, 200);
        assert_eq!(response.body["routes"][0]["path"], json!([1]));
        let distance = response.body["routes"][0]["distance"]
            .as_f64()
            .expect("number");
        assert_eq!(distance, 0.0);
        assert!(!distance.is_sign_negative());
        let rendered = serde_json::to_string(&response.body).expect("serializable");
        assert!(!rendered.contains("-0.0"));
    }

    #[test]
    fn test_no_locations() {
        let response = handle(&request(Some("greedy"), &[], &[PARTNER]));
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], "No locations provided");
    }

    #[test]
    fn test_no_depot() {
        let response = handle(&request(Some("greedy"), &[STOP], &[PARTNER]));
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], "No depot location found");
    }

    #[test]
    fn test_no_partners() {
        let response = handle(&request(Some("greedy"), &[DEPOT, STOP], &[]));
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], "No delivery partners provided");
    }

    #[test]
    fn test_unknown_algorithm_is_server_error() {
        let response = handle(&request(Some("unknown"), &[DEPOT, STOP], &[PARTNER]));
        assert_eq!(response.status, 500);
        assert_eq!(response.body["error"], "Unknown algorithm: unknown");
    }

    #[test]
    fn test_malformed_json() {
        let response = handle("{not json");
        assert_eq!(response.status, 400);
        assert!(response.body["error"]
            .as_str()
            .expect("string")
            .starts_with("Invalid request body"));
    }

    #[test]
    fn test_validation_order() {
        let empty = OptimizeRequest {
            algorithm: default_algorithm(),
            locations: Vec::new(),
            partners: Vec::new(),
        };
        assert!(matches!(empty.validate(), Err(OptimizeError::NoLocations)));
    }

    #[test]
    fn test_health() {
        let response = health();
        assert_eq!(response.status, 200);
        assert_eq!(response.body["status"], "healthy");
    }
}
