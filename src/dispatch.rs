//! Top-level dispatcher.
//!
//! Resolves a strategy selector, turns raw records into domain objects, and
//! runs the selected strategy.

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::config::OptimizerConfig;
use crate::error::Result;
use crate::models::{DeliveryPartner, DeliveryProblem, LocationRecord, PartnerRecord, Route};
use crate::strategy::Strategy;

/// The outcome of one optimization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Display name of the strategy that produced the routes.
    pub algorithm: String,
    /// One route per partner that received stops.
    pub routes: Vec<Route>,
}

/// Optimizes routes with the default [`OptimizerConfig`].
///
/// # Errors
///
/// [`OptimizeError::UnknownStrategy`](crate::OptimizeError::UnknownStrategy)
/// for an unrecognized selector (checked before any record is read), and
/// any error of the selected strategy.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{LocationKind, LocationRecord, PartnerRecord};
/// use u_delivery::optimize;
///
/// let locations = vec![
///     LocationRecord::new(1, "Warehouse", 0.0, 0.0).with_kind(LocationKind::Depot),
///     LocationRecord::new(2, "Customer A", 1.0, 0.0),
///     LocationRecord::new(3, "Customer B", 2.0, 0.0),
/// ];
/// let partners = vec![PartnerRecord::new(1, "John Doe")];
///
/// let result = optimize(&locations, &partners, "divide_and_conquer").unwrap();
/// assert_eq!(result.algorithm, "Divide and Conquer (Merge Sort)");
/// assert_eq!(result.routes[0].path(), &[1, 2, 3, 1]);
/// ```
pub fn optimize(
    locations: &[LocationRecord],
    partners: &[PartnerRecord],
    algorithm: &str,
) -> Result<OptimizationResult> {
    optimize_with_config(locations, partners, algorithm, &OptimizerConfig::default())
}

/// Optimizes routes with an explicit configuration.
pub fn optimize_with_config(
    locations: &[LocationRecord],
    partners: &[PartnerRecord],
    algorithm: &str,
    config: &OptimizerConfig,
) -> Result<OptimizationResult> {
    let strategy: Strategy = algorithm.parse()?;
    let _span = debug_span!("optimize", strategy = %strategy).entered();

    let problem = DeliveryProblem::new(locations.iter().map(Into::into));
    let partners: Vec<DeliveryPartner> = partners.iter().map(Into::into).collect();
    debug!(
        locations = problem.len(),
        partners = partners.len(),
        "running strategy"
    );

    let routes = strategy.optimize(&problem, &partners, config)?;
    debug!(routes = routes.len(), "strategy finished");

    Ok(OptimizationResult {
        algorithm: strategy.display_name().to_string(),
        routes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptimizeError;
    use crate::models::LocationKind;

    fn sample_locations() -> Vec<LocationRecord> {
        vec![
            LocationRecord::new(1, "Warehouse", 40.7128, -74.006).with_kind(LocationKind::Depot),
            LocationRecord::new(2, "Customer A", 40.7282, -73.9942),
            LocationRecord::new(3, "Customer B", 40.7031, -74.0102),
            LocationRecord::new(4, "Customer C", 40.7214, -73.9896),
            LocationRecord::new(5, "Customer D", 40.7069, -74.0113),
        ]
    }

    fn sample_partners() -> Vec<PartnerRecord> {
        vec![
            PartnerRecord::new(1, "John Doe").with_vehicle("Bike").with_capacity(5),
            PartnerRecord::new(2, "Jane Smith").with_capacity(10),
        ]
    }

    #[test]
    fn test_every_strategy_on_sample() {
        let locations = sample_locations();
        let partners = sample_partners();
        for strategy in Strategy::ALL {
            let result = optimize(&locations, &partners, strategy.selector()).expect("valid");
            assert_eq!(result.algorithm, strategy.display_name());
            assert!(!result.routes.is_empty());
            for route in &result.routes {
                assert_eq!(route.path().first(), Some(&1));
                assert_eq!(route.path().last(), Some(&1));
            }
        }
    }

    #[test]
    fn test_backtracking_sample_fits_one_partner() {
        // all depot distances are tiny next to a budget of 5 × 10
        let result = optimize(&sample_locations(), &sample_partners(), "backtracking")
            .expect("valid");
        assert_eq!(result.routes.len(), 1);
        assert_eq!(result.routes[0].partner_id(), 1);
        assert_eq!(result.routes[0].path().len(), 6);
    }

    #[test]
    fn test_unknown_strategy_checked_first() {
        // no depot either; the selector must be reported
        let locations = vec![LocationRecord::new(1, "a", 0.0, 0.0)];
        let err = optimize(&locations, &[], "unknown").expect_err("unknown");
        assert!(matches!(err, OptimizeError::UnknownStrategy(ref s) if s == "unknown"));
    }

    #[test]
    fn test_missing_depot_reported() {
        let locations = vec![LocationRecord::new(1, "a", 0.0, 0.0)];
        let err = optimize(&locations, &sample_partners(), "greedy").expect_err("no depot");
        assert!(matches!(err, OptimizeError::MissingDepot));
    }

    #[test]
    fn test_idempotent() {
        let locations = sample_locations();
        let partners = sample_partners();
        for strategy in Strategy::ALL {
            let a = optimize(&locations, &partners, strategy.selector()).expect("valid");
            let b = optimize(&locations, &partners, strategy.selector()).expect("valid");
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_config_threshold_forwarded() {
        let config = OptimizerConfig::default().with_exact_threshold(2);
        let result =
            optimize_with_config(&sample_locations(), &sample_partners(), "dynamic", &config)
                .expect("valid");
        assert_eq!(result.routes.len(), 2);
    }
}
