//! Optimizer configuration.
//!
//! [`OptimizerConfig`] holds the tunables shared by the strategies.

/// Instance size (total locations) up to which `dynamic` solves one exact tour.
pub const EXACT_THRESHOLD: usize = 15;

/// Multiplier applied to a partner's capacity in the backtracking validity check.
///
/// Capacity is compared against a sum of depot distances, so this constant has
/// no physical unit.
pub const CAPACITY_SCALE: f64 = 10.0;

/// Largest subset the bitmask DP will allocate a table for.
pub const MAX_EXACT_NODES: usize = 20;

/// Configuration for the optimization strategies.
///
/// # Defaults
///
/// ```
/// use u_delivery::OptimizerConfig;
///
/// let config = OptimizerConfig::default();
/// assert_eq!(config.exact_threshold, 15);
/// assert_eq!(config.capacity_scale, 10.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_delivery::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_exact_threshold(10)
///     .with_capacity_scale(2.5);
/// assert_eq!(config.exact_threshold, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerConfig {
    /// Instance size up to which the `dynamic` strategy solves a single tour
    /// over every location instead of partitioning.
    pub exact_threshold: usize,

    /// Scaling constant of the backtracking capacity check.
    ///
    /// A point may join a partner while the sum of depot distances of its
    /// points stays within `capacity * capacity_scale`.
    pub capacity_scale: f64,

    /// Hard ceiling on the number of nodes handed to the exact solver.
    ///
    /// The DP table has `2^n * n` entries; larger subsets are rejected.
    pub max_exact_nodes: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            exact_threshold: EXACT_THRESHOLD,
            capacity_scale: CAPACITY_SCALE,
            max_exact_nodes: MAX_EXACT_NODES,
        }
    }
}

impl OptimizerConfig {
    /// Sets the exact-solve threshold of the `dynamic` strategy.
    pub fn with_exact_threshold(mut self, n: usize) -> Self {
        self.exact_threshold = n;
        self
    }

    /// Sets the backtracking capacity scaling constant.
    pub fn with_capacity_scale(mut self, scale: f64) -> Self {
        self.capacity_scale = scale;
        self
    }

    /// Sets the ceiling on exact-solver subset size.
    pub fn with_max_exact_nodes(mut self, n: usize) -> Self {
        self.max_exact_nodes = n;
        self
    }
}
