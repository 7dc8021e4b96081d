//! Route optimization strategies.
//!
//! Every strategy takes the same problem (one depot, delivery points, a
//! partner roster) and returns one route per partner that received stops.
//!
//! - [`partition_and_sort`] — merge sort by depot distance, even split, O(n log n)
//! - [`spanning_tree`] — Kruskal MST with union-find, DFS extraction, O(n² log n)
//! - [`exact_tsp`] — bitmask DP TSP (Held-Karp), O(2ⁿ n²)
//! - [`backtracking`] — capacity-constrained assignment search, exponential worst case

mod backtracking;
mod exact;
mod partition;
mod spanning_tree;

use std::fmt;
use std::str::FromStr;

use crate::config::OptimizerConfig;
use crate::error::{OptimizeError, Result};
use crate::models::{DeliveryPartner, DeliveryProblem, Route};

pub use backtracking::backtracking;
pub use exact::{exact_tsp, solve_tsp};
pub use partition::{merge_sort_by_key, partition_and_sort, split_evenly};
pub use spanning_tree::{kruskal_mst, spanning_tree, DisjointSet};

/// Selects one of the four optimization strategies.
///
/// # Examples
///
/// ```
/// use u_delivery::strategy::Strategy;
///
/// let s: Strategy = "dynamic".parse().unwrap();
/// assert_eq!(s, Strategy::Dynamic);
/// assert_eq!(s.display_name(), "Dynamic Programming (TSP)");
/// assert!("fastest".parse::<Strategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Merge sort by depot distance, then contiguous blocks per partner.
    DivideAndConquer,
    /// Minimum spanning tree, one DFS traversal per partner.
    Greedy,
    /// Exact TSP via bitmask dynamic programming.
    Dynamic,
    /// Capacity-constrained assignment search, then exact TSP per partner.
    Backtracking,
}

impl Strategy {
    /// All strategies, in selector order.
    pub const ALL: [Strategy; 4] = [
        Strategy::DivideAndConquer,
        Strategy::Greedy,
        Strategy::Dynamic,
        Strategy::Backtracking,
    ];

    /// The selector string accepted by [`FromStr`].
    pub fn selector(&self) -> &'static str {
        match self {
            Self::DivideAndConquer => "divide_and_conquer",
            Self::Greedy => "greedy",
            Self::Dynamic => "dynamic",
            Self::Backtracking => "backtracking",
        }
    }

    /// Human-readable name reported in results.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DivideAndConquer => "Divide and Conquer (Merge Sort)",
            Self::Greedy => "Greedy Method (Kruskal's Algorithm)",
            Self::Dynamic => "Dynamic Programming (TSP)",
            Self::Backtracking => "Backtracking (Constraint Satisfaction)",
        }
    }

    /// Runs this strategy.
    ///
    /// # Errors
    ///
    /// [`OptimizeError::MissingDepot`] if the problem has no depot;
    /// [`OptimizeError::ExactSolveTooLarge`] if an exact-solver subset
    /// exceeds `config.max_exact_nodes`.
    pub fn optimize(
        &self,
        problem: &DeliveryProblem,
        partners: &[DeliveryPartner],
        config: &OptimizerConfig,
    ) -> Result<Vec<Route>> {
        match self {
            Self::DivideAndConquer => partition_and_sort(problem, partners),
            Self::Greedy => spanning_tree(problem, partners),
            Self::Dynamic => exact_tsp(problem, partners, config),
            Self::Backtracking => backtracking(problem, partners, config),
        }
    }
}

impl FromStr for Strategy {
    type Err = OptimizeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.selector() == s)
            .ok_or_else(|| OptimizeError::UnknownStrategy(s.to_string()))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}
