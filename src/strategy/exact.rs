//! Exact TSP by bitmask dynamic programming.
//!
//! # Algorithm
//!
//! Held-Karp over subsets with a fixed start `s`. `C(S, i)` is the cheapest
//! path that leaves `s`, visits exactly the nodes of `S` (which contains
//! `s`), and ends at `i`:
//!
//! ```text
//! C({s, i}, i) = d(s, i)
//! C(S, i)      = min over j ∈ S \ {i, s} of C(S \ {i}, j) + d(j, i)
//! tour         = min over i ≠ s of C(V, i) + d(i, s)
//! ```
//!
//! Subsets are processed by increasing size, so every `C(S \ {i}, j)` is final
//! before it is read. The table is dense: `2^n × n` costs plus predecessors.
//!
//! # Complexity
//!
//! O(2ⁿ n²) time, O(2ⁿ n) memory.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A Dynamic Programming Approach to
//! Sequencing Problems", *J. SIAM* 10(1), 196-210.

use std::iter;

use tracing::debug;

use crate::config::OptimizerConfig;
use crate::distance::{distance, route_length, DistanceMatrix};
use crate::error::{OptimizeError, Result};
use crate::models::{DeliveryPartner, DeliveryProblem, Location, LocationId, Route};

use super::split_evenly;

const NO_PARENT: u8 = u8::MAX;

/// Solves the TSP exactly over `locations`, starting and ending at `start`.
///
/// Returns the closed tour as location ids, `start` first and last. Node
/// order in `locations` fixes tie-breaking: predecessors and final endpoints
/// are scanned by ascending index and only a strictly cheaper candidate
/// replaces the incumbent.
///
/// When no full tour exists (fewer than two locations, or `start` not among
/// them) the result is the single-node path `[start]`.
///
/// # Errors
///
/// [`OptimizeError::ExactSolveTooLarge`] if `locations` has more than
/// `max_nodes` entries.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Location;
/// use u_delivery::strategy::solve_tsp;
///
/// let locations = vec![
///     Location::depot(0, "w", 0.0, 0.0),
///     Location::delivery(1, "a", 1.0, 1.0),
///     Location::delivery(2, "b", 1.0, 0.0),
///     Location::delivery(3, "c", 0.0, 1.0),
/// ];
/// let tour = solve_tsp(&locations, 0, 15).unwrap();
/// assert_eq!(tour, vec![0, 3, 1, 2, 0]);
/// ```
pub fn solve_tsp<L: AsRef<Location>>(
    locations: &[L],
    start: LocationId,
    max_nodes: usize,
) -> Result<Vec<LocationId>> {
    let n = locations.len();
    if n > max_nodes || n >= usize::BITS as usize {
        return Err(OptimizeError::ExactSolveTooLarge {
            nodes: n,
            limit: max_nodes,
        });
    }

    let Some(s) = locations.iter().position(|l| l.as_ref().id() == start) else {
        return Ok(vec![start]);
    };

    let dist = DistanceMatrix::from_locations(locations);
    let states = 1usize << n;
    let start_bit = 1usize << s;
    let mut cost = vec![f64::INFINITY; states * n];
    // node indices stay below 64, so they fit a byte next to the sentinel
    let mut parent = vec![NO_PARENT; states * n];

    for i in (0..n).filter(|&i| i != s) {
        let mask = start_bit | (1 << i);
        cost[mask * n + i] = dist.get(s, i);
        parent[mask * n + i] = s as u8;
    }

    for size in 3..=n {
        for mask in 0..states {
            if mask.count_ones() as usize != size || mask & start_bit == 0 {
                continue;
            }
            for i in 0..n {
                if i == s || mask & (1 << i) == 0 {
                    continue;
                }
                let prev = mask ^ (1 << i);
                for j in 0..n {
                    if j == s || prev & (1 << j) == 0 || parent[prev * n + j] == NO_PARENT {
                        continue;
                    }
                    let candidate = cost[prev * n + j] + dist.get(j, i);
                    let at = mask * n + i;
                    // the first candidate is always recorded, even when costs overflow
                    if parent[at] == NO_PARENT || candidate < cost[at] {
                        cost[at] = candidate;
                        parent[at] = j as u8;
                    }
                }
            }
        }
    }

    let full = states - 1;
    let mut best: Option<(usize, f64)> = None;
    for i in (0..n).filter(|&i| i != s) {
        if parent[full * n + i] == NO_PARENT {
            continue;
        }
        let total = cost[full * n + i] + dist.get(i, s);
        if best.map_or(true, |(_, c)| total < c) {
            best = Some((i, total));
        }
    }

    let Some((end, _)) = best else {
        return Ok(vec![start]);
    };

    let mut tour = Vec::with_capacity(n + 1);
    let mut mask = full;
    let mut current = end;
    while current != s {
        tour.push(locations[current].as_ref().id());
        let prev = parent[mask * n + current];
        mask ^= 1 << current;
        current = usize::from(prev);
    }
    tour.push(start);
    tour.reverse();
    tour.push(start);
    Ok(tour)
}

/// Builds routes with the exact TSP solver.
///
/// Instances of at most `config.exact_threshold` locations are solved as one
/// tour over everything, assigned to the first partner. Larger instances are
/// cut into one block per partner by depot distance and each
/// `{depot} ∪ block` is solved on its own; partners with an empty block get
/// no route.
///
/// # Errors
///
/// [`OptimizeError::MissingDepot`] if the problem has no depot;
/// [`OptimizeError::ExactSolveTooLarge`] if a block exceeds
/// `config.max_exact_nodes`.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{DeliveryPartner, DeliveryProblem, Location};
/// use u_delivery::strategy::exact_tsp;
/// use u_delivery::OptimizerConfig;
///
/// let problem = DeliveryProblem::new(vec![
///     Location::depot(0, "w", 0.0, 0.0),
///     Location::delivery(1, "a", 2.0, 0.0),
///     Location::delivery(2, "b", 1.0, 0.0),
/// ]);
/// let partners = vec![DeliveryPartner::new(1, "p", "Car", 100)];
/// let routes = exact_tsp(&problem, &partners, &OptimizerConfig::default()).unwrap();
/// assert_eq!(routes.len(), 1);
/// assert!((routes[0].distance() - 4.0).abs() < 1e-10);
/// ```
pub fn exact_tsp(
    problem: &DeliveryProblem,
    partners: &[DeliveryPartner],
    config: &OptimizerConfig,
) -> Result<Vec<Route>> {
    let depot = problem.depot()?;
    let Some(first) = partners.first() else {
        return Ok(Vec::new());
    };

    if problem.len() <= config.exact_threshold {
        let path = solve_tsp(problem.locations(), depot.id(), config.max_exact_nodes)?;
        let length = route_length(problem, &path);
        return Ok(vec![Route::new(first.id(), path, length)]);
    }

    let mut deliveries = problem.deliveries();
    deliveries.sort_by(|a, b| distance(depot, a).total_cmp(&distance(depot, b)));
    debug!(
        locations = problem.len(),
        partners = partners.len(),
        "instance above exact threshold, solving per partition"
    );

    let mut routes = Vec::with_capacity(partners.len());
    for (partner, block) in partners.iter().zip(split_evenly(&deliveries, partners.len())) {
        if block.is_empty() {
            continue;
        }
        let subset: Vec<&Location> = iter::once(depot).chain(block.iter().copied()).collect();
        let path = solve_tsp(&subset, depot.id(), config.max_exact_nodes)?;
        let length = route_length(problem, &path);
        routes.push(Route::new(partner.id(), path, length));
    }
    Ok(routes)
}
