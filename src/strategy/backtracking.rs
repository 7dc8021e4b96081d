//! Backtracking strategy (constraint satisfaction).
//!
//! # Algorithm
//!
//! Delivery points are taken in ascending depot distance. Each point is
//! tried on every partner in roster order; a placement is valid while
//!
//! ```text
//! Σ d(depot, assigned) + d(depot, point) <= capacity × capacity_scale
//! ```
//!
//! Valid placements recurse to the next point and are undone when the rest
//! cannot be placed. If no complete assignment exists, points are dealt
//! round-robin instead. Each partner's stops are then ordered with the exact
//! TSP solver.
//!
//! # Complexity
//!
//! O(pⁿ) worst case for the search (no pruning beyond the validity check),
//! plus O(2ᵏ k²) per partner with k assigned stops.

use std::iter;

use tracing::debug;

use crate::config::OptimizerConfig;
use crate::distance::{distance, route_length};
use crate::error::Result;
use crate::models::{DeliveryPartner, DeliveryProblem, Location, Route};

use super::solve_tsp;

/// Chronological backtracking over point-to-partner placements.
struct Search<'a> {
    /// Depot distance of each point, in search order.
    depot_distance: &'a [f64],
    /// Per-partner budget, `capacity × capacity_scale`.
    limits: Vec<f64>,
    /// Point indices held by each partner.
    assignments: Vec<Vec<usize>>,
}

impl<'a> Search<'a> {
    fn new(depot_distance: &'a [f64], partners: &[DeliveryPartner], scale: f64) -> Self {
        Self {
            depot_distance,
            limits: partners
                .iter()
                .map(|p| f64::from(p.capacity()) * scale)
                .collect(),
            assignments: vec![Vec::new(); partners.len()],
        }
    }

    fn fits(&self, partner: usize, point: usize) -> bool {
        let held: f64 = self.assignments[partner]
            .iter()
            .map(|&k| self.depot_distance[k])
            .sum();
        held + self.depot_distance[point] <= self.limits[partner]
    }

    /// Places `point` and every later point; returns `false` with all
    /// placements from this level undone if that is impossible.
    fn place(&mut self, point: usize) -> bool {
        if point == self.depot_distance.len() {
            return true;
        }
        for partner in 0..self.assignments.len() {
            if !self.fits(partner, point) {
                continue;
            }
            self.assignments[partner].push(point);
            if self.place(point + 1) {
                return true;
            }
            self.assignments[partner].pop();
        }
        false
    }

    fn round_robin(&mut self) {
        let partners = self.assignments.len();
        for held in &mut self.assignments {
            held.clear();
        }
        for point in 0..self.depot_distance.len() {
            self.assignments[point % partners].push(point);
        }
    }
}

/// Assigns points under the capacity proxy, then orders each partner's
/// stops exactly.
///
/// Never fails for lack of a feasible assignment: the round-robin fallback
/// always places every point. Partners left without points get no route.
///
/// # Errors
///
/// [`OptimizeError::MissingDepot`](crate::OptimizeError::MissingDepot) if
/// the problem has no depot;
/// [`OptimizeError::ExactSolveTooLarge`](crate::OptimizeError::ExactSolveTooLarge)
/// if a partner holds more stops than the exact solver accepts.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{DeliveryPartner, DeliveryProblem, Location};
/// use u_delivery::strategy::backtracking;
/// use u_delivery::OptimizerConfig;
///
/// let problem = DeliveryProblem::new(vec![
///     Location::depot(0, "w", 0.0, 0.0),
///     Location::delivery(1, "a", 1.0, 0.0),
///     Location::delivery(2, "b", 0.0, 1.0),
/// ]);
/// // a budget of 1.0 fits exactly one unit-distance stop per partner
/// let partners = vec![
///     DeliveryPartner::new(1, "p", "Bike", 1),
///     DeliveryPartner::new(2, "q", "Bike", 1),
/// ];
/// let config = OptimizerConfig::default().with_capacity_scale(1.0);
/// let routes = backtracking(&problem, &partners, &config).unwrap();
/// assert_eq!(routes[0].path(), &[0, 1, 0]);
/// assert_eq!(routes[1].path(), &[0, 2, 0]);
/// ```
pub fn backtracking(
    problem: &DeliveryProblem,
    partners: &[DeliveryPartner],
    config: &OptimizerConfig,
) -> Result<Vec<Route>> {
    let depot = problem.depot()?;
    if partners.is_empty() {
        return Ok(Vec::new());
    }

    let mut points = problem.deliveries();
    points.sort_by(|a, b| distance(depot, a).total_cmp(&distance(depot, b)));
    let depot_distance: Vec<f64> = points.iter().map(|p| distance(depot, p)).collect();

    let mut search = Search::new(&depot_distance, partners, config.capacity_scale);
    if !search.place(0) {
        debug!(
            points = points.len(),
            partners = partners.len(),
            "no assignment within capacity, falling back to round-robin"
        );
        search.round_robin();
    }

    let mut routes = Vec::new();
    for (partner, held) in partners.iter().zip(&search.assignments) {
        if held.is_empty() {
            continue;
        }
        let stops: Vec<&Location> = held.iter().map(|&k| points[k]).collect();
        let path = if stops.len() == 1 {
            vec![depot.id(), stops[0].id(), depot.id()]
        } else {
            let subset: Vec<&Location> = iter::once(depot).chain(stops).collect();
            solve_tsp(&subset, depot.id(), config.max_exact_nodes)?
        };
        let length = route_length(problem, &path);
        routes.push(Route::new(partner.id(), path, length));
    }
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptimizeError;

    fn partner(id: i64, capacity: i32) -> DeliveryPartner {
        DeliveryPartner::new(id, format!("p{id}"), "Car", capacity)
    }

    fn assigned_ids(routes: &[Route], depot: i64) -> Vec<i64> {
        let mut ids: Vec<i64> = routes
            .iter()
            .flat_map(|r| r.path().iter().copied())
            .filter(|&id| id != depot)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn line(n: i64) -> DeliveryProblem {
        let mut locations = vec![Location::depot(0, "w", 0.0, 0.0)];
        for k in 1..=n {
            locations.push(Location::delivery(k, format!("c{k}"), k as f64, 0.0));
        }
        DeliveryProblem::new(locations)
    }

    #[test]
    fn test_generous_capacity_first_partner_takes_all() {
        let problem = line(3);
        let routes = backtracking(
            &problem,
            &[partner(1, 100), partner(2, 100)],
            &OptimizerConfig::default(),
        )
        .expect("depot present");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].partner_id(), 1);
        assert_eq!(assigned_ids(&routes, 0), vec![1, 2, 3]);
        assert!((routes[0].distance() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_search_backtracks_to_find_assignment() {
        // depot distances 1, 2, 3; budgets 4 and 2 (scale 1)
        // greedy 1,2 → p1 leaves 3 unplaceable; search must revise
        let problem = line(3);
        let config = OptimizerConfig::default().with_capacity_scale(1.0);
        let routes = backtracking(&problem, &[partner(1, 4), partner(2, 2)], &config)
            .expect("depot present");
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].partner_id(), 1);
        assert_eq!(routes[0].path(), &[0, 3, 1, 0]);
        assert_eq!(routes[1].path(), &[0, 2, 0]);
    }

    #[test]
    fn test_round_robin_fallback() {
        let problem = line(5);
        let config = OptimizerConfig::default().with_capacity_scale(1.0);
        // budget 1 each: point at distance 2 never fits
        let routes = backtracking(&problem, &[partner(1, 1), partner(2, 1)], &config)
            .expect("depot present");
        assert_eq!(routes.len(), 2);
        assert_eq!(assigned_ids(&routes[..1], 0), vec![1, 3, 5]);
        assert_eq!(assigned_ids(&routes[1..], 0), vec![2, 4]);
        assert_eq!(assigned_ids(&routes, 0), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_search_placement_order() {
        let depot_distance = [1.0, 1.0, 1.0];
        let partners = [partner(1, 2), partner(2, 1)];
        let mut search = Search::new(&depot_distance, &partners, 1.0);
        assert!(search.place(0));
        assert_eq!(search.assignments, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_failed_search_leaves_nothing_assigned() {
        let depot_distance = [1.0, 5.0];
        let partners = [partner(1, 2)];
        let mut search = Search::new(&depot_distance, &partners, 1.0);
        assert!(!search.place(0));
        assert!(search.assignments[0].is_empty());
    }

    #[test]
    fn test_no_deliveries() {
        let problem = line(0);
        let routes = backtracking(&problem, &[partner(1, 10)], &OptimizerConfig::default())
            .expect("depot present");
        assert!(routes.is_empty());
    }

    #[test]
    fn test_oversized_partner_subset_rejected() {
        let problem = line(6);
        let config = OptimizerConfig::default().with_max_exact_nodes(4);
        let err = backtracking(&problem, &[partner(1, 1000)], &config).expect_err("too large");
        assert!(matches!(err, OptimizeError::ExactSolveTooLarge { nodes: 7, limit: 4 }));
    }
}
