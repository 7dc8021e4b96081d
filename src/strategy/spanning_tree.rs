//! Spanning-tree strategy (greedy).
//!
//! # Algorithm
//!
//! 1. Build the complete graph over every location (depot included), edge
//!    weight = Euclidean distance.
//! 2. Kruskal: scan edges by ascending `(weight, i, j)` and keep each edge
//!    that joins two union-find components.
//! 3. For each partner, take a start node (the depot while unvisited,
//!    otherwise the first unvisited node) and walk the tree depth-first.
//!    The walk is pinned to the depot at both ends.
//!
//! Partners left over once every location has been visited get no route.
//!
//! # Complexity
//!
//! O(n² log n), dominated by sorting the n(n-1)/2 edges.
//!
//! # Reference
//!
//! Kruskal, J.B. (1956). "On the shortest spanning subtree of a graph and the
//! traveling salesman problem", *Proc. AMS* 7(1), 48-50.

use tracing::trace;

use crate::distance::{route_length, DistanceMatrix};
use crate::error::{OptimizeError, Result};
use crate::models::{DeliveryPartner, DeliveryProblem, Route};

/// Disjoint-set forest with path compression and union by rank.
///
/// # Examples
///
/// ```
/// use u_delivery::strategy::DisjointSet;
///
/// let mut ds = DisjointSet::new(4);
/// assert!(ds.union(0, 1));
/// assert!(ds.union(2, 3));
/// assert!(!ds.union(1, 0));
/// assert_eq!(ds.components(), 2);
/// assert_eq!(ds.find(0), ds.find(1));
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the representative of `x`'s set, compressing the path to it.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.components -= 1;
        true
    }

    /// Number of disjoint sets.
    pub fn components(&self) -> usize {
        self.components
    }
}

/// Computes a minimum spanning tree over the complete graph of `distances`.
///
/// Returns tree edges as `(i, j)` node-index pairs with `i < j`, in the
/// order Kruskal accepted them. Equal weights are broken by `(i, j)`.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::DistanceMatrix;
/// use u_delivery::models::Location;
/// use u_delivery::strategy::kruskal_mst;
///
/// let locations = vec![
///     Location::depot(1, "w", 0.0, 0.0),
///     Location::delivery(2, "a", 1.0, 0.0),
///     Location::delivery(3, "b", 5.0, 0.0),
/// ];
/// let mst = kruskal_mst(&DistanceMatrix::from_locations(&locations));
/// assert_eq!(mst, vec![(0, 1), (1, 2)]);
/// ```
pub fn kruskal_mst(distances: &DistanceMatrix) -> Vec<(usize, usize)> {
    let n = distances.size();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push((distances.get(i, j), i, j));
        }
    }
    edges.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

    let mut components = DisjointSet::new(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    for (_, u, v) in edges {
        if components.union(u, v) {
            tree.push((u, v));
            if tree.len() + 1 == n {
                break;
            }
        }
    }
    tree
}

/// Iterative DFS from `start` over the tree.
///
/// Marks every reached node in `visited` and returns them in visiting order.
fn depth_first(adjacency: &[Vec<usize>], start: usize, visited: &mut [bool]) -> Vec<usize> {
    let mut local = vec![false; adjacency.len()];
    let mut path = Vec::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if local[node] {
            continue;
        }
        path.push(node);
        local[node] = true;
        visited[node] = true;
        stack.extend(adjacency[node].iter().copied().filter(|&next| !local[next]));
    }
    path
}

/// Builds routes by walking a minimum spanning tree of all locations.
///
/// # Errors
///
/// [`OptimizeError::MissingDepot`] if the problem has no depot.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{DeliveryPartner, DeliveryProblem, Location};
/// use u_delivery::strategy::spanning_tree;
///
/// let problem = DeliveryProblem::new(vec![
///     Location::depot(0, "w", 0.0, 0.0),
///     Location::delivery(1, "a", 1.0, 0.0),
///     Location::delivery(2, "b", 2.0, 0.0),
/// ]);
/// let partners = vec![DeliveryPartner::new(7, "p", "Car", 100)];
/// let routes = spanning_tree(&problem, &partners).unwrap();
/// assert_eq!(routes[0].path(), &[0, 1, 2, 0]);
/// ```
pub fn spanning_tree(
    problem: &DeliveryProblem,
    partners: &[DeliveryPartner],
) -> Result<Vec<Route>> {
    let locations = problem.locations();
    let depot = locations
        .iter()
        .position(|l| l.is_depot())
        .ok_or(OptimizeError::MissingDepot)?;
    let depot_id = locations[depot].id();

    if partners.is_empty() {
        return Ok(Vec::new());
    }

    let n = locations.len();
    let tree = kruskal_mst(&DistanceMatrix::from_locations(locations));
    let mut adjacency = vec![Vec::new(); n];
    for &(u, v) in &tree {
        adjacency[u].push(v);
        adjacency[v].push(u);
    }

    let mut visited = vec![false; n];
    let mut routes = Vec::new();
    for partner in partners {
        if visited.iter().all(|&v| v) {
            break;
        }

        let start = if !visited[depot] {
            depot
        } else {
            match visited.iter().position(|&v| !v) {
                Some(node) => node,
                None => continue,
            }
        };

        let walk = depth_first(&adjacency, start, &mut visited);
        trace!(partner = partner.id(), nodes = walk.len(), "tree walk");

        let mut path: Vec<_> = walk.iter().map(|&i| locations[i].id()).collect();
        if path.first() != Some(&depot_id) {
            path.insert(0, depot_id);
        }
        if path.last() != Some(&depot_id) {
            path.push(depot_id);
        }

        let length = route_length(problem, &path);
        routes.push(Route::new(partner.id(), path, length));
    }

    Ok(routes)
}
