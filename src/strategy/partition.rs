//! Partition-and-sort strategy (divide and conquer).
//!
//! # Algorithm
//!
//! Delivery points are ordered by ascending distance from the depot with a
//! top-down merge sort, then cut into one contiguous block per partner:
//!
//! ```text
//! block size = floor(n / p), first (n mod p) partners take one extra stop
//! ```
//!
//! Each partner visits its block in sorted order: depot → block → depot.
//!
//! # Complexity
//!
//! O(n log n) for the sort, O(n) for the split.

use std::iter;

use crate::distance::{distance, route_length};
use crate::error::Result;
use crate::models::{DeliveryPartner, DeliveryProblem, Location, Route};

/// Sorts `items` by `key` with a top-down merge sort.
///
/// The sort is stable: items with equal keys keep their relative order.
///
/// # Examples
///
/// ```
/// use u_delivery::strategy::merge_sort_by_key;
///
/// let words = ["pear", "fig", "kiwi", "apple"];
/// let sorted = merge_sort_by_key(&words, &|w: &&str| w.len());
/// assert_eq!(sorted, vec!["fig", "pear", "kiwi", "apple"]);
/// ```
pub fn merge_sort_by_key<T, K, F>(items: &[T], key: &F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort_by_key(&items[..mid], key);
    let right = merge_sort_by_key(&items[mid..], key);
    merge(left, right, key)
}

fn merge<T, K, F>(left: Vec<T>, right: Vec<T>, key: &F) -> Vec<T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // `<=` keeps the left element first on ties
        let next = if key(l) <= key(r) {
            left.next()
        } else {
            right.next()
        };
        result.extend(next);
    }

    result.extend(left);
    result.extend(right);
    result
}

/// Splits `items` into `parts` contiguous blocks of near-equal size.
///
/// Every block holds `items.len() / parts` items and the first
/// `items.len() % parts` blocks hold one more. Returns no blocks when
/// `parts` is zero.
///
/// # Examples
///
/// ```
/// use u_delivery::strategy::split_evenly;
///
/// let blocks = split_evenly(&[1, 2, 3, 4, 5], 3);
/// assert_eq!(blocks, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
/// ```
pub fn split_evenly<T>(items: &[T], parts: usize) -> Vec<&[T]> {
    if parts == 0 {
        return Vec::new();
    }

    let base = items.len() / parts;
    let remainder = items.len() % parts;
    let mut blocks = Vec::with_capacity(parts);
    let mut start = 0;
    for i in 0..parts {
        let count = base + usize::from(i < remainder);
        blocks.push(&items[start..start + count]);
        start += count;
    }
    blocks
}

/// Assigns delivery points to partners in contiguous blocks of the
/// depot-distance order.
///
/// Partners whose block is empty get no route.
///
/// # Errors
///
/// [`OptimizeError::MissingDepot`](crate::OptimizeError::MissingDepot) if
/// the problem has no depot.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{DeliveryPartner, DeliveryProblem, Location};
/// use u_delivery::strategy::partition_and_sort;
///
/// let problem = DeliveryProblem::new(vec![
///     Location::depot(0, "w", 0.0, 0.0),
///     Location::delivery(1, "far", 3.0, 0.0),
///     Location::delivery(2, "near", 1.0, 0.0),
///     Location::delivery(3, "mid", 2.0, 0.0),
/// ]);
/// let partners = vec![
///     DeliveryPartner::new(10, "a", "Car", 100),
///     DeliveryPartner::new(20, "b", "Car", 100),
/// ];
/// let routes = partition_and_sort(&problem, &partners).unwrap();
/// assert_eq!(routes[0].path(), &[0, 2, 3, 0]);
/// assert_eq!(routes[1].path(), &[0, 1, 0]);
/// ```
pub fn partition_and_sort(
    problem: &DeliveryProblem,
    partners: &[DeliveryPartner],
) -> Result<Vec<Route>> {
    let depot = problem.depot()?;
    let sorted = merge_sort_by_key(&problem.deliveries(), &|loc: &&Location| {
        distance(depot, loc)
    });

    let routes = partners
        .iter()
        .zip(split_evenly(&sorted, partners.len()))
        .filter(|(_, block)| !block.is_empty())
        .map(|(partner, block)| {
            let path: Vec<_> = iter::once(depot.id())
                .chain(block.iter().map(|loc| loc.id()))
                .chain(iter::once(depot.id()))
                .collect();
            let length = route_length(problem, &path);
            Route::new(partner.id(), path, length)
        })
        .collect();

    Ok(routes)
}
