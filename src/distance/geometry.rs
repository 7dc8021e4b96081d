//! Pairwise distance and route length.

use crate::models::{DeliveryProblem, Location, LocationId};

/// Euclidean distance between two locations.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::distance;
/// use u_delivery::models::Location;
///
/// let a = Location::depot(1, "w", 0.0, 0.0);
/// let b = Location::delivery(2, "c", 3.0, 4.0);
/// assert!((distance(&a, &b) - 5.0).abs() < 1e-10);
/// ```
pub fn distance(a: &Location, b: &Location) -> f64 {
    a.distance_to(b)
}

/// Total length of a visiting sequence given by location ids.
///
/// Sums [`distance`] over consecutive pairs. Sequences shorter than two
/// entries have length `+0.0`. Pairs naming an id the problem does not contain
/// contribute nothing.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::route_length;
/// use u_delivery::models::{DeliveryProblem, Location};
///
/// let problem = DeliveryProblem::new(vec![
///     Location::depot(1, "w", 0.0, 0.0),
///     Location::delivery(2, "c", 3.0, 4.0),
/// ]);
/// assert!((route_length(&problem, &[1, 2, 1]) - 10.0).abs() < 1e-10);
/// assert_eq!(route_length(&problem, &[1]), 0.0);
/// ```
pub fn route_length(problem: &DeliveryProblem, path: &[LocationId]) -> f64 {
    path.windows(2)
        .filter_map(|pair| Some(distance(problem.get(pair[0])?, problem.get(pair[1])?)))
        .fold(0.0, |total, d| total + d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DeliveryProblem {
        DeliveryProblem::new(vec![
            Location::depot(0, "depot", 0.0, 0.0),
            Location::delivery(1, "e", 1.0, 0.0),
            Location::delivery(2, "ne", 1.0, 1.0),
            Location::delivery(3, "n", 0.0, 1.0),
        ])
    }

    #[test]
    fn test_distance_zero_to_self() {
        let p = square();
        let d = p.get(2).expect("present");
        assert_eq!(distance(d, d), 0.0);
    }

    #[test]
    fn test_route_length_closed_square() {
        let p = square();
        assert!((route_length(&p, &[0, 1, 2, 3, 0]) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_length_short_sequences() {
        let p = square();
        assert_eq!(route_length(&p, &[]), 0.0);
        assert_eq!(route_length(&p, &[2]), 0.0);
        // `assert_eq!` accepts -0.0, which would leak into serialized routes
        assert!(!route_length(&p, &[]).is_sign_negative());
        assert!(!route_length(&p, &[2]).is_sign_negative());
    }

    #[test]
    fn test_route_length_diagonal() {
        let p = square();
        assert!((route_length(&p, &[0, 2]) - 2f64.sqrt()).abs() < 1e-10);
    }
}
