//! Dense distance matrix.

use crate::models::Location;

/// A dense n×n distance matrix stored in row-major order.
///
/// Row and column `i` correspond to the `i`-th location the matrix was built
/// from.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Location;
/// use u_delivery::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::depot(1, "w", 0.0, 0.0),
///     Location::delivery(2, "a", 3.0, 4.0),
///     Location::delivery(3, "b", 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix over locations, in the given order.
    pub fn from_locations<L: AsRef<Location>>(locations: &[L]) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].as_ref().distance_to(locations[j].as_ref());
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}
