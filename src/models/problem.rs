//! Problem instance: the locations of one optimization call, indexed by id.

use std::collections::HashMap;

use super::{Location, LocationId, LocationKind};
use crate::error::{OptimizeError, Result};

/// The set of locations one optimization call works on.
///
/// Locations keep their input order; that order defines the node indices of
/// the distance matrix, the MST, and the DP table. A later location with an
/// already-seen id replaces the earlier one in place.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{DeliveryProblem, Location};
///
/// let problem = DeliveryProblem::new(vec![
///     Location::depot(1, "Warehouse", 0.0, 0.0),
///     Location::delivery(2, "A", 1.0, 0.0),
///     Location::delivery(3, "B", 0.0, 1.0),
/// ]);
/// assert_eq!(problem.len(), 3);
/// assert_eq!(problem.depot().unwrap().id(), 1);
/// assert_eq!(problem.deliveries().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeliveryProblem {
    locations: Vec<Location>,
    index: HashMap<LocationId, usize>,
}

impl DeliveryProblem {
    /// Builds a problem from locations in input order.
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Self {
        let mut problem = Self::default();
        for location in locations {
            match problem.index.get(&location.id()) {
                Some(&pos) => problem.locations[pos] = location,
                None => {
                    problem
                        .index
                        .insert(location.id(), problem.locations.len());
                    problem.locations.push(location);
                }
            }
        }
        problem
    }

    /// All locations in input order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of distinct locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the problem has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Looks up a location by id.
    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.index.get(&id).map(|&pos| &self.locations[pos])
    }

    /// The first location tagged `depot`.
    ///
    /// # Errors
    ///
    /// [`OptimizeError::MissingDepot`] if no depot exists.
    pub fn depot(&self) -> Result<&Location> {
        self.locations
            .iter()
            .find(|l| l.is_depot())
            .ok_or(OptimizeError::MissingDepot)
    }

    /// Delivery locations in input order.
    pub fn deliveries(&self) -> Vec<&Location> {
        self.locations
            .iter()
            .filter(|l| l.kind() == LocationKind::Delivery)
            .collect()
    }
}
