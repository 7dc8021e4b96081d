//! Error type shared by the optimizers, the dispatcher, and the request boundary.

use std::fmt::{self, Display};

/// The error type for route optimization.
#[derive(Debug)]
pub enum OptimizeError {
    /// No location tagged `depot` exists among the strategy's input.
    MissingDepot,
    /// The strategy selector does not name a known strategy.
    UnknownStrategy(String),
    /// A subset handed to the exact solver exceeds the dense DP table ceiling.
    ExactSolveTooLarge {
        /// Number of nodes in the offending subset.
        nodes: usize,
        /// Configured ceiling.
        limit: usize,
    },
    /// The request carried no locations.
    NoLocations,
    /// The request carried no delivery partners.
    NoPartners,
    /// The request body could not be decoded.
    Json(serde_json::Error),
}

/// A type alias for results carrying an [`OptimizeError`].
pub type Result<T> = std::result::Result<T, OptimizeError>;

impl OptimizeError {
    /// Returns `true` for failures caused by the caller's input rather than the engine.
    ///
    /// The request boundary maps these to a client error.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            Self::MissingDepot | Self::NoLocations | Self::NoPartners | Self::Json(_)
        )
    }
}

impl Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDepot => write!(f, "No depot location found"),
            Self::UnknownStrategy(name) => write!(f, "Unknown algorithm: {name}"),
            Self::ExactSolveTooLarge { nodes, limit } => write!(
                f,
                "Exact TSP on {nodes} locations exceeds the limit of {limit}"
            ),
            Self::NoLocations => write!(f, "No locations provided"),
            Self::NoPartners => write!(f, "No delivery partners provided"),
            Self::Json(e) => write!(f, "Invalid request body: {e}"),
        }
    }
}

impl std::error::Error for OptimizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for OptimizeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
