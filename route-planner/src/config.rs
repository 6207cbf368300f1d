//! Startup configuration.

use std::path::PathBuf;

/// Where the network's record files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Road segment records (`from to distance`).
    pub distances: PathBuf,

    /// Bus-route records (`busLineId stop1 stop2 ...`).
    pub buses: PathBuf,

    /// Optional JSON fare table. Without one, every line uses the default
    /// bus model.
    pub fares: Option<PathBuf>,
}

impl NetworkConfig {
    /// Create a new configuration with the given paths.
    pub fn new(
        distances: impl Into<PathBuf>,
        buses: impl Into<PathBuf>,
        fares: Option<PathBuf>,
    ) -> Self {
        Self {
            distances: distances.into(),
            buses: buses.into(),
            fares,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            distances: PathBuf::from("Edgeweight.txt"),
            buses: PathBuf::from("BUS.TXT"),
            fares: None,
        }
    }
}
