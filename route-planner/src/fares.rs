//! Bus speed and fare configuration.
//!
//! Each bus line has a model that turns a road segment's distance into the
//! time and fare of riding it:
//!
//! - `travel_time = distance / speed_kmh` (hours)
//! - `fare = base_fare + distance * fare_per_km`
//!
//! Lines without their own entry use the table's default model. Tables are
//! read from JSON:
//!
//! ```json
//! {
//!   "default": { "speed_kmh": 30.0, "fare_per_km": 2.0 },
//!   "lines": { "AC": { "speed_kmh": 40.0, "fare_per_km": 3.5, "base_fare": 5.0 } }
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::network::BusLineId;

/// Errors reading a fare table.
#[derive(Debug, thiserror::Error)]
pub enum FareError {
    /// The file could not be read
    #[error("cannot read fare table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid fare table
    #[error("invalid fare table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Speed and fare coefficients for one bus line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BusModel {
    /// Average speed in km/h.
    pub speed_kmh: f64,

    /// Fare per kilometre ridden.
    pub fare_per_km: f64,

    /// Flat amount added to the fare of every segment.
    #[serde(default)]
    pub base_fare: f64,
}

impl BusModel {
    /// Create a model with the given coefficients.
    pub fn new(speed_kmh: f64, fare_per_km: f64, base_fare: f64) -> Self {
        Self {
            speed_kmh,
            fare_per_km,
            base_fare,
        }
    }

    /// Hours needed to ride `distance` kilometres.
    pub fn travel_time(&self, distance: f64) -> f64 {
        distance / self.speed_kmh
    }

    /// Fare for riding `distance` kilometres.
    pub fn fare(&self, distance: f64) -> f64 {
        self.base_fare + distance * self.fare_per_km
    }
}

impl Default for BusModel {
    fn default() -> Self {
        Self {
            speed_kmh: 30.0,
            fare_per_km: 2.0,
            base_fare: 0.0,
        }
    }
}

/// Bus models keyed by line, with a fallback for unlisted lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FareTable {
    #[serde(default)]
    default: BusModel,

    #[serde(default)]
    lines: HashMap<String, BusModel>,
}

impl FareTable {
    /// Create a table where every line uses `default`.
    pub fn new(default: BusModel) -> Self {
        Self {
            default,
            lines: HashMap::new(),
        }
    }

    /// Give `line` its own model.
    pub fn with_line(mut self, line: BusLineId, model: BusModel) -> Self {
        self.lines.insert(line.as_str().to_string(), model);
        self
    }

    /// Parse a table from JSON text.
    pub fn from_json(json: &str) -> Result<Self, FareError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FareError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FareError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The model used for `line`.
    pub fn model_for(&self, line: &BusLineId) -> &BusModel {
        self.lines.get(line.as_str()).unwrap_or(&self.default)
    }

    /// The fallback model.
    pub fn default_model(&self) -> &BusModel {
        &self.default
    }

    /// Number of lines with their own model.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no line has its own model.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
