//! Loaders for the distance and bus-route record files.
//!
//! Distance records are `from to distance`, one road segment per line.
//! Bus-route records are `busLineId stop1 stop2 ... stopN`. Blank lines are
//! skipped in both. Loading stops at the first bad line; everything read
//! before it stays in the graph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::NetworkConfig;
use crate::fares::{FareError, FareTable};
use crate::network::{BusLineId, Graph, GraphError};

/// Errors loading network records.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A record file is missing or unreadable
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading failed part way through
    #[error("read failed at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A line doesn't parse into the expected fields
    #[error("line {line}: {reason}: {content:?}")]
    Malformed {
        line: usize,
        content: String,
        reason: &'static str,
    },

    /// A well-formed record was rejected by the graph
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: GraphError,
    },

    /// The fare table could not be loaded
    #[error(transparent)]
    Fares(#[from] FareError),
}

/// Read distance records into `graph`.
///
/// Returns the number of road segments added.
pub fn read_distances<R: BufRead>(graph: &mut Graph, reader: R) -> Result<usize, LoadError> {
    let mut added = 0;

    for (idx, line) in reader.lines().enumerate() {
        let number = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: number,
            source,
        })?;

        let fields: Vec<&str> = line.split_whitespace().collect();
        let (from, to, distance) = match fields.as_slice() {
            [] => continue,
            [from, to, distance] => (*from, *to, *distance),
            _ => {
                return Err(LoadError::Malformed {
                    line: number,
                    content: line.clone(),
                    reason: "expected `from to distance`",
                });
            }
        };

        let distance: f64 = distance.parse().map_err(|_| LoadError::Malformed {
            line: number,
            content: line.clone(),
            reason: "distance is not a number",
        })?;

        graph
            .add_edge(from, to, distance)
            .map_err(|source| LoadError::Record {
                line: number,
                source,
            })?;
        added += 1;
    }

    Ok(added)
}

/// Read bus-route records, attaching each line to the segments it covers.
///
/// Returns the number of bus lines loaded.
pub fn read_bus_routes<R: BufRead>(
    graph: &mut Graph,
    reader: R,
    fares: &FareTable,
) -> Result<usize, LoadError> {
    let mut loaded = 0;

    for (idx, line) in reader.lines().enumerate() {
        let number = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: number,
            source,
        })?;

        let mut fields = line.split_whitespace();
        let Some(id) = fields.next() else {
            continue;
        };
        let stops: Vec<&str> = fields.collect();

        let bus_line = BusLineId::parse(id).map_err(|_| LoadError::Malformed {
            line: number,
            content: line.clone(),
            reason: "invalid bus line id",
        })?;

        if stops.len() < 2 {
            return Err(LoadError::Malformed {
                line: number,
                content: line.clone(),
                reason: "expected a bus line id and at least two stops",
            });
        }

        graph
            .update_bus_info(&bus_line, &stops, fares)
            .map_err(|source| LoadError::Record {
                line: number,
                source,
            })?;
        loaded += 1;
    }

    Ok(loaded)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Load a distance record file into `graph`.
pub fn load_distances(graph: &mut Graph, path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let added = read_distances(graph, open(path)?)?;
    info!(
        path = %path.display(),
        segments = added,
        locations = graph.vertex_count(),
        "loaded road segments"
    );
    Ok(added)
}

/// Load a bus-route record file into `graph`.
pub fn load_bus_routes(
    graph: &mut Graph,
    path: impl AsRef<Path>,
    fares: &FareTable,
) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let loaded = read_bus_routes(graph, open(path)?, fares)?;
    info!(path = %path.display(), lines = loaded, "loaded bus routes");
    Ok(loaded)
}

/// A network built at startup, with any problems hit along the way.
#[derive(Debug)]
pub struct NetworkLoad {
    /// The network, possibly partial.
    pub graph: Graph,

    /// Load failures, in the order they happened.
    pub problems: Vec<LoadError>,
}

impl NetworkLoad {
    /// Returns true if every resource loaded cleanly.
    pub fn is_complete(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Build the network from the files named in `config`.
///
/// A missing or broken file doesn't abort startup: the failure is recorded
/// and the remaining files are still loaded. A fare table that can't be read
/// is replaced by the default table.
pub fn build_network(config: &NetworkConfig) -> NetworkLoad {
    let mut graph = Graph::new();
    let mut problems = Vec::new();

    let fares = match &config.fares {
        Some(path) => FareTable::load(path).unwrap_or_else(|e| {
            warn!(error = %e, "using default fare table");
            problems.push(LoadError::Fares(e));
            FareTable::default()
        }),
        None => FareTable::default(),
    };

    if let Err(e) = load_distances(&mut graph, &config.distances) {
        warn!(error = %e, "road segments not fully loaded");
        problems.push(e);
    }

    if let Err(e) = load_bus_routes(&mut graph, &config.buses, &fares) {
        warn!(error = %e, "bus routes not fully loaded");
        problems.push(e);
    }

    NetworkLoad { graph, problems }
}
