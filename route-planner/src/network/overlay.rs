//! Bus service overlay.
//!
//! Bus lines don't change the road topology. Each line that runs along a
//! segment leaves an offering on it: the time and fare to ride that segment
//! on that line.

use serde::Serialize;
use tracing::debug;

use super::{BusLineId, EdgeId, Graph, GraphError};
use crate::fares::FareTable;

/// One bus line's time and fare for riding one road segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusOffering {
    line: BusLineId,
    travel_time: f64,
    fare: f64,
}

impl BusOffering {
    /// Create an offering.
    pub fn new(line: BusLineId, travel_time: f64, fare: f64) -> Self {
        Self {
            line,
            travel_time,
            fare,
        }
    }

    /// The bus line providing this offering.
    pub fn line(&self) -> &BusLineId {
        &self.line
    }

    /// Riding time in hours.
    pub fn travel_time(&self) -> f64 {
        self.travel_time
    }

    /// Fare for the segment.
    pub fn fare(&self) -> f64 {
        self.fare
    }
}

impl Graph {
    /// Attach `line` to the road segments between each consecutive pair of `stops`.
    ///
    /// Time and fare on each segment come from the line's model in `fares`.
    /// The whole route is checked before anything is attached: if any stop
    /// pair has no road segment the graph is left untouched. A line that
    /// passes the same segment twice is only attached once.
    ///
    /// Returns the number of offerings attached.
    pub fn update_bus_info<S: AsRef<str>>(
        &mut self,
        line: &BusLineId,
        stops: &[S],
        fares: &FareTable,
    ) -> Result<usize, GraphError> {
        if stops.len() < 2 {
            return Err(GraphError::TooFewStops(line.clone()));
        }

        let mut covered: Vec<EdgeId> = Vec::new();
        for pair in stops.windows(2) {
            let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
            let edges = match (self.vertex_id(from), self.vertex_id(to)) {
                (Ok(a), Ok(b)) => self.edges_between(a, b),
                _ => Vec::new(),
            };

            if edges.is_empty() {
                return Err(GraphError::NoRoadSegment {
                    line: line.clone(),
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
            covered.extend(edges);
        }

        let model = fares.model_for(line);
        let mut attached = 0;

        for id in covered {
            let edge = self.edge_mut(id);
            if edge.offerings.iter().any(|o| o.line == *line) {
                continue;
            }

            let distance = edge.distance();
            edge.offerings.push(BusOffering::new(
                line.clone(),
                model.travel_time(distance),
                model.fare(distance),
            ));
            attached += 1;
        }

        debug!(line = %line, stops = stops.len(), attached, "attached bus line");

        Ok(attached)
    }
}
