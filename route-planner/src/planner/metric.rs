//! Cost metrics and the travel choices that select them.

use std::fmt;

use serde::Serialize;

use super::{RouteError, SearchTree, shortest_path_tree};
use crate::network::{BusLineId, Edge, Graph, VertexId};

/// How the traveller gets around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TravelMode {
    /// Car or motorcycle: any road, priced by distance.
    OwnTransport,

    /// Bus: only segments some bus line runs along.
    #[default]
    PublicTransport,
}

/// What to minimise when travelling by bus.
///
/// Ignored for own transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Priority {
    #[default]
    ShortestTime,
    CheapestPrice,
}

/// The quantity a search minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Road distance in kilometres. Every segment is usable.
    Distance,

    /// Bus riding time in hours, taking the fastest line on each segment.
    Time,

    /// Bus fare, taking the cheapest line on each segment.
    Price,
}

/// The cost of crossing one segment, and the bus line that achieves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<'g> {
    pub cost: f64,
    pub via: Option<&'g BusLineId>,
}

impl Metric {
    /// The metric answering a query for `mode` and `priority`.
    pub fn for_query(mode: TravelMode, priority: Priority) -> Self {
        match (mode, priority) {
            (TravelMode::OwnTransport, _) => Metric::Distance,
            (TravelMode::PublicTransport, Priority::ShortestTime) => Metric::Time,
            (TravelMode::PublicTransport, Priority::CheapestPrice) => Metric::Price,
        }
    }

    /// Whether routes under this metric ride buses.
    pub fn uses_buses(self) -> bool {
        !matches!(self, Metric::Distance)
    }

    /// Cost of crossing `edge`, or `None` if the segment can't be used.
    ///
    /// Segments without a bus line are unusable for time and price.
    pub fn edge_cost(self, edge: &Edge) -> Option<Step<'_>> {
        match self {
            Metric::Distance => Some(Step {
                cost: edge.distance(),
                via: None,
            }),
            Metric::Time => edge
                .offerings()
                .iter()
                .min_by(|a, b| a.travel_time().total_cmp(&b.travel_time()))
                .map(|o| Step {
                    cost: o.travel_time(),
                    via: Some(o.line()),
                }),
            Metric::Price => edge
                .offerings()
                .iter()
                .min_by(|a, b| a.fare().total_cmp(&b.fare()))
                .map(|o| Step {
                    cost: o.fare(),
                    via: Some(o.line()),
                }),
        }
    }

    /// Every value this metric could read off `edge`.
    fn weights(self, edge: &Edge) -> Vec<f64> {
        match self {
            Metric::Distance => vec![edge.distance()],
            Metric::Time => edge.offerings().iter().map(|o| o.travel_time()).collect(),
            Metric::Price => edge.offerings().iter().map(|o| o.fare()).collect(),
        }
    }

    /// Check that every weight this metric reads is finite and non-negative.
    ///
    /// Covers every offering, not just the cheapest one on each segment.
    pub fn check_weights(self, graph: &Graph) -> Result<(), RouteError> {
        for edge in graph.edges() {
            if let Some(value) = self
                .weights(edge)
                .into_iter()
                .find(|w| !w.is_finite() || *w < 0.0)
            {
                let (a, b) = edge.endpoints();
                return Err(RouteError::InvalidWeight {
                    from: graph.name(a).to_string(),
                    to: graph.name(b).to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Run a search under this metric from `source`, stopping once
    /// `destination` is settled.
    ///
    /// Refuses to run if any weight in the network is invalid.
    pub fn search<'g>(
        self,
        graph: &'g Graph,
        source: VertexId,
        destination: VertexId,
    ) -> Result<SearchTree<'g>, RouteError> {
        self.check_weights(graph)?;
        shortest_path_tree(graph, source, Some(destination), |edge| self.edge_cost(edge))
    }

    /// One-line summary of a route total, e.g. `Time Taken: 9 minutes`.
    ///
    /// Times are shown in minutes; all values are rounded to two decimals.
    pub fn summary(self, total: f64) -> String {
        match self {
            Metric::Distance => format!("Distance: {} km", round2(total)),
            Metric::Time => format!("Time Taken: {} minutes", round2(total * 60.0)),
            Metric::Price => format!("Cost: Rs. {}", round2(total)),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Distance => f.write_str("road distance"),
            Metric::Time => f.write_str("bus time"),
            Metric::Price => f.write_str("bus fare"),
        }
    }
}
