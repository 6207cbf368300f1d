//! Turning a search tree into a route.

use std::fmt;

use serde::Serialize;

use super::{Metric, RouteError, SearchTree};
use crate::network::{BusLineId, Graph, VertexId};

/// One hop between consecutive stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hop {
    pub from: String,
    pub to: String,

    /// The bus line ridden, for bus routes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_line: Option<BusLineId>,
}

/// A least-cost route under one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    metric: Metric,
    stops: Vec<String>,
    hops: Vec<Hop>,
    total: f64,
}

impl Route {
    /// The metric the route minimises.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Locations visited, source first.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Total cost: kilometres, hours or fare depending on the metric.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// The stops joined with arrows, e.g. `A -> B -> C`.
    pub fn description(&self) -> String {
        self.stops.join(" -> ")
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route: {}", self.description())?;
        for hop in &self.hops {
            if let Some(line) = &hop.bus_line {
                writeln!(f, "  {} -> {} by bus {}", hop.from, hop.to, line)?;
            }
        }
        write!(f, "{}", self.metric.summary(self.total))
    }
}

/// Read the route to `destination` out of a finished search.
///
/// Walks parent references back from `destination`. Fails with
/// [`RouteError::NoRouteFound`] unless the walk ends at the tree's source;
/// no partial routes are returned.
pub fn reconstruct(
    graph: &Graph,
    tree: &SearchTree<'_>,
    destination: VertexId,
    metric: Metric,
) -> Result<Route, RouteError> {
    let no_route = || RouteError::NoRouteFound {
        from: graph.name(tree.source()).to_string(),
        to: graph.name(destination).to_string(),
        metric,
    };

    if !tree.is_reached(destination) {
        return Err(no_route());
    }

    let mut path = vec![destination];
    let mut current = destination;
    while let Some(parent) = tree.parent(current) {
        // A parent chain longer than the graph has a cycle
        if path.len() > graph.vertex_count() {
            return Err(no_route());
        }
        path.push(parent);
        current = parent;
    }

    if current != tree.source() {
        return Err(no_route());
    }
    path.reverse();

    let hops = path
        .windows(2)
        .map(|pair| Hop {
            from: graph.name(pair[0]).to_string(),
            to: graph.name(pair[1]).to_string(),
            bus_line: tree.arrived_via(pair[1]).cloned(),
        })
        .collect();

    Ok(Route {
        metric,
        stops: path.iter().map(|&v| graph.name(v).to_string()).collect(),
        hops,
        total: tree.cost(destination),
    })
}
