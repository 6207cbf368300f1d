//! Route queries against a built network.

use tracing::info;

use super::{Metric, Priority, Route, RouteError, TravelMode, reconstruct};
use crate::network::{Graph, VertexId};

/// Answers route queries over a network.
///
/// Holds only a shared borrow of the graph: every query gets its own search
/// tree, so a planner (or several) can be queried any number of times.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'g> {
    graph: &'g Graph,
}

impl<'g> Planner<'g> {
    /// Create a new planner.
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Every location a query may name, in the order first seen.
    pub fn locations(&self) -> impl Iterator<Item = &'g str> + Clone + 'g {
        self.graph.vertices()
    }

    /// Find the least-cost route from `source` to `destination`.
    ///
    /// Own transport minimises road distance. Public transport minimises bus
    /// time or bus fare, depending on `priority`, and only uses segments
    /// some bus line runs along.
    pub fn find_route(
        &self,
        source: &str,
        destination: &str,
        mode: TravelMode,
        priority: Priority,
    ) -> Result<Route, RouteError> {
        if source == destination {
            return Err(RouteError::SameEndpoints(source.to_string()));
        }

        let from = self.resolve(source)?;
        let to = self.resolve(destination)?;
        let metric = Metric::for_query(mode, priority);

        let tree = metric.search(self.graph, from, to)?;
        let route = reconstruct(self.graph, &tree, to, metric)?;

        info!(
            source,
            destination,
            %metric,
            stops = route.stops().len(),
            total = route.total(),
            "route found"
        );

        Ok(route)
    }

    fn resolve(&self, name: &str) -> Result<VertexId, RouteError> {
        self.graph
            .vertex_id(name)
            .map_err(|_| RouteError::NotFound(name.to_string()))
    }
}
