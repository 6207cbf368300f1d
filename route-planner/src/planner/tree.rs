//! Per-query search state.
//!
//! A search never writes to the network. Costs, back-references and the bus
//! line used to reach each location live here, one tree per run, so any
//! number of runs (of any metric) can coexist over the same graph.

use crate::network::{BusLineId, Graph, VertexId};

/// Best-known way of reaching one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label<'g> {
    /// Tentative cost from the source; infinite until reached.
    pub cost: f64,

    /// The location this one was reached from.
    pub parent: Option<VertexId>,

    /// Bus line ridden on the final hop, for bus metrics.
    pub arrived_via: Option<&'g BusLineId>,
}

impl Label<'_> {
    fn unreached() -> Self {
        Self {
            cost: f64::INFINITY,
            parent: None,
            arrived_via: None,
        }
    }
}

/// Result record of one search, keyed by location.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTree<'g> {
    source: VertexId,
    labels: Vec<Label<'g>>,
}

impl<'g> SearchTree<'g> {
    /// A freshly reset tree: every location unreached except `source`,
    /// which sits at cost zero.
    pub fn new(graph: &Graph, source: VertexId) -> Self {
        let mut labels = vec![Label::unreached(); graph.vertex_count()];
        labels[source.0].cost = 0.0;
        Self { source, labels }
    }

    /// Where the search started.
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn label(&self, id: VertexId) -> &Label<'g> {
        &self.labels[id.0]
    }

    /// All labels, indexed by [`VertexId`].
    pub fn labels(&self) -> &[Label<'g>] {
        &self.labels
    }

    pub fn cost(&self, id: VertexId) -> f64 {
        self.labels[id.0].cost
    }

    pub fn parent(&self, id: VertexId) -> Option<VertexId> {
        self.labels[id.0].parent
    }

    pub fn arrived_via(&self, id: VertexId) -> Option<&'g BusLineId> {
        self.labels[id.0].arrived_via
    }

    /// Whether the search found any way to `id`.
    pub fn is_reached(&self, id: VertexId) -> bool {
        self.labels[id.0].cost.is_finite()
    }

    /// Record a path to `id` if it beats the current one.
    ///
    /// Returns true if the label improved.
    pub(super) fn relax(
        &mut self,
        id: VertexId,
        cost: f64,
        parent: VertexId,
        via: Option<&'g BusLineId>,
    ) -> bool {
        let label = &mut self.labels[id.0];
        if cost < label.cost {
            *label = Label {
                cost,
                parent: Some(parent),
                arrived_via: via,
            };
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5.0).unwrap();
        graph.add_edge("B", "C", 3.0).unwrap();
        graph
    }

    #[test]
    fn new_tree_only_reaches_source() {
        let graph = abc();
        let b = graph.vertex_id("B").unwrap();
        let tree = SearchTree::new(&graph, b);

        assert_eq!(tree.source(), b);
        assert_eq!(tree.cost(b), 0.0);
        assert!(tree.is_reached(b));
        assert_eq!(tree.parent(b), None);
        assert_eq!(tree.arrived_via(b), None);

        for name in ["A", "C"] {
            let id = graph.vertex_id(name).unwrap();
            assert_eq!(tree.cost(id), f64::INFINITY);
            assert!(!tree.is_reached(id));
            assert_eq!(tree.parent(id), None);
        }
        assert_eq!(tree.labels().len(), 3);
    }

    #[test]
    fn relax_keeps_strictly_better_paths() {
        let graph = abc();
        let a = graph.vertex_id("A").unwrap();
        let b = graph.vertex_id("B").unwrap();
        let c = graph.vertex_id("C").unwrap();
        let line = BusLineId::parse("X1").unwrap();
        let mut tree = SearchTree::new(&graph, a);

        assert!(tree.relax(c, 10.0, a, None));
        assert!(!tree.relax(c, 10.0, b, Some(&line)));
        assert_eq!(tree.parent(c), Some(a));

        assert!(tree.relax(c, 8.0, b, Some(&line)));
        assert_eq!(
            tree.label(c),
            &Label {
                cost: 8.0,
                parent: Some(b),
                arrived_via: Some(&line),
            }
        );
    }
}
