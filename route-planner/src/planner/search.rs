//! Dijkstra search with a pluggable segment cost.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::{RouteError, SearchTree, Step};
use crate::network::{Edge, Graph, VertexId};

/// Frontier entry. Ordered so the max-heap pops the cheapest entry first,
/// with ties going to the alphabetically first location.
#[derive(Debug, Clone, Copy)]
struct Frontier<'g> {
    cost: f64,
    name: &'g str,
    vertex: VertexId,
}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.name.cmp(self.name))
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier<'_> {}

/// Build a shortest-path tree from `source`.
///
/// `cost` prices each segment, returning `None` for segments the current
/// metric can't use. Segments are usable in both directions. The search
/// stops early once `destination` is settled; pass `None` to settle every
/// reachable location.
///
/// Fails with [`RouteError::InvalidWeight`] if `cost` yields a negative or
/// non-finite value.
pub fn shortest_path_tree<'g, F>(
    graph: &'g Graph,
    source: VertexId,
    destination: Option<VertexId>,
    cost: F,
) -> Result<SearchTree<'g>, RouteError>
where
    F: Fn(&'g Edge) -> Option<Step<'g>>,
{
    let mut tree = SearchTree::new(graph, source);
    let mut settled = vec![false; graph.vertex_count()];
    let mut settled_count = 0;

    let mut frontier = BinaryHeap::new();
    frontier.push(Frontier {
        cost: 0.0,
        name: graph.name(source),
        vertex: source,
    });

    while let Some(Frontier { cost: at, vertex, .. }) = frontier.pop() {
        // Stale entry: a cheaper one was already popped
        if settled[vertex.0] {
            continue;
        }
        settled[vertex.0] = true;
        settled_count += 1;

        trace!(location = graph.name(vertex), cost = at, "settled");

        if destination == Some(vertex) {
            break;
        }

        for edge in graph.incident(vertex) {
            let Some(step) = cost(edge) else {
                continue;
            };

            if !step.cost.is_finite() || step.cost < 0.0 {
                let (a, b) = edge.endpoints();
                return Err(RouteError::InvalidWeight {
                    from: graph.name(a).to_string(),
                    to: graph.name(b).to_string(),
                    value: step.cost,
                });
            }

            let Some(next) = edge.other_end(vertex) else {
                continue;
            };
            if settled[next.0] {
                continue;
            }

            let candidate = at + step.cost;
            if tree.relax(next, candidate, vertex, step.via) {
                frontier.push(Frontier {
                    cost: candidate,
                    name: graph.name(next),
                    vertex: next,
                });
            }
        }
    }

    debug!(
        source = graph.name(source),
        destination = destination.map(|d| graph.name(d)),
        settled = settled_count,
        "search complete"
    );

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(cost: f64, name: &str, vertex: usize) -> Frontier<'_> {
        Frontier {
            cost,
            name,
            vertex: VertexId(vertex),
        }
    }

    #[test]
    fn frontier_pops_cheapest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(3.0, "C", 2));
        heap.push(entry(1.0, "B", 1));
        heap.push(entry(2.0, "A", 0));

        let order: Vec<f64> = std::iter::from_fn(|| heap.pop()).map(|e| e.cost).collect();
        assert_eq!(order, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn frontier_ties_broken_by_name() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(1.0, "Zeta", 0));
        heap.push(entry(1.0, "Alpha", 1));
        heap.push(entry(1.0, "Mid", 2));

        let order: Vec<&str> = std::iter::from_fn(|| heap.pop()).map(|e| e.name).collect();
        assert_eq!(order, vec!["Alpha", "Mid", "Zeta"]);
    }
}
