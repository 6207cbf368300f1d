//! Locations, road segments and the graph that owns them.

use std::collections::HashMap;

use super::{BusOffering, GraphError};

/// Index of a location within its [`Graph`].
///
/// Only meaningful for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Index of a road segment within its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// A named location.
#[derive(Debug, Clone)]
pub struct Vertex {
    name: String,
    edges: Vec<EdgeId>,
}

impl Vertex {
    /// The location's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Road segments touching this location, in insertion order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}

/// A road segment between two locations.
///
/// Segments are listed once in the source data and can be driven in either
/// direction. Bus lines covering the segment are attached as offerings.
#[derive(Debug, Clone)]
pub struct Edge {
    endpoints: (VertexId, VertexId),
    distance: f64,
    pub(super) offerings: Vec<BusOffering>,
}

impl Edge {
    /// The two locations this segment joins, in the order they were listed.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        self.endpoints
    }

    /// Physical length of the segment in kilometres.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Bus lines running along this segment.
    pub fn offerings(&self) -> &[BusOffering] {
        &self.offerings
    }

    /// Whether any bus line runs along this segment.
    pub fn has_bus_service(&self) -> bool {
        !self.offerings.is_empty()
    }

    /// The endpoint across the segment from `from`.
    ///
    /// Returns `None` if `from` is not one of the endpoints.
    pub fn other_end(&self, from: VertexId) -> Option<VertexId> {
        let (a, b) = self.endpoints;
        if from == a {
            Some(b)
        } else if from == b {
            Some(a)
        } else {
            None
        }
    }

    /// Whether this segment joins `a` and `b`, in either direction.
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        self.endpoints == (a, b) || self.endpoints == (b, a)
    }
}

/// The transportation network.
///
/// Owns every location (keyed by unique name) and every road segment.
/// Locations refer to their segments by [`EdgeId`]; segments are never
/// duplicated between their endpoints.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a road segment between two locations.
    ///
    /// Locations are created on first mention. Adding the same pair twice
    /// keeps both segments; searches always take the cheaper one.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: f64) -> Result<EdgeId, GraphError> {
        if from.is_empty() || to.is_empty() {
            return Err(GraphError::EmptyName);
        }

        if !distance.is_finite() || distance < 0.0 {
            return Err(GraphError::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
                value: distance,
            });
        }

        let a = self.intern(from);
        let b = self.intern(to);
        let id = EdgeId(self.edges.len());

        self.edges.push(Edge {
            endpoints: (a, b),
            distance,
            offerings: Vec::new(),
        });

        self.vertices[a.0].edges.push(id);
        if a != b {
            self.vertices[b.0].edges.push(id);
        }

        Ok(id)
    }

    /// Look up a location by name, creating it if absent.
    fn intern(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            name: name.to_string(),
            edges: Vec::new(),
        });
        self.index.insert(name.to_string(), id);
        id
    }

    /// All location names, in the order they were first seen.
    ///
    /// The iterator is cheap to clone, so callers can walk it more than once.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.vertices.iter().map(Vertex::name)
    }

    /// Resolve a location name to its id.
    pub fn vertex_id(&self, name: &str) -> Result<VertexId, GraphError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NotFound(name.to_string()))
    }

    /// Look up a location by name.
    pub fn vertex(&self, name: &str) -> Result<&Vertex, GraphError> {
        let id = self.vertex_id(name)?;
        Ok(&self.vertices[id.0])
    }

    /// Name of the location with the given id.
    pub fn name(&self, id: VertexId) -> &str {
        &self.vertices[id.0].name
    }

    /// The segment with the given id.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    pub(super) fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.0]
    }

    /// Every segment in the network.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Segments touching a location.
    pub fn incident(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices[id.0]
            .edges
            .iter()
            .map(move |&edge| &self.edges[edge.0])
    }

    /// Ids of every segment joining `a` and `b`, in either direction.
    pub fn edges_between(&self, a: VertexId, b: VertexId) -> Vec<EdgeId> {
        self.vertices[a.0]
            .edges
            .iter()
            .copied()
            .filter(|&edge| self.edges[edge.0].connects(a, b))
            .collect()
    }

    /// Number of locations.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of road segments, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the network has no locations.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
