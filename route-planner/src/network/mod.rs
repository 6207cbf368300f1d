//! The transportation network.
//!
//! Named locations joined by road segments. Each segment knows its physical
//! distance, and carries the bus lines that run along it. The topology is
//! built once at startup and is read-only afterwards; all per-query state
//! lives in the planner's search trees.

mod bus_line;
mod error;
mod graph;
mod overlay;

pub use bus_line::{BusLineId, InvalidBusLineId};
pub use error::GraphError;
pub use graph::{Edge, EdgeId, Graph, Vertex, VertexId};
pub use overlay::BusOffering;
