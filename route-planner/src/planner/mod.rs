//! Route planning over the transportation network.
//!
//! One Dijkstra search, parameterised by a per-segment cost function, serves
//! every travel mode: road distance for own transport, and bus time or bus
//! fare for public transport. Each search writes into its own
//! [`SearchTree`], so runs never share state and the network stays
//! read-only.

mod error;
mod metric;
mod query;
mod route;
mod search;
mod tree;

pub use error::RouteError;
pub use metric::{Metric, Priority, Step, TravelMode};
pub use query::Planner;
pub use route::{Hop, Route, reconstruct};
pub use search::shortest_path_tree;
pub use tree::{Label, SearchTree};
