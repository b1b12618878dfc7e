#![forbid(unsafe_code)]

//! Path finding over `egret-graph` graphs.
//!
//! [`DfsTraversal`] answers "is there a path from A to B" with the edges of one such path. The
//! search is depth-first and iterative, so it does not grow the call stack with the graph.

pub use egret_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod traversal;

pub use error::{Error, Result};
pub use traversal::{DfsTraversal, TraversalService};
