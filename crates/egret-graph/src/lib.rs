#![forbid(unsafe_code)]

//! In-memory directed and undirected graphs keyed by caller-supplied vertex values.
//!
//! Vertices are any `Eq + Hash` value. Edges are values implementing [`Edge`]; a graph builds
//! them through an edge factory supplied at construction, so payload types (weights, colors,
//! ...) plug in without touching the topology logic. [`Graph::simple_directed`] and
//! [`Graph::simple_undirected`] cover the common case of payload-free [`DefaultEdge`]s.
//!
//! Vertices and edges are only ever added. The graph is not synchronized; mutation needs
//! `&mut Graph`, so the borrow checker keeps readers and writers apart.

pub mod error;
mod graph;

pub use error::{Error, Result, VertexRole};
pub use graph::{
    DefaultEdge, Edge, EdgeContainer, EdgeSet, Graph, GraphOptions, SimpleDirectedGraph,
    SimpleUndirectedGraph, WeightedEdge,
};
