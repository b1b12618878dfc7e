//! Graph container APIs.
//!
//! A [`Graph`] maps every vertex to an [`EdgeContainer`] and keeps one global edge set used to
//! reject duplicates. Whether the graph is directed, and whether it accepts self-loops, is
//! decided once through [`GraphOptions`].

use rustc_hash::FxBuildHasher;
use std::hash::Hash;

mod container;
mod edge;
mod options;
mod simple;

pub use container::EdgeContainer;
pub use edge::{DefaultEdge, Edge, WeightedEdge};
pub use options::GraphOptions;
pub use simple::{SimpleDirectedGraph, SimpleUndirectedGraph};

use crate::error::{Error, Result, VertexRole};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Set of edges as exposed by [`Graph::outgoing_edges`] and [`Graph::incoming_edges`].
pub type EdgeSet<E> = hashbrown::HashSet<E, FxBuildHasher>;

type EdgeFactory<V, E> = Box<dyn Fn(&V, &V) -> E + Send + Sync>;

pub struct Graph<V, E>
where
    V: Eq + Hash + 'static,
    E: Edge<V> + 'static,
{
    options: GraphOptions,

    // Builds the edge stored by `add_edge`; this is where payload types plug in.
    create_edge: EdgeFactory<V, E>,

    adjacency: HashMap<V, EdgeContainer<E>>,

    // Global identity set, only consulted for uniqueness. Per-vertex containers never decide
    // whether an edge exists.
    edges: EdgeSet<E>,
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + 'static,
    E: Edge<V> + 'static,
{
    pub fn new<F>(options: GraphOptions, create_edge: F) -> Self
    where
        F: Fn(&V, &V) -> E + Send + Sync + 'static,
    {
        Self {
            options,
            create_edge: Box::new(create_edge),
            adjacency: HashMap::default(),
            edges: EdgeSet::default(),
        }
    }

    pub fn directed<F>(create_edge: F) -> Self
    where
        F: Fn(&V, &V) -> E + Send + Sync + 'static,
    {
        Self::new(GraphOptions::DIRECTED, create_edge)
    }

    pub fn undirected<F>(create_edge: F) -> Self
    where
        F: Fn(&V, &V) -> E + Send + Sync + 'static,
    {
        Self::new(GraphOptions::UNDIRECTED, create_edge)
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn is_self_loop_supported(&self) -> bool {
        self.options.self_loops
    }

    /// Adds `vertex` with no edges. Adding a vertex that is already present does nothing.
    pub fn add_vertex(&mut self, vertex: V) -> &mut Self {
        if self.adjacency.contains_key(&vertex) {
            return self;
        }
        let container = EdgeContainer::new(self.options.directed);
        self.adjacency.insert(vertex, container);
        tracing::trace!(vertices = self.adjacency.len(), "vertex added");
        self
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &E> {
        self.edges.iter()
    }

    /// Connects two existing vertices with an edge built by the graph's edge factory.
    ///
    /// Fails without touching the graph when either vertex is unknown (source is checked
    /// first), when `source == target` on a graph without self-loops, or when the edge is
    /// already present. Undirected graphs also reject the opposite of an existing edge.
    pub fn add_edge(&mut self, source: &V, target: &V) -> Result<()> {
        self.check_endpoints(source, target)?;
        let edge = (self.create_edge)(source, target);
        self.link(edge)
    }

    /// Inserts a prebuilt edge, bypassing the edge factory.
    ///
    /// This is how edges carrying their own payload get into the graph. Validation is the same
    /// as [`Graph::add_edge`], using the endpoints stored in `edge`.
    pub fn insert_edge(&mut self, edge: E) -> Result<()> {
        self.check_endpoints(edge.source(), edge.target())?;
        self.link(edge)
    }

    /// Returns true if `edge` (or, in an undirected graph, its opposite) is registered.
    pub fn contains_edge(&self, edge: &E) -> bool {
        if self.edges.contains(edge) {
            return true;
        }
        !self.options.directed && self.edges.contains(&edge.opposite())
    }

    pub fn outgoing_edges(&self, vertex: &V) -> Result<&EdgeSet<E>> {
        self.container(vertex).map(EdgeContainer::outgoing)
    }

    pub fn incoming_edges(&self, vertex: &V) -> Result<&EdgeSet<E>> {
        self.container(vertex).map(EdgeContainer::incoming)
    }

    pub fn edge_container(&self, vertex: &V) -> Option<&EdgeContainer<E>> {
        self.adjacency.get(vertex)
    }

    fn container(&self, vertex: &V) -> Result<&EdgeContainer<E>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| Error::unknown(VertexRole::Vertex))
    }

    fn check_endpoints(&self, source: &V, target: &V) -> Result<()> {
        if !self.contains_vertex(source) {
            return Err(Error::unknown(VertexRole::Source));
        }
        if !self.contains_vertex(target) {
            return Err(Error::unknown(VertexRole::Target));
        }
        Ok(())
    }

    // Endpoints must already be known: every failure is reported before the first write.
    fn link(&mut self, edge: E) -> Result<()> {
        if !self.options.self_loops && edge.is_self_loop() {
            tracing::debug!("rejected self loop");
            return Err(Error::SelfLoopNotSupported);
        }
        if self.contains_edge(&edge) {
            tracing::debug!("rejected duplicate edge");
            return Err(Error::DuplicateEdge);
        }

        let Some(source) = self.adjacency.get_mut(edge.source()) else {
            debug_assert!(false, "link called with unchecked source vertex");
            return Err(Error::unknown(VertexRole::Source));
        };
        source.add_outgoing(edge.clone());

        let Some(target) = self.adjacency.get_mut(edge.target()) else {
            debug_assert!(false, "link called with unchecked target vertex");
            return Err(Error::unknown(VertexRole::Target));
        };
        target.add_incoming(edge.clone());

        self.edges.insert(edge);
        tracing::trace!(
            directed = self.options.directed,
            edges = self.edges.len(),
            "edge added"
        );
        Ok(())
    }
}

impl<V, E> std::fmt::Debug for Graph<V, E>
where
    V: Eq + Hash + std::fmt::Debug + 'static,
    E: Edge<V> + std::fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("options", &self.options)
            .field("adjacency", &self.adjacency)
            .field("edges", &self.edges)
            .finish_non_exhaustive()
    }
}
