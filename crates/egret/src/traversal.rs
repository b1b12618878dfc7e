//! Path search between two vertices.

use std::collections::VecDeque;
use std::hash::Hash;

use crate::error::Result;
use crate::graph::{Edge, EdgeSet, Error as GraphError, Graph, VertexRole};

/// Finds a path between two vertices of a graph.
pub trait TraversalService<V, E>
where
    V: Eq + Hash + 'static,
    E: Edge<V> + 'static,
{
    /// Returns the edges of a path from `source` to `target`, in walking order.
    ///
    /// An empty result means there is no path. `source == target` is reported as no path.
    /// Fails with [`VertexRole::Source`]/[`VertexRole::Target`] `UnknownVertex` errors when an
    /// endpoint is not in `graph`. Endpoints are checked before the `source == target` case, so
    /// asking for a path from a missing vertex to itself is an error rather than an empty path.
    fn get_path(&self, graph: &Graph<V, E>, source: &V, target: &V) -> Result<Vec<E>>;
}

/// Iterative depth-first search.
///
/// The returned path is *a* path, not the shortest one. Edges leaving a vertex are stored in a
/// hash set, so when several paths exist which one comes back depends on set iteration order
/// and is unspecified.
///
/// In undirected graphs every edge on the returned path is oriented along the walk (its source
/// is the vertex the walk arrives from), substituting [`Edge::opposite`] where the stored edge
/// was declared the other way round.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsTraversal;

impl<V, E> TraversalService<V, E> for DfsTraversal
where
    V: Eq + Hash + 'static,
    E: Edge<V> + 'static,
{
    fn get_path(&self, graph: &Graph<V, E>, source: &V, target: &V) -> Result<Vec<E>> {
        if !graph.contains_vertex(source) {
            return Err(GraphError::UnknownVertex {
                role: VertexRole::Source,
            }
            .into());
        }
        if !graph.contains_vertex(target) {
            return Err(GraphError::UnknownVertex {
                role: VertexRole::Target,
            }
            .into());
        }

        if source == target {
            return Ok(Vec::new());
        }

        // Nothing leaves the source or nothing reaches the target: no edge the search could
        // pop would ever end on `target`.
        if graph.outgoing_edges(source)?.is_empty() || graph.incoming_edges(target)?.is_empty() {
            tracing::trace!("path search skipped: isolated endpoint");
            return Ok(Vec::new());
        }

        Search::new(graph).run(source, target)
    }
}

/// A frontier entry: `edge` sits `level` hops away from the source.
#[derive(Debug)]
struct Step<E> {
    level: usize,
    edge: E,
}

struct Search<'g, V, E>
where
    V: Eq + Hash + 'static,
    E: Edge<V> + 'static,
{
    graph: &'g Graph<V, E>,
    directed: bool,
    // Used as a stack: pushed and popped at the front.
    frontier: VecDeque<Step<E>>,
    // Edges from the source down to the vertex being expanded.
    path: Vec<E>,
    // Level of the last popped step.
    level: usize,
    visited: EdgeSet<E>,
}

impl<'g, V, E> Search<'g, V, E>
where
    V: Eq + Hash + 'static,
    E: Edge<V> + 'static,
{
    fn new(graph: &'g Graph<V, E>) -> Self {
        Self {
            graph,
            directed: graph.is_directed(),
            frontier: VecDeque::new(),
            path: Vec::new(),
            level: 1,
            visited: EdgeSet::default(),
        }
    }

    fn run(mut self, source: &V, target: &V) -> Result<Vec<E>> {
        let initial = self.push_neighbors(source, 1)?;
        tracing::debug!(
            directed = self.directed,
            initial,
            edges = self.graph.edge_count(),
            "path search started"
        );

        while let Some(Step { level, edge }) = self.frontier.pop_front() {
            if level < self.level {
                self.backtrack(level);
            }
            self.level = level;
            debug_assert_eq!(self.path.len() + 1, level);

            if self.is_visited(&edge) {
                continue;
            }

            if edge.target() == target {
                self.path.push(edge);
                tracing::debug!(length = self.path.len(), "path found");
                return Ok(self.path);
            }

            let pushed = self.push_neighbors(edge.target(), level + 1)?;
            if pushed > 0 {
                self.path.push(edge.clone());
            }
            self.visited.insert(edge);
        }

        tracing::debug!(visited = self.visited.len(), "path search exhausted");
        Ok(Vec::new())
    }

    /// Drops the path entries of branches that were abandoned between `self.level` and `level`.
    fn backtrack(&mut self, level: usize) {
        let unwind = self.level - level;
        let keep = self.path.len().saturating_sub(unwind);
        tracing::trace!(from = self.level, to = level, "backtracking");
        self.path.truncate(keep);
    }

    /// Pushes every edge leaving `vertex` at `level` and returns how many were pushed.
    fn push_neighbors(&mut self, vertex: &V, level: usize) -> Result<usize> {
        let graph = self.graph;
        let edges = graph.outgoing_edges(vertex)?;
        for edge in edges {
            let edge = self.oriented_from(edge, vertex);
            self.frontier.push_front(Step { level, edge });
        }
        Ok(edges.len())
    }

    // Undirected containers hold edges as declared; flip them so the path chains head to tail.
    fn oriented_from(&self, edge: &E, vertex: &V) -> E {
        if self.directed || edge.source() == vertex {
            edge.clone()
        } else {
            edge.opposite()
        }
    }

    fn is_visited(&self, edge: &E) -> bool {
        if self.visited.contains(edge) {
            return true;
        }
        !self.directed && self.visited.contains(&edge.opposite())
    }
}
