//! Per-vertex edge bookkeeping for [`Graph`](super::Graph).

use super::EdgeSet;

/// Incoming and outgoing edges of one vertex.
///
/// In an undirected graph both views are backed by the same set, so an edge touching the
/// vertex is stored once no matter which endpoint it was declared from.
#[derive(Debug, Clone)]
pub enum EdgeContainer<E> {
    Directed {
        incoming: EdgeSet<E>,
        outgoing: EdgeSet<E>,
    },
    Undirected {
        edges: EdgeSet<E>,
    },
}

impl<E> EdgeContainer<E>
where
    E: Eq + std::hash::Hash,
{
    pub(in crate::graph) fn new(directed: bool) -> Self {
        if directed {
            EdgeContainer::Directed {
                incoming: EdgeSet::default(),
                outgoing: EdgeSet::default(),
            }
        } else {
            EdgeContainer::Undirected {
                edges: EdgeSet::default(),
            }
        }
    }

    pub fn incoming(&self) -> &EdgeSet<E> {
        match self {
            EdgeContainer::Directed { incoming, .. } => incoming,
            EdgeContainer::Undirected { edges } => edges,
        }
    }

    pub fn outgoing(&self) -> &EdgeSet<E> {
        match self {
            EdgeContainer::Directed { outgoing, .. } => outgoing,
            EdgeContainer::Undirected { edges } => edges,
        }
    }

    pub(in crate::graph) fn add_incoming(&mut self, edge: E) {
        match self {
            EdgeContainer::Directed { incoming, .. } => incoming.insert(edge),
            EdgeContainer::Undirected { edges } => edges.insert(edge),
        };
    }

    pub(in crate::graph) fn add_outgoing(&mut self, edge: E) {
        match self {
            EdgeContainer::Directed { outgoing, .. } => outgoing.insert(edge),
            EdgeContainer::Undirected { edges } => edges.insert(edge),
        };
    }
}
