//! Payload-free graphs whose direction is part of the type.

use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use super::{DefaultEdge, Graph};

/// Directed graph over [`DefaultEdge`]s, built with [`Graph::simple_directed`].
///
/// Distinct from [`SimpleUndirectedGraph`], so an undirected graph cannot stand in for it:
///
/// ```compile_fail
/// use egret_graph::{Graph, SimpleDirectedGraph};
///
/// let g: SimpleDirectedGraph<u8> = Graph::simple_undirected();
/// ```
#[derive(Debug)]
pub struct SimpleDirectedGraph<V>(Graph<V, DefaultEdge<V>>)
where
    V: Clone + Eq + Hash + 'static;

/// Undirected graph over [`DefaultEdge`]s, built with [`Graph::simple_undirected`].
///
/// ```compile_fail
/// use egret_graph::{Graph, SimpleUndirectedGraph};
///
/// let g: SimpleUndirectedGraph<u8> = Graph::simple_directed();
/// ```
#[derive(Debug)]
pub struct SimpleUndirectedGraph<V>(Graph<V, DefaultEdge<V>>)
where
    V: Clone + Eq + Hash + 'static;

impl<V> Graph<V, DefaultEdge<V>>
where
    V: Clone + Eq + Hash + 'static,
{
    /// Directed graph without self-loops whose edges carry no payload.
    pub fn simple_directed() -> SimpleDirectedGraph<V> {
        SimpleDirectedGraph(Self::directed(|s: &V, t: &V| {
            DefaultEdge::new(s.clone(), t.clone())
        }))
    }

    /// Undirected graph without self-loops whose edges carry no payload.
    pub fn simple_undirected() -> SimpleUndirectedGraph<V> {
        SimpleUndirectedGraph(Self::undirected(|s: &V, t: &V| {
            DefaultEdge::new(s.clone(), t.clone())
        }))
    }
}

macro_rules! impl_simple_graph {
    ($name:ident) => {
        impl<V> $name<V>
        where
            V: Clone + Eq + Hash + 'static,
        {
            /// Gives up the direction marker, e.g. to pick the direction at runtime.
            pub fn into_inner(self) -> Graph<V, DefaultEdge<V>> {
                self.0
            }
        }

        impl<V> Deref for $name<V>
        where
            V: Clone + Eq + Hash + 'static,
        {
            type Target = Graph<V, DefaultEdge<V>>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<V> DerefMut for $name<V>
        where
            V: Clone + Eq + Hash + 'static,
        {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl<V> From<$name<V>> for Graph<V, DefaultEdge<V>>
        where
            V: Clone + Eq + Hash + 'static,
        {
            fn from(graph: $name<V>) -> Self {
                graph.0
            }
        }
    };
}

impl_simple_graph!(SimpleDirectedGraph);
impl_simple_graph!(SimpleUndirectedGraph);
