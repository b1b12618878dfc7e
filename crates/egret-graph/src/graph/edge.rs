//! Edge types.
//!
//! An edge is a plain value: two endpoints plus whatever payload the caller attaches. Equality
//! and hashing are structural, so two edges with the same endpoints and payload are the same edge.

use std::fmt;
use std::hash::Hash;

/// A `source -> target` relation between two vertices.
///
/// Implementations must be immutable values. [`Edge::opposite`] swaps the endpoints and keeps
/// the payload untouched; undirected graphs use it to treat `a -> b` and `b -> a` as one edge.
pub trait Edge<V>: Clone + Eq + Hash {
    fn source(&self) -> &V;

    fn target(&self) -> &V;

    /// Returns the same edge with source and target swapped.
    fn opposite(&self) -> Self;

    fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.source() == self.target()
    }
}

/// An [`Edge`] carrying a numeric weight.
pub trait WeightedEdge<V>: Edge<V> {
    const DEFAULT_WEIGHT: f64 = 0.0;

    fn weight(&self) -> f64;
}

/// Edge without payload; used by the simple graph variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefaultEdge<V> {
    source: V,
    target: V,
}

impl<V> DefaultEdge<V> {
    pub fn new(source: V, target: V) -> Self {
        Self { source, target }
    }

    pub fn into_endpoints(self) -> (V, V) {
        (self.source, self.target)
    }
}

impl<V> Edge<V> for DefaultEdge<V>
where
    V: Clone + Eq + Hash,
{
    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }

    fn opposite(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }
}

impl<V: fmt::Display> fmt::Display for DefaultEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
