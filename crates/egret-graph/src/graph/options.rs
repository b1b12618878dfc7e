//! Graph configuration options.

/// Structural policy of a [`Graph`](super::Graph), fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    pub directed: bool,
    pub self_loops: bool,
}

impl GraphOptions {
    pub const DIRECTED: Self = Self {
        directed: true,
        self_loops: false,
    };

    pub const UNDIRECTED: Self = Self {
        directed: false,
        self_loops: false,
    };
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self::DIRECTED
    }
}
