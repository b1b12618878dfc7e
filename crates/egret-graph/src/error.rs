use std::fmt;

/// Which argument of an operation referenced a vertex missing from the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRole {
    Source,
    Target,
    Vertex,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexRole::Source => f.write_str("source vertex"),
            VertexRole::Target => f.write_str("target vertex"),
            VertexRole::Vertex => f.write_str("vertex"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unknown {role}")]
    UnknownVertex { role: VertexRole },

    #[error("Self loops are not supported")]
    SelfLoopNotSupported,

    #[error("Edge should be unique")]
    DuplicateEdge,
}

impl Error {
    pub(crate) fn unknown(role: VertexRole) -> Self {
        Error::UnknownVertex { role }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
