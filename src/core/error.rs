use std::fmt;

use thiserror::Error;

/// The queried vertex is not present in the graph.
///
/// Carries the vertex back to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("vertex does not exist")]
pub struct VertexNotFound<V>(pub V);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<V> {
    pub src: V,
    pub dst: V,
    pub kind: AddEdgeErrorKind,
}

impl<V> AddEdgeError<V> {
    pub fn new(src: V, dst: V, kind: AddEdgeErrorKind) -> Self {
        Self { src, dst, kind }
    }

    /// Returns the endpoints that were passed to the failed insertion.
    pub fn into_endpoints(self) -> (V, V) {
        (self.src, self.dst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    /// At least one endpoint is new and there is no room left for it.
    CapacityExhausted,
    SelfLoop,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::CapacityExhausted => "the graph has exhausted its capacity",
            AddEdgeErrorKind::SelfLoop => "the graph does not allow self-loops",
        };
        f.write_str(reason)
    }
}
