use std::fmt;

/// Stable position of a vertex in a graph storage.
///
/// The index is assigned when the vertex is inserted and never changes, since
/// vertices cannot be removed. It addresses the rows and columns of the
/// adjacency matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VertexIndex(pub usize);

impl VertexIndex {
    pub fn to_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(VertexIndex(0).to_string(), "v0");
        assert_eq!(VertexIndex(42).to_string(), "v42");
    }
}
