use std::hash::Hash;

use thiserror::Error;

use crate::{core::VertexIndex, storage::AdjMatrix};

/// Creates a graph in which every pair of vertices `0..vertex_count` is
/// connected.
pub fn create_complete(vertex_count: usize) -> AdjMatrix<usize> {
    let mut graph = AdjMatrix::with_capacity(vertex_count);

    for v in 0..vertex_count {
        graph.add_vertex(v);
    }

    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            graph
                .add_edge(u, v)
                .expect("both endpoints are present");
        }
    }

    graph
}

/// Creates a path `0 - 1 - ... - (vertex_count - 1)`.
pub fn create_path(vertex_count: usize) -> AdjMatrix<usize> {
    let mut graph = AdjMatrix::with_capacity(vertex_count);

    if vertex_count == 0 {
        return graph;
    }

    graph.add_vertex(0);

    for v in 1..vertex_count {
        graph
            .add_edge(v - 1, v)
            .expect("new endpoint fits into the capacity");
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex count ({0}) exceeds the capacity ({1})")]
    CapacityExceeded(usize, usize),
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("vertex {0} (zero-based) is not found under its own index")]
    IndexMapInvalid(usize),
    #[error("vertex {0} (zero-based) has a self-loop")]
    SelfLoop(usize),
    #[error("vertex {0} is a neighbor of vertex {1}, but not vice versa")]
    Asymmetric(usize, usize),
    #[error("edge between {0} and {1} points out of the vertex range")]
    EdgeOutOfBounds(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
}

pub fn check_consistency<V>(graph: &AdjMatrix<V>) -> Result<(), ConsistencyCheckError>
where
    V: Clone + Eq + Hash + Ord,
{
    fn cmp<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
    where
        F: FnOnce(usize, usize) -> ConsistencyCheckError,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let vertex_count = graph.vertex_count();

    if let Some(capacity) = graph.capacity() {
        if vertex_count > capacity {
            return Err(ConsistencyCheckError::CapacityExceeded(
                vertex_count,
                capacity,
            ));
        }
    }

    cmp(
        graph.iter().count(),
        vertex_count,
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;

    for (index, vertex) in graph.iter() {
        if graph.index_of(vertex) != Some(index) {
            return Err(ConsistencyCheckError::IndexMapInvalid(index.to_usize()));
        }

        if graph.contains_edge_between(index, index) {
            return Err(ConsistencyCheckError::SelfLoop(index.to_usize()));
        }

        for other in graph.neighbor_indices(index) {
            if !graph.neighbor_indices(other).any(|v| v == index) {
                return Err(ConsistencyCheckError::Asymmetric(
                    other.to_usize(),
                    index.to_usize(),
                ));
            }
        }
    }

    let edge_count = graph.edge_count();
    let mut edges = 0;

    for (u, v) in graph.edges() {
        if u.to_usize() >= vertex_count || v.to_usize() >= vertex_count {
            return Err(ConsistencyCheckError::EdgeOutOfBounds(
                u.to_usize(),
                v.to_usize(),
            ));
        }

        edges += 1;
    }

    cmp(
        edges,
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    let deg_sum = (0..vertex_count)
        .map(|index| graph.neighbor_indices(VertexIndex(index)).count())
        .sum::<usize>();

    cmp(
        deg_sum,
        2 * edge_count,
        ConsistencyCheckError::HandshakingLemma,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistent_builders() {
        for n in [0, 1, 2, 7, 33] {
            assert_eq!(check_consistency(&create_complete(n)), Ok(()));
            assert_eq!(check_consistency(&create_path(n)), Ok(()));
        }
    }

    #[test]
    fn builders_full() {
        assert!(create_path(5).is_full());
        assert!(create_complete(5).is_full());
        assert_eq!(create_path(0).vertex_count(), 0);
    }

    #[test]
    fn error_message() {
        assert_eq!(
            ConsistencyCheckError::HandshakingLemma(3, 4).to_string(),
            "sum of degrees (3) is not equal to doubled edge count (4)"
        );
    }
}
