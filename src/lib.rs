//! Unweighted, undirected graph backed by an adjacency matrix, with an
//! iterative depth-first traversal.
//!
//! Vertices are identified by their values. Each vertex gets a stable position
//! on insertion, which addresses its row and column in the matrix.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use adjmat::{core::AddEdgeErrorKind, storage::AdjMatrix};
//!
//! let mut graph = AdjMatrix::with_capacity(4);
//!
//! for v in ['A', 'B', 'C', 'D'] {
//!     graph.add_vertex(v);
//! }
//!
//! graph.add_edge('A', 'B').unwrap();
//! graph.add_edge('B', 'C').unwrap();
//! graph.add_edge('C', 'D').unwrap();
//!
//! assert_eq!(graph.neighbors(&'B'), Ok(BTreeSet::from(['A', 'C'])));
//! assert_eq!(graph.dfs('A'), Ok(vec!['A', 'B', 'C', 'D']));
//!
//! // The graph is full.
//! let error = graph.add_edge('A', 'E').unwrap_err();
//! assert_eq!(error.kind, AddEdgeErrorKind::CapacityExhausted);
//!
//! print!("{graph}");
//! ```

pub mod common;
pub mod core;
pub mod infra;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{Graph, Neighbors},
        visit::Visitor,
    };
}

#[doc(inline)]
pub use self::{storage::AdjMatrix, visit::dfs};

#[cfg(test)]
mod tests {
    use crate::{
        core::{Graph, Neighbors},
        infra::modeling::ModelGraph,
        storage::AdjMatrix,
    };

    fn require_neighbors<V>(_: impl Neighbors<V>) {}
    fn require_graph<V>(_: impl Graph<V>) {}

    #[test]
    fn trait_impl() {
        let mut graph = AdjMatrix::<u32>::new();

        require_neighbors::<u32>(&graph);
        require_neighbors::<u32>(&mut graph);
        require_neighbors::<u32>(graph.clone());

        require_graph::<u32>(&mut graph);
        require_graph::<u32>(graph.clone());

        let mut model = ModelGraph::<u32>::new();

        require_neighbors::<u32>(&model);
        require_graph::<u32>(&mut model);
    }

    #[test]
    fn send_sync() {
        fn require_send_sync<T: Send + Sync>() {}

        require_send_sync::<AdjMatrix<String>>();
    }
}
