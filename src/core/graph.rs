use std::collections::BTreeSet;

use super::error::{AddEdgeError, VertexNotFound};

/// Access to the neighbors of a vertex.
///
/// This is the only capability needed by the [traversals](crate::visit).
pub trait Neighbors<V> {
    /// Returns the set of vertices adjacent to `vertex`.
    ///
    /// The vertex itself is never part of the set. The set is ordered by `V`'s
    /// [`Ord`] implementation, which determines the order in which a
    /// depth-first traversal discovers siblings.
    fn neighbors(&self, vertex: &V) -> Result<BTreeSet<V>, VertexNotFound<V>>;
}

/// An undirected, unweighted graph with vertices identified by their value.
pub trait Graph<V>: Neighbors<V> {
    /// Returns a copy of the vertices in insertion order.
    fn vertices(&self) -> Vec<V>;

    /// Adds a vertex unless it is already present or the graph is full.
    ///
    /// The two cases are not distinguished.
    fn add_vertex(&mut self, vertex: V);

    /// Connects two vertices, inserting the ones that are not present yet.
    fn add_edge(&mut self, src: V, dst: V) -> Result<(), AddEdgeError<V>>;
}

impl<V, G> Neighbors<V> for &G
where
    G: Neighbors<V> + ?Sized,
{
    fn neighbors(&self, vertex: &V) -> Result<BTreeSet<V>, VertexNotFound<V>> {
        (**self).neighbors(vertex)
    }
}

impl<V, G> Neighbors<V> for &mut G
where
    G: Neighbors<V> + ?Sized,
{
    fn neighbors(&self, vertex: &V) -> Result<BTreeSet<V>, VertexNotFound<V>> {
        (**self).neighbors(vertex)
    }
}

impl<V, G> Graph<V> for &mut G
where
    G: Graph<V> + ?Sized,
{
    fn vertices(&self) -> Vec<V> {
        (**self).vertices()
    }

    fn add_vertex(&mut self, vertex: V) {
        (**self).add_vertex(vertex)
    }

    fn add_edge(&mut self, src: V, dst: V) -> Result<(), AddEdgeError<V>> {
        (**self).add_edge(src, dst)
    }
}
