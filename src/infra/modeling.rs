//! A straightforward graph implementation used as a reference in tests and
//! fuzzing.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::{AddEdgeError, AddEdgeErrorKind, Graph, Neighbors, VertexNotFound};

/// Adjacency sets keyed by vertex, with the same capacity rules as
/// [`AdjMatrix`](crate::storage::AdjMatrix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelGraph<V> {
    order: Vec<V>,
    adjacency: BTreeMap<V, BTreeSet<V>>,
    capacity: Option<usize>,
}

impl<V: Clone + Ord> ModelGraph<V> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: BTreeMap::new(),
            capacity: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    fn fits(&self, additional: usize) -> bool {
        self.capacity
            .map_or(true, |capacity| self.order.len() + additional <= capacity)
    }

    fn insert(&mut self, vertex: V) {
        self.order.push(vertex.clone());
        self.adjacency.insert(vertex, BTreeSet::new());
    }
}

impl<V: Clone + Ord> Default for ModelGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Ord> Neighbors<V> for ModelGraph<V> {
    fn neighbors(&self, vertex: &V) -> Result<BTreeSet<V>, VertexNotFound<V>> {
        self.adjacency
            .get(vertex)
            .cloned()
            .ok_or_else(|| VertexNotFound(vertex.clone()))
    }
}

impl<V: Clone + Ord> Graph<V> for ModelGraph<V> {
    fn vertices(&self) -> Vec<V> {
        self.order.clone()
    }

    fn add_vertex(&mut self, vertex: V) {
        if !self.adjacency.contains_key(&vertex) && self.fits(1) {
            self.insert(vertex);
        }
    }

    fn add_edge(&mut self, src: V, dst: V) -> Result<(), AddEdgeError<V>> {
        if src == dst {
            return Err(AddEdgeError::new(src, dst, AddEdgeErrorKind::SelfLoop));
        }

        let required = [&src, &dst]
            .into_iter()
            .filter(|v| !self.adjacency.contains_key(*v))
            .count();

        if !self.fits(required) {
            return Err(AddEdgeError::new(
                src,
                dst,
                AddEdgeErrorKind::CapacityExhausted,
            ));
        }

        for vertex in [&src, &dst] {
            if !self.adjacency.contains_key(vertex) {
                self.insert(vertex.clone());
            }
        }

        if let Some(neighbors) = self.adjacency.get_mut(&src) {
            neighbors.insert(dst.clone());
        }

        if let Some(neighbors) = self.adjacency.get_mut(&dst) {
            neighbors.insert(src);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_rules() {
        let mut graph = ModelGraph::with_capacity(2);

        graph.add_edge(1, 2).unwrap();
        graph.add_vertex(3);

        assert_eq!(graph.vertices(), vec![1, 2]);
        assert_eq!(
            graph.add_edge(1, 3).map_err(|e| e.kind),
            Err(AddEdgeErrorKind::CapacityExhausted)
        );
        assert_eq!(graph.edge_count(), 1);
    }
}
