use std::{collections::BTreeSet, fmt, hash::Hash, iter::Enumerate, slice};

use rustc_hash::FxHashMap;

use crate::{
    core::{AddEdgeError, AddEdgeErrorKind, Graph, Neighbors, VertexIndex, VertexNotFound},
    visit,
};

/// Undirected, unweighted graph stored as an adjacency matrix.
///
/// Vertices are identified by their value and get a stable [`VertexIndex`]
/// on insertion. A graph created by [`AdjMatrix::with_capacity`] never holds
/// more vertices than the given capacity, a graph created by
/// [`AdjMatrix::new`] is unbounded.
#[derive(Debug, Clone)]
pub struct AdjMatrix<V> {
    matrix: raw::Matrix,
    vertices: Vec<V>,
    indices: FxHashMap<V, VertexIndex>,
    capacity: Option<usize>,
    n_edges: usize,
}

impl<V> AdjMatrix<V> {
    pub fn new() -> Self {
        Self {
            matrix: raw::Matrix::with_capacity(8),
            vertices: Vec::new(),
            indices: FxHashMap::default(),
            capacity: None,
            n_edges: 0,
        }
    }

    /// Creates a graph that holds at most `capacity` vertices.
    ///
    /// The matrix for all `capacity` vertices is allocated upfront.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            matrix: raw::Matrix::with_capacity(capacity),
            vertices: Vec::with_capacity(capacity),
            indices: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            capacity: Some(capacity),
            n_edges: 0,
        }
    }

    /// Returns the maximum number of vertices, or `None` if the graph is
    /// unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == Some(0)
    }

    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    pub fn vertex(&self, index: VertexIndex) -> Option<&V> {
        self.vertices.get(index.to_usize())
    }

    /// Iterates over the vertices together with their indices, in insertion
    /// order.
    pub fn iter(&self) -> VerticesIter<'_, V> {
        VerticesIter {
            inner: self.vertices.iter().enumerate(),
        }
    }

    /// Iterates over the edges, each reported once with the lower index
    /// first.
    pub fn edges(&self) -> EdgesIter<'_> {
        EdgesIter {
            inner: self.matrix.ones(),
        }
    }

    /// Iterates over the indices of the vertices adjacent to `src`, in
    /// ascending order.
    ///
    /// An index out of bounds has no neighbors.
    pub fn neighbor_indices(&self, src: VertexIndex) -> NeighborIndices<'_> {
        let vertex_count = if src.to_usize() < self.vertex_count() {
            self.vertex_count()
        } else {
            0
        };

        NeighborIndices {
            matrix: &self.matrix,
            src: src.to_usize(),
            other: 0,
            vertex_count,
        }
    }

    pub fn contains_edge_between(&self, src: VertexIndex, dst: VertexIndex) -> bool {
        let n = self.vertex_count();
        src.to_usize() < n && dst.to_usize() < n && self.matrix.contains(src.0, dst.0)
    }

    fn remaining(&self) -> Option<usize> {
        self.capacity
            .map(|capacity| capacity.saturating_sub(self.vertices.len()))
    }
}

impl<V> Default for AdjMatrix<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AdjMatrix<V>
where
    V: Clone + Eq + Hash + Ord,
{
    /// Returns a copy of the vertices in insertion order.
    pub fn vertices(&self) -> Vec<V> {
        self.vertices.clone()
    }

    pub fn index_of(&self, vertex: &V) -> Option<VertexIndex> {
        self.indices.get(vertex).copied()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.indices.contains_key(vertex)
    }

    pub fn neighbors(&self, vertex: &V) -> Result<BTreeSet<V>, VertexNotFound<V>> {
        let src = self.find(vertex)?;

        Ok(self
            .neighbor_indices(src)
            .map(|index| self.vertices[index.to_usize()].clone())
            .collect())
    }

    pub fn degree(&self, vertex: &V) -> Result<usize, VertexNotFound<V>> {
        let src = self.find(vertex)?;
        Ok(self.neighbor_indices(src).count())
    }

    /// Returns `true` if both vertices are present and connected.
    pub fn contains_edge(&self, src: &V, dst: &V) -> bool {
        match (self.index_of(src), self.index_of(dst)) {
            (Some(src), Some(dst)) => self.contains_edge_between(src, dst),
            _ => false,
        }
    }

    /// Adds a vertex unless it is already present or the graph is full.
    ///
    /// The two cases are deliberately indistinguishable to the caller. Use
    /// [`contains_vertex`](AdjMatrix::contains_vertex) or
    /// [`is_full`](AdjMatrix::is_full) to tell them apart.
    pub fn add_vertex(&mut self, vertex: V) {
        if self.contains_vertex(&vertex) || self.is_full() {
            return;
        }

        self.push_vertex(vertex);
    }

    /// Connects two vertices.
    ///
    /// Endpoints that are not in the graph yet are inserted, `src` first. Both
    /// endpoints are validated before anything is changed, so a failed call
    /// leaves the graph untouched. Connecting already connected vertices is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// * [`SelfLoop`](AddEdgeErrorKind::SelfLoop) if `src == dst`.
    /// * [`CapacityExhausted`](AddEdgeErrorKind::CapacityExhausted) if the new
    ///   endpoints do not fit into the remaining capacity.
    pub fn add_edge(&mut self, src: V, dst: V) -> Result<(), AddEdgeError<V>> {
        if src == dst {
            return Err(AddEdgeError::new(src, dst, AddEdgeErrorKind::SelfLoop));
        }

        let src_index = self.index_of(&src);
        let dst_index = self.index_of(&dst);

        let required = src_index.is_none() as usize + dst_index.is_none() as usize;

        if let Some(remaining) = self.remaining() {
            if required > remaining {
                #[cfg(feature = "tracing")]
                tracing::debug!(required, remaining, "edge rejected, capacity exhausted");

                return Err(AddEdgeError::new(
                    src,
                    dst,
                    AddEdgeErrorKind::CapacityExhausted,
                ));
            }
        }

        let src_index = match src_index {
            Some(index) => index,
            None => self.push_vertex(src),
        };

        let dst_index = match dst_index {
            Some(index) => index,
            None => self.push_vertex(dst),
        };

        if self.matrix.insert(src_index.to_usize(), dst_index.to_usize()) {
            self.n_edges += 1;
        }

        Ok(())
    }

    /// Traverses the graph depth-first from `start`.
    ///
    /// See [`visit::dfs`] for the exact visiting order.
    pub fn dfs(&self, start: V) -> Result<Vec<V>, VertexNotFound<V>> {
        visit::dfs(self, start)
    }

    fn find(&self, vertex: &V) -> Result<VertexIndex, VertexNotFound<V>> {
        self.index_of(vertex)
            .ok_or_else(|| VertexNotFound(vertex.clone()))
    }

    fn push_vertex(&mut self, vertex: V) -> VertexIndex {
        let index = VertexIndex(self.vertices.len());

        self.matrix.ensure_capacity(index.to_usize() + 1);
        self.indices.insert(vertex.clone(), index);
        self.vertices.push(vertex);

        index
    }
}

impl<V> Neighbors<V> for AdjMatrix<V>
where
    V: Clone + Eq + Hash + Ord,
{
    fn neighbors(&self, vertex: &V) -> Result<BTreeSet<V>, VertexNotFound<V>> {
        AdjMatrix::neighbors(self, vertex)
    }
}

impl<V> Graph<V> for AdjMatrix<V>
where
    V: Clone + Eq + Hash + Ord,
{
    fn vertices(&self) -> Vec<V> {
        AdjMatrix::vertices(self)
    }

    fn add_vertex(&mut self, vertex: V) {
        AdjMatrix::add_vertex(self, vertex)
    }

    fn add_edge(&mut self, src: V, dst: V) -> Result<(), AddEdgeError<V>> {
        AdjMatrix::add_edge(self, src, dst)
    }
}

impl<V: fmt::Display> fmt::Display for AdjMatrix<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertices:")?;
        for vertex in self.vertices.iter() {
            write!(f, " {vertex}")?;
        }
        writeln!(f)?;

        writeln!(f, "Adjacency matrix:")?;
        let n = self.vertices.len();
        for row in 0..n {
            for col in 0..n {
                if col > 0 {
                    write!(f, " ")?;
                }

                write!(f, "{}", self.matrix.contains(row, col) as usize)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

pub struct VerticesIter<'a, V> {
    inner: Enumerate<slice::Iter<'a, V>>,
}

impl<'a, V> Iterator for VerticesIter<'a, V> {
    type Item = (VertexIndex, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, vertex)| (VertexIndex(index), vertex))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for VerticesIter<'_, V> {}

pub struct EdgesIter<'a> {
    inner: raw::Ones<'a>,
}

impl Iterator for EdgesIter<'_> {
    type Item = (VertexIndex, VertexIndex);

    fn next(&mut self) -> Option<Self::Item> {
        // Cells are in the lower triangle, that is, row >= col.
        self.inner
            .next()
            .map(|(row, col)| (VertexIndex(col), VertexIndex(row)))
    }
}

pub struct NeighborIndices<'a> {
    matrix: &'a raw::Matrix,
    src: usize,
    other: usize,
    vertex_count: usize,
}

impl Iterator for NeighborIndices<'_> {
    type Item = VertexIndex;

    fn next(&mut self) -> Option<Self::Item> {
        while self.other < self.vertex_count {
            let dst = self.other;
            self.other += 1;

            if dst != self.src && self.matrix.contains(self.src, dst) {
                return Some(VertexIndex(dst));
            }
        }

        None
    }
}

mod raw {
    use bitvec::{prelude::*, slice::IterOnes};

    use crate::common::matrix::{coords, index, size_of};

    // Only the lower triangle is stored, so cells (i, j) and (j, i) are the
    // same bit.
    #[derive(Debug, Clone, Default)]
    pub struct Matrix {
        data: BitVec,
        capacity: usize,
    }

    impl Matrix {
        pub fn with_capacity(capacity: usize) -> Self {
            if capacity == 0 {
                return Self::default();
            }

            let capacity = capacity.next_power_of_two();

            Self {
                data: bitvec![0; size_of(capacity)],
                capacity,
            }
        }

        pub fn ensure_capacity(&mut self, capacity: usize) {
            if self.capacity < capacity {
                self.capacity = (self.capacity * 2).max(capacity.next_power_of_two());
                // Appending rows does not move the existing cells.
                self.data.resize(size_of(self.capacity), false);

                #[cfg(feature = "tracing")]
                tracing::debug!(capacity = self.capacity, "adjacency matrix grown");
            }
        }

        pub fn contains(&self, row: usize, col: usize) -> bool {
            self.data[index(row, col)]
        }

        /// Sets the cell and returns `true` if it was not set before.
        pub fn insert(&mut self, row: usize, col: usize) -> bool {
            !self.data.replace(index(row, col), true)
        }

        pub fn ones(&self) -> Ones<'_> {
            Ones {
                inner: self.data.iter_ones(),
            }
        }
    }

    pub struct Ones<'a> {
        inner: IterOnes<'a, usize, Lsb0>,
    }

    impl Iterator for Ones<'_> {
        type Item = (usize, usize);

        fn next(&mut self) -> Option<Self::Item> {
            self.inner.next().map(coords)
        }
    }
}
