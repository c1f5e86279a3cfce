use std::hash::Hash;

use super::{raw::RawVisit, Visitor};
use crate::core::{Neighbors, VertexNotFound};

/// Depth-first traversal driven by an explicit stack.
///
/// When a vertex is visited, all its neighbors are pushed onto the stack in
/// ascending order, regardless of whether they were visited already. Popping
/// an already visited vertex is a no-op. Consequently, the greatest neighbor
/// is explored first, and the order differs from the recursive pre-order
/// traversal.
///
/// The visited set survives [`start`](Dfs::start), so starting again from
/// another root visits only the vertices not reached so far. Use
/// [`reset`](Dfs::reset) to forget them.
#[derive(Debug)]
pub struct Dfs<V> {
    raw: RawVisit<V>,
}

/// Visitor returned from [`Dfs::start`].
#[derive(Debug)]
pub struct DfsRooted<'a, V> {
    raw: &'a mut RawVisit<V>,
}

impl<V> Dfs<V>
where
    V: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            raw: RawVisit::new(),
        }
    }

    pub fn start(&mut self, root: V) -> DfsRooted<'_, V> {
        self.raw.start(root);
        DfsRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn is_visited(&self, vertex: &V) -> bool {
        self.raw.visited.contains(vertex)
    }

    pub fn visited_count(&self) -> usize {
        self.raw.visited.len()
    }
}

impl<V> Default for Dfs<V>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V, G> Visitor<G> for DfsRooted<'a, V>
where
    V: Clone + Eq + Hash,
    G: Neighbors<V>,
{
    type Item = Result<V, VertexNotFound<V>>;

    /// Returns the next vertex in depth-first order.
    ///
    /// If a vertex is not in the graph, the error is returned and the
    /// traversal ends.
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}

/// Collects the vertices reachable from `start` in depth-first order.
///
/// Every reachable vertex appears exactly once, unreachable vertices don't
/// appear at all. See [`Dfs`] for the order.
///
/// # Errors
///
/// Fails with [`VertexNotFound`] if `start` is not in the graph.
///
/// # Examples
///
/// ```
/// use adjmat::{storage::AdjMatrix, visit::dfs};
///
/// let mut graph = AdjMatrix::with_capacity(4);
///
/// graph.add_edge('A', 'B').unwrap();
/// graph.add_edge('B', 'C').unwrap();
/// graph.add_edge('C', 'D').unwrap();
///
/// assert_eq!(dfs(&graph, 'A'), Ok(vec!['A', 'B', 'C', 'D']));
/// ```
pub fn dfs<V, G>(graph: &G, start: V) -> Result<Vec<V>, VertexNotFound<V>>
where
    V: Clone + Eq + Hash,
    G: Neighbors<V>,
{
    let mut dfs = Dfs::new();
    let result = dfs.start(start).into_iter(graph).collect();
    result
}
