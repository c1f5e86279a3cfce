use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::core::{Neighbors, VertexNotFound};

#[derive(Debug)]
pub(crate) struct RawVisit<V> {
    pub stack: Vec<V>,
    // A bit set over vertex indices cannot be used, because the visitor works
    // with any `Neighbors` implementation which identifies vertices by value.
    pub visited: FxHashSet<V>,
}

impl<V> RawVisit<V>
where
    V: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            visited: FxHashSet::default(),
        }
    }

    pub fn start(&mut self, root: V) {
        self.stack.clear();
        self.stack.push(root);
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.visited.clear();
    }

    pub fn next<G>(&mut self, graph: &G) -> Option<Result<V, VertexNotFound<V>>>
    where
        G: Neighbors<V> + ?Sized,
    {
        while let Some(current) = self.stack.pop() {
            // A vertex is pushed once for every visited neighbor, only the
            // first pop counts.
            if self.visited.contains(&current) {
                continue;
            }

            let neighbors = match graph.neighbors(&current) {
                Ok(neighbors) => neighbors,
                Err(error) => {
                    self.stack.clear();
                    return Some(Err(error));
                }
            };

            self.visited.insert(current.clone());
            // Pushed in ascending order, so the greatest neighbor is popped
            // first.
            self.stack.extend(neighbors);

            return Some(Ok(current));
        }

        None
    }
}
