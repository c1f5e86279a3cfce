//! Graph traversal.
//!
//! The traversal is **iterative**, that is, it doesn't use recursion. This
//! means that
//!
//! * &#128077; visitor is lazy and can be stopped without tricks,
//! * &#128077; visitor state is independent on the graph itself, allowing
//!   mutations during traversal,
//! * &#128077; traversal is not limited by the size of the program stack.

pub mod dfs;

pub(crate) mod raw;

#[doc(inline)]
pub use self::dfs::{dfs, Dfs, DfsRooted};

/// Trait for a specific graph traversal approach.
#[doc(alias = "Walker")]
pub trait Visitor<G> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph and thus allows modifications to the graph
    /// between individual visitor steps.
    ///
    /// # Examples
    ///
    /// ```
    /// use adjmat::{
    ///     storage::AdjMatrix,
    ///     visit::{Dfs, Visitor},
    /// };
    ///
    /// let mut graph = AdjMatrix::new();
    /// graph.add_edge("a", "b").unwrap();
    ///
    /// let mut dfs = Dfs::new();
    /// let mut visitor = dfs.start("a");
    ///
    /// assert_eq!(visitor.visit_next(&graph), Some(Ok("a")));
    ///
    /// // The traversal continues over the current state of the graph.
    /// graph.add_edge("b", "c").unwrap();
    ///
    /// assert_eq!(visitor.visit_next(&graph), Some(Ok("b")));
    /// assert_eq!(visitor.visit_next(&graph), Some(Ok("c")));
    /// assert_eq!(visitor.visit_next(&graph), None);
    /// ```
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for Iter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for IntoIter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}
