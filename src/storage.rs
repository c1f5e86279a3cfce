//! Graph storages.
//!
//! A _storage_ is an implementation of the graph representation. It implements
//! the traits from the [`core`](crate::core) module so that the
//! [traversals](crate::visit) can work with it.
//!
//! The [adjacency matrix](adj_matrix) provides constant-time edge insertion
//! and lookup at the price of quadratic space.
//!
//! |                | **[AdjMatrix]** |
//! |----------------|-----------------|
//! | add vertex     | _O*(1)_         |
//! | add edge       | _O(1)_          |
//! | get neighbors  | _O(V)_          |
//! | lookup vertex  | _O(1)_          |
//! | lookup edge    | _O(1)_          |
//! | space          | _O(V²)_         |
//!
//! * _V_ – vertex count
//! * _O*(..)_ – amortized complexity

pub mod adj_matrix;

#[doc(inline)]
pub use self::adj_matrix::AdjMatrix;
