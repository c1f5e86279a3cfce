//! Core traits and types shared by graph storages and traversals.
//!
//! The [`Neighbors`] trait is the minimal capability a traversal needs. The
//! [`Graph`] trait extends it with the vertex list and the mutating
//! operations.

pub mod error;
pub mod index;

mod graph;

pub use error::{AddEdgeError, AddEdgeErrorKind, VertexNotFound};
pub use graph::*;
pub use index::VertexIndex;
