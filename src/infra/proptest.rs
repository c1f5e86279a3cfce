use std::{fmt, hash::Hash};

use proptest::{
    collection::vec,
    prelude::any,
    sample::Index,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};

use crate::{core::VertexIndex, storage::AdjMatrix};

pub fn graph_undirected<S: Strategy>(vertex: S) -> GraphStrategy<S> {
    GraphStrategy::new(vertex)
}

#[derive(Debug, Clone)]
pub struct GraphStrategy<S> {
    vertex: S,
    params: StrategyParams,
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<S: Strategy> GraphStrategy<S> {
    pub fn new(vertex: S) -> Self {
        Self::with_params(vertex, StrategyParams::default())
    }

    pub fn with_params(vertex: S, params: StrategyParams) -> Self {
        Self { vertex, params }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph_undirected(any::<u8>()).max_size(16).connected()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(connected);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
    delegate_builder_fn!(capacity, capacity: usize);
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    connected: bool,
    // (0, 1] - ratio of the complete graph edge count used as the upper bound
    // of randomly generated edges
    density: f32,
    capacity: Option<usize>,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 64,
            connected: false,
            density: 0.1,
            capacity: None,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    /// Every generated graph is connected. A random spanning tree is
    /// generated first, the random edges are added on top of it.
    pub fn connected(self) -> Self {
        Self {
            connected: true,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.02)
    }

    /// Generated graphs are created by [`AdjMatrix::with_capacity`].
    /// Generated vertices that do not fit are dropped.
    pub fn capacity(self, capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..self
        }
    }

    fn max_edges(&self) -> usize {
        let complete = self.max_size * self.max_size.saturating_sub(1) / 2;
        (complete as f32 * self.density).ceil() as usize
    }

    fn build<V>(&self, vertices: Vec<V>, parents: Vec<Index>, edges: Vec<(Index, Index)>) -> AdjMatrix<V>
    where
        V: Clone + Eq + Hash + Ord + fmt::Debug,
    {
        fn connect<V>(graph: &mut AdjMatrix<V>, u: usize, v: usize)
        where
            V: Clone + Eq + Hash + Ord + fmt::Debug,
        {
            let u = graph.vertex(VertexIndex(u)).cloned();
            let v = graph.vertex(VertexIndex(v)).cloned();

            if let (Some(u), Some(v)) = (u, v) {
                graph
                    .add_edge(u, v)
                    .expect("endpoints are present and distinct");
            }
        }

        let mut graph = match self.capacity {
            Some(capacity) => AdjMatrix::with_capacity(capacity),
            None => AdjMatrix::new(),
        };

        // Duplicate values and values over the capacity are silently
        // dropped.
        for vertex in vertices {
            graph.add_vertex(vertex);
        }

        let n = graph.vertex_count();

        if self.connected {
            for (v, parent) in (1..n).zip(parents) {
                connect(&mut graph, v, parent.index(v));
            }
        }

        if n > 1 {
            for (u, v) in edges {
                let (u, v) = (u.index(n), v.index(n));
                if u != v {
                    connect(&mut graph, u, v);
                }
            }
        }

        graph
    }
}

impl<S> Strategy for GraphStrategy<S>
where
    S: Strategy + Clone + 'static,
    S::Value: Clone + Eq + Hash + Ord + fmt::Debug + 'static,
{
    type Tree = Box<dyn ValueTree<Value = AdjMatrix<S::Value>>>;
    type Value = AdjMatrix<S::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let params = self.params;

        (
            vec(self.vertex.clone(), 0..=params.max_size),
            vec(any::<Index>(), params.max_size),
            vec(any::<(Index, Index)>(), 0..=params.max_edges()),
        )
            .prop_map(move |(vertices, parents, edges)| params.build(vertices, parents, edges))
            .boxed()
            .new_tree(runner)
    }
}
