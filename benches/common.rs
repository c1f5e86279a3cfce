#![allow(dead_code)]

use fastrand::Rng;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Generates the edges of a random graph on `vertex_count` vertices, each pair
/// being connected with probability `p`.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Skips over the pairs with geometrically distributed gaps instead of
        // flipping a coin for each of them.
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

pub fn random_adj_matrix(n: usize, density: f32) -> adjmat::AdjMatrix<usize> {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let mut graph = adjmat::AdjMatrix::with_capacity(n);

    for v in 0..n {
        graph.add_vertex(v);
    }

    let mut edges = RandomEdges::new(n, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.add_edge(u, v).unwrap();
    }

    graph
}

pub fn random_petgraph(n: usize, density: f32) -> petgraph::graph::UnGraph<usize, ()> {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let mut graph = petgraph::graph::UnGraph::with_capacity(n, n);

    let nodes = (0..n).map(|v| graph.add_node(v)).collect::<Vec<_>>();

    let mut edges = RandomEdges::new(n, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.add_edge(nodes[u], nodes[v], ());
    }

    graph
}
