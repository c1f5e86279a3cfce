mod common;

use common::{RandomEdges, RANDOM_SEED};
use fastrand::Rng;
use petgraph::matrix_graph::UnMatrix;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn adjmat_add_edges<const N: usize>(density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let mut graph = adjmat::AdjMatrix::new();

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.add_edge(u, v).unwrap();
    }

    divan::black_box(graph);
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn adjmat_add_edges_preallocated<const N: usize>(density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let mut graph = adjmat::AdjMatrix::with_capacity(N);

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.add_edge(u, v).unwrap();
    }

    divan::black_box(graph);
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn petgraph_matrix_add_edges<const N: usize>(density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let mut graph = UnMatrix::<usize, ()>::with_capacity(N);
    let nodes = (0..N).map(|v| graph.add_node(v)).collect::<Vec<_>>();

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.update_edge(nodes[u], nodes[v], ());
    }

    divan::black_box(graph);
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn adjmat_neighbors<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = common::random_adj_matrix(N, density);

    bencher.bench_local(|| {
        (0..N)
            .map(|v| graph.neighbors(&v).map(|n| n.len()).unwrap_or_default())
            .sum::<usize>()
    });
}
