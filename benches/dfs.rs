mod common;

use common::{random_adj_matrix, random_petgraph};
use petgraph::{graph::NodeIndex, visit::Dfs};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1, 0.5])]
fn adjmat_dfs<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_adj_matrix(N, density);

    bencher.bench_local(|| adjmat::dfs(&graph, 0).map(|visited| visited.len()));
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1, 0.5])]
fn petgraph_dfs<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_petgraph(N, density);

    bencher.bench_local(|| {
        let mut dfs = Dfs::new(&graph, NodeIndex::new(0));
        let mut count = 0;

        while dfs.next(&graph).is_some() {
            count += 1;
        }

        count
    });
}
