#![no_main]

use libfuzzer_sys::fuzz_target;

use adjmat::{
    core::{Graph, Neighbors},
    infra::{arbitrary::MutOpsSeq, modeling::ModelGraph},
    storage::AdjMatrix,
    visit::dfs,
};

fuzz_target!(|input: (u8, MutOpsSeq<i8>)| {
    let (capacity, ops) = input;

    let mut adj_matrix = AdjMatrix::with_capacity(capacity as usize);
    let mut model = ModelGraph::with_capacity(capacity as usize);

    for op in ops {
        let expected = op.clone().apply(&mut model);
        let actual = op.apply(&mut adj_matrix);

        assert_eq!(actual, expected, "operation results differ");
    }

    assert_eq!(Graph::vertices(&adj_matrix), model.vertices());

    for vertex in model.vertices() {
        assert_eq!(
            Neighbors::neighbors(&adj_matrix, &vertex),
            model.neighbors(&vertex),
            "neighbors of {vertex} differ"
        );
        assert_eq!(dfs(&adj_matrix, vertex), dfs(&model, vertex));
    }
});
