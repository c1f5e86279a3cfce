#![no_main]

use libfuzzer_sys::fuzz_target;

use adjmat::{
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    storage::AdjMatrix,
};

fuzz_target!(|input: (Option<u8>, MutOpsSeq<i8>)| {
    let (capacity, ops) = input;

    let mut graph = match capacity {
        Some(capacity) => AdjMatrix::with_capacity(capacity as usize),
        None => AdjMatrix::new(),
    };

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
