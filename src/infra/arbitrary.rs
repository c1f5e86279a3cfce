use std::fmt;

use arbitrary::Arbitrary;

use crate::core::{AddEdgeError, Graph};

#[derive(Debug, Arbitrary, Clone, PartialEq, Eq)]
pub enum MutOp<V> {
    AddVertex(V),
    AddEdge(V, V),
}

#[derive(Debug, PartialEq, Eq)]
pub enum MutOpResult<V> {
    AddVertex,
    AddEdge(Result<(), AddEdgeError<V>>),
}

impl<V> MutOp<V> {
    pub fn apply<G>(self, graph: &mut G) -> MutOpResult<V>
    where
        G: Graph<V>,
    {
        match self {
            MutOp::AddVertex(vertex) => {
                graph.add_vertex(vertex);
                MutOpResult::AddVertex
            }
            MutOp::AddEdge(src, dst) => MutOpResult::AddEdge(graph.add_edge(src, dst)),
        }
    }
}

#[derive(Arbitrary)]
pub struct MutOpsSeq<V>(pub Vec<MutOp<V>>);

impl<V> IntoIterator for MutOpsSeq<V> {
    type Item = MutOp<V>;
    type IntoIter = std::vec::IntoIter<MutOp<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V> MutOpsSeq<V> {
    /// Applies the operations while printing them as Rust code, so that a
    /// failing fuzz input can be turned into a unit test.
    pub fn replay<G>(self, graph: &mut G)
    where
        V: fmt::Debug,
        G: Graph<V>,
    {
        println!("let mut graph; // graph storage");
        println!();

        for op in self {
            match &op {
                MutOp::AddVertex(vertex) => println!("graph.add_vertex({vertex:?});"),
                MutOp::AddEdge(src, dst) => println!("let _ = graph.add_edge({src:?}, {dst:?});"),
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<V: fmt::Debug> fmt::Debug for MutOpsSeq<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_mut_ops_seq`")
    }
}

#[cfg(test)]
mod tests {
    use arbitrary::Unstructured;

    use super::*;
    use crate::{
        infra::{modeling::ModelGraph, testing::check_consistency},
        storage::AdjMatrix,
    };

    #[test]
    fn fuzz_replay_mut_ops_seq() {
        // Paste a failing sequence printed by the fuzzer here.
        let ops = MutOpsSeq(vec![
            MutOp::AddVertex(3i8),
            MutOp::AddEdge(3, 3),
            MutOp::AddEdge(-1, 3),
            MutOp::AddVertex(-1),
        ]);

        let mut graph = AdjMatrix::with_capacity(2);
        ops.replay(&mut graph);

        check_consistency(&graph).unwrap();
        assert_eq!(graph.vertices(), vec![3, -1]);
    }

    #[test]
    fn same_results_as_model() {
        let data = (0..=255u8).cycle().take(4096).collect::<Vec<_>>();
        let mut u = Unstructured::new(&data);
        let ops = MutOpsSeq::<i8>::arbitrary(&mut u).unwrap();

        let mut graph = AdjMatrix::with_capacity(16);
        let mut model = ModelGraph::with_capacity(16);

        for op in ops {
            let expected = op.clone().apply(&mut model);
            assert_eq!(op.apply(&mut graph), expected);
            check_consistency(&graph).unwrap();
        }

        assert_eq!(Graph::vertices(&graph), model.vertices());
        assert_eq!(graph.edge_count(), model.edge_count());
    }
}
