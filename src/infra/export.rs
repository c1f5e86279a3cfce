use std::{
    fmt::Display,
    io::{self, Cursor, Write},
};

use crate::storage::AdjMatrix;

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Exporter to the [DOT](https://graphviz.org/doc/info/lang.html) language.
pub struct Dot<V> {
    name: String,
    get_vertex_label: Box<dyn Fn(&V) -> String>,
}

impl<V> Dot<V> {
    pub fn new<F>(name: Option<String>, get_vertex_label: F) -> Self
    where
        F: Fn(&V) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
        }
    }

    pub fn to_string(&self, graph: &AdjMatrix<V>) -> String {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl<V: Display> Dot<V> {
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |v| format!("{v}"))
    }
}

impl<V> Export<AdjMatrix<V>> for Dot<V> {
    fn export<W: Write>(&self, graph: &AdjMatrix<V>, out: &mut W) -> io::Result<()> {
        out.write_all(b"graph ")?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for (index, vertex) in graph.iter() {
            writeln!(
                out,
                "    {index} [label={:?}];",
                (self.get_vertex_label)(vertex)
            )?;
        }

        for (src, dst) in graph.edges() {
            writeln!(out, "    {src} -- {dst};")?;
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_with_display() {
        let mut graph = AdjMatrix::new();

        graph.add_edge("a", "b").unwrap();
        graph.add_edge("c", "a").unwrap();

        let dot = Dot::with_display(None).to_string(&graph);

        assert_eq!(
            dot,
            "graph G {\n    \
                v0 [label=\"a\"];\n    \
                v1 [label=\"b\"];\n    \
                v2 [label=\"c\"];\n    \
                v0 -- v1;\n    \
                v0 -- v2;\n\
             }\n"
        );
    }

    #[test]
    fn dot_custom_label() {
        let mut graph = AdjMatrix::with_capacity(2);
        graph.add_vertex(7u32);

        let dot = Dot::new(Some(String::from("numbers")), |v: &u32| format!("#{v}"))
            .to_string(&graph);

        assert_eq!(dot, "graph numbers {\n    v0 [label=\"#7\"];\n}\n");
    }
}
