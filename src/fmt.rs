use crate::AdjacencyList as Graph;

mod dot {
    use crate::AdjacencyList as Graph;
    use std::fmt::Write as _;

    pub fn write(name: &str, g: &Graph, out: &mut String) {
        out.push_str("digraph ");
        out.push_str(name);
        out.push_str(" {\n");

        for n in g.nodes() {
            let _ = writeln!(out, "{}", n);
        }

        for n in g.nodes() {
            for e in g.edges(n) {
                let _ = writeln!(out, "{} -> {} [label = \"{}\"];", n, e.node, e.weight);
            }
        }

        out.push_str("\n}\n");
    }
}

/// Render the graph in graphviz dot format, edge weights as labels.
pub fn to_dot(g: &Graph) -> String {
    let mut out = String::new();
    dot::write("G", g, &mut out);
    out
}
