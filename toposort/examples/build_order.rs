//! Orders the steps of a small build pipeline so that every step runs
//! after the steps it depends on.

use toposort::Graph;

fn main() {
    let steps = ["fetch", "configure", "compile", "link", "test", "package"];

    let mut graph = Graph::new(steps.len());
    let depends = [
        (0, 1), // configure needs fetch
        (1, 2), // compile needs configure
        (2, 3), // link needs compile
        (3, 4), // test needs link
        (3, 5), // package needs link
        (4, 5), // package needs test
    ];
    for (before, after) in depends {
        graph.add_edge(before, after);
    }

    for v in graph.topological_sort() {
        println!("{}", steps[v]);
    }
}
