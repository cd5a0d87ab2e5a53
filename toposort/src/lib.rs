//! Topological ordering of directed graphs.
//!
//! The order is computed as a reversed depth-first postorder: every vertex
//! is pushed after all of its successors have been visited, so reversing
//! the postorder puts each vertex before everything it points to.

/// A directed graph over the vertices `0..n`, stored as adjacency lists.
#[derive(Debug, Clone)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Create a graph with the given number of vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertices],
        }
    }

    /// The number of vertices in the graph.
    #[inline]
    pub fn vertices(&self) -> usize {
        self.adj.len()
    }

    /// Add the directed edge `u -> v`, meaning `u` must come before `v`.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is not a vertex of the graph.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        assert!(
            u < self.vertices() && v < self.vertices(),
            "vertex out of range"
        );
        self.adj[u].push(v);
    }

    /// Returns the vertices in topological order: for every edge `u -> v`,
    /// `u` appears before `v`.
    ///
    /// Every vertex appears exactly once, including vertices with no edges.
    /// Cycles are not detected; if the graph contains one, the returned
    /// order still contains every vertex but cannot respect every edge.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut graph = toposort::Graph::new(3);
    /// graph.add_edge(2, 0);
    /// graph.add_edge(0, 1);
    /// assert_eq!(graph.topological_sort(), [2, 0, 1]);
    /// ```
    pub fn topological_sort(&self) -> Vec<usize> {
        let mut visited = vec![false; self.vertices()];
        let mut order = Vec::with_capacity(self.vertices());
        for v in 0..self.vertices() {
            if !visited[v] {
                self.visit(v, &mut visited, &mut order);
            }
        }
        order.reverse();
        order
    }

    fn visit(&self, v: usize, visited: &mut [bool], order: &mut Vec<usize>) {
        visited[v] = true;
        for &next in &self.adj[v] {
            if !visited[next] {
                self.visit(next, visited, order);
            }
        }
        order.push(v);
    }
}
