use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::dims::Dims;

/// Undirected tree over grid nodes, kept as an adjacency map.
///
/// A well-formed tree is connected and acyclic, so there is exactly one
/// simple path between any two of its nodes. The structure itself does not
/// enforce that; generators are responsible for producing a real tree, and
/// the search engine reports defective structures instead of hanging.
#[derive(Debug, Clone, Default)]
pub struct SpanTree {
    adj: HashMap<Dims, SmallVec<[Dims; 4]>>,
}

impl SpanTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        SpanTree {
            adj: HashMap::with_capacity(nodes),
        }
    }

    /// Registers a node without connecting it to anything.
    pub fn insert_node(&mut self, node: Dims) {
        self.adj.entry(node).or_default();
    }

    pub fn insert_edge(&mut self, a: Dims, b: Dims) {
        self.adj.entry(a).or_default().push(b);
        self.adj.entry(b).or_default().push(a);
    }

    pub fn contains(&self, node: Dims) -> bool {
        self.adj.contains_key(&node)
    }

    pub fn neighbors(&self, node: Dims) -> &[Dims] {
        self.adj.get(&node).map(|n| n.as_slice()).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Every undirected edge exactly once; iteration order is not stable.
    pub fn edges(&self) -> impl Iterator<Item = (Dims, Dims)> + '_ {
        self.adj.iter().flat_map(|(&a, nbrs)| {
            nbrs.iter()
                .filter(move |&&b| (a.1, a.0) < (b.1, b.0))
                .map(move |&b| (a, b))
        })
    }

    pub fn is_connected(&self) -> bool {
        let Some(&root) = self.adj.keys().next() else {
            return false;
        };

        let mut seen = hashbrown::HashSet::with_capacity(self.adj.len());
        let mut stack = vec![root];
        seen.insert(root);
        while let Some(node) = stack.pop() {
            for &next in self.neighbors(node) {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }

        seen.len() == self.adj.len()
    }

    /// The unique simple path between two tree nodes, both endpoints
    /// included. `None` if `to` is not reachable from `from`.
    pub fn path_between(&self, from: Dims, to: Dims) -> Option<Vec<Dims>> {
        let mut parent: HashMap<Dims, Dims> = HashMap::new();
        parent.insert(from, from);

        let mut stack = vec![from];
        while let Some(node) = stack.pop() {
            if node == to {
                break;
            }
            for &next in self.neighbors(node) {
                if !parent.contains_key(&next) {
                    parent.insert(next, node);
                    stack.push(next);
                }
            }
        }

        if !parent.contains_key(&to) {
            return None;
        }

        let mut path = vec![to];
        let mut node = to;
        while node != from {
            node = parent[&node];
            path.push(node);
        }
        path.reverse();

        Some(path)
    }
}
