use hashbrown::{HashMap, HashSet};
use rand::seq::SliceRandom;

use super::Random;
use crate::{dims::Dims, graph::GridGraph, maze::tree::SpanTree};

/// Wilson's algorithm: repeated loop-erased random walks.
///
/// Unlike depth-first or Kruskal generation, the resulting tree is drawn
/// uniformly at random from all spanning trees of the graph.
pub struct Wilsons;

impl Wilsons {
    pub fn generate(graph: &GridGraph, rng: &mut Random) -> SpanTree {
        let nodes: Vec<Dims> = graph.nodes().collect();
        let mut tree = SpanTree::with_capacity(nodes.len());
        let mut in_tree: HashSet<Dims> = HashSet::with_capacity(nodes.len());

        let root = *nodes.choose(rng).unwrap();
        tree.insert_node(root);
        in_tree.insert(root);

        for &start in &nodes {
            if in_tree.contains(&start) {
                continue;
            }

            // Walk until the tree is hit, erasing loops as they form by
            // overwriting the exit direction of revisited nodes.
            let mut exit: HashMap<Dims, Dims> = HashMap::new();
            let mut node = start;
            while !in_tree.contains(&node) {
                let step = *graph.neighbors(node).choose(rng).unwrap();
                exit.insert(node, step);
                node = step;
            }

            // Commit the surviving walk.
            let mut node = start;
            while !in_tree.contains(&node) {
                let step = exit[&node];
                tree.insert_edge(node, step);
                in_tree.insert(node);
                node = step;
            }
        }

        tree
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn generate(size: Dims, seed: u64) -> SpanTree {
        let graph = GridGraph::new(size).unwrap();
        let mut rng = Random::seed_from_u64(seed);
        Wilsons::generate(&graph, &mut rng)
    }

    #[test]
    fn spans_the_grid() {
        for size in [Dims(1, 1), Dims(2, 2), Dims(1, 7), Dims(5, 4), Dims(12, 9)] {
            let tree = generate(size, 42);
            let nodes = size.product() as usize;

            assert_eq!(tree.node_count(), nodes, "size {size:?}");
            assert_eq!(tree.edge_count(), nodes - 1, "size {size:?}");
            assert!(tree.is_connected(), "size {size:?}");
        }
    }

    #[test]
    fn edges_connect_grid_neighbors() {
        let tree = generate(Dims(6, 5), 7);
        for (a, b) in tree.edges() {
            assert_eq!(a.manhattan(b), 1);
        }
    }

    #[test]
    fn deterministic_for_a_seed() {
        let collect = |tree: &SpanTree| {
            let mut edges: Vec<_> = tree
                .edges()
                .map(|(a, b)| (a.into(), b.into()))
                .collect::<Vec<((i32, i32), (i32, i32))>>();
            edges.sort_unstable();
            edges
        };

        let first = generate(Dims(8, 8), 1234);
        let second = generate(Dims(8, 8), 1234);
        assert_eq!(collect(&first), collect(&second));
    }
}
