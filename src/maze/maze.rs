use crate::{
    dims::Dims,
    graph::{GenerationError, GridGraph},
    maze::{
        algorithms::{Random, Wilsons},
        tree::SpanTree,
    },
    solve::{self, Solution, SolveError, SolveMethod},
};

/// Grid maze in the form of a random spanning tree.
///
/// The tree is built once at construction and never mutated afterwards, so
/// repeated solve calls against one maze are fully independent.
#[derive(Debug, Clone)]
pub struct Maze {
    size: Dims,
    start: Dims,
    end: Dims,
    tree: SpanTree,
}

impl Maze {
    /// Generates a maze of the given size, entered at the top-left corner
    /// and left at the bottom-right one.
    pub fn generate(size: Dims, rng: &mut Random) -> Result<Maze, GenerationError> {
        let graph = GridGraph::new(size)?;
        let tree = Wilsons::generate(&graph, rng);

        log::debug!(
            "generated {}x{} maze, {} tree edges",
            size.0,
            size.1,
            tree.edge_count()
        );

        Ok(Maze {
            size,
            start: Dims::ZERO,
            end: size - Dims(1, 1),
            tree,
        })
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn end(&self) -> Dims {
        self.end
    }

    pub fn tree(&self) -> &SpanTree {
        &self.tree
    }

    /// Explores the tree from start until end is reached, returning the
    /// move-by-move exploration trace along with the solution path.
    pub fn solve(&self, method: SolveMethod, rng: &mut Random) -> Result<Solution, SolveError> {
        solve::search(&self.tree, self.start, self.end, method, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    #[test]
    fn endpoints_sit_in_opposite_corners() {
        let mut rng = Random::seed_from_u64(3);
        let maze = Maze::generate(Dims(7, 4), &mut rng).unwrap();

        assert_eq!(maze.size(), Dims(7, 4));
        assert_eq!(maze.start(), Dims(0, 0));
        assert_eq!(maze.end(), Dims(6, 3));
        assert_eq!(maze.tree().node_count(), 28);
        assert_eq!(maze.tree().edge_count(), 27);
        assert!(maze.tree().is_connected());
    }

    #[test]
    fn rejects_non_positive_sizes() {
        let mut rng = Random::seed_from_u64(3);
        assert_eq!(
            Maze::generate(Dims(0, 4), &mut rng).unwrap_err(),
            GenerationError::InvalidSize(Dims(0, 4))
        );
        assert_eq!(
            Maze::generate(Dims(5, -2), &mut rng).unwrap_err(),
            GenerationError::InvalidSize(Dims(5, -2))
        );
    }

    #[test]
    fn repeated_solves_are_independent() {
        let mut rng = Random::seed_from_u64(11);
        let maze = Maze::generate(Dims(6, 6), &mut rng).unwrap();

        let first = maze
            .solve(SolveMethod::Bfs, &mut Random::seed_from_u64(1))
            .unwrap();
        let second = maze
            .solve(SolveMethod::Bfs, &mut Random::seed_from_u64(1))
            .unwrap();

        assert_eq!(first, second);
    }
}
