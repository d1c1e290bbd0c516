mod frontier;

use std::str::FromStr;

use hashbrown::HashSet;
use rand::{seq::SliceRandom as _, Rng as _};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{dims::Dims, maze::algorithms::Random, maze::tree::SpanTree};
use frontier::Frontier;

/// Frontier discipline used when exploring a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveMethod {
    Dfs,
    Bfs,
    Heuristic,
}

impl FromStr for SolveMethod {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(SolveMethod::Dfs),
            "bfs" => Ok(SolveMethod::Bfs),
            "heuristic" => Ok(SolveMethod::Heuristic),
            _ => Err(SolveError::UnknownMethod(s.to_owned())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("unknown solve method {0:?}")]
    UnknownMethod(String),
    #[error("frontier exhausted before the end was reached")]
    ExhaustedFrontier,
}

/// Outcome of one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Continuous walk over tree edges, backtracking included.
    pub history: Vec<Dims>,
    /// Tree path from start to end.
    pub path: Vec<Dims>,
}

/// Tie-break noise for heuristic ranks, small enough to never reorder
/// entries whose integer components differ.
fn jitter(rng: &mut Random) -> f64 {
    0.01 * rng.gen::<f64>()
}

/// Explores `tree` from `start` until `end` is popped from the frontier.
///
/// All three methods share this loop and differ only in the frontier's pop
/// discipline. The history records every move of the exploration as one
/// continuous walk: whenever the frontier jumps to an unrelated branch, the
/// walk between the two nodes is spelled out step by step.
///
/// Fails with [`SolveError::ExhaustedFrontier`] when the frontier drains
/// before the end is reached, which is only possible if `tree` does not
/// actually span a component containing both endpoints.
pub(crate) fn search(
    tree: &SpanTree,
    start: Dims,
    end: Dims,
    method: SolveMethod,
    rng: &mut Random,
) -> Result<Solution, SolveError> {
    let mut frontier = Frontier::new(method);
    let rank = match method {
        SolveMethod::Heuristic => start.manhattan(end) as f64 + jitter(rng),
        _ => 0.0,
    };
    frontier.push(vec![start], rank);

    let mut visited: HashSet<Dims> = HashSet::new();
    let mut history: Vec<Dims> = Vec::new();

    while let Some(path) = frontier.pop() {
        let node = *path.last().expect("frontier paths are never empty");

        // A node can enter the frontier once per distinct route reaching
        // it; only the first pop counts. Later ones are skipped before
        // touching the history.
        if !visited.insert(node) {
            continue;
        }

        match history.last() {
            Some(&prev) => {
                let walk = tree
                    .path_between(prev, node)
                    .expect("expanded nodes share a component");
                history.extend_from_slice(&walk[1..]);
            }
            None => history.push(node),
        }

        if node == end {
            log::debug!(
                "{:?} done, {} moves, solution of {} nodes",
                method,
                history.len(),
                path.len()
            );
            return Ok(Solution { history, path });
        }

        let mut neighbors: SmallVec<[Dims; 4]> = SmallVec::from_slice(tree.neighbors(node));
        neighbors.shuffle(rng);

        for &next in &neighbors {
            if visited.contains(&next) {
                continue;
            }

            let mut extended = path.clone();
            extended.push(next);

            let rank = match method {
                SolveMethod::Heuristic => {
                    next.manhattan(end) as f64 + path.len() as f64 + jitter(rng)
                }
                _ => 0.0,
            };
            frontier.push(extended, rank);
        }
    }

    log::warn!("{:?} exhausted the frontier without reaching {:?}", method, end);
    Err(SolveError::ExhaustedFrontier)
}
