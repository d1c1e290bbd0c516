use smallvec::SmallVec;
use thiserror::Error;

use crate::dims::Dims;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid maze size: {0:?}")]
    InvalidSize(Dims),
}

/// Rectangular lattice with 4-neighbor adjacency.
///
/// Nodes are all `Dims(x, y)` with `0 <= x < width` and `0 <= y < height`;
/// edges connect nodes differing by one in exactly one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGraph {
    size: Dims,
}

impl GridGraph {
    const OFFSETS: [Dims; 4] = [Dims(-1, 0), Dims(1, 0), Dims(0, -1), Dims(0, 1)];

    pub fn new(size: Dims) -> Result<Self, GenerationError> {
        if !size.all_positive() {
            return Err(GenerationError::InvalidSize(size));
        }

        Ok(GridGraph { size })
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn node_count(&self) -> usize {
        self.size.product() as usize
    }

    pub fn contains(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.size.0 && 0 <= pos.1 && pos.1 < self.size.1
    }

    /// Row-major iteration over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = Dims> {
        Dims::iter_fill(Dims::ZERO, self.size)
    }

    pub fn neighbors(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        Self::OFFSETS
            .into_iter()
            .map(|off| pos + off)
            .filter(|pos| self.contains(*pos))
            .collect()
    }

    /// Every undirected edge exactly once, via a right/bottom sweep.
    pub fn edges(&self) -> impl Iterator<Item = (Dims, Dims)> + '_ {
        self.nodes().flat_map(move |node| {
            [Dims(1, 0), Dims(0, 1)].into_iter().filter_map(move |off| {
                let other = node + off;
                self.contains(other).then_some((node, other))
            })
        })
    }
}
