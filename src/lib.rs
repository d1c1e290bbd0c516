pub mod dims;
pub mod graph;
pub mod maze;
pub mod ser;
pub mod solve;

pub use dims::Dims;
pub use graph::{GenerationError, GridGraph};
pub use maze::algorithms::{Random, Wilsons};
pub use maze::{Maze, SpanTree};
pub use ser::SerError;
pub use solve::{Solution, SolveError, SolveMethod};
