pub mod algorithms;
pub mod maze;
pub mod tree;

pub use maze::Maze;
pub use tree::SpanTree;
