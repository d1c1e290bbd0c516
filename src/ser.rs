//! Tab-separated on-disk formats for mazes and node paths.
//!
//! A maze file holds one spanning-tree edge per line, a path file one node
//! per line; both start with a header line naming the columns.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use thiserror::Error;

use crate::{dims::Dims, maze::Maze};

pub const MAZE_HEADER: &str = "n1x\tn1y\tn2x\tn2y";
pub const PATH_HEADER: &str = "x\ty";

#[derive(Debug, Error)]
pub enum SerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Writes the maze's tree as one edge per line. The writer is flushed
/// before returning, so an error means the output must be discarded.
pub fn write_maze<W: Write>(maze: &Maze, mut out: W) -> Result<(), SerError> {
    writeln!(out, "{MAZE_HEADER}")?;
    for (a, b) in maze.tree().edges() {
        writeln!(out, "{}\t{}\t{}\t{}", a.0, a.1, b.0, b.1)?;
    }
    out.flush()?;

    Ok(())
}

/// Writes a node sequence (a solution path or a search history) in order.
pub fn write_path<W: Write>(path: &[Dims], mut out: W) -> Result<(), SerError> {
    writeln!(out, "{PATH_HEADER}")?;
    for node in path {
        writeln!(out, "{}\t{}", node.0, node.1)?;
    }
    out.flush()?;

    Ok(())
}

/// Reads the path format back; the node order is preserved exactly.
pub fn read_path<R: BufRead>(input: R) -> Result<Vec<Dims>, SerError> {
    let mut lines = input.lines();
    check_header(lines.next().transpose()?, PATH_HEADER)?;

    let mut path = Vec::new();
    for (index, line) in lines.enumerate() {
        let number = index + 2;
        let line = line?;

        let mut fields = line.split('\t');
        let x = parse_coord(fields.next(), number)?;
        let y = parse_coord(fields.next(), number)?;
        if fields.next().is_some() {
            return Err(parse_error(number, "trailing fields".into()));
        }

        path.push(Dims(x, y));
    }

    Ok(path)
}

/// Reads the maze format back as a list of undirected edges.
pub fn read_maze_edges<R: BufRead>(input: R) -> Result<Vec<(Dims, Dims)>, SerError> {
    let mut lines = input.lines();
    check_header(lines.next().transpose()?, MAZE_HEADER)?;

    let mut edges = Vec::new();
    for (index, line) in lines.enumerate() {
        let number = index + 2;
        let line = line?;

        let mut fields = line.split('\t');
        let ax = parse_coord(fields.next(), number)?;
        let ay = parse_coord(fields.next(), number)?;
        let bx = parse_coord(fields.next(), number)?;
        let by = parse_coord(fields.next(), number)?;
        if fields.next().is_some() {
            return Err(parse_error(number, "trailing fields".into()));
        }

        edges.push((Dims(ax, ay), Dims(bx, by)));
    }

    Ok(edges)
}

pub fn save_maze(maze: &Maze, path: &Path) -> Result<(), SerError> {
    write_maze(maze, BufWriter::new(File::create(path)?))
}

pub fn save_path(nodes: &[Dims], path: &Path) -> Result<(), SerError> {
    write_path(nodes, BufWriter::new(File::create(path)?))
}

pub fn load_path(path: &Path) -> Result<Vec<Dims>, SerError> {
    read_path(BufReader::new(File::open(path)?))
}

fn check_header(line: Option<String>, expected: &str) -> Result<(), SerError> {
    match line {
        Some(line) if line == expected => Ok(()),
        Some(_) => Err(parse_error(1, format!("expected header {expected:?}"))),
        None => Err(parse_error(1, "missing header".into())),
    }
}

fn parse_coord(field: Option<&str>, line: usize) -> Result<i32, SerError> {
    let field = field.ok_or_else(|| parse_error(line, "missing coordinate".into()))?;
    field
        .parse()
        .map_err(|_| parse_error(line, format!("bad coordinate {field:?}")))
}

fn parse_error(line: usize, reason: String) -> SerError {
    SerError::Parse { line, reason }
}
