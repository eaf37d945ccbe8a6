/*!
Parses plain-text world descriptions into a [`ManhattanGraph`].

The format is three sections of whitespace-separated integers:

1. the world size (advisory, kept for display only),
2. the number of vertices `n`,
3. `n` pairs of `x y` grid coordinates, assigned vertex indices in input order.

Line breaks carry no meaning beyond whitespace; coordinates may be split
across lines arbitrarily.
 */

use std::fs::File;
use std::path::Path;

use log::debug;
use memchr::memchr;
use memmap2::{Advice, Mmap};
use thiserror::Error;
use tsp_core::graph::manhattan::{ManhattanGraph, Point};

#[derive(Error, Debug)]
pub enum ParserError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("world input is not valid UTF-8")]
    InvalidUtf8,
    #[error("invalid integer {0:?} in world input")]
    InvalidInteger(String),
    #[error("couldn't read the world size")]
    MissingWorldSize,
    #[error("couldn't read the number of vertices")]
    MissingVertexCount,
    #[error("invalid number of vertices: {0}")]
    InvalidVertexCount(i32),
    #[error("expected {expected} coordinate values, found {found}")]
    WrongCoordinateCount { expected: usize, found: usize },
}

/// Parses a world file by memory-mapping it and delegating to [`parse_world`].
pub fn parse_world_file<P: AsRef<Path>>(path: P) -> Result<ManhattanGraph, ParserError> {
    // Safety: this is the only point at which we access the file, so the file
    // should not be modified otherwise.
    let mmap = unsafe { Mmap::map(&File::open(path)?)? };
    mmap.advise(Advice::Sequential)?;
    parse_world(&mmap)
}

/// Parses a world description from an in-memory byte slice (e.g. stdin).
pub fn parse_world(input: &[u8]) -> Result<ManhattanGraph, ParserError> {
    let mut world_size: Option<i32> = None;
    let mut vertex_count: Option<i32> = None;
    let mut coordinates: Vec<i32> = Vec::new();

    let mut index = 0;
    while index < input.len() {
        let line_end = memchr(b'\n', &input[index..])
            .map(|newline| index + newline)
            .unwrap_or(input.len());
        let line =
            std::str::from_utf8(&input[index..line_end]).map_err(|_| ParserError::InvalidUtf8)?;
        index = line_end + 1;

        for token in line.split_ascii_whitespace() {
            let value: i32 = token
                .parse()
                .map_err(|_| ParserError::InvalidInteger(token.to_string()))?;
            if world_size.is_none() {
                world_size = Some(value);
            } else if vertex_count.is_none() {
                vertex_count = Some(value);
            } else {
                coordinates.push(value);
            }
        }
    }

    let world_size = world_size.ok_or(ParserError::MissingWorldSize)?;
    let vertex_count = vertex_count.ok_or(ParserError::MissingVertexCount)?;
    if vertex_count < 0 {
        return Err(ParserError::InvalidVertexCount(vertex_count));
    }

    let expected = 2 * vertex_count as usize;
    if coordinates.len() != expected {
        return Err(ParserError::WrongCoordinateCount {
            expected,
            found: coordinates.len(),
        });
    }

    let points: Vec<Point> = coordinates
        .chunks_exact(2)
        .map(|pair| Point {
            x: pair[0],
            y: pair[1],
        })
        .collect();

    debug!(
        "parsed world of size {} with {} vertices",
        world_size,
        points.len()
    );
    Ok(ManhattanGraph::new(world_size, &points))
}

#[cfg(test)]
mod tests {
    use tsp_core::graph::{Graph, Node};

    use super::*;

    #[test]
    fn parses_one_pair_per_line() {
        let graph = parse_world(b"10\n3\n0 0\n1 0\n0 1\n").unwrap();
        assert_eq!(graph.world_size(), 10);
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.weight(Node(1), Node(2)), 2);
    }

    #[test]
    fn coordinates_may_share_lines() {
        let graph = parse_world(b"10 2 0 0 3 4").unwrap();
        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.weight(Node(0), Node(1)), 7);
    }

    #[test]
    fn negative_coordinates_are_accepted() {
        let graph = parse_world(b"10\n2\n0 0\n-1 -2\n").unwrap();
        assert_eq!(graph.weight(Node(0), Node(1)), 3);
    }

    #[test]
    fn empty_world_parses() {
        let graph = parse_world(b"10\n0\n").unwrap();
        assert_eq!(graph.num_vertices(), 0);
    }

    #[test]
    fn missing_sections_are_reported() {
        assert!(matches!(parse_world(b""), Err(ParserError::MissingWorldSize)));
        assert!(matches!(
            parse_world(b"10\n"),
            Err(ParserError::MissingVertexCount)
        ));
        assert!(matches!(
            parse_world(b"10\n2\n0 0\n"),
            Err(ParserError::WrongCoordinateCount {
                expected: 4,
                found: 2
            })
        ));
    }

    #[test]
    fn bad_tokens_are_reported() {
        assert!(matches!(
            parse_world(b"10\nx\n"),
            Err(ParserError::InvalidInteger(_))
        ));
        assert!(matches!(
            parse_world(b"10\n-1\n"),
            Err(ParserError::InvalidVertexCount(-1))
        ));
    }
}
