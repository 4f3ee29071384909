//! Puzzle text format parsing and serialization
//!
//! The format is line oriented: `#` comments and blank lines are ignored,
//! the first significant line is `ROWS COLS`, and each following line is
//! `LABEL TOP RIGHT BOTTOM LEFT`, one tile per line in row-major order.

use crate::board::puzzle::Puzzle;
use crate::board::tile::Tile;
use crate::io::configuration::MAX_BOARD_DIMENSION;
use crate::io::error::{Result, SolverError, puzzle_format};
use std::fs;
use std::path::Path;

/// Load and parse a puzzle file
///
/// # Errors
///
/// Returns an error if the file cannot be read, the text does not follow
/// the format, or the described board fails validation.
pub fn load_puzzle(path: &Path) -> Result<Puzzle> {
    let contents = fs::read_to_string(path).map_err(|source| SolverError::PuzzleLoad {
        path: path.to_path_buf(),
        source,
    })?;
    parse_puzzle(&contents, path)
}

/// Parse puzzle text; `path` is only used in error messages
///
/// # Errors
///
/// Returns a line-numbered format error for malformed text, or a
/// validation error for a structurally invalid board.
pub fn parse_puzzle(contents: &str, path: &Path) -> Result<Puzzle> {
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| puzzle_format(path, 1, &"missing 'ROWS COLS' header"))?;
    let (rows, cols) = parse_header(header, path, header_line)?;

    let mut grid: Vec<Vec<Tile>> = Vec::with_capacity(rows);
    let mut current: Vec<Tile> = Vec::with_capacity(cols);
    let mut last_line = header_line;

    for _ in 0..rows * cols {
        let (line_number, line) = lines.next().ok_or_else(|| {
            puzzle_format(
                path,
                last_line,
                &format!("expected {} tile lines after the header", rows * cols),
            )
        })?;
        last_line = line_number;
        current.push(parse_tile(line, path, line_number)?);
        if current.len() == cols {
            grid.push(std::mem::take(&mut current));
        }
    }

    if let Some((line_number, _)) = lines.next() {
        return Err(puzzle_format(
            path,
            line_number,
            &"unexpected content after the last tile",
        ));
    }

    Puzzle::from_rows(grid)
}

fn parse_header(header: &str, path: &Path, line_number: usize) -> Result<(usize, usize)> {
    let mut tokens = header.split_whitespace();
    let rows = parse_dimension(tokens.next(), path, line_number)?;
    let cols = parse_dimension(tokens.next(), path, line_number)?;
    if tokens.next().is_some() {
        return Err(puzzle_format(
            path,
            line_number,
            &"header must be exactly 'ROWS COLS'",
        ));
    }
    Ok((rows, cols))
}

fn parse_dimension(token: Option<&str>, path: &Path, line_number: usize) -> Result<usize> {
    let token =
        token.ok_or_else(|| puzzle_format(path, line_number, &"header must be 'ROWS COLS'"))?;
    let value: usize = token.parse().map_err(|parse_error| {
        puzzle_format(
            path,
            line_number,
            &format!("dimension '{token}' is not a positive integer: {parse_error}"),
        )
    })?;
    if value == 0 || value > MAX_BOARD_DIMENSION {
        return Err(puzzle_format(
            path,
            line_number,
            &format!("dimension {value} must be between 1 and {MAX_BOARD_DIMENSION}"),
        ));
    }
    Ok(value)
}

fn parse_tile(line: &str, path: &Path, line_number: usize) -> Result<Tile> {
    let mut tokens = line.split_whitespace();
    let label = tokens
        .next()
        .ok_or_else(|| puzzle_format(path, line_number, &"missing tile label"))?;

    let mut edges = [0; 4];
    for (index, slot) in edges.iter_mut().enumerate() {
        let token = tokens.next().ok_or_else(|| {
            puzzle_format(
                path,
                line_number,
                &format!("tile '{label}' has {index} edge values, expected 4"),
            )
        })?;
        *slot = token.parse().map_err(|parse_error| {
            puzzle_format(
                path,
                line_number,
                &format!("edge value '{token}' is not an integer: {parse_error}"),
            )
        })?;
    }

    if tokens.next().is_some() {
        return Err(puzzle_format(
            path,
            line_number,
            &format!("tile '{label}' has more than 4 edge values"),
        ));
    }

    Ok(Tile::new(label, edges))
}

/// Serialize a puzzle into the text format
pub fn serialize_puzzle(puzzle: &Puzzle) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", puzzle.rows(), puzzle.cols()));
    for tile in puzzle.grid() {
        let [top, right, bottom, left] = tile.edges;
        out.push_str(&format!(
            "{} {top} {right} {bottom} {left}\n",
            tile.label
        ));
    }
    out
}

/// Write a puzzle file in the text format
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_puzzle(puzzle: &Puzzle, path: &Path) -> Result<()> {
    fs::write(path, serialize_puzzle(puzzle)).map_err(|source| SolverError::FileSystem {
        path: path.to_path_buf(),
        operation: "write puzzle",
        source,
    })
}
