//! Solution rendering and output files
//!
//! Presentation layer over solved boards: each board row renders as three
//! text lines, a framed line of top values, a line of left value, label and
//! right value, and a framed line of bottom values.

use crate::board::solution::Solution;
use crate::io::error::{Result, SolverError};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Render one solved board as framed text
pub fn render_solution(solution: &Solution) -> String {
    let mut out = String::new();
    for row in solution.grid().outer_iter() {
        let tops: Vec<String> = row
            .iter()
            .map(|tile| {
                let [top, _, _, _] = tile.edges;
                format!("⌜ {top} ⌝")
            })
            .collect();
        let middles: Vec<String> = row
            .iter()
            .map(|tile| {
                let [_, right, _, left] = tile.edges;
                format!("{left} {} {right}", tile.label)
            })
            .collect();
        let bottoms: Vec<String> = row
            .iter()
            .map(|tile| {
                let [_, _, bottom, _] = tile.edges;
                format!("⌞ {bottom} ⌟")
            })
            .collect();

        let _ = writeln!(out, "{}", tops.join(" "));
        let _ = writeln!(out, "{}", middles.join(" "));
        let _ = writeln!(out, "{}", bottoms.join(" "));
    }
    out
}

/// Render a solutions listing with a `-` separator after each board
pub fn render_solutions(solutions: &[Solution]) -> String {
    let mut out = String::from("Solutions:\n");
    for solution in solutions {
        out.push_str(&render_solution(solution));
        out.push_str("-\n");
    }
    out
}

/// Write a solutions listing to a file
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_solutions(solutions: &[Solution], path: &Path) -> Result<()> {
    fs::write(path, render_solutions(solutions)).map_err(|source| SolverError::FileSystem {
        path: path.to_path_buf(),
        operation: "write solutions",
        source,
    })
}
