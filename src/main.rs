//! CLI entry point for the edge-matching puzzle solver

use clap::Parser;
use edgematch::io::cli::{Cli, FileProcessor};

fn main() -> edgematch::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
