//! Command-line interface for batch solving puzzle files

use crate::generator::PuzzleGenerator;
use crate::io::configuration::{
    DEFAULT_GENERATED_COLS, DEFAULT_GENERATED_ROWS, DEFAULT_SEED, OUTPUT_SUFFIX, PUZZLE_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::format::{load_puzzle, write_puzzle};
use crate::io::progress::ProgressManager;
use crate::io::render::write_solutions;
use crate::solver::solve;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "edgematch")]
#[command(
    version,
    about = "Solve edge-matching tile puzzles by exhaustive backtracking"
)]
/// Command-line arguments for the puzzle solving tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input puzzle file or directory to process (output path with --generate)
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Generate a random solvable puzzle instead of solving
    #[arg(short, long)]
    pub generate: bool,

    /// Random seed for puzzle generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Rows in a generated puzzle
    #[arg(short = 'R', long, default_value_t = DEFAULT_GENERATED_ROWS)]
    pub rows: usize,

    /// Columns in a generated puzzle
    #[arg(short = 'C', long, default_value_t = DEFAULT_GENERATED_COLS)]
    pub cols: usize,

    /// Report solution counts without writing solution files
    #[arg(short = 'n', long)]
    pub count_only: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Output path for a puzzle input: the input stem plus the solutions suffix
pub fn output_path_for(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{}.txt", stem.to_string_lossy(), OUTPUT_SUFFIX);

    input_path.parent().map_or_else(
        || PathBuf::from(&output_name),
        |parent| parent.join(&output_name),
    )
}

/// Orchestrates batch solving of puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, puzzle generation, loading,
    /// or output writing fails
    pub fn process(&mut self) -> Result<()> {
        if self.cli.generate {
            return self.generate_puzzle();
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    // Allow print for user feedback on the generated file
    #[allow(clippy::print_stderr)]
    fn generate_puzzle(&self) -> Result<()> {
        let mut generator = PuzzleGenerator::new(self.cli.seed);
        let puzzle = generator.generate(self.cli.rows, self.cli.cols)?;
        write_puzzle(&puzzle, &self.cli.target)?;

        if !self.cli.quiet {
            eprintln!(
                "Generated {}x{} puzzle (seed {}): {}",
                self.cli.rows,
                self.cli.cols,
                self.cli.seed,
                self.cli.target.display()
            );
        }
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &format!("target file must have the .{PUZZLE_EXTENSION} extension"),
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a puzzle file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() || self.cli.count_only {
            return true;
        }

        let output_path = output_path_for(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let puzzle = load_puzzle(input_path)?;
        let solutions = solve(&puzzle);
        let elapsed = start_time.elapsed();

        if !self.cli.count_only {
            write_solutions(&solutions, &output_path_for(input_path))?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, solutions.len(), elapsed);
        }

        Ok(())
    }
}
