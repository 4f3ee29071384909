//! Tests for command-line interface parsing and output naming

#[cfg(test)]
mod tests {
    use clap::Parser;
    use edgematch::io::cli::{Cli, output_path_for};
    use edgematch::io::configuration::{
        DEFAULT_GENERATED_COLS, DEFAULT_GENERATED_ROWS, DEFAULT_SEED,
    };
    use std::path::{Path, PathBuf};

    // Tests CLI parsing with only the required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let args = vec!["edgematch", "test.puzzle"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.target, PathBuf::from("test.puzzle"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.rows, DEFAULT_GENERATED_ROWS);
        assert_eq!(cli.cols, DEFAULT_GENERATED_COLS);
        assert!(!cli.generate);
        assert!(!cli.quiet);
        assert!(!cli.count_only);
    }

    // Tests CLI parsing with all available arguments
    // Verified by changing flag definitions
    #[test]
    fn test_cli_parse_all_args() {
        let args = vec![
            "edgematch",
            "new.puzzle",
            "--generate",
            "--seed",
            "123",
            "--rows",
            "3",
            "--cols",
            "5",
            "--quiet",
            "--no-skip",
            "--count-only",
        ];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.target, PathBuf::from("new.puzzle"));
        assert!(cli.generate);
        assert_eq!(cli.seed, 123);
        assert_eq!(cli.rows, 3);
        assert_eq!(cli.cols, 5);
        assert!(cli.quiet);
        assert!(cli.no_skip);
        assert!(cli.count_only);
    }

    // Tests short flag parsing (-g, -s, -R, -C, -n, -q)
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let args = vec![
            "edgematch",
            "test.puzzle",
            "-g",
            "-s",
            "999",
            "-R",
            "2",
            "-C",
            "6",
            "-n",
            "-q",
        ];
        let cli = Cli::parse_from(args);

        assert!(cli.generate);
        assert_eq!(cli.seed, 999);
        assert_eq!(cli.rows, 2);
        assert_eq!(cli.cols, 6);
        assert!(cli.count_only);
        assert!(cli.quiet);
    }

    // Tests that a missing target is a parse error
    // Verified by making the target argument optional
    #[test]
    fn test_missing_target_rejected() {
        let result = Cli::try_parse_from(vec!["edgematch"]);
        assert!(result.is_err());
    }

    // Tests file skip behavior based on --no-skip flag
    // Verified by inverting boolean logic in skip_existing method
    #[test]
    fn test_skip_existing_logic() {
        let cli_default = Cli::parse_from(vec!["edgematch", "test.puzzle"]);
        assert!(cli_default.skip_existing());

        let cli_no_skip = Cli::parse_from(vec!["edgematch", "test.puzzle", "--no-skip"]);
        assert!(!cli_no_skip.skip_existing());
    }

    // Tests progress display based on --quiet flag
    // Verified by inverting quiet flag logic
    #[test]
    fn test_should_show_progress() {
        let cli_default = Cli::parse_from(vec!["edgematch", "test.puzzle"]);
        assert!(cli_default.should_show_progress());

        let cli_quiet = Cli::parse_from(vec!["edgematch", "test.puzzle", "--quiet"]);
        assert!(!cli_quiet.should_show_progress());
    }

    // Tests output naming: input stem plus the solutions suffix
    // Verified by dropping the parent directory from the result
    #[test]
    fn test_output_path_naming() {
        assert_eq!(
            output_path_for(Path::new("boards/first.puzzle")),
            PathBuf::from("boards/first_solutions.txt")
        );
        assert_eq!(
            output_path_for(Path::new("bare.puzzle")),
            PathBuf::from("bare_solutions.txt")
        );
    }
}
