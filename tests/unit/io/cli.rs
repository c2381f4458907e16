//! Tests for command-line parsing and the search runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use nqueens::io::cli::{Cli, SolveRunner, missing_usage, parse_error_exit_code};
    use nqueens::io::configuration::{DEFAULT_BOARD_SIZE, VERSION_STRING};

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("nqueens").chain(args.iter().copied()))
    }

    fn try_parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("nqueens").chain(args.iter().copied()))
    }

    // Tests CLI parsing with no arguments uses the Eight Queens default
    // Verified by changing the default board size
    #[test]
    fn test_cli_parse_defaults() {
        let cli = parse(&[]);

        assert_eq!(cli.board_size, DEFAULT_BOARD_SIZE);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.should_show_progress());
    }

    // Tests positional size and long flags
    // Verified by renaming the verbose flag
    #[test]
    fn test_cli_parse_all_args() {
        let cli = parse(&["6", "--verbose", "--quiet"]);

        assert_eq!(cli.board_size, 6);
        assert!(cli.verbose);
        assert!(cli.quiet);
        assert!(!cli.should_show_progress());
    }

    // Tests short flag parsing (-v, -q)
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = parse(&["-v", "-q", "5"]);

        assert_eq!(cli.board_size, 5);
        assert!(cli.verbose);
        assert!(cli.quiet);
    }

    // Tests zero, negative and non-integer sizes are usage errors with status 1
    // Verified by accepting zero in the value parser
    #[test]
    fn test_invalid_board_sizes_rejected() {
        for value in ["0", "abc", "4.5"] {
            let error = try_parse(&[value]).unwrap_err();
            assert_eq!(parse_error_exit_code(&error), 1, "value {value}");
            assert!(
                error.to_string().contains("Invalid board size"),
                "missing reason for {value}: {error}"
            );
        }

        let negative = try_parse(&["--", "-3"]).unwrap_err();
        assert_eq!(parse_error_exit_code(&negative), 1);
    }

    // Tests help requests exit successfully without an extra usage line
    // Verified by mapping every parse error to status 1
    #[test]
    fn test_help_exits_zero() {
        for flag in ["--help", "-h"] {
            let error = try_parse(&[flag]).unwrap_err();
            assert_eq!(parse_error_exit_code(&error), 0, "flag {flag}");
            assert!(missing_usage(&error).is_none(), "flag {flag}");
        }
    }

    // Tests rejected board sizes get the usage line clap leaves out
    // Verified by printing only clap's own error
    #[test]
    fn test_invalid_board_size_reports_usage() {
        for value in ["0", "abc"] {
            let error = try_parse(&[value]).unwrap_err();
            let usage = missing_usage(&error);
            let reported = format!("{}{}", usage.unwrap_or_default(), error.render());

            assert!(reported.contains("Usage: nqueens"), "no usage for {value}: {reported}");
            assert!(reported.contains("BOARD_SIZE"), "value {value}");
            assert_eq!(reported.matches("Usage:").count(), 1, "value {value}");
        }
    }

    // Tests errors that already carry usage are not given a second copy
    // Verified by always prepending the usage line
    #[test]
    fn test_unknown_flag_usage_once() {
        let error = try_parse(&["--bogus"]).unwrap_err();
        let reported = format!("{}{}", missing_usage(&error).unwrap_or_default(), error.render());

        assert_eq!(reported.matches("Usage:").count(), 1, "{reported}");
    }

    // Tests -V and --version parse as a version request
    // Verified by removing the short version flag
    #[test]
    fn test_version_flag_parses() {
        for flag in ["--version", "-V"] {
            let cli = parse(&[flag]);
            assert!(cli.version, "flag {flag}");
            assert_eq!(cli.board_size, DEFAULT_BOARD_SIZE);
        }
        assert!(!parse(&[]).version);
    }

    // Tests a version request prints the version line and skips the search
    // Verified by running the search before checking the version flag
    #[test]
    fn test_execute_version() {
        let runner = SolveRunner::new(parse(&["-V", "-q"]));
        let mut out = Vec::new();

        let report = runner.execute(&mut out).unwrap();

        assert!(report.is_none());
        assert_eq!(String::from_utf8(out).unwrap(), format!("{VERSION_STRING}\n"));
    }

    // Tests execute without a version request runs the search
    // Verified by returning early from execute
    #[test]
    fn test_execute_runs_search() {
        let runner = SolveRunner::new(parse(&["4", "-q"]));
        let mut out = Vec::new();

        let report = runner.execute(&mut out).unwrap().unwrap();

        assert_eq!(report.solution_count, 2);
        assert!(String::from_utf8(out).unwrap().starts_with("Number of iterations: 60\n"));
    }

    // Tests unknown flags are usage errors
    // Verified by allowing external arguments
    #[test]
    fn test_unknown_flag_rejected() {
        let error = try_parse(&["--bogus"]).unwrap_err();
        assert_eq!(parse_error_exit_code(&error), 1);
    }

    // Tests the runner prints only statistics without --verbose
    // Verified by always rendering boards
    #[test]
    fn test_runner_stats_only() {
        let runner = SolveRunner::new(parse(&["4", "--quiet"]));
        let mut out = Vec::new();

        let report = runner.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(report.solution_count, 2);
        assert_eq!(text, "Number of iterations: 60\nNumber of solutions: 2\n");
        assert_eq!(runner.cli().board_size, 4);
    }

    // Tests the runner renders every board with --verbose
    // Verified by skipping board rendering in verbose mode
    #[test]
    fn test_runner_verbose_output() {
        let runner = SolveRunner::new(parse(&["4", "-v", "-q"]));
        let mut out = Vec::new();

        runner.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Solution: 1\n"));
        assert!(text.contains("Solution: 2\n"));
        assert!(!text.contains("Solution: 3"));
        assert!(text.contains("|   | Q |   |   |"));
    }

    // Tests a zero size that bypasses the parser is still rejected
    // Verified by removing validation from the configuration
    #[test]
    fn test_runner_rejects_zero_size() {
        let mut cli = parse(&["-q"]);
        cli.board_size = 0;

        let mut out = Vec::new();
        let result = SolveRunner::new(cli).run(&mut out);

        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
