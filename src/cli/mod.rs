//! Command-line launcher
//!
//! Parses the single `--verbose` flag, builds the application with it and
//! runs it once. Flag parsing stops at the first operand; it and everything
//! after it are ignored.

use crate::app::{App, Application};
use crate::error::Result;
use clap::{ArgAction, Parser};
use std::ffi::OsString;

/// Quantum nexus application launcher
#[derive(Parser, Debug)]
#[command(name = "quantumnexus")]
#[command(version, about, long_about = None)]
#[command(after_help = "Flags use the double-dash form: --verbose, --verbose=false")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_bool,
        value_name = "BOOL"
    )]
    pub verbose: bool,

    /// Operands after the first non-flag argument, accepted and ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub rest: Vec<OsString>,
}

/// Parse a boolean flag value
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> std::result::Result<bool, String> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(format!("invalid boolean value '{}'", value)),
    }
}

/// Parse `args`, build the application with the parsed verbosity and run it
///
/// Argument errors are returned before `build` is called.
pub fn run_from<I, T, F, A>(args: I, build: F) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce(bool) -> A,
    A: Application,
{
    let cli = Cli::try_parse_from(args)?;

    let mut app = build(cli.verbose);
    app.run()
}

/// Run the CLI against the process arguments
pub fn run() -> Result<()> {
    run_from(std::env::args_os(), App::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::error::ErrorKind;
    use std::cell::Cell;

    /// Records the verbosity it was built with and how often it ran
    struct Recorder<'a> {
        runs: &'a Cell<usize>,
        fail: bool,
    }

    impl Application for Recorder<'_> {
        fn run(&mut self) -> Result<()> {
            self.runs.set(self.runs.get() + 1);
            if self.fail {
                Err(Error::Config("recorded failure".to_string()))
            } else {
                Ok(())
            }
        }
    }

    /// Launch with `args`, returning the verbosity passed to the constructor
    fn launch(args: &[&str], fail: bool) -> (Result<()>, Option<bool>, usize) {
        let built = Cell::new(None);
        let runs = Cell::new(0);
        let result = run_from(
            std::iter::once("quantumnexus").chain(args.iter().copied()),
            |verbose| {
                built.set(Some(verbose));
                Recorder { runs: &runs, fail }
            },
        );
        (result, built.get(), runs.get())
    }

    #[test]
    fn test_no_flags_is_quiet() {
        let (result, built, runs) = launch(&[], false);
        assert!(result.is_ok());
        assert_eq!(built, Some(false));
        assert_eq!(runs, 1);
    }

    #[test]
    fn test_bare_verbose() {
        let (result, built, _) = launch(&["--verbose"], false);
        assert!(result.is_ok());
        assert_eq!(built, Some(true));
    }

    #[test]
    fn test_verbose_explicit_values() {
        assert_eq!(launch(&["--verbose=true"], false).1, Some(true));
        assert_eq!(launch(&["--verbose=false"], false).1, Some(false));
        assert_eq!(launch(&["--verbose=1"], false).1, Some(true));
        assert_eq!(launch(&["--verbose=F"], false).1, Some(false));
    }

    #[test]
    fn test_run_failure_propagates() {
        let (result, built, runs) = launch(&["--verbose"], true);
        assert!(matches!(result, Err(Error::Config(_))));
        assert_eq!(built, Some(true));
        assert_eq!(runs, 1);
    }

    #[test]
    fn test_unknown_flag_never_builds() {
        let (result, built, runs) = launch(&["--bogus"], false);
        match result {
            Err(Error::Usage(e)) => assert_eq!(e.kind(), ErrorKind::UnknownArgument),
            other => panic!("expected usage error, got {:?}", other),
        }
        assert_eq!(built, None);
        assert_eq!(runs, 0);
    }

    #[test]
    fn test_invalid_verbose_value_never_builds() {
        let (result, built, _) = launch(&["--verbose=maybe"], false);
        match result {
            Err(Error::Usage(e)) => assert_eq!(e.kind(), ErrorKind::ValueValidation),
            other => panic!("expected usage error, got {:?}", other),
        }
        assert_eq!(built, None);
    }

    #[test]
    fn test_verbose_value_needs_equals() {
        // "false" is an operand here, not the flag's value
        let (result, built, runs) = launch(&["--verbose", "false"], false);
        assert!(result.is_ok());
        assert_eq!(built, Some(true));
        assert_eq!(runs, 1);
    }

    #[test]
    fn test_operands_are_ignored() {
        let (result, built, runs) = launch(&["extra"], false);
        assert!(result.is_ok());
        assert_eq!(built, Some(false));
        assert_eq!(runs, 1);
    }

    #[test]
    fn test_flags_after_operand_are_not_parsed() {
        let (result, built, _) = launch(&["run", "--verbose"], false);
        assert!(result.is_ok());
        assert_eq!(built, Some(false));

        let (result, built, _) = launch(&["--verbose", "run", "--bogus"], false);
        assert!(result.is_ok());
        assert_eq!(built, Some(true));
    }

    #[test]
    fn test_single_dash_verbose_is_rejected() {
        let (result, built, _) = launch(&["-verbose"], false);
        assert!(matches!(result, Err(Error::Usage(_))));
        assert_eq!(built, None);
    }

    #[test]
    fn test_help_is_usage_path() {
        let (result, built, _) = launch(&["--help"], false);
        match result {
            Err(Error::Usage(e)) => assert_eq!(e.kind(), ErrorKind::DisplayHelp),
            other => panic!("expected help, got {:?}", other),
        }
        assert_eq!(built, None);
    }

    #[test]
    fn test_parse_bool_spellings() {
        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(value), Ok(true), "{}", value);
        }
        for value in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(value), Ok(false), "{}", value);
        }
        for value in ["", "yes", "tRUE", "2"] {
            assert!(parse_bool(value).is_err(), "{}", value);
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
