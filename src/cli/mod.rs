//! Command-line interface.
//!
//! Call [`run_cli_command`] early in `main`, before the terminal is taken
//! over:
//!
//! ```ignore
//! let command = parse_args(std::env::args());
//! let overrides = match run_cli_command(command) {
//!     CliOutcome::Exit(code) => std::process::exit(code),
//!     CliOutcome::Run(overrides) => overrides,
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOverrides};
pub use version::{help_text, version_text, VERSION};

/// What `main` should do after the CLI has looked at the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliOutcome {
    /// Start the TUI with these overrides
    Run(CliOverrides),
    /// Output already printed; exit with this code
    Exit(i32),
}

/// Print version, help or usage errors. TUI runs pass through.
pub fn run_cli_command(command: CliCommand) -> CliOutcome {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            CliOutcome::Exit(0)
        }
        CliCommand::Help => {
            println!("{}", help_text());
            CliOutcome::Exit(0)
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\nRun `postboard --help` for usage.", message);
            CliOutcome::Exit(2)
        }
        CliCommand::Run(overrides) => CliOutcome::Run(overrides),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_passes_overrides_through() {
        let overrides = CliOverrides {
            timeout_secs: Some(3),
            ..Default::default()
        };
        assert_eq!(
            run_cli_command(CliCommand::Run(overrides.clone())),
            CliOutcome::Run(overrides)
        );
    }

    #[test]
    fn test_invalid_exits_with_usage_code() {
        assert_eq!(
            run_cli_command(CliCommand::Invalid("bad".to_string())),
            CliOutcome::Exit(2)
        );
    }
}
