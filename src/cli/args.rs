//! Command-line argument parsing.

/// Values given on the command line that override the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI (default)
    Run(CliOverrides),
    /// Bad invocation; the string says what is wrong
    Invalid(String),
}

/// Parse command-line arguments (program name first, as from
/// `std::env::args()`).
///
/// `--version` and `--help` win wherever they appear. Unknown flags are
/// ignored.
///
/// # Examples
///
/// ```
/// use postboard::cli::{parse_args, CliCommand};
///
/// let args = vec!["postboard".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        // Accept both `--flag value` and `--flag=value`
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--base-url" | "--timeout" | "--log-file" => {
                let Some(value) = inline.or_else(|| args.next()) else {
                    return CliCommand::Invalid(format!("{} requires a value", flag));
                };
                match flag.as_str() {
                    "--base-url" => overrides.base_url = Some(value),
                    "--log-file" => overrides.log_file = Some(value),
                    _ => match value.parse::<u64>() {
                        Ok(secs) if secs > 0 => overrides.timeout_secs = Some(secs),
                        _ => {
                            return CliCommand::Invalid(format!(
                                "--timeout expects a positive number of seconds, got {:?}",
                                value
                            ))
                        }
                    },
                }
            }
            _ => {}
        }
    }

    CliCommand::Run(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["postboard".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["--base-url", "http://x", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Run(CliOverrides::default()));
    }

    #[test]
    fn test_parse_overrides() {
        let command = parse(&[
            "--base-url",
            "http://localhost:3000",
            "--timeout=5",
            "--log-file",
            "/tmp/pb.log",
        ]);
        assert_eq!(
            command,
            CliCommand::Run(CliOverrides {
                base_url: Some("http://localhost:3000".to_string()),
                timeout_secs: Some(5),
                log_file: Some("/tmp/pb.log".to_string()),
            })
        );
    }

    #[test]
    fn test_parse_missing_value() {
        assert!(matches!(parse(&["--base-url"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_bad_timeout() {
        assert!(matches!(parse(&["--timeout", "soon"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--timeout", "0"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_flag_ignored() {
        assert_eq!(parse(&["--unknown"]), CliCommand::Run(CliOverrides::default()));
    }
}
