//! `--version` and `--help` output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("postboard {}", VERSION)
}

pub fn help_text() -> String {
    format!(
        "{}
Browse JSONPlaceholder users and manage their posts from the terminal.

USAGE:
    postboard [OPTIONS]

OPTIONS:
    --base-url <URL>    API root (env: POSTBOARD_BASE_URL)
    --timeout <SECS>    Request timeout in seconds (env: POSTBOARD_TIMEOUT_SECS, default 30)
    --log-file <PATH>   Log file (env: POSTBOARD_LOG_FILE)
    -V, --version       Print version and exit
    -h, --help          Print this help and exit

Log filter: POSTBOARD_LOG or RUST_LOG (default: info)",
        version_text()
    )
}
