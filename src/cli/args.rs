//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print a message with keywords emphasized
    Highlight(String),
    /// Fetch stats once and print the welcome summary
    Once,
    /// Poll stats and reprint the welcome summary when it changes (default)
    Watch,
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: mindful [OPTIONS]

Options:
  --once               Fetch stats once, print the welcome summary and exit
  --highlight <TEXT>   Print TEXT with transcript keywords emphasized
  -V, --version        Print version
  -h, --help           Print this help

Without options, polls the stats endpoint and reprints the welcome summary
whenever it changes. Press Ctrl-C to stop.

Environment:
  MINDFUL_STATS_URL          Stats endpoint
  MINDFUL_POLL_INTERVAL_MS   Poll interval in milliseconds (default 3000)
  MINDFUL_FETCH_TIMEOUT_MS   Per-fetch timeout in milliseconds (default 10000)
  RUST_LOG                   Log filter (default mindful=info)";

/// Parse command-line arguments and return the appropriate command.
///
/// The first recognized flag wins; unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use mindful::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["mindful".to_string(), "--once".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Once);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--once" => return CliCommand::Once,
            "--highlight" => {
                let rest: Vec<String> = args.collect();
                return CliCommand::Highlight(rest.join(" "));
            }
            other => {
                if let Some(text) = other.strip_prefix("--highlight=") {
                    return CliCommand::Highlight(text.to_string());
                }
            }
        }
    }
    CliCommand::Watch
}
