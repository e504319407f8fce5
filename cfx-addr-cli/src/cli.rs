//  CLI.rs
//    by Lut99
//
//  Created:
//    16 Oct 2026, 10:34:12
//  Last edited:
//    19 Oct 2026, 11:22:40
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the command-line arguments of the `cfx-addr` tool.
//

use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;


/***** CONSTANTS *****/
/// The log levels `-v` and `-q` step through, from quietest to loudest.
const LEVELS: [LevelFilter; 6] = [LevelFilter::OFF, LevelFilter::ERROR, LevelFilter::WARN, LevelFilter::INFO, LevelFilter::DEBUG, LevelFilter::TRACE];





/***** LIBRARY *****/
/// Arguments of the `cfx-addr` tool.
#[derive(Debug, Parser)]
#[clap(name = "cfx-addr", version, about = "Classifies server addresses as join codes, IP addresses or hostnames.")]
pub struct Cli {
    #[clap(flatten)]
    pub logging: Verbosity,

    /// The addresses to parse. If omitted, reads one address per line from stdin.
    #[clap(name = "INPUT", help = "The addresses to parse. If omitted, every line on stdin is parsed as an address.")]
    pub inputs: Vec<String>,

    /// Path to a YAML parser config.
    #[clap(short, long, help = "The path to a YAML file with parser settings.", env = "CFX_ADDR_CONFIG")]
    pub config: Option<PathBuf>,
    /// Overrides the default port from the config.
    #[clap(short = 'p', long, help = "The port assumed for IP addresses given without one. Overrides the config file.", env = "CFX_ADDR_DEFAULT_PORT")]
    pub default_port: Option<u16>,

    /// Whether to print JSON instead of text.
    #[clap(short, long, help = "If given, prints every result as a JSON object (or `null`) on its own line.")]
    pub json: bool,
    /// Whether to fail if anything didn't parse.
    #[clap(short, long, help = "If given, exits with a non-zero status code if any input was not recognized.")]
    pub strict: bool,
}

/// Flags that decide how chatty the tool is on stderr. Results on stdout are never affected.
#[derive(Debug, Parser)]
pub struct Verbosity {
    /// Shows which rule classified every input.
    #[clap(long, global = true, help = "If given, logs why every input was classified the way it was.", group = "verbosity", env = "CFX_ADDR_DEBUG")]
    pub debug: bool,
    /// Shows every candidate the parser considered.
    #[clap(long, global = true, help = "If given, logs every step the parser takes, including rejected candidates.", group = "verbosity", env = "CFX_ADDR_TRACE")]
    pub trace: bool,
    /// Steps up from the default level once per occurrence.
    #[arg(short, long, global = true, help = "Raises the log level by one step per occurrence (`-vv` shows parser internals).", action = clap::ArgAction::Count, group = "verbosity")]
    pub(crate) verbose: u8,
    /// Steps down from the default level once per occurrence.
    #[clap(short, long, global = true, help = "Lowers the log level by one step per occurrence (`-qq` silences errors too).", action = clap::ArgAction::Count, group = "verbosity")]
    pub(crate) quiet: u8,
}

impl Verbosity {
    /// Resolves the flags to the level the logger should filter on.
    ///
    /// # Arguments
    /// - `default_level`: The level to use when no flags are given, and the one `-v`/`-q` step away from.
    ///
    /// # Returns
    /// The [`LevelFilter`] to give to the logger.
    pub fn log_level(&self, default_level: LevelFilter) -> LevelFilter {
        if self.trace {
            return LevelFilter::TRACE;
        }
        if self.debug {
            return LevelFilter::DEBUG;
        }

        let base: usize = LEVELS.iter().position(|level| *level == default_level).unwrap_or(0);
        let index: usize = (base + usize::from(self.verbose)).saturating_sub(usize::from(self.quiet)).min(LEVELS.len() - 1);
        LEVELS[index]
    }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    fn verbosity(verbose: u8, quiet: u8) -> Verbosity { Verbosity { debug: false, trace: false, verbose, quiet } }

    #[test]
    fn test_cli_definition() { Cli::command().debug_assert(); }

    #[test]
    fn test_log_level() {
        assert_eq!(verbosity(0, 0).log_level(LevelFilter::WARN), LevelFilter::WARN);
        assert_eq!(verbosity(1, 0).log_level(LevelFilter::WARN), LevelFilter::INFO);
        assert_eq!(verbosity(2, 0).log_level(LevelFilter::WARN), LevelFilter::DEBUG);
        assert_eq!(verbosity(9, 0).log_level(LevelFilter::WARN), LevelFilter::TRACE);
        assert_eq!(verbosity(0, 1).log_level(LevelFilter::WARN), LevelFilter::ERROR);
        assert_eq!(verbosity(0, 9).log_level(LevelFilter::WARN), LevelFilter::OFF);
        assert_eq!(verbosity(1, 0).log_level(LevelFilter::OFF), LevelFilter::ERROR);
        assert_eq!(Verbosity { debug: true, trace: false, verbose: 0, quiet: 0 }.log_level(LevelFilter::WARN), LevelFilter::DEBUG);
        assert_eq!(Verbosity { debug: false, trace: true, verbose: 0, quiet: 0 }.log_level(LevelFilter::WARN), LevelFilter::TRACE);
    }

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from(["cfx-addr", "--json", "-p", "1234", "127.0.0.1", "abc"]).unwrap();
        assert!(cli.json);
        assert!(!cli.strict);
        assert_eq!(cli.default_port, Some(1234));
        assert_eq!(cli.inputs, vec!["127.0.0.1".to_string(), "abc".to_string()]);

        let cli = Cli::try_parse_from(["cfx-addr", "-vv"]).unwrap();
        assert_eq!(cli.logging.log_level(LevelFilter::WARN), LevelFilter::DEBUG);
        assert!(cli.inputs.is_empty());
    }
}
