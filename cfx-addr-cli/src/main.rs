//  MAIN.rs
//    by Lut99
//
//  Created:
//    16 Oct 2026, 10:21:36
//  Last edited:
//    19 Oct 2026, 11:05:19
//  Auto updated?
//    Yes
//
//  Description:
//!   Entrypoint to the `cfx-addr` tool, which classifies the server
//!   addresses given to it and prints the result.
//

mod cli;
mod errors;
mod logging;

use std::io::{BufRead, Write};

use cfx_addr::{AddressParser, ParsedAddress, ParserConfig};
use clap::Parser;
use dotenvy::dotenv;
use enum_debug::EnumDebug as _;
use error_trace::trace;
use tracing::{debug, error, info};

use crate::errors::CliError;


/***** CONSTANTS *****/
/// The default log level for tracing_subscriber. Levels higher than this will be discarded.
const DEFAULT_LOG_LEVEL: tracing::level_filters::LevelFilter = tracing::level_filters::LevelFilter::WARN;
/// The environment variable used by env-filter in tracing subscriber
const LOG_LEVEL_ENV_VAR: &str = "CFX_ADDR_LOG";





/***** HELPER FUNCTIONS *****/
/// Renders the result of parsing a single input.
///
/// # Arguments
/// - `raw`: The input that was parsed. Only used for error messages.
/// - `res`: The result of parsing it.
/// - `json`: Whether to render as JSON (true) or as whitespace-separated text (false).
///
/// # Returns
/// The line to print (without newline).
///
/// # Errors
/// This function errors if JSON serialization failed.
fn render(raw: &str, res: Option<&ParsedAddress>, json: bool) -> Result<String, CliError> {
    if json {
        return serde_json::to_string(&res).map_err(|source| CliError::Serialize { raw: raw.into(), source });
    }
    Ok(match res {
        Some(ParsedAddress::Join(join)) => format!("join {} {}", join.address, join.canonical),
        Some(ParsedAddress::Ip(ip)) => format!("ip {} {} {}", ip.ip, ip.port, ip.address),
        Some(ParsedAddress::Host(host)) => format!("host {}", host.address),
        None => "none".into(),
    })
}

/// Resolves the parser config from the config file and the overrides on the command line.
fn load_config(args: &cli::Cli) -> Result<ParserConfig, CliError> {
    let mut config: ParserConfig = match &args.config {
        Some(path) => ParserConfig::from_path(path).map_err(|source| CliError::Config { source })?,
        None => ParserConfig::default(),
    };
    if let Some(port) = args.default_port {
        config.default_port = port;
    }
    config.validate().map_err(|source| CliError::Config { source })
}

/// Parses every input and writes the results to the given output.
///
/// # Arguments
/// - `args`: The parsed command-line arguments. If they carry no inputs, `input` is read line-by-line instead.
/// - `parser`: The [`AddressParser`] to classify every input with.
/// - `input`: Where to read inputs from when none are given on the command line (stdin, usually).
/// - `out`: Where to write one rendered line per input to (stdout, usually).
///
/// # Returns
/// How many inputs were not recognized.
///
/// # Errors
/// This function errors if we failed to read from `input`, write to `out` or serialize a result.
fn run(args: &cli::Cli, parser: &AddressParser, input: impl BufRead, mut out: impl Write) -> Result<usize, CliError> {
    let mut misses: usize = 0;
    let mut handle = |raw: &str| -> Result<(), CliError> {
        let res: Option<ParsedAddress> = parser.parse(raw);
        match &res {
            Some(addr) => debug!("Parsed {raw:?} as {}", addr.variant()),
            None => {
                debug!("Failed to recognize {raw:?}");
                misses += 1;
            },
        }
        let line: String = render(raw, res.as_ref(), args.json)?;
        writeln!(out, "{line}").map_err(|source| CliError::StdoutWrite { source })
    };

    if args.inputs.is_empty() {
        debug!("No inputs given, reading from stdin");
        for line in input.lines() {
            let line: String = line.map_err(|source| CliError::StdinRead { source })?;
            handle(&line)?;
        }
    } else {
        for raw in &args.inputs {
            handle(raw)?;
        }
    }
    Ok(misses)
}

/// Decides whether the tool should exit with a failure after a successful run.
///
/// # Arguments
/// - `strict`: Whether `--strict` was given.
/// - `misses`: How many inputs were not recognized.
///
/// # Returns
/// True if the process should exit with status 1.
#[inline]
fn strict_failure(strict: bool, misses: usize) -> bool { strict && misses > 0 }





/***** ENTRYPOINT *****/
fn main() {
    dotenv().ok();
    let args = cli::Cli::parse();

    let cli_log_level = args.logging.log_level(DEFAULT_LOG_LEVEL);
    logging::setup_subscriber(LOG_LEVEL_ENV_VAR, cli_log_level);

    info!("Initializing cfx-addr v{}...", env!("CARGO_PKG_VERSION"));

    let config: ParserConfig = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", trace!(("Failed to prepare parser"), err));
            std::process::exit(1);
        },
    };
    debug!("Parsing with default port {}", config.default_port);
    let parser = AddressParser::new(config);

    match run(&args, &parser, std::io::stdin().lock(), std::io::stdout().lock()) {
        Ok(0) => {},
        Ok(misses) => {
            info!("{misses} input(s) were not recognized as server addresses");
            if strict_failure(args.strict, misses) {
                std::process::exit(1);
            }
        },
        Err(err) => {
            error!("{}", trace!(("Failed to parse addresses"), err));
            std::process::exit(1);
        },
    }
}



/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let join = ParsedAddress::new_join("abc");
        assert_eq!(render("abc", Some(&join), false).unwrap(), "join abc https://cfx.re/join/abc");
        let ip = ParsedAddress::new_ip("::1", 30120);
        assert_eq!(render("::1", Some(&ip), false).unwrap(), "ip ::1 30120 [::1]:30120");
        let host = ParsedAddress::new_host("example.com");
        assert_eq!(render("example.com", Some(&host), false).unwrap(), "host example.com");
        assert_eq!(render("", None, false).unwrap(), "none");
    }

    #[test]
    fn test_render_json() {
        let host = ParsedAddress::new_host("example.com");
        assert_eq!(render("example.com", Some(&host), true).unwrap(), r#"{"type":"host","address":"example.com"}"#);
        assert_eq!(render("", None, true).unwrap(), "null");
    }

    #[test]
    fn test_load_config_override() {
        let args = cli::Cli::try_parse_from(["cfx-addr", "--default-port", "4321"]).unwrap();
        assert_eq!(load_config(&args).unwrap().default_port, 4321);

        let args = cli::Cli::try_parse_from(["cfx-addr", "--default-port", "0"]).unwrap();
        assert!(matches!(load_config(&args), Err(CliError::Config { .. })));
    }

    #[test]
    fn test_run_stdin() {
        let args = cli::Cli::try_parse_from(["cfx-addr"]).unwrap();
        let mut out: Vec<u8> = Vec::new();
        let misses: usize = run(&args, &AddressParser::default(), "127.0.0.1\nnot an address\n".as_bytes(), &mut out).unwrap();
        assert_eq!(misses, 1);
        assert_eq!(String::from_utf8(out).unwrap().lines().collect::<Vec<&str>>(), vec!["ip 127.0.0.1 30120 127.0.0.1:30120", "none"]);
    }

    #[test]
    fn test_run_stdin_json() {
        let args = cli::Cli::try_parse_from(["cfx-addr", "--json"]).unwrap();
        let mut out: Vec<u8> = Vec::new();
        let misses: usize = run(&args, &AddressParser::default(), "cfx.re/join/abc123\nhost:99999".as_bytes(), &mut out).unwrap();
        assert_eq!(misses, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "{\"type\":\"join\",\"address\":\"abc123\",\"canonical\":\"https://cfx.re/join/abc123\"}\nnull\n");
    }

    #[test]
    fn test_run_args_ignore_stdin() {
        let args = cli::Cli::try_parse_from(["cfx-addr", "-p", "1234", "10.0.0.1", "myserver.example.com"]).unwrap();
        let parser = AddressParser::new(load_config(&args).unwrap());
        let mut out: Vec<u8> = Vec::new();
        let misses: usize = run(&args, &parser, "not read\n".as_bytes(), &mut out).unwrap();
        assert_eq!(misses, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "ip 10.0.0.1 1234 10.0.0.1:1234\nhost myserver.example.com\n");
    }

    #[test]
    fn test_strict_failure() {
        assert!(strict_failure(true, 1));
        assert!(strict_failure(true, 3));
        assert!(!strict_failure(true, 0));
        assert!(!strict_failure(false, 1));
        assert!(!strict_failure(false, 0));
    }
}
