//  LOGGING.rs
//    by Lut99
//
//  Created:
//    16 Oct 2026, 10:48:03
//  Last edited:
//    19 Oct 2026, 11:30:57
//  Auto updated?
//    Yes
//
//  Description:
//!   Sets up logging for the `cfx-addr` tool.
//!
//!   Logs always go to stderr, so that the results on stdout can be piped
//!   into other tools untouched.
//

use std::io::IsTerminal as _;

use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;


/***** LIBRARY *****/
/// Installs the global logger.
///
/// # Arguments
/// - `log_level_env_var`: The environment variable that may carry an `EnvFilter` directive (e.g., `cfx_addr=trace`). Wins over `default_log_level`.
/// - `default_log_level`: The level resolved from the verbosity flags.
pub fn setup_subscriber(log_level_env_var: &str, default_log_level: LevelFilter) {
    let filter = tracing_subscriber::EnvFilter::builder().with_env_var(log_level_env_var).with_default_directive(default_log_level.into()).from_env_lossy();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_ansi(std::io::stderr().is_terminal()).with_target(false))
        .with(filter)
        .init();

    match std::env::var(log_level_env_var) {
        Ok(directive) => debug!("Logging to stderr with filter '{directive}' (from ${log_level_env_var})"),
        Err(_) => debug!("Logging to stderr at level {default_log_level}"),
    }
}
