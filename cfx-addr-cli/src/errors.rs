//  ERRORS.rs
//    by Lut99
//
//  Created:
//    16 Oct 2026, 11:02:50
//  Last edited:
//    17 Oct 2026, 09:44:13
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the errors that may occur while running the `cfx-addr` tool.
//

use thiserror::Error;


/***** LIBRARY *****/
/// Defines toplevel errors for the `cfx-addr` tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to load the parser config.
    #[error("Failed to load parser config")]
    Config { source: cfx_addr::ConfigError },
    /// Failed to read a line from stdin.
    #[error("Failed to read input from stdin")]
    StdinRead { source: std::io::Error },
    /// Failed to write a result to stdout.
    #[error("Failed to write result to stdout")]
    StdoutWrite { source: std::io::Error },
    /// Failed to serialize a result as JSON.
    #[error("Failed to serialize result for {raw:?} as JSON")]
    Serialize { raw: String, source: serde_json::Error },
}
