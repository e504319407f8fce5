//  CONFIG.rs
//    by Lut99
//
//  Created:
//    15 Oct 2026, 09:20:44
//  Last edited:
//    17 Oct 2026, 10:58:31
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the (YAML) configuration of the address parser.
//

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::constants::DEFAULT_SERVER_PORT;


/***** ERRORS *****/
/// Defines errors that relate to loading a [`ParserConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file '{}'", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    /// Failed to parse the config file as YAML.
    #[error("Failed to parse config file '{}' as YAML", path.display())]
    FileParse { path: PathBuf, source: serde_yaml::Error },
    /// Failed to parse a raw config string as YAML.
    #[error("Failed to parse given string as a YAML parser config")]
    Parse { source: serde_yaml::Error },
    /// The default port was zero.
    #[error("Default port cannot be zero")]
    ZeroPort,
}





/***** LIBRARY *****/
/// Configures the behaviour of the [`AddressParser`](crate::parser::AddressParser).
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default)]
pub struct ParserConfig {
    /// The port assumed for IP literals without one, or with one that isn't a number.
    pub default_port: u16,
}
impl Default for ParserConfig {
    #[inline]
    fn default() -> Self { Self { default_port: DEFAULT_SERVER_PORT } }
}
impl ParserConfig {
    /// Loads a ParserConfig from the given YAML file.
    ///
    /// # Arguments
    /// - `path`: The path of the file to load.
    ///
    /// # Returns
    /// A new ParserConfig with the file's settings (and defaults for the rest).
    ///
    /// # Errors
    /// This function errors if we failed to read or parse the file, or if its settings are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path: &Path = path.as_ref();
        debug!("Loading parser config '{}'...", path.display());

        let raw: String = fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.into(), source })?;
        let config: Self = serde_yaml::from_str(&raw).map_err(|source| ConfigError::FileParse { path: path.into(), source })?;
        config.validate()
    }

    /// Asserts the settings in this config make sense.
    ///
    /// # Returns
    /// Self, for chaining.
    ///
    /// # Errors
    /// This function errors if the default port is zero.
    #[inline]
    pub fn validate(self) -> Result<Self, ConfigError> { if self.default_port == 0 { Err(ConfigError::ZeroPort) } else { Ok(self) } }
}
impl FromStr for ParserConfig {
    type Err = ConfigError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> { serde_yaml::from_str::<Self>(s).map_err(|source| ConfigError::Parse { source })?.validate() }
}





/***** TESTS *****/
