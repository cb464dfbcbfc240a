use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use asciimath_core::AsciiMathConfig;

/// Why a configuration file could not be loaded.
///
/// Both variants keep the path, so that the message names the file. Entries that parse but
/// are unusable, like an unknown symbol id, are reported later by `Converter::new`.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read, e.g. because it does not exist.
    Read(PathBuf, io::Error),
    /// The file is not TOML, or a value has the wrong type, like `pretty-print = "sometimes"`
    /// or `class = "ternary"`.
    Parse(PathBuf, toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(path, err) => write!(f, "cannot read '{}': {err}", path.display()),
            ConfigError::Parse(path, err) => {
                write!(f, "invalid configuration in '{}': {err}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read(_, err) => Some(err),
            ConfigError::Parse(_, err) => Some(err),
        }
    }
}

/// Read the converter options from a TOML file.
///
/// The keys are those of [`AsciiMathConfig`] in kebab case; missing keys keep their defaults.
/// `[colors]` entries keep the order of the file, so error indices match what the user wrote.
pub fn load_config_file(path: &Path) -> Result<AsciiMathConfig, ConfigError> {
    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
    parse_config(&content).map_err(|err| ConfigError::Parse(path.to_path_buf(), err))
}

#[inline]
fn parse_config(s: &str) -> Result<AsciiMathConfig, toml::de::Error> {
    toml::from_str(s)
}
