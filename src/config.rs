//! Environment configuration of the command-line tool.
//!
//! Variable names follow the CI-action input convention (`INPUT_<NAME>`).

use std::path::PathBuf;

/// Output directory variable.
pub const OUTPUT_DIR_VAR: &str = "INPUT_OUTPUT-DIR";
/// Comma-separated channel list variable.
pub const CHANNELS_VAR: &str = "INPUT_TELEGRAM-CHANNELS";
/// Comma-separated feed format list variable.
pub const FORMATS_VAR: &str = "INPUT_FORMATS";

const DEFAULT_OUTPUT_DIR: &str = "./";
const DEFAULT_CHANNELS: &str = "@telegram";
const DEFAULT_FORMATS: &str = "rss";

/// Invalid configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
}

/// Run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory feed files are written to.
    pub output_dir: PathBuf,
    /// Channel names, `@` and spaces removed.
    pub channels: Vec<String>,
    /// Requested format names. Unknown names are kept and skipped on output.
    pub formats: Vec<String>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when no channel is left after
    /// splitting.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            output_dir: PathBuf::from(env_or_default(&lookup, OUTPUT_DIR_VAR, DEFAULT_OUTPUT_DIR)),
            channels: split_list(&env_or_default(&lookup, CHANNELS_VAR, DEFAULT_CHANNELS))
                .iter()
                .map(|c| crate::url_utils::normalize_channel(c))
                .filter(|c| !c.is_empty())
                .collect(),
            formats: split_list(&env_or_default(&lookup, FORMATS_VAR, DEFAULT_FORMATS)),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that at least one channel is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty channel list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channels.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: CHANNELS_VAR.to_string(),
                message: "no channel names given".to_string(),
            });
        }
        Ok(())
    }
}

fn env_or_default<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Split on commas, trim entries, drop empty ones.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
