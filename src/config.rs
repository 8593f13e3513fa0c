use serde::Deserialize;
use std::fs::File;
use std::io::Read;

use crate::chord::DEFAULT_EXTENSION;

/// Configuration for the command line tool
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chord: ChordConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Fallbacks for chord fields the user leaves out
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChordConfig {
    /// Root note used when none is given
    pub default_root: String,
    /// Extension used when none is given
    pub default_extension: u8,
}

/// How analysis results are printed
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// One interval per line with name, short name and tension
    #[default]
    Table,
    /// Full interval records as JSON
    Json,
    /// Short names on a single line
    Short,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for ChordConfig {
    fn default() -> Self {
        ChordConfig {
            default_root: "C".to_string(),
            default_extension: DEFAULT_EXTENSION,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration from config.toml
pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Try to load from config.toml
    match File::open("config.toml") {
        Ok(mut file) => {
            let mut contents = String::new();
            file.read_to_string(&mut contents)?;
            Ok(parse_config(&contents)?)
        }
        Err(_) => {
            // If file doesn't exist, return default config
            Ok(Config::default())
        }
    }
}
