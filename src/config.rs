//! Configuration management for the numeral converter.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project (`.roman.toml`) and user config files
//! - Layering: flags over explicit file over project file over user file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::validation::Options;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".roman.toml";

/// Log level when neither a flag nor a file sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Command-line arguments for the `roman` binary
#[derive(Debug, Parser)]
#[command(name = "roman")]
#[command(about = "Convert between Roman numerals and integers")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every subcommand
///
/// Boolean settings come in on/off pairs so a flag can undo a file setting;
/// the last one given wins.
#[derive(Debug, Default, Clone, clap::Args)]
pub struct SettingsArgs {
    /// Print results as JSON
    #[arg(long, global = true, overrides_with = "no_json")]
    pub json: bool,

    /// Print plain text even if a config file enables JSON
    #[arg(long, global = true, overrides_with = "json")]
    pub no_json: bool,

    /// Treat empty input as invalid
    #[arg(long, global = true, overrides_with = "no_strict_empty")]
    pub strict_empty: bool,

    /// Accept empty input as "nothing typed yet"
    #[arg(long, global = true, overrides_with = "strict_empty")]
    pub no_strict_empty: bool,

    /// Convert 0 to an empty numeral
    #[arg(long, global = true, overrides_with = "no_zero")]
    pub zero: bool,

    /// Reject 0 instead of converting it to an empty numeral
    #[arg(long, global = true, overrides_with = "zero")]
    pub no_zero: bool,

    /// Log level for the converter
    #[arg(long, global = true, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,

    /// Explicit configuration file
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,
}

impl SettingsArgs {
    pub fn json(&self) -> Option<bool> {
        flag_pair(self.json, self.no_json)
    }

    pub fn strict_empty(&self) -> Option<bool> {
        flag_pair(self.strict_empty, self.no_strict_empty)
    }

    pub fn allow_zero(&self) -> Option<bool> {
        flag_pair(self.zero, self.no_zero)
    }
}

/// `Some` only when one side of an on/off pair was given
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert a Roman numeral to an integer
    ToInt { numeral: String },
    /// Convert an integer to a Roman numeral
    #[command(allow_negative_numbers = true)]
    ToRoman { number: String },
    /// Check whether text is a valid Roman numeral
    Check { text: String },
    /// Convert every line of a file (`-` for stdin)
    Convert { path: PathBuf },
}

/// On-disk configuration; every key is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub strict_empty: Option<bool>,
    pub allow_zero: Option<bool>,
    pub log_level: Option<String>,
    pub json: Option<bool>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Overlay `other` on top of `self`
    fn merge(self, other: ConfigFile) -> ConfigFile {
        ConfigFile {
            strict_empty: other.strict_empty.or(self.strict_empty),
            allow_zero: other.allow_zero.or(self.allow_zero),
            log_level: other.log_level.or(self.log_level),
            json: other.json.or(self.json),
        }
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Empty input is an error rather than "nothing typed yet"
    pub strict_empty: bool,
    /// 0 converts to the empty numeral
    pub allow_zero: bool,
    /// Log level
    pub log_level: String,
    /// Emit JSON instead of plain text
    pub json: bool,
    /// Project config file that was found, if any
    pub project_config: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_empty: false,
            allow_zero: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
            project_config: None,
        }
    }
}

impl Config {
    /// Create configuration from explicit arguments, reading files relative
    /// to the working directory and the user config directory
    pub fn from_args(args: &SettingsArgs) -> Result<Self> {
        let project_dir = std::env::current_dir().context("Failed to read working directory")?;
        let user_file = dirs::config_dir().map(|dir| dir.join("roman-numerals").join("config.toml"));
        Self::load(args, &project_dir, user_file.as_deref())
    }

    /// Build configuration from explicit locations (useful for testing)
    pub fn load(args: &SettingsArgs, project_dir: &Path, user_file: Option<&Path>) -> Result<Self> {
        let mut file = ConfigFile::default();

        if let Some(path) = user_file.filter(|p| p.is_file()) {
            log::debug!("Loading user config from {}", path.display());
            file = file.merge(ConfigFile::load(path)?);
        }

        let project_path = project_dir.join(PROJECT_CONFIG_FILE);
        let project_config = if project_path.is_file() {
            log::debug!("Loading project config from {}", project_path.display());
            file = file.merge(ConfigFile::load(&project_path)?);
            Some(project_path)
        } else {
            None
        };

        if let Some(path) = &args.config {
            log::debug!("Loading config from {}", path.display());
            file = file.merge(ConfigFile::load(path)?);
        }

        let defaults = Config::default();
        Ok(Config {
            strict_empty: args
                .strict_empty()
                .or(file.strict_empty)
                .unwrap_or(defaults.strict_empty),
            allow_zero: args
                .allow_zero()
                .or(file.allow_zero)
                .unwrap_or(defaults.allow_zero),
            log_level: args
                .log_level
                .clone()
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
            json: args.json().or(file.json).unwrap_or(defaults.json),
            project_config,
        })
    }

    pub fn has_project_config(&self) -> bool {
        self.project_config.is_some()
    }

    /// Conversion options for the batch engine
    pub fn options(&self) -> Options {
        Options {
            strict_empty: self.strict_empty,
            allow_zero: self.allow_zero,
        }
    }
}
