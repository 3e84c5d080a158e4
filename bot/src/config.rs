//! Bot configuration.
//!
//! Loaded from YAML. Every field has a default, so an empty file (or no file
//! at all) gives a working bot with the fortune feature switched off.
//!
//! # Example YAML
//!
//! ```yaml
//! presence: "cowsay -h"
//! fortune:
//!   enabled: true
//!   command: fortune
//!   args: ["-s"]
//!   timeout_ms: 5000
//! reply:
//!   padding: "```"
//! ```

use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default fortune program.
pub const DEFAULT_FORTUNE_COMMAND: &str = "fortune";
/// Default time the fortune program may run.
pub const DEFAULT_FORTUNE_TIMEOUT_MS: u64 = 5000;
/// Default fence wrapped around every rendered reply.
pub const DEFAULT_REPLY_PADDING: &str = "```";
/// Default presence text advertised by a chat client.
pub const DEFAULT_PRESENCE: &str = "cowsay -h";

/// Settings for the external fortune program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FortuneConfig {
    /// When `false`, `fortune | cowsay` draws a fixed notice instead.
    pub enabled: bool,
    /// Program to run.
    pub command: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Kill the program after this many milliseconds.
    pub timeout_ms: u64,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            command: DEFAULT_FORTUNE_COMMAND.to_string(),
            args: Vec::new(),
            timeout_ms: DEFAULT_FORTUNE_TIMEOUT_MS,
        }
    }
}

/// Settings for outgoing replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyConfig {
    /// Text placed before and after every rendered cow.
    pub padding: String,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_REPLY_PADDING.to_string(),
        }
    }
}

/// Top-level bot configuration.
///
/// # Examples
///
/// ```
/// use cowbot_bot::BotConfig;
///
/// let config: BotConfig = serde_yaml::from_str("fortune: { enabled: true }").unwrap();
/// assert!(config.fortune.enabled);
/// assert_eq!(config.fortune.command, "fortune");
/// assert_eq!(config.reply.padding, "```");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Status text a chat client shows for the bot.
    pub presence: String,
    pub fortune: FortuneConfig,
    pub reply: ReplyConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            presence: DEFAULT_PRESENCE.to_string(),
            fortune: FortuneConfig::default(),
            reply: ReplyConfig::default(),
        }
    }
}

impl BotConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::ConfigError::Io) if the file cannot be read, or
    /// [`Yaml`](crate::ConfigError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::ConfigError::Io) if the file cannot be written,
    /// or [`Yaml`](crate::ConfigError::Yaml) if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}
