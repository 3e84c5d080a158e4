//! Turning one chat message into at most one reply.
//!
//! ```text
//! message ──parse──> RenderOptions ──(fortune?)──> render ──pad──> reply
//!    │                   │
//!    └─ not a command:   └─ parse error: "Error: <message>"
//!       no reply
//! ```
//!
//! Nothing here panics on user input: parse errors, fortune failures and
//! render failures all become reply text.

use cowbot_core::{OptionSet, RenderOptions, parse_command};
use tracing::{debug, info, warn};

use crate::config::BotConfig;
use crate::fortune::{FortuneSource, fortune_source};
use crate::render::{CowRenderer, Renderer};

/// Answers chat messages.
pub struct MessageHandler {
    renderer: Box<dyn Renderer>,
    fortune: Box<dyn FortuneSource>,
    padding: String,
}

impl MessageHandler {
    pub fn new(
        renderer: Box<dyn Renderer>,
        fortune: Box<dyn FortuneSource>,
        padding: impl Into<String>,
    ) -> Self {
        Self {
            renderer,
            fortune,
            padding: padding.into(),
        }
    }

    /// Builds a handler with the built-in renderer and the configured
    /// fortune source.
    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(
            Box::new(CowRenderer),
            fortune_source(&config.fortune),
            config.reply.padding.clone(),
        )
    }

    /// Returns the reply for `content`, or `None` when it is not a command.
    ///
    /// # Examples
    ///
    /// ```
    /// use cowbot_bot::{BotConfig, MessageHandler};
    ///
    /// let handler = MessageHandler::from_config(&BotConfig::default());
    /// assert_eq!(handler.handle("just chatting"), None);
    /// assert_eq!(
    ///     handler.handle("cowsay -W x").as_deref(),
    ///     Some("Error: -W has to be followed by an integer.")
    /// );
    /// let reply = handler.handle("cowsay moo").unwrap();
    /// assert!(reply.starts_with("```") && reply.ends_with("```"));
    /// ```
    pub fn handle(&self, content: &str) -> Option<String> {
        let options = match parse_command(content) {
            Ok(Some(options)) => options,
            Ok(None) => return None,
            Err(err) => {
                info!(option = %err.letter(), error = %err, "Rejected command");
                return Some(format!("Error: {err}"));
            }
        };
        debug!(
            mode = ?options.mode(),
            fortune = options.fortune_requested(),
            flags = %flag_letters(options.options()),
            "Handling command"
        );

        let options = if options.fortune_requested() {
            match self.fortune.fetch() {
                Ok(quote) => options.with_text(quote),
                Err(err) => {
                    warn!(error = %err, "Failed to get fortune");
                    let notice = RenderOptions::say(format!("Failed to get fortune: {err}"));
                    return Some(self.pad(&self.draw(&notice)));
                }
            }
        } else {
            options
        };

        Some(self.pad(&self.draw(&options)))
    }

    /// Renders `options`, turning a render failure into its message.
    pub fn draw(&self, options: &RenderOptions) -> String {
        match self.renderer.render(options) {
            Ok(art) => art,
            Err(err) => {
                warn!(error = %err, "Failed to render reply");
                format!("error: {err}")
            }
        }
    }

    fn pad(&self, body: &str) -> String {
        format!("{padding}{body}{padding}", padding = self.padding)
    }
}

/// Letters of the flags present, in key order (`"bW"` for `-W 30 -b`).
fn flag_letters(options: &OptionSet) -> String {
    options.iter().map(|(key, _)| key.letter()).collect()
}
