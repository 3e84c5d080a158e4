//! The cowsay chat bot around [`cowbot_core`].
//!
//! The parser in `cowbot-core` turns a message into
//! [`RenderOptions`](cowbot_core::RenderOptions). This crate supplies what
//! happens before and after:
//!
//! - [`BotConfig`] — YAML configuration (fortune program, reply fence,
//!   presence text).
//! - [`FortuneSource`] — random quotes for `fortune | cowsay`, from an
//!   external program ([`CommandFortune`]) or a fixed notice when disabled
//!   ([`DisabledFortune`]).
//! - [`Renderer`] — ASCII-art drawing; [`CowRenderer`] is built in.
//! - [`MessageHandler`] — one message in, at most one reply out.
//!
//! # Example
//!
//! ```
//! use cowbot_bot::{BotConfig, MessageHandler};
//!
//! let handler = MessageHandler::from_config(&BotConfig::default());
//! let reply = handler.handle("cowthink -b beep boop").unwrap();
//! assert!(reply.contains("( beep boop )"));
//! assert!(reply.contains("(==)"));
//! ```

mod config;
mod error;
pub mod fortune;
pub mod handler;
pub mod render;

pub use config::{
    BotConfig, DEFAULT_FORTUNE_COMMAND, DEFAULT_FORTUNE_TIMEOUT_MS, DEFAULT_PRESENCE,
    DEFAULT_REPLY_PADDING, FortuneConfig, ReplyConfig,
};
pub use error::{ConfigError, FortuneError, RenderError, Result};
pub use fortune::{
    CommandFortune, DISABLED_FORTUNE_TEXT, DisabledFortune, FortuneSource, fortune_source,
};
pub use handler::MessageHandler;
pub use render::{CowRenderer, DEFAULT_WRAP, Renderer};
