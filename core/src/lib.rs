//! Command-text parser for a cowsay chat bot.
//!
//! A chat message such as `cowthink -b -W 30 hello there` is turned into a
//! [`RenderOptions`] value describing how to draw the reply. Parsing runs in
//! four stages over the message text:
//!
//! - [`recognize_command`] — the `cowsay`/`cowthink` verb, optionally
//!   prefixed with `fortune |`.
//! - [`scan_options`] — one left-to-right pass collecting flags into an
//!   [`OptionSet`].
//! - [`extract_text`] — the payload after the options, with
//!   triple-backtick blocks joined line by line.
//! - [`assemble`] — the final value, with `-h` replacing the payload by
//!   [`USAGE_TEXT`].
//!
//! [`parse_command`] runs all four.
//!
//! # Example
//!
//! ```
//! use cowbot_core::*;
//!
//! let options = parse_command("cowthink -b -W 30 hello there").unwrap().unwrap();
//! assert_eq!(options.mode(), Mode::Think);
//! assert!(options.options().is_set(OptionKey::Borg));
//! assert_eq!(options.options().integer(OptionKey::Wrap), Some(30));
//! assert_eq!(options.text(), "hello there");
//!
//! // Not a command: no invocation, no error.
//! assert_eq!(parse_command("hello there").unwrap(), None);
//!
//! // Value errors abort the whole parse.
//! let err = parse_command("cowsay -f").unwrap_err();
//! assert_eq!(err.to_string(), "Missing value for option: f");
//! ```

mod assemble;
mod command;
mod error;
mod scanner;
mod text;
mod types;

pub use assemble::{USAGE_TEXT, assemble};
pub use command::{Command, recognize_command};
pub use error::{ParseError, Result};
pub use scanner::{ScanOutcome, scan_options};
pub use text::{TextBlock, extract_text, find_blocks};
pub use types::*;

/// Parses one chat message.
///
/// Returns `Ok(None)` when the message does not start with a command verb.
/// Parsing is a pure function of `raw`.
///
/// # Errors
///
/// Returns [`ParseError::MissingOptionValue`] when a string- or
/// integer-valued flag has no value word, and
/// [`ParseError::InvalidNumericValue`] when `-W` is not followed by an
/// integer.
pub fn parse_command(raw: &str) -> Result<Option<RenderOptions>> {
    let Some(command) = recognize_command(raw) else {
        return Ok(None);
    };
    let rest = &raw[command.consumed..];
    let scanned = scan_options(rest)?;
    let text = extract_text(rest, scanned.cursor);
    Ok(Some(assemble(command, scanned.options, text)))
}
