//! Command verb recognition.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::Mode;

// SAFETY: compile-time constant, exercised by tests.
static COMMAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(fortune)\s*\|\s*)?cow(say|think)").expect("static regex must compile")
});

/// A recognized command verb at the start of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub mode: Mode,
    /// `true` when the verb was prefixed with `fortune |`.
    pub fortune_requested: bool,
    /// Byte offset immediately after the verb sequence.
    pub consumed: usize,
}

/// Matches `cowsay`, `cowthink`, `fortune | cowsay` or `fortune | cowthink`
/// anchored at the very start of `raw`.
///
/// Returns `None` when the text is not a command. The verb needs no trailing
/// boundary: `cowsayhello` is recognized with `consumed == 6`.
///
/// # Examples
///
/// ```
/// use cowbot_core::{Mode, recognize_command};
///
/// let cmd = recognize_command("fortune|cowthink -b").unwrap();
/// assert_eq!(cmd.mode, Mode::Think);
/// assert!(cmd.fortune_requested);
/// assert_eq!(cmd.consumed, 16);
///
/// assert!(recognize_command(" cowsay hi").is_none());
/// ```
pub fn recognize_command(raw: &str) -> Option<Command> {
    let caps = COMMAND_RE.captures(raw)?;
    let verb = caps.get(0)?;
    let mode = caps
        .get(2)
        .and_then(|suffix| Mode::from_verb_suffix(suffix.as_str()))?;
    let command = Command {
        mode,
        fortune_requested: caps.get(1).is_some(),
        consumed: verb.end(),
    };
    debug!(
        verb = mode.verb(),
        fortune = command.fortune_requested,
        consumed = command.consumed,
        "Recognized command verb"
    );
    Some(command)
}
