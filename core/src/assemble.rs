//! Final assembly of [`RenderOptions`].

use tracing::debug;

use crate::command::Command;
use crate::{OptionKey, OptionSet, RenderOptions};

/// Usage text that replaces the payload when `-h` is given.
pub const USAGE_TEXT: &str = "\
Usage: {cowsay | cowthink} [options] [message]

Options:

-bdgpstwy modifiers
-h help (this text)
-e eyes
-f face
-l lists faces
-T Tongue
-W wrap";

/// Merges the recognized verb, scanned options and payload into one value.
///
/// If the help flag is set, the payload is replaced by [`USAGE_TEXT`].
pub fn assemble(command: Command, options: OptionSet, text: String) -> RenderOptions {
    let text = if options.is_set(OptionKey::Help) {
        debug!("Help flag set, substituting usage text");
        USAGE_TEXT.to_string()
    } else {
        text
    };
    RenderOptions::new(command.mode, command.fortune_requested, options, text)
}
