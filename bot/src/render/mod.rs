//! ASCII-art rendering of [`RenderOptions`].
//!
//! [`Renderer`] is the seam the message handler draws through; [`CowRenderer`]
//! is the built-in implementation. It honors the whole option vocabulary:
//! `-f` picks a face, `-e`/`-T` set eyes and tongue, the modifier flags
//! `-bdgpstwy` pick preset expressions, `-W` sets the wrap column and `-l`
//! lists faces instead of drawing.

pub mod faces;

use cowbot_core::{Mode, OptionKey, OptionSet, RenderOptions};

use crate::error::RenderError;
use faces::DEFAULT_FACE;

/// Default wrap column.
pub const DEFAULT_WRAP: i64 = 40;

const DEFAULT_EYES: &str = "oo";
const DEFAULT_TONGUE: &str = "  ";
const TAB_WIDTH: usize = 4;

/// Modifier flags in precedence order with their eyes and optional tongue.
const MODIFIERS: [(OptionKey, &str, Option<&str>); 8] = [
    (OptionKey::Borg, "==", None),
    (OptionKey::Dead, "xx", Some("U ")),
    (OptionKey::Greedy, "$$", None),
    (OptionKey::Paranoid, "@@", None),
    (OptionKey::Stoned, "**", Some("U ")),
    (OptionKey::Tired, "--", None),
    (OptionKey::Wired, "OO", None),
    (OptionKey::Youthful, "..", None),
];

/// Turns parsed options into the text of a reply.
pub trait Renderer: Send + Sync {
    fn render(&self, options: &RenderOptions) -> Result<String, RenderError>;
}

/// Draws a cow with a speech or thought bubble.
///
/// # Examples
///
/// ```
/// use cowbot_bot::{CowRenderer, Renderer};
/// use cowbot_core::RenderOptions;
///
/// let cow = CowRenderer.render(&RenderOptions::say("moo")).unwrap();
/// assert!(cow.starts_with(" _____\n< moo >\n -----\n"));
/// assert!(cow.contains("^__^"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CowRenderer;

impl Renderer for CowRenderer {
    fn render(&self, options: &RenderOptions) -> Result<String, RenderError> {
        let set = options.options();
        if set.is_set(OptionKey::List) {
            return Ok(faces::names().join("  "));
        }

        let face_name = set.text(OptionKey::Face).unwrap_or(DEFAULT_FACE);
        let face = faces::lookup(face_name)
            .ok_or_else(|| RenderError::UnknownFace(face_name.to_string()))?;

        let wrap = set.integer(OptionKey::Wrap).unwrap_or(DEFAULT_WRAP);
        let width = usize::try_from(wrap)
            .ok()
            .filter(|width| *width > 0)
            .ok_or(RenderError::InvalidWrap(wrap))?;

        let (eyes, tongue) = expression(set);
        let lines = wrap_text(options.text(), width);
        let thoughts = match options.mode() {
            Mode::Say => "\\",
            Mode::Think => "o",
        };

        Ok(format!(
            "{}\n{}",
            bubble(&lines, options.mode()),
            face.draw(thoughts, &eyes, &tongue)
        ))
    }
}

/// Resolves eyes and tongue. A modifier flag overrides `-e`, and `-T` unless
/// the modifier brings its own tongue.
fn expression(set: &OptionSet) -> (String, String) {
    let custom_eyes = set.text(OptionKey::Eyes).map(two_columns);
    let custom_tongue = set.text(OptionKey::Tongue).map(two_columns);

    let modifier = MODIFIERS.iter().find(|(key, _, _)| set.is_set(*key));
    let eyes = match modifier {
        Some((_, eyes, _)) => (*eyes).to_string(),
        None => custom_eyes.unwrap_or_else(|| DEFAULT_EYES.to_string()),
    };
    let tongue = match modifier.and_then(|(_, _, tongue)| *tongue) {
        Some(tongue) => tongue.to_string(),
        None => custom_tongue.unwrap_or_else(|| DEFAULT_TONGUE.to_string()),
    };
    (eyes, tongue)
}

/// First two characters of `value`, space padded.
fn two_columns(value: &str) -> String {
    format!("{:<2}", value.chars().take(2).collect::<String>())
}

/// Word-wraps `text` to `width` columns, keeping existing line breaks.
/// Words longer than `width` are split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let expanded = text.replace('\r', "").replace('\t', &" ".repeat(TAB_WIDTH));
    let mut lines = Vec::new();

    for paragraph in expanded.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            while word.chars().count() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let split = word
                    .char_indices()
                    .nth(width)
                    .map_or(word.len(), |(idx, _)| idx);
                lines.push(word[..split].to_string());
                word = &word[split..];
            }

            let word_len = word.chars().count();
            if current.is_empty() {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                current_len = word_len;
            }
        }
        lines.push(current);
    }

    lines
}

fn bubble(lines: &[String], mode: Mode) -> String {
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!(" {}", "_".repeat(width + 2)));
    for (idx, line) in lines.iter().enumerate() {
        let (open, close) = borders(mode, idx, lines.len());
        let pad = " ".repeat(width - line.chars().count());
        out.push(format!("{open} {line}{pad} {close}"));
    }
    out.push(format!(" {}", "-".repeat(width + 2)));
    out.join("\n")
}

fn borders(mode: Mode, idx: usize, count: usize) -> (char, char) {
    match mode {
        Mode::Think => ('(', ')'),
        Mode::Say if count == 1 => ('<', '>'),
        Mode::Say if idx == 0 => ('/', '\\'),
        Mode::Say if idx + 1 == count => ('\\', '/'),
        Mode::Say => ('|', '|'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cowbot_core::parse_command;

    fn render(raw: &str) -> Result<String, RenderError> {
        let options = parse_command(raw).unwrap().unwrap();
        CowRenderer.render(&options)
    }

    #[test]
    fn test_single_line_say_bubble() {
        let out = render("cowsay hi").unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some(" ____"));
        assert_eq!(lines.next(), Some("< hi >"));
        assert_eq!(lines.next(), Some(" ----"));
        assert_eq!(lines.next(), Some("        \\   ^__^"));
        assert!(out.contains("(oo)"));
    }

    #[test]
    fn test_multi_line_say_bubble() {
        let out = render("cowsay -W 5 aaa bbb ccc").unwrap();
        let lines: Vec<&str> = out.lines().take(5).collect();
        assert_eq!(
            lines,
            vec![" _____", "/ aaa \\", "| bbb |", "\\ ccc /", " -----"]
        );
    }

    #[test]
    fn test_think_bubble_and_connector() {
        let out = render("cowthink a\nbb").unwrap();
        assert!(out.contains("( a  )\n( bb )"));
        assert!(out.contains("        o   ^__^"));
    }

    #[test]
    fn test_empty_text_draws_empty_bubble() {
        let out = render("cowsay").unwrap();
        assert!(out.starts_with(" __\n<  >\n --\n"));
    }

    #[test]
    fn test_custom_eyes_and_tongue() {
        let out = render("cowsay -e ^^^ -T U hi").unwrap();
        assert!(out.contains("(^^)"));
        assert!(out.contains("U  ||----w |"));
    }

    #[test]
    fn test_modifier_overrides_custom_eyes() {
        let out = render("cowsay -e ^^ -d -T xx hi").unwrap();
        assert!(out.contains("(xx)"));
        assert!(out.contains("U  ||----w |"));

        let out = render("cowsay -y -b hi").unwrap();
        assert!(out.contains("(==)"));
    }

    #[test]
    fn test_unknown_face_fails() {
        let err = render("cowsay -f dragon hi").unwrap_err();
        assert_eq!(err, RenderError::UnknownFace("dragon".into()));
        assert_eq!(err.to_string(), "Could not find dragon cowfile!");
    }

    #[test]
    fn test_non_positive_wrap_fails() {
        assert_eq!(render("cowsay -W 0 hi"), Err(RenderError::InvalidWrap(0)));
    }

    #[test]
    fn test_list_faces() {
        assert_eq!(render("cowsay -l").unwrap(), "default  moose  small  tux");
    }

    #[test]
    fn test_long_words_are_split() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("x\ty", 10), vec!["x y"]);
    }
}
