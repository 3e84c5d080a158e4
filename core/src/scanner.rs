//! Single-pass option scanner.
//!
//! Flags are a dash and one ASCII letter ending at a word boundary (`-b`,
//! `-W`, but not the `-k` in `well-known`). The scanner walks the text once,
//! left to right. Each step is a pure function of the text and the current
//! position and returns the next position, so no position is revisited.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::{ParseError, Result};
use crate::{OptionKey, OptionKind, OptionSet, OptionValue};

// SAFETY: These regexes are compile-time constants and are validated by tests.
static FLAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([A-Za-z])\b").expect("static regex must compile"));
static VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-[A-Za-z]\s([^-\s]\S*)").expect("static regex must compile"));

/// Result of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub options: OptionSet,
    /// Offset just past the last consumed flag or value word, `0` when no
    /// flag was found.
    pub cursor: usize,
}

/// One matched flag and where the scan continues.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScanStep {
    /// `None` when the letter is not part of the option vocabulary.
    entry: Option<(OptionKey, OptionValue)>,
    next: usize,
}

/// Scans `rest` (the text after the command verb) for flags.
///
/// Fails on the first value error; nothing scanned so far is returned in
/// that case.
///
/// # Examples
///
/// ```
/// use cowbot_core::{OptionKey, ParseError, scan_options};
///
/// let outcome = scan_options(" -b -W 30 hello").unwrap();
/// assert!(outcome.options.is_set(OptionKey::Borg));
/// assert_eq!(outcome.options.integer(OptionKey::Wrap), Some(30));
/// assert_eq!(outcome.cursor, 9);
///
/// assert_eq!(scan_options(" -e"), Err(ParseError::MissingOptionValue('e')));
/// ```
pub fn scan_options(rest: &str) -> Result<ScanOutcome> {
    let mut options = OptionSet::new();
    let mut cursor = 0;

    while let Some(step) = scan_step(rest, cursor)? {
        if let Some((key, value)) = step.entry {
            options.insert(key, value);
        }
        cursor = step.next;
    }

    Ok(ScanOutcome { options, cursor })
}

fn scan_step(rest: &str, from: usize) -> Result<Option<ScanStep>> {
    if from >= rest.len() {
        return Ok(None);
    }
    let Some(caps) = FLAG_RE.captures_at(rest, from) else {
        return Ok(None);
    };
    let Some(flag) = caps.get(0) else {
        return Ok(None);
    };
    let flag_end = if flag.is_empty() {
        next_char_boundary(rest, flag.start())
    } else {
        flag.end()
    };
    let Some(letter) = caps.get(1).and_then(|m| m.as_str().chars().next()) else {
        return Ok(Some(ScanStep {
            entry: None,
            next: flag_end,
        }));
    };

    let Some(key) = OptionKey::from_letter(letter) else {
        debug!(letter = %letter, offset = flag.start(), "Ignoring unknown flag");
        return Ok(Some(ScanStep {
            entry: None,
            next: flag_end,
        }));
    };

    let step = match key.kind() {
        OptionKind::Bool => ScanStep {
            entry: Some((key, OptionValue::Flag)),
            next: flag_end,
        },
        OptionKind::String => {
            let (word, next) = value_word(rest, flag.start(), letter)?;
            ScanStep {
                entry: Some((key, OptionValue::Text(word.to_string()))),
                next,
            }
        }
        OptionKind::Integer => {
            let (word, next) = value_word(rest, flag.start(), letter)?;
            let value = word
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidNumericValue(letter))?;
            ScanStep {
                entry: Some((key, OptionValue::Integer(value))),
                next,
            }
        }
    };
    debug!(letter = %letter, next = step.next, "Scanned flag");
    Ok(Some(step))
}

/// Reads the value word that must directly follow the flag at `flag_start`,
/// separated by exactly one whitespace character. Returns the word and the
/// offset just past it.
fn value_word(rest: &str, flag_start: usize, letter: char) -> Result<(&str, usize)> {
    let tail = &rest[flag_start..];
    let caps = VALUE_RE
        .captures(tail)
        .ok_or(ParseError::MissingOptionValue(letter))?;
    match (caps.get(0), caps.get(1)) {
        (Some(whole), Some(word)) => Ok((word.as_str(), flag_start + whole.end())),
        _ => Err(ParseError::MissingOptionValue(letter)),
    }
}

fn next_char_boundary(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(text.len(), |ch| at + ch.len_utf8())
}
