//! Render option types produced by the command parser.
//!
//! The parser only ever produces values of these types. Option keys form a
//! closed vocabulary of single letters split into three disjoint kinds
//! (string-valued, boolean and integer-valued); an [`OptionSet`] only accepts
//! a value whose kind matches its key.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// Whether the cow speaks or thinks.
///
/// # Examples
///
/// ```
/// use cowbot_core::Mode;
///
/// assert_eq!(Mode::default(), Mode::Say);
/// assert_eq!(Mode::from_verb_suffix("think"), Some(Mode::Think));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Speech bubble (`cowsay`).
    #[default]
    Say,
    /// Thought bubble (`cowthink`).
    Think,
}

impl Mode {
    /// Maps the suffix following `cow` in a command verb to a mode.
    pub fn from_verb_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "say" => Some(Self::Say),
            "think" => Some(Self::Think),
            _ => None,
        }
    }

    /// Returns the full command verb for this mode.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Say => "cowsay",
            Self::Think => "cowthink",
        }
    }
}

/// The kind of value an option key carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Takes the following word verbatim (`-f`, `-e`, `-T`).
    String,
    /// A toggle with no value (`-h`, `-l`, `-b`, ...).
    Bool,
    /// Takes the following word parsed as a base-10 integer (`-W`).
    Integer,
}

/// A recognized option letter.
///
/// # Examples
///
/// ```
/// use cowbot_core::{OptionKey, OptionKind};
///
/// let key = OptionKey::from_letter('W').unwrap();
/// assert_eq!(key, OptionKey::Wrap);
/// assert_eq!(key.kind(), OptionKind::Integer);
/// assert!(OptionKey::from_letter('x').is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKey {
    /// `-f <face>`: cow file to draw.
    Face,
    /// `-e <eyes>`: custom eye string.
    Eyes,
    /// `-T <tongue>`: custom tongue string.
    Tongue,
    /// `-h`: replace the message with the usage text.
    Help,
    /// `-l`: list available faces.
    List,
    /// `-b`: borg mode.
    Borg,
    /// `-d`: dead mode.
    Dead,
    /// `-g`: greedy mode.
    Greedy,
    /// `-p`: paranoid mode.
    Paranoid,
    /// `-s`: stoned mode.
    Stoned,
    /// `-t`: tired mode.
    Tired,
    /// `-w`: wired mode.
    Wired,
    /// `-y`: youthful mode.
    Youthful,
    /// `-W <columns>`: wrap column.
    Wrap,
}

impl OptionKey {
    /// Every recognized key, string-valued first, then boolean, then integer.
    pub const ALL: [OptionKey; 14] = [
        Self::Face,
        Self::Eyes,
        Self::Tongue,
        Self::Help,
        Self::List,
        Self::Borg,
        Self::Dead,
        Self::Greedy,
        Self::Paranoid,
        Self::Stoned,
        Self::Tired,
        Self::Wired,
        Self::Youthful,
        Self::Wrap,
    ];

    /// Looks up the key for a flag letter. Letters are case-sensitive.
    pub fn from_letter(letter: char) -> Option<Self> {
        let key = match letter {
            'f' => Self::Face,
            'e' => Self::Eyes,
            'T' => Self::Tongue,
            'h' => Self::Help,
            'l' => Self::List,
            'b' => Self::Borg,
            'd' => Self::Dead,
            'g' => Self::Greedy,
            'p' => Self::Paranoid,
            's' => Self::Stoned,
            't' => Self::Tired,
            'w' => Self::Wired,
            'y' => Self::Youthful,
            'W' => Self::Wrap,
            _ => return None,
        };
        Some(key)
    }

    /// Returns the flag letter for this key.
    pub fn letter(self) -> char {
        match self {
            Self::Face => 'f',
            Self::Eyes => 'e',
            Self::Tongue => 'T',
            Self::Help => 'h',
            Self::List => 'l',
            Self::Borg => 'b',
            Self::Dead => 'd',
            Self::Greedy => 'g',
            Self::Paranoid => 'p',
            Self::Stoned => 's',
            Self::Tired => 't',
            Self::Wired => 'w',
            Self::Youthful => 'y',
            Self::Wrap => 'W',
        }
    }

    /// Returns the flag letter as a string slice (used as the serialized map key).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Face => "f",
            Self::Eyes => "e",
            Self::Tongue => "T",
            Self::Help => "h",
            Self::List => "l",
            Self::Borg => "b",
            Self::Dead => "d",
            Self::Greedy => "g",
            Self::Paranoid => "p",
            Self::Stoned => "s",
            Self::Tired => "t",
            Self::Wired => "w",
            Self::Youthful => "y",
            Self::Wrap => "W",
        }
    }

    /// Returns which of the three fixed sets this key belongs to.
    pub fn kind(self) -> OptionKind {
        match self {
            Self::Face | Self::Eyes | Self::Tongue => OptionKind::String,
            Self::Wrap => OptionKind::Integer,
            Self::Help
            | Self::List
            | Self::Borg
            | Self::Dead
            | Self::Greedy
            | Self::Paranoid
            | Self::Stoned
            | Self::Tired
            | Self::Wired
            | Self::Youthful => OptionKind::Bool,
        }
    }
}

impl Serialize for OptionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The value recorded for an option key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A boolean toggle that was present. Serializes as `true`.
    Flag,
    /// The word following a string-valued flag.
    Text(String),
    /// The parsed word following an integer-valued flag.
    Integer(i64),
}

impl OptionValue {
    /// Returns the kind of key this value may be stored under.
    pub fn kind(&self) -> OptionKind {
        match self {
            Self::Flag => OptionKind::Bool,
            Self::Text(_) => OptionKind::String,
            Self::Integer(_) => OptionKind::Integer,
        }
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag => serializer.serialize_bool(true),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Integer(value) => serializer.serialize_i64(*value),
        }
    }
}

/// Options scanned from a command, keyed by [`OptionKey`].
///
/// Keys are unique; a later occurrence of the same flag replaces the earlier
/// value. Insertion is kind-checked: a value whose kind does not match its
/// key is rejected.
///
/// # Examples
///
/// ```
/// use cowbot_core::{OptionKey, OptionSet};
///
/// let mut set = OptionSet::new();
/// assert!(set.set_flag(OptionKey::Borg));
/// assert!(set.set_integer(OptionKey::Wrap, 30));
/// assert!(!set.set_flag(OptionKey::Face));
///
/// assert!(set.is_set(OptionKey::Borg));
/// assert_eq!(set.integer(OptionKey::Wrap), Some(30));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OptionSet {
    entries: BTreeMap<OptionKey, OptionValue>,
}

impl OptionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value if its kind matches the key. Returns whether it was stored.
    pub fn insert(&mut self, key: OptionKey, value: OptionValue) -> bool {
        if key.kind() != value.kind() {
            return false;
        }
        self.entries.insert(key, value);
        true
    }

    /// Records a boolean toggle.
    pub fn set_flag(&mut self, key: OptionKey) -> bool {
        self.insert(key, OptionValue::Flag)
    }

    /// Records a string value.
    pub fn set_text(&mut self, key: OptionKey, text: impl Into<String>) -> bool {
        self.insert(key, OptionValue::Text(text.into()))
    }

    /// Records an integer value.
    pub fn set_integer(&mut self, key: OptionKey, value: i64) -> bool {
        self.insert(key, OptionValue::Integer(value))
    }

    /// Returns the stored value for a key, of whatever kind.
    pub fn get(&self, key: OptionKey) -> Option<&OptionValue> {
        self.entries.get(&key)
    }

    /// Returns `true` if the key was present in the command.
    pub fn is_set(&self, key: OptionKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Returns the string value for a string-valued key.
    pub fn text(&self, key: OptionKey) -> Option<&str> {
        match self.get(key) {
            Some(OptionValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer value for an integer-valued key.
    pub fn integer(&self, key: OptionKey) -> Option<i64> {
        match self.get(key) {
            Some(OptionValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The parsed invocation handed to a renderer.
///
/// Built once per parsed message by [`parse_command`](crate::parse_command).
/// The only way to change it afterwards is [`with_text`](Self::with_text),
/// which produces a new value (used when a fortune replaces the payload).
///
/// # Examples
///
/// ```
/// use cowbot_core::{Mode, RenderOptions};
///
/// let options = RenderOptions::say("Bot is ready");
/// assert_eq!(options.mode(), Mode::Say);
/// assert_eq!(options.text(), "Bot is ready");
///
/// let replaced = options.with_text("moo");
/// assert_eq!(replaced.text(), "moo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOptions {
    mode: Mode,
    fortune_requested: bool,
    options: OptionSet,
    text: String,
}

impl RenderOptions {
    pub fn new(mode: Mode, fortune_requested: bool, options: OptionSet, text: String) -> Self {
        Self {
            mode,
            fortune_requested,
            options,
            text,
        }
    }

    /// Plain `cowsay <text>` options with no flags.
    pub fn say(text: impl Into<String>) -> Self {
        Self::new(Mode::Say, false, OptionSet::new(), text.into())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the command was prefixed with `fortune |`.
    pub fn fortune_requested(&self) -> bool {
        self.fortune_requested
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns a copy of these options with the payload replaced.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_round_trip_through_keys() {
        for key in OptionKey::ALL {
            assert_eq!(OptionKey::from_letter(key.letter()), Some(key));
            assert_eq!(key.as_str().chars().next(), Some(key.letter()));
        }
    }

    #[test]
    fn test_key_sets_are_disjoint_and_sized() {
        let count = |kind| OptionKey::ALL.iter().filter(|k| k.kind() == kind).count();
        assert_eq!(count(OptionKind::String), 3);
        assert_eq!(count(OptionKind::Bool), 10);
        assert_eq!(count(OptionKind::Integer), 1);
    }

    #[test]
    fn test_letters_are_case_sensitive() {
        assert_eq!(OptionKey::from_letter('w'), Some(OptionKey::Wired));
        assert_eq!(OptionKey::from_letter('W'), Some(OptionKey::Wrap));
        assert_eq!(OptionKey::from_letter('t'), Some(OptionKey::Tired));
        assert_eq!(OptionKey::from_letter('T'), Some(OptionKey::Tongue));
        assert_eq!(OptionKey::from_letter('F'), None);
    }

    #[test]
    fn test_option_set_rejects_mismatched_kinds() {
        let mut set = OptionSet::new();
        assert!(!set.set_text(OptionKey::Wrap, "40"));
        assert!(!set.set_integer(OptionKey::Face, 1));
        assert!(!set.insert(OptionKey::Help, OptionValue::Text("x".into())));
        assert!(set.is_empty());
    }

    #[test]
    fn test_option_set_later_value_replaces_earlier() {
        let mut set = OptionSet::new();
        set.set_text(OptionKey::Face, "tux");
        set.set_text(OptionKey::Face, "moose");
        assert_eq!(set.text(OptionKey::Face), Some("moose"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_option_set_get_and_iter_follow_key_order() {
        let mut set = OptionSet::new();
        set.set_integer(OptionKey::Wrap, 30);
        set.set_flag(OptionKey::Borg);
        set.set_text(OptionKey::Eyes, "^^");

        assert_eq!(set.get(OptionKey::Borg), Some(&OptionValue::Flag));
        assert_eq!(set.get(OptionKey::Face), None);

        let letters: String = set.iter().map(|(key, _)| key.letter()).collect();
        assert_eq!(letters, "ebW");
    }

    #[test]
    fn test_render_options_serialize_with_letter_keys() {
        let mut set = OptionSet::new();
        set.set_flag(OptionKey::Borg);
        set.set_integer(OptionKey::Wrap, 40);
        set.set_text(OptionKey::Face, "tux");
        let options = RenderOptions::new(Mode::Think, true, set, "hi".into());

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "mode": "think",
                "fortune_requested": true,
                "options": {"f": "tux", "b": true, "W": 40},
                "text": "hi"
            })
        );
    }
}
