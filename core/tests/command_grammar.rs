use cowbot_core::{
    Mode, OptionKey, OptionSet, ParseError, RenderOptions, USAGE_TEXT, parse_command,
};

fn parse(raw: &str) -> RenderOptions {
    parse_command(raw)
        .expect("should parse")
        .expect("should be a command")
}

#[test]
fn test_non_commands_yield_nothing() {
    for raw in [
        "",
        "hello",
        "say cowsay",
        " cowsay hi",
        "COWSAY hi",
        "fortune",
        "fortune | moo",
        "-b cowsay",
    ] {
        assert_eq!(parse_command(raw), Ok(None), "{raw:?}");
    }
}

#[test]
fn test_plain_say() {
    let options = parse("cowsay hello");
    assert_eq!(options.mode(), Mode::Say);
    assert!(!options.fortune_requested());
    assert!(options.options().is_empty());
    assert_eq!(options.text(), "hello");
}

#[test]
fn test_think_with_boolean_flag() {
    let options = parse("cowthink -b hello there");
    assert_eq!(options.mode(), Mode::Think);
    let mut expected = OptionSet::new();
    expected.set_flag(OptionKey::Borg);
    assert_eq!(options.options(), &expected);
    assert_eq!(options.text(), "hello there");
}

#[test]
fn test_fortune_without_payload() {
    let options = parse("fortune | cowsay");
    assert_eq!(options.mode(), Mode::Say);
    assert!(options.fortune_requested());
    assert!(options.options().is_empty());
    assert_eq!(options.text(), "");
}

#[test]
fn test_fortune_with_think_and_flags() {
    let options = parse("fortune | cowthink -d");
    assert_eq!(options.mode(), Mode::Think);
    assert!(options.fortune_requested());
    assert!(options.options().is_set(OptionKey::Dead));
}

#[test]
fn test_missing_string_value() {
    assert_eq!(
        parse_command("cowsay -f"),
        Err(ParseError::MissingOptionValue('f'))
    );
}

#[test]
fn test_invalid_numeric_value() {
    let err = parse_command("cowsay -W abc hi").unwrap_err();
    assert_eq!(err, ParseError::InvalidNumericValue('W'));
    assert_eq!(err.to_string(), "-W has to be followed by an integer.");
}

#[test]
fn test_numeric_value() {
    let options = parse("cowsay -W 40 hello");
    assert_eq!(options.options().integer(OptionKey::Wrap), Some(40));
    assert_eq!(options.options().len(), 1);
    assert_eq!(options.text(), "hello");
}

#[test]
fn test_help_replaces_payload() {
    for raw in [
        "cowsay -h",
        "cowsay -h -b some text",
        "cowthink -f tux -h ```block```",
    ] {
        assert_eq!(parse(raw).text(), USAGE_TEXT, "{raw:?}");
    }
}

#[test]
fn test_help_does_not_hide_value_errors() {
    assert_eq!(
        parse_command("cowsay -h -e"),
        Err(ParseError::MissingOptionValue('e'))
    );
}

#[test]
fn test_two_blocks_with_gap_text() {
    let options = parse("cowsay ```first``` middle ```second```");
    assert_eq!(options.text(), "first\nmiddle\nsecond");
}

#[test]
fn test_blocks_after_options() {
    let options = parse("cowsay -f tux ```\nline one\nline two```");
    assert_eq!(options.options().text(OptionKey::Face), Some("tux"));
    assert_eq!(options.text(), "\nline one\nline two");
}

#[test]
fn test_all_value_kinds_together() {
    let options = parse("cowthink -e ^^ -T U -W 20 -y -x hi");
    let set = options.options();
    assert_eq!(set.text(OptionKey::Eyes), Some("^^"));
    assert_eq!(set.text(OptionKey::Tongue), Some("U"));
    assert_eq!(set.integer(OptionKey::Wrap), Some(20));
    assert!(set.is_set(OptionKey::Youthful));
    assert_eq!(set.len(), 4);
    assert_eq!(options.text(), "hi");
}

#[test]
fn test_parsing_is_deterministic() {
    for raw in [
        "cowsay hello",
        "fortune | cowthink -b -W 12 ```x``` y ```z```",
        "cowsay -W nope",
        "not a command",
    ] {
        assert_eq!(parse_command(raw), parse_command(raw), "{raw:?}");
    }
}
