//! Integration tests for the annotation literal grammar.

use libannot::{parse, parse_with_options, parse_with_source_name, ArrayValue, ParseError,
    ParseOptions, Value};

fn scalar(raw: &str) -> Value {
    Value::Scalar(raw.to_string())
}

#[test]
fn test_empty_literal_is_empty_list() {
    assert_eq!(parse("{}").unwrap(), ArrayValue::List(Vec::new()));
    assert_eq!(parse("{ }").unwrap(), ArrayValue::List(Vec::new()));
}

#[test]
fn test_keyed_element_unquoted_key() {
    let value = parse(r#"{key: "value"}"#).unwrap();
    let entries = value.as_map().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries.get("key"), Some(&scalar("\"value\"")));
}

#[test]
fn test_keyed_element_quoted_key_keeps_quotes() {
    let value = parse(r#"{"key": "value"}"#).unwrap();
    let entries = value.as_map().unwrap();
    assert_eq!(entries.get("\"key\""), Some(&scalar("\"value\"")));
    // A quoted key is distinct from its unquoted spelling.
    assert_eq!(entries.get("key"), None);
}

#[test]
fn test_unkeyed_elements_form_list() {
    let value = parse(r#"{"value", "value2"}"#).unwrap();
    assert_eq!(
        value,
        ArrayValue::List(vec![scalar("\"value\""), scalar("\"value2\"")])
    );
}

#[test]
fn test_nested_literal_round_trips_structurally() {
    let value = parse(r#"{a: {b: "c"}}"#).unwrap();
    let entries = value.as_map().unwrap();
    let inner = entries.get("a").unwrap().as_nested().unwrap();
    let inner_entries = inner.as_map().unwrap();
    assert_eq!(inner_entries.get("b"), Some(&scalar("\"c\"")));
}

#[test]
fn test_trailing_comma_is_noop() {
    assert_eq!(
        parse(r#"{"x", "y",}"#).unwrap(),
        parse(r#"{"x", "y"}"#).unwrap()
    );
}

#[test]
fn test_comma_inside_string_is_not_a_separator() {
    let value = parse(r#"{"a,b"}"#).unwrap();
    assert_eq!(value, ArrayValue::List(vec![scalar("\"a,b\"")]));
}

#[test]
fn test_missing_close_brace_fails() {
    let err = parse(r#"{"x"#).unwrap_err();
    assert!(matches!(err, ParseError::UnterminatedString(_)));

    let err = parse(r#"{"x""#).unwrap_err();
    assert!(matches!(err, ParseError::UnbalancedBraces(_)));
}

#[test]
fn test_keyed_then_unkeyed_fails() {
    let err = parse(r#"{key: "v", "w"}"#).unwrap_err();
    assert!(matches!(err, ParseError::MixedKeyedUnkeyed(_)));
}

#[test]
fn test_unkeyed_then_keyed_fails() {
    let err = parse(r#"{"w", key: "v"}"#).unwrap_err();
    assert!(matches!(err, ParseError::MixedKeyedUnkeyed(_)));
}

#[test]
fn test_duplicate_key_keeps_position_last_value_wins() {
    let value = parse(r#"{a: "1", b: "2", a: "3"}"#).unwrap();
    let entries = value.as_map().unwrap();
    assert_eq!(entries.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(entries.get("a"), Some(&scalar("\"3\"")));
    assert_eq!(entries.get("b"), Some(&scalar("\"2\"")));
}

#[test]
fn test_double_colon_is_not_a_key_separator() {
    let value = parse("{Status::ACTIVE}").unwrap();
    assert_eq!(value, ArrayValue::List(vec![scalar("Status::ACTIVE")]));
}

#[test]
fn test_backslashes_stay_verbatim() {
    let value = parse(r"{App\Entity\User::class}").unwrap();
    assert_eq!(
        value,
        ArrayValue::List(vec![scalar(r"App\Entity\User::class")])
    );
}

#[test]
fn test_scalar_idempotence() {
    for raw in ["\"value\"", "123", "Status::ACTIVE", "@Foo", "a.b-c", "'x y'"] {
        let value = parse(&format!("{{{}}}", raw)).unwrap();
        assert_eq!(value, ArrayValue::List(vec![scalar(raw)]));
    }
}

#[test]
fn test_list_elements_keep_source_order() {
    let value = parse(r#"{"a", "b", "c"}"#).unwrap();
    let items = value.as_list().unwrap();
    let raws: Vec<_> = items.iter().map(|v| v.as_scalar().unwrap()).collect();
    assert_eq!(raws, vec!["\"a\"", "\"b\"", "\"c\""]);
}

#[test]
fn test_map_keys_keep_source_order() {
    let value = parse(r#"{b: "1", a: "2", c: "3"}"#).unwrap();
    let entries = value.as_map().unwrap();
    assert_eq!(entries.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
}

#[test]
fn test_literal_spanning_lines() {
    let value = parse("{\n    name: \"users\",\n    indexes: {\"id\"}\n}").unwrap();
    let entries = value.as_map().unwrap();
    assert_eq!(entries.get("name"), Some(&scalar("\"users\"")));
    let indexes = entries.get("indexes").unwrap().as_nested().unwrap();
    assert_eq!(indexes.as_list().unwrap().len(), 1);
}

#[test]
fn test_not_a_literal_fails() {
    let err = parse("@Route(\"/\")").unwrap_err();
    assert!(matches!(err, ParseError::ExpectedOpenBrace(_, _)));
}

#[test]
fn test_empty_input_fails() {
    assert!(matches!(parse("").unwrap_err(), ParseError::EmptyInput(_)));
    assert!(matches!(parse("   ").unwrap_err(), ParseError::EmptyInput(_)));
}

#[test]
fn test_element_not_followed_by_separator_fails() {
    let err = parse(r#"{a: {} b: "c"}"#).unwrap_err();
    match err {
        ParseError::ExpectedSeparator(found, _) => assert_eq!(found, "b"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_depth_limit_default_admits_realistic_nesting() {
    let value = parse(r#"{a: {b: {c: {d: "e"}}}}"#).unwrap();
    assert!(value.as_map().is_some());
}

#[test]
fn test_depth_limit_is_configurable() {
    let options = ParseOptions::new().with_max_depth(3);
    let err = parse_with_options("{{{{}}}}", None, &options).unwrap_err();
    assert!(matches!(err, ParseError::DepthLimitExceeded(3, _)));
}

#[test]
fn test_error_carries_location_and_source_name() {
    let err = parse_with_source_name(r#"{"x""#, Some("Entity.php")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("at 1:5"), "message was: {}", message);
    assert!(message.contains("of <Entity.php>"), "message was: {}", message);
}

#[test]
fn test_rendering_reparses_to_equal_value() {
    for source in [
        r#"{key: "value"}"#,
        r#"{"value", "value2"}"#,
        r#"{a: {b: "c"}, d: {"e", "f"}}"#,
        "{}",
    ] {
        let value = parse(source).unwrap();
        assert_eq!(parse(&value.to_string()).unwrap(), value);
    }
}
