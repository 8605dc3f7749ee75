//! Tests that load the bundled fixture files.
//!
//! Responsibilities:
//! - Check the exact variables each valid fixture produces.
//! - Check that each invalid fixture is rejected as invalid YAML.

use super::{invalid_fixtures, valid_fixtures};
use crate::loader::{Error, Loader};
use crate::parser::ParseErrorKind;
use crate::store::{EnvStore, MemoryEnv};

fn load_fixture(filename: &str, uppercase: bool) -> (Loader, MemoryEnv) {
    let mut store = MemoryEnv::new();
    let mut loader = Loader::new(valid_fixtures(), filename, uppercase);
    loader
        .load(&mut store)
        .unwrap_or_else(|e| panic!("{filename} should load: {e}"));
    (loader, store)
}

fn get(store: &MemoryEnv, name: &str) -> Option<String> {
    store.get(name)
}

#[test]
fn test_default_fixture() {
    let (loader, store) = load_fixture("env.yml", false);

    assert_eq!(get(&store, "FOO").as_deref(), Some("bar"));
    assert_eq!(get(&store, "BAR").as_deref(), Some("baz"));
    assert_eq!(get(&store, "SPACED").as_deref(), Some("with spaces"));
    assert_eq!(get(&store, "EMPTY").as_deref(), Some(""));
    assert_eq!(get(&store, "NESTED_ARRAY_ONE").as_deref(), Some("1"));
    assert_eq!(get(&store, "NESTED_ARRAY_TWO").as_deref(), Some("2"));

    let names: Vec<&str> = loader.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        ["FOO", "BAR", "SPACED", "EMPTY", "NESTED_ARRAY_ONE", "NESTED_ARRAY_TWO"]
    );
}

#[test]
fn test_commented_fixture() {
    let (_, store) = load_fixture("commented.yml", false);

    assert_eq!(get(&store, "CFOO").as_deref(), Some("bar"));
    assert_eq!(get(&store, "CBAR"), None);
    assert_eq!(get(&store, "CZOO"), None);
    assert_eq!(get(&store, "CSPACED").as_deref(), Some("with spaces"));
    assert_eq!(
        get(&store, "CQUOTES").as_deref(),
        Some("a value with a # character")
    );
    assert_eq!(
        get(&store, "CQUOTESWITHQUOTE").as_deref(),
        Some("a value with a # character & a quote \" character inside quotes")
    );
    assert_eq!(get(&store, "CNULL").as_deref(), Some(""));
}

#[test]
fn test_quoted_fixture() {
    let (_, store) = load_fixture("quoted.yml", false);

    assert_eq!(get(&store, "QFOO").as_deref(), Some("bar"));
    assert_eq!(get(&store, "QBAR").as_deref(), Some("baz"));
    assert_eq!(get(&store, "QSPACED").as_deref(), Some("with spaces"));
    assert_eq!(get(&store, "QNULL").as_deref(), Some(""));
    assert_eq!(
        get(&store, "QEQUALS").as_deref(),
        Some("pgsql:host=localhost;dbname=test")
    );
    assert_eq!(get(&store, "QWHITESPACE").as_deref(), Some("no space"));
    assert_eq!(
        get(&store, "QESCAPED").as_deref(),
        Some(r#"test some escaped characters like a quote (") or maybe a backslash (\)"#)
    );
}

#[test]
fn test_specialchars_fixture() {
    let (_, store) = load_fixture("specialchars.yml", false);

    assert_eq!(get(&store, "SPVAR1").as_deref(), Some("$a6^C7k%zs+e^.jvjXk"));
    assert_eq!(get(&store, "SPVAR2").as_deref(), Some("?BUty3koaV3%GA*hMAwH}B"));
    assert_eq!(
        get(&store, "SPVAR3").as_deref(),
        Some("jdgEB4{QgEC]HL))&GcXxokB+wqoN+j>xkV7K?m$r")
    );
    assert_eq!(get(&store, "SPVAR4").as_deref(), Some("22222:22#2^{"));
    assert_eq!(
        get(&store, "SPVAR5").as_deref(),
        Some(r#"test some escaped characters like a quote " or maybe a backslash \"#)
    );
}

#[test]
fn test_nested_fixture() {
    let (loader, store) = load_fixture("nested.yml", false);

    assert_eq!(get(&store, "NVAR1").as_deref(), Some("Hello"));
    assert_eq!(get(&store, "NVAR2").as_deref(), Some("World!"));
    assert_eq!(get(&store, "NVAR3_NVAR4").as_deref(), Some("Nested 1"));
    assert_eq!(get(&store, "NVAR3_NVAR5_NVAR6").as_deref(), Some("Nested 2"));
    assert_eq!(get(&store, "NVAR3"), None);
    assert_eq!(get(&store, "NVAR3_NVAR5"), None);

    let nvar3 = loader.raw_env("NVAR3").and_then(|v| v.as_map()).unwrap();
    assert_eq!(nvar3.keys().collect::<Vec<_>>(), ["NVAR4", "NVAR5"]);
}

#[test]
fn test_lowercase_fixture_preserves_case_by_default() {
    let (_, store) = load_fixture("lowercase.yml", false);

    assert_eq!(get(&store, "lcvar1").as_deref(), Some("val1"));
    assert_eq!(get(&store, "LCVAR1"), None);
}

#[test]
fn test_lowercase_fixture_uppercased() {
    let (_, store) = load_fixture("lowercase.yml", true);

    for (name, value) in [("LCVAR1", "val1"), ("LCVAR2", "val2"), ("LCVAR3", "val3")] {
        assert_eq!(get(&store, name).as_deref(), Some(value));
    }
    assert_eq!(get(&store, "lcvar1"), None);
}

#[test]
fn test_assertions_fixture() {
    let (_, store) = load_fixture("assertions.yml", false);

    assert_eq!(get(&store, "ASSERTVAR1").as_deref(), Some("val1"));
    assert_eq!(get(&store, "ASSERTVAR2").as_deref(), Some(""));
    assert_eq!(get(&store, "ASSERTVAR3").as_deref(), Some("   "));
    assert_eq!(get(&store, "ASSERTVAR4").as_deref(), Some("0"));
}

#[test]
fn test_invalid_fixtures_are_rejected() {
    let cases = [
        ("invalid.yml", 3, ParseErrorKind::UnquotedWhitespace),
        ("sequence.yml", 2, ParseErrorKind::SequenceNotSupported),
        ("unterminated.yml", 2, ParseErrorKind::UnterminatedQuote),
        ("tabs.yml", 2, ParseErrorKind::TabIndentation),
    ];

    for (filename, line, kind) in cases {
        let mut store = MemoryEnv::new();
        let mut loader = Loader::new(invalid_fixtures(), filename, false);

        match loader.load(&mut store) {
            Err(Error::InvalidFile { source, .. }) => {
                assert_eq!(source.line, line, "{filename}");
                assert_eq!(source.kind, kind, "{filename}");
            }
            other => panic!("{filename}: expected InvalidFile, got {other:?}"),
        }
        assert!(store.is_empty(), "{filename} must not apply any variable");
    }
}
