#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_extra_brace_after_block() {
    let text = "void setup() {\n  size(100, 100);\n}\n}";
    let query = extraneous_closing_brace(text).unwrap();
    assert_eq!(query.path(), "extraneousclosingcurlybrace");
    assert_eq!(
        query.get("original"),
        Some("void setup() {\n  /* your code */\n}\n}")
    );
    assert_eq!(query.get("fixed"), Some("void setup() {\n  /* your code */\n}\n"));
}

#[test]
fn test_extra_brace_keeps_line_above_header() {
    let text = "// shapes\nvoid draw() {\n  rect(0, 0, 1, 1);\n}\n}";
    let query = extraneous_closing_brace(text).unwrap();
    assert_eq!(
        query.get("original"),
        Some("// shapes\nvoid draw() {\n  /* your code */\n}\n}")
    );
}

#[test]
fn test_extra_brace_skips_nested_blocks() {
    let text = "void draw() {\n  if (true) {\n    x++;\n  }\n}\n}";
    let query = extraneous_closing_brace(text).unwrap();
    assert_eq!(
        query.get("fixed"),
        Some("void draw() {\n  /* your code */\n}\n")
    );
}

#[test]
fn test_extra_brace_unmatched() {
    assert!(extraneous_closing_brace("void setup() {\n}").is_none());
    assert!(extraneous_closing_brace("}\n}").is_none());
    assert!(extraneous_closing_brace("no braces").is_none());
}

#[test]
fn test_method_name_before_last_paren() {
    let text = "void setup() {\n}\nvoid drawShape(int x";
    let query = incorrect_method_declaration(text).unwrap();
    assert_eq!(query.path(), "incorrectmethoddeclaration");
    assert_eq!(query.get("methodname"), Some("drawShape"));

    let query = incorrect_method_declaration("foo(").unwrap();
    assert_eq!(query.get("methodname"), Some("foo"));
}

#[test]
fn test_method_name_missing() {
    assert!(incorrect_method_declaration("int x = 3;").is_none());
    assert!(incorrect_method_declaration("x = (").is_none());
}

#[test]
fn test_identifier_parts() {
    assert!("a_1$é".chars().all(is_identifier_part));
    assert!(!is_identifier_part(' '));
    assert!(!is_identifier_part('('));
}
