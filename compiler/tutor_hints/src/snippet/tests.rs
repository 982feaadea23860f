use pretty_assertions::assert_eq;

use super::*;

fn types(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn test_method_signature() {
    assert_eq!(method_signature("foo", &types(&["int", "String"])), "foo(int, String)");
    assert_eq!(method_signature("run", &[]), "run()");
}

#[test]
fn test_method_declaration_numbers_params() {
    assert_eq!(
        method_declaration("foo", "int", &types(&["int", "String"])),
        "int foo(int param1, String param2)"
    );
    assert_eq!(method_declaration("draw", "void", &[]), "void draw()");
}

#[test]
fn test_var_description() {
    assert_eq!(var_description("int"), "int-type variable");
    assert_eq!(var_description("String"), "String-type variable");
    assert_eq!(var_description("Float"), "Float object");
    assert_eq!(var_description("PImage"), "PImage object");
}

#[test]
fn test_simple_name() {
    assert_eq!(simple_name("java.lang.Float"), "Float");
    assert_eq!(simple_name("int"), "int");
    assert_eq!(simple_name("trailing."), "");
    assert_eq!(simple_name(""), "");
}

#[test]
fn test_simple_name_shortens_type_arguments() {
    assert_eq!(
        simple_name("java.util.ArrayList<java.lang.Integer>"),
        "ArrayList<Integer>"
    );
    assert_eq!(
        simple_name("java.util.Map<java.lang.String, java.util.List<java.lang.Integer>>"),
        "Map<String, List<Integer>>"
    );
    assert_eq!(
        simple_name("java.util.List<java.lang.String>[]"),
        "List<String>[]"
    );
    assert_eq!(simple_name("List<?>"), "List<?>");
}
