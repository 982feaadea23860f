#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use rand::rngs::mock::StepRng;

use super::*;
use crate::test_helpers::{self, args};

fn run(
    strategy: &dyn HintStrategy,
    fixture: &test_helpers::Fixture,
    arguments: &[&str],
) -> Result<Vec<Hint>, ContextError> {
    let arguments = args(arguments);
    let mut rng = StepRng::new(0, 0);
    let mut demo = DemoValues::new(&mut rng);
    strategy.hints(&fixture.site(&arguments), &mut demo)
}

#[test]
fn test_type_mismatch_hints() {
    let hints = run(&TypeMismatch, &test_helpers::type_mismatch(), &["java.lang.Float", "int"]).unwrap();
    assert_eq!(hints.len(), 3);
    assert!(hints.iter().all(|h| h.problem_text()
        == "You are trying to use the int-type variable x as a Float object."));

    assert_eq!(
        hints[0].suggestion_text(),
        "You might need to change the variable declaration of x to type Float."
    );
    assert_eq!(hints[0].bad_code(), ["int x = new Float();"]);
    assert_eq!(hints[0].good_code(), ["Float x = new Float();"]);
    assert_eq!(hints[1].good_code(), ["int x = 0;"]);
    assert_eq!(
        hints[2].bad_code(),
        ["int doSomething() {\n  Float x = new Float();\n  return x;\n}"]
    );
    assert_eq!(
        hints[2].good_code(),
        ["Float doSomething() {\n  Float x = new Float();\n  return x;\n}"]
    );
}

#[test]
fn test_type_mismatch_float_to_int_adds_arithmetic_hint() {
    let hints = run(&TypeMismatch, &test_helpers::type_mismatch(), &["float", "int"]).unwrap();
    assert_eq!(hints.len(), 4);
    assert_eq!(
        hints[3].suggestion_text(),
        "You may have used an int-type variable x in an operation involving the float type."
    );
    assert_eq!(hints[3].bad_code(), ["int x = 0;\nx = x + 3.14;"]);
    assert_eq!(hints[3].good_code(), ["float x = 0.00;\nx = x + 3.14;"]);
}

#[test]
fn test_type_mismatch_arithmetic_hint_is_exact_match() {
    let hints = run(&TypeMismatch, &test_helpers::type_mismatch(), &["double", "int"]).unwrap();
    assert_eq!(hints.len(), 3);
}

#[test]
fn test_type_mismatch_needs_both_arguments() {
    let err = run(&TypeMismatch, &test_helpers::type_mismatch(), &["float"]).unwrap_err();
    assert_eq!(err, ContextError::MissingArgument { index: 1, len: 1 });
}

#[test]
fn test_type_mismatch_needs_fragment_parent() {
    let err = run(&TypeMismatch, &test_helpers::undefined_method(), &["float", "int"]).unwrap_err();
    assert!(matches!(err, ContextError::UnexpectedShape { .. }));
}

#[test]
fn test_undefined_type_hints() {
    let hints = run(&UndefinedType, &test_helpers::undefined_type(), &["Zorp"]).unwrap();
    assert_eq!(hints.len(), 4);
    assert_eq!(
        hints[0].problem_text(),
        "You are trying to use a class, Zorp, which the compiler does not recognize."
    );
    assert!(hints.iter().all(|h| h.suggestion_text().contains("Zorp")));
    assert!(hints.iter().all(|h| h.bad_code() == ["Zorp z = new Zorp();"]));
    assert_eq!(hints[0].good_code(), ["CorrectName z = new CorrectName();"]);
    assert_eq!(
        hints[3].good_code(),
        ["class Zorp {\n  ...\n}\n\nZorp z = new Zorp();"]
    );
}

#[test]
fn test_undefined_type_outside_declaration() {
    let err = run(&UndefinedType, &test_helpers::undefined_method(), &["Zorp"]).unwrap_err();
    assert_eq!(err, ContextError::NotFound("variable declaration"));
}

#[test]
fn test_type_mismatch_generic_type_names() {
    let hints = run(
        &TypeMismatch,
        &test_helpers::type_mismatch(),
        &["java.util.ArrayList<java.lang.Integer>", "int"],
    )
    .unwrap();
    assert_eq!(
        hints[0].problem_text(),
        "You are trying to use the int-type variable x as a ArrayList<Integer> object."
    );
    assert_eq!(
        hints[0].good_code(),
        ["ArrayList<Integer> x = new ArrayList<Integer>();"]
    );
}
