use super::*;

#[test]
fn test_builder_keeps_example_order() {
    let hint = Hint::new("problem", "suggestion")
        .with_bad_code("a")
        .with_good_code("b")
        .with_good_code("c");
    assert_eq!(hint.problem_text(), "problem");
    assert_eq!(hint.suggestion_text(), "suggestion");
    assert_eq!(hint.bad_code(), ["a"]);
    assert_eq!(hint.good_code(), ["b", "c"]);
    assert_eq!(hint.examples().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn test_descriptive_hint_has_no_examples() {
    let hint = Hint::new("problem", "suggestion");
    assert!(!hint.has_examples());
    assert!(hint.with_good_code("x").has_examples());
}
