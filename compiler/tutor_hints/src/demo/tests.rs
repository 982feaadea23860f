use pretty_assertions::assert_eq;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

#[test]
fn test_string_is_fixed() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut demo = DemoValues::new(&mut rng);
    for _ in 0..5 {
        assert_eq!(demo.value("String"), "\"hello world\"");
    }
}

#[test]
fn test_object_fallback() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut demo = DemoValues::new(&mut rng);
    assert_eq!(demo.value("YourClass"), "new YourClass()");
    assert_eq!(demo.value("Integer"), "new Integer()");
    assert_eq!(demo.value(""), "new Object()");
}

#[test]
fn test_zero_rng_picks_lowest_values() {
    let mut rng = StepRng::new(0, 0);
    let mut demo = DemoValues::new(&mut rng);
    assert_eq!(demo.value("int"), "0");
    assert_eq!(demo.value("double"), "0.00");
    assert_eq!(demo.value("boolean"), "true");
    assert_eq!(demo.value("char"), "a");
}

#[test]
fn test_same_seed_same_values() {
    let mut first = StdRng::seed_from_u64(42);
    let mut second = StdRng::seed_from_u64(42);
    let a = DemoValues::new(&mut first).initializer_list("int", 5);
    let b = DemoValues::new(&mut second).initializer_list("int", 5);
    assert_eq!(a, b);
}

#[test]
fn test_declarations() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut demo = DemoValues::new(&mut rng);
    assert_eq!(demo.declaration("String", "s"), "String s = \"hello world\";");
    assert_eq!(
        demo.declaration_with_value("int", "x", "Float"),
        "int x = new Float();"
    );
    assert_eq!(
        demo.declaration("YourClass", "myObject"),
        "YourClass myObject = new YourClass();"
    );
}

#[test]
fn test_initializer_list_shape() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut demo = DemoValues::new(&mut rng);
    let list = demo.initializer_list("int", 5);
    assert!(list.starts_with('{') && list.ends_with('}'));
    let inner = &list[1..list.len() - 1];
    let items: Vec<&str> = inner.split(", ").collect();
    assert_eq!(items.len(), 5);
    assert!(items.iter().all(|item| item.parse::<i64>().is_ok()));

    assert_eq!(demo.initializer_list("int", 0), "{}");
}

#[test]
fn test_method_call() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut demo = DemoValues::new(&mut rng);
    assert_eq!(
        demo.method_call("greet", &["String".to_string(), "Dog".to_string()]),
        "greet(\"hello world\", new Dog())"
    );
    assert_eq!(demo.method_call("tick", &[]), "tick()");
}

#[test]
fn test_array_types_get_sized_creation() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut demo = DemoValues::new(&mut rng);
    assert_eq!(demo.value("int[]"), "new int[5]");
    assert_eq!(demo.value("String[][]"), "new String[5][]");
    assert_eq!(demo.value("[]"), "new Object[5]");
    assert_eq!(demo.declaration("float[]", "xs"), "float[] xs = new float[5];");
}
