use error_trail::Type;
use std::collections::HashSet;

#[test]
fn static_and_owned_labels_compare_by_value() {
    let a = Type::from_static("validation error");
    let b = Type::from(String::from("validation error"));
    assert_eq!(a, b);
    assert_eq!(a, "validation error");

    let set: HashSet<Type> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn display_prints_the_label() {
    assert_eq!(Type::from("illegal argument").to_string(), "illegal argument");
}
