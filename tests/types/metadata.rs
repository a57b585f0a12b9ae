use error_trail::{MetaValue, Metadata};

#[test]
fn insert_overwrites_in_place() {
    let mut meta = Metadata::new();
    meta.insert("id", "1");
    meta.insert("user", "taro");
    meta.insert("id", "2");

    let keys: Vec<&str> = meta.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["id", "user"]);
    assert_eq!(meta.get("id"), Some(&MetaValue::from("2")));
}

#[test]
fn values_cover_the_closed_variant_set() {
    let nested: Metadata = [("region", "ap-northeast-1")].into_iter().collect();
    let mut meta = Metadata::new();
    meta.insert("name", "taro");
    meta.insert("id", 123);
    meta.insert("ratio", 0.5);
    meta.insert("admin", false);
    meta.insert("location", nested.clone());

    assert_eq!(meta.get("id"), Some(&MetaValue::Int(123)));
    assert_eq!(meta.get("ratio"), Some(&MetaValue::Float(0.5)));
    assert_eq!(meta.get("admin"), Some(&MetaValue::Bool(false)));
    assert_eq!(meta.get("location").and_then(MetaValue::as_map), Some(&nested));
    assert_eq!(meta.get("name").and_then(MetaValue::as_str), Some("taro"));
}

#[test]
fn merge_prefers_the_incoming_map() {
    let mut outer: Metadata = [("id", "1"), ("span", "outer")].into_iter().collect();
    let inner: Metadata = [("id", "2"), ("db", "primary")].into_iter().collect();
    outer.merge(&inner);

    assert_eq!(outer.len(), 3);
    assert_eq!(outer.get("id"), Some(&MetaValue::from("2")));
    assert_eq!(outer.to_string(), "{id=2, span=outer, db=primary}");
}

#[cfg(feature = "serde")]
#[test]
fn serializes_as_an_ordered_json_object() {
    let mut meta = Metadata::new();
    meta.insert("b", 1);
    meta.insert("a", true);
    meta.insert("nested", [("k", "v")].into_iter().collect::<Metadata>());

    let json = serde_json::to_string(&meta).unwrap();
    assert_eq!(json, r#"{"b":1,"a":true,"nested":{"k":"v"}}"#);
}
