use error_trail::{
    as_error, define, unwrap_chain, ErrorNode, Factory, Link, INITIALIZATION_ERROR,
    UNEXPECTED_ERROR, VALIDATION_ERROR,
};
use std::error::Error;
use std::fmt;
use std::io;

static A: Factory = define("A");
static B: Factory = define("B");

/// Foreign wrapper with a conventional `source()`.
#[derive(Debug)]
struct Outer {
    inner: io::Error,
}

impl fmt::Display for Outer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "outer failure")
    }
}

impl Error for Outer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner)
    }
}

#[test]
fn as_error_of_none_is_none() {
    assert!(as_error(None).is_none());
}

#[test]
fn as_error_of_foreign_is_none() {
    let err = io::Error::other("golang error");
    assert!(as_error(Some(&err)).is_none());
}

#[test]
fn as_error_returns_the_same_value() {
    let err = VALIDATION_ERROR.new("illegal code");
    let recognized = as_error(Some(&err)).expect("system error");
    assert!(std::ptr::eq(recognized, &err));
}

#[test]
fn as_error_sees_through_boxes() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(VALIDATION_ERROR.new("illegal code"));
    assert!(as_error(Some(&*boxed)).is_some());
}

#[test]
fn unwrap_cases() {
    let new_error = VALIDATION_ERROR.new("user name is a required field");
    let plain = io::Error::other("mysql open error");
    let wrapped =
        INITIALIZATION_ERROR.wrap(io::Error::other("mysql open error"), "database access error");
    let nested = UNEXPECTED_ERROR.wrap(
        INITIALIZATION_ERROR.wrap(io::Error::other("mysql open error"), "database access error"),
        "nested error message",
    );

    let cases: [(&str, Option<&(dyn Error + 'static)>, Option<&str>); 5] = [
        ("nil", None, None),
        ("foreign error", Some(&plain), None),
        ("new error", Some(&new_error), None),
        ("wrap error", Some(&wrapped), Some("mysql open error")),
        ("nested error", Some(&nested), Some("mysql open error")),
    ];

    for (name, err, expected) in cases {
        let actual = unwrap_chain(err).map(|e| e.to_string());
        assert_eq!(actual.as_deref(), expected, "{name}");
    }
}

#[test]
fn unwrap_of_foreign_is_single_level() {
    let err = Outer { inner: io::Error::other("disk") };
    let next = unwrap_chain(Some(&err)).expect("source");
    assert_eq!(next.to_string(), "disk");
}

#[test]
fn unwrap_stops_at_first_foreign_error() {
    let err = A.wrap(Outer { inner: io::Error::other("disk") }, "save");
    let root = unwrap_chain(Some(&err)).expect("foreign");
    assert_eq!(root.to_string(), "outer failure");
}

#[test]
fn foreign_wrapper_hides_system_nodes_below_it() {
    #[derive(Debug)]
    struct Shell(ErrorNode);

    impl fmt::Display for Shell {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "shell")
        }
    }

    impl Error for Shell {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    let shell = Shell(B.new("inner"));
    assert!(as_error(Some(&shell)).is_none());
    assert!(!B.is(Some(&shell)));
}

#[test]
fn chain_walks_outward_in() {
    let err = A.wrap(B.wrap(io::Error::other("raw"), "m2"), "m1");
    let links: Vec<String> = err
        .chain()
        .map(|link| match link {
            Link::Node(node) => node.header(),
            Link::Foreign(e) => format!("foreign: {e}"),
        })
        .collect();
    assert_eq!(links, ["A: m1", "B: m2", "foreign: raw"]);
}

#[test]
fn root_node_is_innermost_system_node() {
    let err = A.wrap(B.wrap(io::Error::other("raw"), "m2"), "m1");
    assert_eq!(err.root_node().message(), "m2");

    let root = B.new("alone");
    assert!(std::ptr::eq(root.root_node(), &root));
}
