use error_trail::{define, new_err, wrap_err, Factory, ILLEGAL_ARGUMENT_ERROR, UNEXPECTED_ERROR};
use std::io;

static LOOKUP_ERROR: Factory = define("lookup error");

#[test]
fn new_err_formats_the_message() {
    let code = "X-1";
    let err = new_err!(ILLEGAL_ARGUMENT_ERROR, "illegal code {}", code);
    assert_eq!(err.message(), "illegal code X-1");
    assert!(ILLEGAL_ARGUMENT_ERROR.is(Some(&err)));
}

#[test]
fn new_err_accepts_inline_arguments() {
    let id = 42;
    let err = new_err!(&LOOKUP_ERROR, "user {id} not found");
    assert_eq!(err.to_string(), "lookup error: user 42 not found");
}

#[test]
fn wrap_err_formats_and_keeps_the_cause() {
    let err = wrap_err!(UNEXPECTED_ERROR, io::Error::other("reset"), "request {} failed", 7);
    assert_eq!(err.to_string(), "unexpected error: request 7 failed (reset)");
    assert_eq!(err.unwrap_chain().map(|e| e.to_string()).as_deref(), Some("reset"));
}

#[test]
fn macros_capture_the_invocation_site() {
    let line = line!() + 1;
    let err = new_err!(LOOKUP_ERROR, "missing {}", "key");

    let first = err.frames().first().expect("debug builds resolve symbols");
    assert_eq!(first.function(), "macros_capture_the_invocation_site");
    assert_eq!(crate::normalize(first.file()), "tests/macros/mod.rs");
    assert_eq!(first.line(), line);
}
