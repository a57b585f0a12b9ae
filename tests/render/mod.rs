use crate::cut_line_number;
use error_trail::{
    define, ErrorNode, Factory, Frame, StackTrace, INITIALIZATION_ERROR, UNEXPECTED_ERROR,
    VALIDATION_ERROR,
};
use std::io;


const CURRENT_FILE: &str = "tests/render/mod.rs";

fn cut(trace: &StackTrace) -> Vec<String> {
    trace.iter().map(|line| cut_line_number(line)).collect()
}

#[test]
fn trace_of_a_root_error_is_header_plus_frames() {
    let err = VALIDATION_ERROR.new("user name is a required field");
    let trace = err.stack_trace();

    assert_eq!(trace.len(), 1 + err.frames().len());
    assert_eq!(trace[0], "invalid parameter: user name is a required field");
    assert_eq!(
        cut_line_number(&trace[1]),
        format!("    at {CURRENT_FILE}:xxx (trace_of_a_root_error_is_header_plus_frames)")
    );
}

#[test]
fn trace_of_a_wrapped_foreign_error_starts_with_caused_by() {
    let err =
        INITIALIZATION_ERROR.wrap(io::Error::other("mysql open error"), "database access error");
    let trace = err.stack_trace();

    assert_eq!(trace.len(), 2 + err.frames().len());
    let lines = cut(&trace);
    assert_eq!(lines[0], "Caused by: mysql open error");
    assert_eq!(lines[1], "initialization error: database access error");
    assert_eq!(
        lines[2],
        format!("    at {CURRENT_FILE}:xxx (trace_of_a_wrapped_foreign_error_starts_with_caused_by)")
    );
}

#[test]
fn trace_of_a_nested_chain_is_cause_first() {
    let inner =
        INITIALIZATION_ERROR.wrap(io::Error::other("mysql open error"), "database access error");
    let inner_frames = inner.frames().len();
    let err = UNEXPECTED_ERROR.wrap(inner, "nested error message");
    let trace = err.stack_trace();

    assert_eq!(trace.len(), 1 + (1 + inner_frames) + (1 + err.frames().len()));
    let lines = cut(&trace);
    assert_eq!(lines[0], "Caused by: mysql open error");
    assert_eq!(lines[1], "initialization error: database access error");
    assert_eq!(
        lines[2],
        format!("    at {CURRENT_FILE}:xxx (trace_of_a_nested_chain_is_cause_first)")
    );
    let outer_header = 2 + inner_frames;
    assert_eq!(lines[outer_header], "unexpected error: nested error message");
    assert_eq!(
        lines[outer_header + 1],
        format!("    at {CURRENT_FILE}:xxx (trace_of_a_nested_chain_is_cause_first)")
    );
}

#[test]
fn trace_with_explicit_frames() {
    let inner = ErrorNode::from_parts(
        "initialization error",
        "database access error",
        Some(Box::new(io::Error::other("mysql open error"))),
        vec![Frame::new("src/db.rs", 42, "open_pool")],
    );
    let err = ErrorNode::from_parts(
        "unexpected error",
        "nested error message",
        Some(Box::new(inner)),
        vec![Frame::new("src/main.rs", 10, "main"), Frame::new("src/main.rs", 3, "run")],
    );

    assert_eq!(
        err.stack_trace().into_lines(),
        [
            "Caused by: mysql open error",
            "initialization error: database access error",
            "    at src/db.rs:42 (open_pool)",
            "unexpected error: nested error message",
            "    at src/main.rs:10 (main)",
            "    at src/main.rs:3 (run)",
        ]
    );
}

#[test]
fn trace_without_frames_is_headers_only() {
    let err = ErrorNode::from_parts("validation error", "bad input", None, vec![]);
    assert_eq!(err.stack_trace().into_lines(), ["validation error: bad input"]);
    assert_eq!(err.stack_trace().to_string(), "validation error: bad input");
}

#[test]
fn document_of_a_root_error() {
    static KIND: Factory = define("validation error");
    let err = KIND.new("bad input").with_metadata("id", "1");
    let doc = err.document();

    assert_eq!(doc.kind, *KIND.kind());
    assert_eq!(doc.msg, "bad input");
    assert!(doc.cause.is_none());
    assert_eq!(doc.metadata.len(), 1);
    assert_eq!(doc.stack_trace[0], err.header());
}

#[test]
fn document_cause_is_the_one_line_rendering() {
    let inner =
        INITIALIZATION_ERROR.wrap(io::Error::other("mysql open error"), "database access error");
    let err = UNEXPECTED_ERROR.wrap(inner, "nested error message");
    let doc = err.document();

    assert_eq!(doc.msg, "nested error message");
    assert_eq!(
        doc.cause.as_deref(),
        Some("initialization error: database access error (mysql open error)")
    );
}
