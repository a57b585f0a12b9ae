use error_trail::traits::{log_error, TraceResultExt};
use error_trail::{ErrorNode, UNEXPECTED_ERROR};
use tracing::Level;

#[test]
fn log_err_leaves_ok_untouched() {
    let result: Result<u8, ErrorNode> = Ok(7);
    assert_eq!(result.log_err().unwrap(), 7);
}

#[test]
fn log_err_returns_the_same_error() {
    let result: Result<(), ErrorNode> =
        Err(UNEXPECTED_ERROR.new("flush failed").with_metadata("shard", 2));
    let err = result.log_err_at(Level::WARN).unwrap_err();
    assert_eq!(err.message(), "flush failed");
    assert_eq!(err.metadata().len(), 1);
}

#[test]
fn log_error_accepts_chains() {
    let err = UNEXPECTED_ERROR.wrap(std::io::Error::other("disk"), "flush failed");
    log_error(&err);
    assert!(err.unwrap_chain().is_some());
}
