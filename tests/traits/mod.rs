#[cfg(feature = "tracing")]
pub mod tracing_ext;
