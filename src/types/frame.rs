use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One captured call-stack entry.
///
/// Frames are resolved once, when the owning error is constructed, and are
/// never re-resolved afterwards.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    pub(crate) file: String,
    pub(crate) line: u32,
    pub(crate) function: String,
}

impl Frame {
    /// Creates a frame from already resolved parts.
    #[inline]
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self { file: file.into(), line, function: function.into() }
    }

    /// Source file path as reported by the debug info.
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Source line, `0` when unknown.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Short function name, empty when the symbol could not be resolved.
    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Renders the frame as a trace line: `"    at <file>:<line> (<function>)"`.
    pub fn trace_line(&self) -> String {
        format!("    at {self}")
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.function)
    }
}

/// Ordered frame sequence, innermost call first.
pub type Frames = Vec<Frame>;
