use core::fmt;
use core::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Rendered multi-line trace of an error chain, deepest cause first.
///
/// Produced by [`ErrorNode::stack_trace`](crate::ErrorNode::stack_trace).
/// `Display` joins the lines with `'\n'`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackTrace(Vec<String>);

impl StackTrace {
    #[inline]
    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        Self(lines)
    }

    /// Returns the trace lines.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    /// Consumes the trace, returning its lines.
    #[inline]
    pub fn into_lines(self) -> Vec<String> {
        self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for StackTrace {
    type Target = [String];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for StackTrace {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl Serialize for StackTrace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
