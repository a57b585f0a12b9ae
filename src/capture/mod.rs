//! Call-stack capture at error construction time.
//!
//! [`capture`] walks the current stack with the [`backtrace`] crate and
//! resolves each entry to a [`Frame`]. The walk first drops the unwinder's
//! own frames and this crate's construction path (factory methods, result
//! extensions, the capture routine itself), so the first frame returned is
//! the code that asked for the error. It stops at the runtime entry point
//! (`main`'s launcher or the test harness) or at the configured depth,
//! whichever comes first.
//!
//! Capture never fails. Symbols that cannot be resolved produce a frame
//! with an empty function name, and a stack without any resolvable symbol
//! of this crate yields no frames at all.
//!
//! # Examples
//!
//! ```
//! use error_trail::capture;
//!
//! fn here() -> error_trail::Frames {
//!     capture::capture(0)
//! }
//!
//! let frames = here();
//! assert!(frames.len() <= capture::current_config().max_depth);
//! ```

mod config;
mod symbol;

pub use config::{
    configure, current_config, CaptureConfig, CAPTURE_ENV, DEFAULT_MAX_DEPTH, MAX_DEPTH_ENV,
    MAX_DEPTH_LIMIT,
};

use crate::types::{Frame, Frames};

/// File name used when debug info does not say where a frame lives.
pub const UNKNOWN_FILE: &str = "<unknown>";

/// Extra raw frames walked beyond `skip + max_depth` to cover the unwinder
/// and this crate's own construction path.
const INTERNAL_ALLOWANCE: usize = 32;

const CRATE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");
const CRATE_TRAIT_MARKER: &str = concat!(" as ", env!("CARGO_CRATE_NAME"), "::");

/// Captures the current call stack.
///
/// `skip` drops that many additional frames after this crate's own
/// construction path, for callers that route error creation through their
/// own helper functions and want the helper's caller on top.
///
/// A closure frame that only calls the function it is defined in (a test
/// harness wrapper, for instance) is folded into that function's frame.
#[inline(never)]
pub fn capture(skip: usize) -> Frames {
    let config = current_config();
    if !config.enabled {
        return Frames::new();
    }

    let limit = skip.saturating_add(config.max_depth).saturating_add(INTERNAL_ALLOWANCE);
    let raw = collect_raw(limit);
    let mut previous = String::new();
    raw.iter()
        .flat_map(resolve_symbols)
        .skip_while(|s| !is_internal(&s.name))
        .skip_while(|s| is_internal(&s.name) || is_unwinder(&s.name))
        .filter(|s| {
            let current = symbol::strip_hash(&s.name);
            let wrapper = symbol::is_enclosing_closure(current, &previous);
            previous.clear();
            previous.push_str(current);
            !wrapper
        })
        .skip(skip)
        .take_while(|s| !symbol::is_runtime_boundary(&s.name))
        .take(config.max_depth)
        .map(ResolvedSymbol::into_frame)
        .collect()
}

struct ResolvedSymbol {
    name: String,
    file: String,
    line: u32,
}

impl ResolvedSymbol {
    fn unknown() -> Self {
        Self { name: String::new(), file: UNKNOWN_FILE.to_owned(), line: 0 }
    }

    fn into_frame(self) -> Frame {
        Frame::new(self.file, self.line, symbol::short_name(&self.name))
    }
}

fn collect_raw(limit: usize) -> Vec<backtrace::Frame> {
    let mut frames = Vec::with_capacity(limit.min(64));
    backtrace::trace(|frame| {
        frames.push(frame.clone());
        frames.len() < limit
    });
    frames
}

/// Resolves one raw frame. Inlined calls show up as several symbols.
fn resolve_symbols(frame: &backtrace::Frame) -> Vec<ResolvedSymbol> {
    let mut symbols = Vec::with_capacity(1);
    backtrace::resolve_frame(frame, |sym| {
        symbols.push(ResolvedSymbol {
            name: sym.name().map(|n| format!("{n:#}")).unwrap_or_default(),
            file: sym
                .filename()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| UNKNOWN_FILE.to_owned()),
            line: sym.lineno().unwrap_or(0),
        });
    });
    if symbols.is_empty() {
        symbols.push(ResolvedSymbol::unknown());
    }
    symbols
}

fn is_internal(name: &str) -> bool {
    if name.contains("::tests::") {
        return false;
    }
    name.trim_start_matches('<').starts_with(CRATE_PREFIX) || name.contains(CRATE_TRAIT_MARKER)
}

fn is_unwinder(name: &str) -> bool {
    name.trim_start_matches('<').starts_with("backtrace::")
}
