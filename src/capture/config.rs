//! Process-wide stack capture settings.
//!
//! The active [`CaptureConfig`] is read on every capture. [`configure`]
//! replaces it wholesale: the last call wins and nothing is merged with the
//! previous settings.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

/// Default number of frames kept per error.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Upper bound accepted for [`CaptureConfig::max_depth`].
pub const MAX_DEPTH_LIMIT: usize = 128;

/// Environment variable that can switch capture off (`false`, `0`, `off`).
pub const CAPTURE_ENV: &str = "ERROR_TRAIL_CAPTURE";

/// Environment variable overriding the maximum captured depth.
pub const MAX_DEPTH_ENV: &str = "ERROR_TRAIL_MAX_DEPTH";

static ACTIVE: LazyLock<ArcSwap<CaptureConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(CaptureConfig::default()));

/// Stack capture settings.
///
/// # Examples
///
/// ```
/// use error_trail::capture::{self, CaptureConfig};
///
/// let config = CaptureConfig::default().with_max_depth(8);
/// assert_eq!(config.max_depth, 8);
/// assert!(config.enabled);
///
/// assert!(!CaptureConfig::disabled().enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Whether frames are captured at all. Disabled capture yields no frames.
    pub enabled: bool,
    /// Maximum frames kept per error; deeper stacks are truncated.
    pub max_depth: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self { enabled: true, max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl CaptureConfig {
    /// Configuration that captures no frames.
    #[inline]
    pub fn disabled() -> Self {
        Self { enabled: false, ..Default::default() }
    }

    /// Sets the maximum depth, clamped to `1..=MAX_DEPTH_LIMIT`.
    #[must_use]
    #[inline]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.clamp(1, MAX_DEPTH_LIMIT);
        self
    }

    #[must_use]
    #[inline]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builds a configuration from [`CAPTURE_ENV`] and [`MAX_DEPTH_ENV`],
    /// falling back to the defaults for unset or unparsable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let enabled = env_flag(CAPTURE_ENV, defaults.enabled);
        let depth = env_usize(MAX_DEPTH_ENV, defaults.max_depth);
        Self::default().enabled(enabled).with_max_depth(depth)
    }
}

/// Installs `config` as the process-wide capture configuration.
///
/// The whole value is swapped at once, so concurrent captures see either
/// the previous configuration or this one.
pub fn configure(config: CaptureConfig) {
    let config = config.with_max_depth(config.max_depth);
    ACTIVE.store(Arc::new(config));
}

/// Returns the active capture configuration.
pub fn current_config() -> CaptureConfig {
    **ACTIVE.load()
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_flag(key: &str, fallback: bool) -> bool {
    match env_string(key) {
        Some(value) => parse_flag(&value).unwrap_or(fallback),
        None => fallback,
    }
}

fn env_usize(key: &str, fallback: usize) -> usize {
    env_string(key).and_then(|v| v.trim().parse().ok()).unwrap_or(fallback)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}
