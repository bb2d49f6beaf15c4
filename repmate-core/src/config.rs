//! Configuration type definitions
//!
//! Configuration is code-level: the firmware constructs these at boot.
//! Counts are not persisted and there is no runtime configuration store.

/// Default lower bound on a plausible rep duration (ms)
pub const DEFAULT_MIN_REP_MS: u32 = 300;

/// Default upper bound on a plausible rep duration (ms)
pub const DEFAULT_MAX_REP_MS: u32 = 3000;

/// Debounce bounds for rep validation
///
/// A completed active phase counts as a rep only when its duration lies
/// strictly between `min_rep_ms` and `max_rep_ms`. Both bounds are
/// exclusive: a phase exactly at a bound is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// Phases at or under this duration are rejected as noise (ms)
    pub min_rep_ms: u32,
    /// Phases at or over this duration are rejected as sustained motion (ms)
    pub max_rep_ms: u32,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            min_rep_ms: DEFAULT_MIN_REP_MS,
            max_rep_ms: DEFAULT_MAX_REP_MS,
        }
    }
}

impl DebounceConfig {
    /// Create a config with explicit bounds
    pub const fn new(min_rep_ms: u32, max_rep_ms: u32) -> Self {
        Self {
            min_rep_ms,
            max_rep_ms,
        }
    }

    /// Check that the bounds describe a non-empty acceptance window
    pub fn is_valid(&self) -> bool {
        self.min_rep_ms > 0 && self.min_rep_ms < self.max_rep_ms
    }
}
