//! Engine configuration.

use std::time::Duration;

use crate::{CoreError, CoreResult};

/// Tuning knobs for the path-finding scheduler.
///
/// Typically built with [`Default`] and adjusted in code, or loaded from a
/// JSON/TOML file by the host application (enable the `serde` feature).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathConfig {
    /// Operation steps performed per batch.  The wall-clock deadline is only
    /// checked between batches, since reading the clock is not free.
    pub step_count: usize,

    /// Soft processing budget per scheduler invocation, in milliseconds.  A
    /// batch in progress always finishes before the check.
    pub max_processing_ms: u64,

    /// Re-discover every connection after a snapshot is loaded on `enable`.
    pub reroute_on_startup: bool,

    /// Log every operation start and connection at `info` instead of `debug`.
    pub debug: bool,
}

impl PathConfig {
    pub const DEFAULT_STEP_COUNT: usize = 100;
    pub const DEFAULT_MAX_PROCESSING_MS: u64 = 30;

    /// The per-invocation budget as a `Duration`.
    #[inline]
    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.max_processing_ms)
    }

    /// Reject configurations the scheduler cannot make progress with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.step_count == 0 {
            return Err(CoreError::Config("step_count must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            step_count:         Self::DEFAULT_STEP_COUNT,
            max_processing_ms:  Self::DEFAULT_MAX_PROCESSING_MS,
            reroute_on_startup: false,
            debug:              false,
        }
    }
}
