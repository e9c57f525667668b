//! Scheduler time model.
//!
//! The host drives the engine from a fixed-rate loop; each call into the
//! scheduler is one `Tick`.  Wall-clock time only matters for the per-tick
//! processing budget (see [`PathConfig`](crate::PathConfig)), never for
//! ordering.

use std::fmt;

/// A monotonically increasing count of scheduler invocations.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
