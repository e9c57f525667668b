//! `TrackWalkingPoint` — a resumable cursor that walks along track.

use rustc_hash::FxHashSet;

use rp_core::BlockLocation;

use crate::{RailState, TrackResult, TrackWorld};

/// A distance-tracked walking cursor.
///
/// Each [`move_full`](Self::move_full) call performs exactly one
/// [`TrackWorld::advance`] step.  The cursor owns all of its state, so a walk
/// can be paused between steps and resumed later without any help from the
/// caller.
///
/// With the loop filter enabled the walker refuses to re-enter a rail block
/// it has already visited, which turns a walk around a cyclic track into a
/// finite one.
#[derive(Clone, Debug)]
pub struct TrackWalkingPoint {
    /// Current position on the track.
    pub state: RailState,

    /// Total distance moved so far.  Callers may add alignment offsets.
    pub moved_total: f64,

    loop_filter: bool,
    visited:     FxHashSet<BlockLocation>,
}

impl TrackWalkingPoint {
    pub fn new(state: RailState) -> Self {
        Self {
            state,
            moved_total: 0.0,
            loop_filter: false,
            visited:     FxHashSet::default(),
        }
    }

    /// Enable or disable loop detection.  Enabling it marks the current
    /// block as visited.
    pub fn set_loop_filter(&mut self, enabled: bool) {
        self.loop_filter = enabled;
        if enabled {
            self.visited.insert(self.state.block().clone());
        } else {
            self.visited.clear();
        }
    }

    /// Number of distinct blocks recorded by the loop filter.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Move one step forward.
    ///
    /// Returns `Ok(false)` when the track ends or, with the loop filter
    /// enabled, when the step would revisit a block.
    pub fn move_full<W: TrackWorld + ?Sized>(&mut self, world: &W) -> TrackResult<bool> {
        let Some(moved) = world.advance(&mut self.state)? else {
            return Ok(false);
        };
        self.moved_total += moved;
        if self.loop_filter && !self.visited.insert(self.state.block().clone()) {
            return Ok(false);
        }
        Ok(true)
    }
}
