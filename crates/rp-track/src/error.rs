//! Track-subsystem error type.

use thiserror::Error;

use rp_core::BlockLocation;

/// Errors a [`TrackWorld`](crate::TrackWorld) may report while walking.
///
/// "Not track" and "track ends here" are *not* errors; they are expressed as
/// `None` results.  A `TrackError` means the step itself could not be
/// evaluated, and the scheduler drops the walk that hit it.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("rail piece at {0} disappeared during a walk")]
    PieceVanished(BlockLocation),

    #[error("track step failed at {location}: {reason}")]
    Step {
        location: BlockLocation,
        reason:   String,
    },
}

pub type TrackResult<T> = Result<T, TrackError>;
