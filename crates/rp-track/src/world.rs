//! The `TrackWorld` trait — the engine's only view of physical track.

use rp_core::{BlockLocation, Face, Vec3};

use crate::{Marker, RailJunction, RailPiece, RailState, TrackResult};

/// Track geometry and marker lookup, implemented by the host.
///
/// All methods take `&self`: the engine never mutates the world.  Lookups are
/// expected to be cheap enough to call per walker step; the scheduler wraps
/// `rail_piece` and `markers` in a [`ScanCache`](crate::ScanCache) that it
/// resets after every processing burst.
///
/// # Example
///
/// ```
/// use rp_core::{BlockLocation, Face};
/// use rp_track::{GridTrackBuilder, TrackWorld};
///
/// let mut b = GridTrackBuilder::new();
/// b.line(BlockLocation::new("w", 0, 0, 0), Face::East, 3);
/// let track = b.build();
///
/// let piece = track.rail_piece(&BlockLocation::new("w", 1, 0, 0)).unwrap();
/// let names: Vec<_> = track.junctions(&piece).into_iter().map(|j| j.name).collect();
/// assert_eq!(names, ["east", "west"]);
/// ```
pub trait TrackWorld {
    /// Resolve the rail piece at `block`, or `None` if it is not track.
    fn rail_piece(&self, block: &BlockLocation) -> Option<RailPiece>;

    /// Every junction the piece offers, in a stable order.
    fn junctions(&self, piece: &RailPiece) -> Vec<RailJunction>;

    /// The state leaving `piece` through `junction`, or `None` if the
    /// junction cannot be taken.
    fn take_junction(&self, piece: &RailPiece, junction: &RailJunction) -> Option<RailState>;

    /// The canonical initial state on `piece`, used when scanning a
    /// discovery candidate.
    fn spawn_state(&self, piece: &RailPiece) -> RailState;

    /// The canonical spawn position on `piece` for travel towards `face`.
    fn spawn_location(&self, piece: &RailPiece, face: Face) -> Vec3;

    /// Snap a raw position and direction onto the piece's path.  Returns
    /// `false` if the piece's geometry cannot be loaded.
    fn snap(&self, state: &mut RailState) -> bool;

    /// Move `state` to the far end of its piece's local path segment.
    fn move_to_path_end(&self, state: &mut RailState);

    /// Advance `state` by one step along connected track.
    ///
    /// Returns the distance moved, or `None` when the track ends and the
    /// state cannot move any further.
    fn advance(&self, state: &mut RailState) -> TrackResult<Option<f64>>;

    /// Markers attached to `block`, in placement order.
    fn markers(&self, block: &BlockLocation) -> Vec<Marker>;

    /// A copy of `state` travelling the opposite way along the same path.
    fn invert(&self, state: &RailState) -> RailState {
        let mut inverted = state.clone();
        inverted.invert_motion();
        inverted
    }
}
