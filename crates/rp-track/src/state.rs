//! Rail pieces, junctions, and the walker's track state.

use rp_core::{BlockLocation, Face, Vec3};

/// A resolved track-bearing block.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RailPiece {
    pub block: BlockLocation,
}

impl RailPiece {
    #[inline]
    pub fn new(block: BlockLocation) -> Self {
        Self { block }
    }
}

/// A named exit direction of a rail piece.
///
/// `position` is the world-space point where the exit leaves the piece; it is
/// used to pick the junction nearest to a walked position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RailJunction {
    pub name:     String,
    pub position: Vec3,
}

/// A position and direction of travel on a specific rail piece.
///
/// The state is the walker's whole continuation: a walk can be suspended
/// between any two steps by simply keeping the `RailState` around.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RailState {
    /// The piece the position currently lies on.
    pub piece: RailPiece,
    /// Continuous world-space position.
    pub position: Vec3,
    /// Direction of travel (not necessarily normalised).
    pub direction: Vec3,
}

impl RailState {
    pub fn new(piece: RailPiece, position: Vec3, direction: Vec3) -> Self {
        Self { piece, position, direction }
    }

    /// The rail block the position lies on.
    #[inline]
    pub fn block(&self) -> &BlockLocation {
        &self.piece.block
    }

    /// The block face the motion points towards.
    #[inline]
    pub fn motion_face(&self) -> Face {
        self.direction.dominant_face()
    }

    /// Flip the direction of travel in place.
    #[inline]
    pub fn invert_motion(&mut self) {
        self.direction = -self.direction;
    }
}
