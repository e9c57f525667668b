//! Markers placed alongside rail blocks.

use rp_core::Face;

use crate::RailState;

/// A navigational label attached to a rail block.
///
/// Markers are what routing handlers inspect to decide whether a location is
/// a graph node.  A block may carry several markers; they are reported in
/// placement order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    /// The block is a branching point that needs a routing decision.
    Switcher,
    /// The block is a named routing target.
    Destination(String),
    /// Path finding must not continue past this block.  With `facing` set,
    /// only walks moving towards that face are blocked.
    Blocker { facing: Option<Face> },
}

impl Marker {
    /// `true` if this marker stops a walk arriving in `state`.
    pub fn blocks(&self, state: &RailState) -> bool {
        match self {
            Marker::Blocker { facing: None } => true,
            Marker::Blocker { facing: Some(face) } => state.motion_face() == *face,
            _ => false,
        }
    }
}
