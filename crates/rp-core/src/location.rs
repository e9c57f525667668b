//! Block locations — the identity key of every graph node.

use std::fmt;

use crate::{Face, Vec3};

/// A discrete, track-bearing block position: world name plus integer block
/// coordinates.
///
/// Equality and hashing cover all four components, so the same coordinates
/// in two worlds are two different locations.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockLocation {
    pub world: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockLocation {
    pub fn new(world: impl Into<String>, x: i32, y: i32, z: i32) -> Self {
        Self { world: world.into(), x, y, z }
    }

    /// The coordinate triple, without the world name.
    #[inline]
    pub fn coords(&self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    /// The neighbouring block across `face`, in the same world.
    pub fn relative(&self, face: Face) -> BlockLocation {
        let (dx, dy, dz) = face.offset();
        BlockLocation {
            world: self.world.clone(),
            x:     self.x + dx,
            y:     self.y + dy,
            z:     self.z + dz,
        }
    }

    /// World-space position of the block centre.
    #[inline]
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x as f64, self.y as f64, self.z as f64)
    }
}

impl fmt::Display for BlockLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}, {}, {}]", self.world, self.x, self.y, self.z)
    }
}
