//! World-space vector and block-face types.
//!
//! Positions on the track are continuous (`f64`) and independent of block
//! boundaries; the block a position belongs to is tracked separately by the
//! walker.  One block edge is one distance unit.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::CoreError;

// ── Vec3 ──────────────────────────────────────────────────────────────────────

/// A point or direction in world space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn distance_squared(self, other: Vec3) -> f64 {
        (self - other).length_squared()
    }

    #[inline]
    pub fn distance(self, other: Vec3) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// The face whose axis is best aligned with this direction.
    ///
    /// Ties resolve in [`Face::ALL`] order; the zero vector maps to `North`.
    pub fn dominant_face(self) -> Face {
        let mut best = Face::North;
        let mut best_dot = f64::MIN;
        for face in Face::ALL {
            let d = self.dot(face.direction());
            if d > best_dot {
                best_dot = d;
                best = face;
            }
        }
        best
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

// ── Face ──────────────────────────────────────────────────────────────────────

/// One of the six axis-aligned faces of a block.
///
/// North is `-z`, east is `+x`, up is `+y`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl Face {
    /// Canonical enumeration order.  Junction lists follow this order.
    pub const ALL: [Face; 6] = [
        Face::North,
        Face::East,
        Face::South,
        Face::West,
        Face::Up,
        Face::Down,
    ];

    /// Integer block offset of the neighbour across this face.
    #[inline]
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Face::North => (0, 0, -1),
            Face::East  => (1, 0, 0),
            Face::South => (0, 0, 1),
            Face::West  => (-1, 0, 0),
            Face::Up    => (0, 1, 0),
            Face::Down  => (0, -1, 0),
        }
    }

    /// Unit direction vector pointing out of this face.
    #[inline]
    pub fn direction(self) -> Vec3 {
        let (x, y, z) = self.offset();
        Vec3::new(x as f64, y as f64, z as f64)
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::North => Face::South,
            Face::East  => Face::West,
            Face::South => Face::North,
            Face::West  => Face::East,
            Face::Up    => Face::Down,
            Face::Down  => Face::Up,
        }
    }

    /// Lower-case label, used as the junction name for this face.
    pub fn as_str(self) -> &'static str {
        match self {
            Face::North => "north",
            Face::East  => "east",
            Face::South => "south",
            Face::West  => "west",
            Face::Up    => "up",
            Face::Down  => "down",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Face {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .into_iter()
            .find(|face| face.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownFace(s.to_owned()))
    }
}
