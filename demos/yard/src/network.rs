//! Synthetic yard layout built on a `GridTrack`.
//!
//! ```text
//!                                  Depot (12,-6)
//!                                      │
//!   West End (-10,0) ──── A (0,0) ──── B (12,0) ──◄── East End (20,0)
//!                           │                    one-way at x = 16
//!                           │
//!                      Platform 1 (0,8)
//! ```

use rp_core::{BlockLocation, Face};
use rp_track::{GridTrack, GridTrackBuilder, Marker};

pub const WORLD: &str = "yard";

pub fn at(x: i32, z: i32) -> BlockLocation {
    BlockLocation::new(WORLD, x, 0, z)
}

pub fn build_yard() -> GridTrack {
    let mut b = GridTrackBuilder::new();

    // Main line, x = -10..=20.
    b.line(at(-10, 0), Face::East, 31);

    // Switcher A: branch south to the platform.
    b.rail(at(0, 0), Face::West, Face::South);
    b.line(at(0, 1), Face::South, 8);
    b.marker(at(0, 0), Marker::Switcher);

    // Switcher B: branch north to the depot.
    b.rail(at(12, 0), Face::West, Face::North);
    b.line(at(12, -1), Face::North, 6);
    b.marker(at(12, 0), Marker::Switcher);

    b.marker(at(-10, 0), Marker::Destination("West End".into()));
    b.marker(at(20, 0), Marker::Destination("East End".into()));
    b.marker(at(0, 8), Marker::Destination("Platform 1".into()));
    b.marker(at(12, -6), Marker::Destination("Depot".into()));

    // Trains may leave East End westbound, but nothing may head east into it.
    b.marker(at(16, 0), Marker::Blocker { facing: Some(Face::East) });

    b.build()
}
