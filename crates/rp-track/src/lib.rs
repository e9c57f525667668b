//! `rp-track` — the track-geometry boundary of the railpath engine.
//!
//! The engine never interprets rail geometry itself.  Everything it needs
//! from the physical track (resolving a block to a rail piece, enumerating
//! junctions, walking a position forward, reading markers) goes through the
//! [`TrackWorld`] trait.  Hosts implement it over their own world model;
//! [`GridTrack`] is a small synthetic implementation for tests and demos.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`state`]  | `RailPiece`, `RailJunction`, `RailState`                        |
//! | [`marker`] | `Marker` — switcher / destination / blocker labels on a block   |
//! | [`world`]  | `TrackWorld` trait                                              |
//! | [`walker`] | `TrackWalkingPoint` — distance-tracked, loop-guarded cursor     |
//! | [`cache`]  | `ScanCache` — scheduler-owned lookup cache, reset per burst     |
//! | [`grid`]   | `GridTrack`, `GridTrackBuilder`                                 |
//! | [`error`]  | `TrackError`, `TrackResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod cache;
pub mod error;
pub mod grid;
pub mod marker;
pub mod state;
pub mod walker;
pub mod world;

#[cfg(test)]
mod tests;

pub use cache::ScanCache;
pub use error::{TrackError, TrackResult};
pub use grid::{GridTrack, GridTrackBuilder};
pub use marker::Marker;
pub use state::{RailJunction, RailPiece, RailState};
pub use walker::TrackWalkingPoint;
pub use world::TrackWorld;
