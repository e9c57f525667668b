//! `rp-core` — foundational types for the `railpath` graph engine.
//!
//! This crate is a dependency of every other `rp-*` crate.  It intentionally
//! has no `rp-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `HandlerId`                                 |
//! | [`geo`]         | `Vec3`, `Face`                                        |
//! | [`location`]    | `BlockLocation` — world name + integer block coords   |
//! | [`time`]        | `Tick` — scheduler invocation counter                 |
//! | [`config`]      | `PathConfig` — batch size, time budget, flags         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod location;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PathConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Face, Vec3};
pub use ids::{HandlerId, NodeId};
pub use location::BlockLocation;
pub use time::Tick;
