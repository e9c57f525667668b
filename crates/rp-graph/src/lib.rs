//! `rp-graph` — the path graph store.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`node`]    | `PathNode`, `PathConnection`                                   |
//! | [`world`]   | `PathWorld` — location → node table for one named world        |
//! | [`graph`]   | `PathGraph` — node slots plus all worlds                       |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                                 |
//!
//! # Identity
//!
//! A node *is* its [`BlockLocation`](rp_core::BlockLocation): there is at
//! most one node per location, and two nodes are the same node exactly when
//! their locations match.  [`NodeId`](rp_core::NodeId) is only a handle into
//! the in-memory slot table and is never persisted.
//!
//! # Ownership
//!
//! The graph is mutated only by the scheduler thread that owns it (discovery,
//! branch enumeration, and edge-discovery operations).  Consumers read a
//! settled graph through `&PathGraph`.

pub mod error;
pub mod graph;
pub mod node;
pub mod world;


pub use error::{GraphError, GraphResult};
pub use graph::PathGraph;
pub use node::{PathConnection, PathNode, SWITCHER_TOKEN};
pub use world::PathWorld;
