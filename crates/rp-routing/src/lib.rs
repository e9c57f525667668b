//! `rp-routing` — routing handlers and the route event they inspect.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`event`]   | `PathRouteEvent<'a>` — one track position plus graph write access |
//! | [`handler`] | `RoutingHandler` trait                                            |
//! | [`chain`]   | `HandlerChain` — ordered registrations, dispatch, `RouteOutcome`  |
//! | [`marker`]  | `MarkerRoutingHandler` — the default marker-driven handler        |
//! | [`noop`]    | `NoopRoutingHandler` — never tags or blocks                       |
//! | [`error`]   | `RoutingError`, `RoutingResult<T>`                                |
//!
//! # Dispatch
//!
//! Every time the engine needs to know what lies at a track position (a
//! discovery scan, one step of an edge-discovery walk, a rail-info query) it
//! builds a fresh [`PathRouteEvent`] and hands it to each registered handler
//! in registration order.  A handler may tag the node at the event's block
//! (creating it on first use) or mark the event blocked.  Once the event is
//! blocked the remaining handlers are skipped.

pub mod chain;
pub mod error;
pub mod event;
pub mod handler;
pub mod marker;
pub mod noop;


pub use chain::{HandlerChain, RouteOutcome};
pub use error::{RoutingError, RoutingResult};
pub use event::PathRouteEvent;
pub use handler::RoutingHandler;
pub use marker::MarkerRoutingHandler;
pub use noop::NoopRoutingHandler;
