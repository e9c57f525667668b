//! The `RoutingHandler` trait — the extension point for marker detection.

use crate::PathRouteEvent;

/// Decides what a track position means for the graph.
///
/// Handlers are invoked in registration order with a [`PathRouteEvent`].
/// A handler may:
///
/// * call [`PathRouteEvent::add_switcher`] / [`PathRouteEvent::add_name`]
///   to materialize and tag the node at the event's block,
/// * call [`PathRouteEvent::set_blocked`] to stop path finding there,
/// * or do nothing.
///
/// `process` may run many times at the same position (rediscovery, rail-info
/// queries, reroutes) and must give the same answer each time.
///
/// # Example
///
/// ```rust
/// use rp_routing::{PathRouteEvent, RoutingHandler};
///
/// /// Treats every block at y = 0 as a named stop.
/// struct SeaLevelStops;
///
/// impl RoutingHandler for SeaLevelStops {
///     fn process(&self, event: &mut PathRouteEvent<'_>) {
///         if event.block().y == 0 {
///             event.add_name("sea level");
///         }
///     }
/// }
/// ```
pub trait RoutingHandler: Send + Sync + 'static {
    fn process(&self, event: &mut PathRouteEvent<'_>);
}
