//! A routing handler that never does anything.

use crate::{PathRouteEvent, RoutingHandler};

/// A [`RoutingHandler`] that never tags a node or blocks a route.
///
/// Registering only this handler makes discovery find nothing; useful in
/// tests that drive the graph by hand.
pub struct NoopRoutingHandler;

impl RoutingHandler for NoopRoutingHandler {
    fn process(&self, _event: &mut PathRouteEvent<'_>) {}
}
