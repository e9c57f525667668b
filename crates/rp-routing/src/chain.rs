//! `HandlerChain` — the ordered list of registered routing handlers.

use rp_core::{HandlerId, NodeId};
use rp_graph::PathGraph;
use rp_track::{RailState, ScanCache, TrackWorld};

use crate::{PathRouteEvent, RoutingError, RoutingHandler, RoutingResult};

/// What one dispatch found at a track position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteOutcome {
    /// The node fetched or created at the position, if any handler touched it.
    pub node: Option<NodeId>,
    pub blocked: bool,
    /// Nodes created during this dispatch, in creation order.
    pub created: Vec<NodeId>,
    /// `true` if the graph was modified (node created or newly tagged).
    pub changed: bool,
}

/// Registered routing handlers, invoked in registration order.
#[derive(Default)]
pub struct HandlerChain {
    handlers: Vec<(HandlerId, Box<dyn RoutingHandler>)>,
    next_id:  u32,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the end of the chain.
    pub fn register(&mut self, handler: Box<dyn RoutingHandler>) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Remove a previously registered handler.  The relative order of the
    /// remaining handlers is unchanged.
    pub fn unregister(&mut self, id: HandlerId) -> RoutingResult<()> {
        let pos = self
            .handlers
            .iter()
            .position(|(h, _)| *h == id)
            .ok_or(RoutingError::UnknownHandler(id))?;
        self.handlers.remove(pos);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered ids, in invocation order.
    pub fn ids(&self) -> Vec<HandlerId> {
        self.handlers.iter().map(|(id, _)| *id).collect()
    }

    /// Run each handler on `event`, stopping as soon as it is blocked.
    pub fn dispatch(&self, event: &mut PathRouteEvent<'_>) {
        for (_, handler) in &self.handlers {
            handler.process(event);
            if event.is_blocked() {
                break;
            }
        }
    }

    /// Build an event at `state`, dispatch it, and report what happened.
    pub fn route(
        &self,
        state: &RailState,
        graph: &mut PathGraph,
        cache: &mut ScanCache,
        track: &dyn TrackWorld,
    ) -> RouteOutcome {
        let mut event = PathRouteEvent::new(state, graph, cache, track);
        self.dispatch(&mut event);
        event.finish()
    }
}

impl std::fmt::Debug for HandlerChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerChain")
            .field("handlers", &self.ids())
            .finish()
    }
}
