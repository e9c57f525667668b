//! `PathFindOperation` — one resumable edge-discovery walk.
//!
//! ```text
//!            advance()
//! Walking ──────────────┬──► Found(node)   connection appended to origin
//!    ▲                  ├──► Blocked       no connection
//!    └── still walking ─┤──► Exhausted     track ended or looped
//!                       └──► Failed        track step errored
//! ```
//!
//! The operation owns its walker, so suspending it between two `advance`
//! calls loses nothing.  Batching and deadline checks belong to the
//! scheduler.

use rp_core::{BlockLocation, NodeId};
use rp_graph::PathGraph;
use rp_routing::{HandlerChain, RouteOutcome};
use rp_track::{RailJunction, RailState, ScanCache, TrackWalkingPoint, TrackWorld};

use crate::EngineResult;

/// Terminal result of an operation.
#[derive(Clone, Debug, PartialEq)]
pub enum OperationOutcome {
    /// A connection `origin → node` of `distance` was added.
    Found { node: NodeId, distance: f64 },
    /// A routing handler blocked the walk.
    Blocked,
    /// The track ended, or the walk came back to a block it had visited.
    Exhausted,
    /// A track step failed; the operation was dropped.
    Failed,
}

/// What one `advance` call did.
#[derive(Debug, Default)]
pub struct Step {
    pub finished: bool,
    /// The dispatch at the new position, if the walker moved.
    pub route: RouteOutcome,
}

#[derive(Debug)]
pub struct PathFindOperation {
    walker:          TrackWalkingPoint,
    origin:          NodeId,
    origin_location: BlockLocation,
    junction:        String,
    outcome:         Option<OperationOutcome>,
    steps:           usize,
}

impl PathFindOperation {
    /// Start a walk from `origin` along `junction`, beginning at `state`.
    ///
    /// The walk is credited with the distance from the piece's spawn point to
    /// `state`, so that connections measured from either end of a piece line
    /// up.
    pub fn new(
        track: &dyn TrackWorld,
        origin: NodeId,
        origin_location: BlockLocation,
        state: RailState,
        junction: &RailJunction,
    ) -> Self {
        let spawn = track.spawn_location(&state.piece, state.motion_face());
        let offset = state.position.distance(spawn);

        let mut walker = TrackWalkingPoint::new(state);
        walker.set_loop_filter(true);
        walker.moved_total += offset;

        Self {
            walker,
            origin,
            origin_location,
            junction: junction.name.clone(),
            outcome: None,
            steps: 0,
        }
    }

    #[inline]
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    pub fn origin_location(&self) -> &BlockLocation {
        &self.origin_location
    }

    pub fn junction(&self) -> &str {
        &self.junction
    }

    /// Distance walked so far, including the spawn offset.
    pub fn moved_total(&self) -> f64 {
        self.walker.moved_total
    }

    /// Steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn outcome(&self) -> Option<&OperationOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub(crate) fn fail(&mut self) {
        self.outcome = Some(OperationOutcome::Failed);
    }

    /// Take one walker step and dispatch the handlers at the new position.
    ///
    /// On `Err` the operation is left unfinished; the caller decides whether
    /// to drop it.
    pub fn advance(
        &mut self,
        track: &dyn TrackWorld,
        handlers: &HandlerChain,
        graph: &mut PathGraph,
        cache: &mut ScanCache,
    ) -> EngineResult<Step> {
        if self.outcome.is_some() {
            return Ok(Step { finished: true, ..Step::default() });
        }
        self.steps += 1;

        if !self.walker.move_full(track)? {
            self.outcome = Some(OperationOutcome::Exhausted);
            return Ok(Step { finished: true, ..Step::default() });
        }

        let route = handlers.route(&self.walker.state, graph, cache, track);

        if let Some(found) = route.node {
            let elsewhere = graph
                .node(found)
                .is_some_and(|n| n.location() != &self.origin_location);
            if elsewhere {
                let state = &self.walker.state;
                let spawn = track.spawn_location(&state.piece, state.motion_face());
                let distance = self.walker.moved_total + spawn.distance(state.position);
                graph.add_connection(self.origin, found, distance, self.junction.clone())?;
                self.outcome = Some(OperationOutcome::Found { node: found, distance });
                return Ok(Step { finished: true, route });
            }
        }

        if route.blocked {
            self.outcome = Some(OperationOutcome::Blocked);
            return Ok(Step { finished: true, route });
        }

        Ok(Step { finished: false, route })
    }
}
