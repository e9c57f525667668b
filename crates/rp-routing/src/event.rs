//! The route event passed to every routing handler.

use rp_core::{BlockLocation, NodeId};
use rp_graph::{PathGraph, PathNode};
use rp_track::{Marker, RailState, ScanCache, TrackWorld};

/// One track position under inspection, with write access to the graph.
///
/// A handler can only ever create or tag the node at the event's own block:
/// there is no way to reach another location through the event.  That keeps
/// the "graph is only mutated by the scheduler" rule intact while handlers
/// are user code.
///
/// Events are built fresh for every dispatch.  They are cheap (a handful of
/// borrows and two flags) and building a new one avoids stale `blocked` or
/// `last_node` state leaking between walker steps.
pub struct PathRouteEvent<'a> {
    state: &'a RailState,
    graph: &'a mut PathGraph,
    cache: &'a mut ScanCache,
    track: &'a dyn TrackWorld,

    last_node: Option<NodeId>,
    blocked:   bool,
    created:   Vec<NodeId>,
    changed:   bool,
}

impl<'a> PathRouteEvent<'a> {
    #[inline]
    pub fn new(
        state: &'a RailState,
        graph: &'a mut PathGraph,
        cache: &'a mut ScanCache,
        track: &'a dyn TrackWorld,
    ) -> Self {
        Self {
            state,
            graph,
            cache,
            track,
            last_node: None,
            blocked:   false,
            created:   Vec::new(),
            changed:   false,
        }
    }

    // ── Inspection ────────────────────────────────────────────────────────

    #[inline]
    pub fn rail_state(&self) -> &RailState {
        self.state
    }

    #[inline]
    pub fn block(&self) -> &BlockLocation {
        self.state.block()
    }

    /// Markers at the event's block, through the scheduler's scan cache.
    pub fn markers(&mut self) -> Vec<Marker> {
        self.cache.markers(self.track, self.state.block())
    }

    /// Read access to the graph as it stands mid-dispatch.
    pub fn graph(&self) -> &PathGraph {
        &*self.graph
    }

    // ── Node tagging ──────────────────────────────────────────────────────

    /// Fetch or create the node at the event's block.  Handlers go through
    /// [`add_switcher`](Self::add_switcher) or [`add_name`](Self::add_name)
    /// so that no node is left without a tag.
    pub(crate) fn node(&mut self) -> NodeId {
        let (id, created) = self.graph.get_or_create_node(self.state.block());
        if created {
            self.created.push(id);
            self.changed = true;
        }
        self.last_node = Some(id);
        id
    }

    /// Tag the node at the event's block as a switcher.
    pub fn add_switcher(&mut self) -> NodeId {
        let id = self.node();
        self.changed |= self.with_node(id, PathNode::add_switcher);
        id
    }

    /// Attach destination `name` to the node at the event's block.
    ///
    /// Returns `None`, and creates nothing, if `name` is not a
    /// [valid](PathNode::is_valid_name) destination name.
    pub fn add_name(&mut self, name: &str) -> Option<NodeId> {
        if !PathNode::is_valid_name(name) {
            return None;
        }
        let id = self.node();
        self.changed |= self.with_node(id, |n| n.add_name(name));
        Some(id)
    }

    fn with_node(&mut self, id: NodeId, f: impl FnOnce(&mut PathNode) -> bool) -> bool {
        self.graph.node_mut(id).map(f).unwrap_or(false)
    }

    // ── Blocking ──────────────────────────────────────────────────────────

    /// Stop path finding at this position.  Remaining handlers are skipped.
    #[inline]
    pub fn set_blocked(&mut self) {
        self.blocked = true;
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// The node most recently fetched or created through this event.
    #[inline]
    pub fn last_set_node(&self) -> Option<NodeId> {
        self.last_node
    }

    /// Nodes created by this event, in creation order.
    pub fn created_nodes(&self) -> &[NodeId] {
        &self.created
    }

    /// `true` if this event created or tagged anything.
    pub fn has_changes(&self) -> bool {
        self.changed
    }

    pub(crate) fn finish(self) -> crate::RouteOutcome {
        crate::RouteOutcome {
            node:    self.last_node,
            blocked: self.blocked,
            created: self.created,
            changed: self.changed,
        }
    }
}
