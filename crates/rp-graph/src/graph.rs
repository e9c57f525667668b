//! `PathGraph` — every node of every world, plus their outgoing connections.
//!
//! # Storage
//!
//! Nodes live in a slot `Vec<Option<PathNode>>` indexed by [`NodeId`].
//! Clearing a world, or everything, leaves the slots as `None`; slots are
//! never reused, so a stale id held by a queue or a caller resolves to `None`
//! rather than to an unrelated node.
//!
//! Worlds are kept in a `BTreeMap` keyed by name.  Enumeration order is world
//! name, then node creation order within the world.  That order is stable
//! across runs for the same sequence of creations, which is what the snapshot
//! writer relies on.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use rp_core::{BlockLocation, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::node::{PathConnection, PathNode};
use crate::world::PathWorld;

#[derive(Clone, Debug, Default)]
pub struct PathGraph {
    slots:  Vec<Option<PathNode>>,
    worlds: BTreeMap<String, PathWorld>,
    live:   usize,
}

impl PathGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Counts ────────────────────────────────────────────────────────────

    /// Number of live nodes across all worlds.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.live
    }

    /// Total outgoing connections across all nodes.
    pub fn connection_count(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .map(|n| n.neighbours().len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    // ── Worlds ────────────────────────────────────────────────────────────

    pub fn world(&self, name: &str) -> Option<&PathWorld> {
        self.worlds.get(name)
    }

    /// All worlds that have ever held a node, sorted by name.
    pub fn worlds(&self) -> impl Iterator<Item = &PathWorld> + '_ {
        self.worlds.values()
    }

    // ── Lookup & creation ─────────────────────────────────────────────────

    /// The node at `location`, if one exists.
    pub fn find_node(&self, location: &BlockLocation) -> Option<NodeId> {
        self.worlds.get(&location.world)?.get(location.coords())
    }

    /// Fetch the node at `location`, creating an empty one if absent.
    ///
    /// Returns the id and `true` when the node was created by this call.
    pub fn get_or_create_node(&mut self, location: &BlockLocation) -> (NodeId, bool) {
        if let Some(id) = self.find_node(location) {
            return (id, false);
        }
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Some(PathNode::new(location.clone())));
        self.worlds
            .entry(location.world.clone())
            .or_insert_with(|| PathWorld::new(location.world.clone()))
            .insert(location.coords(), id);
        self.live += 1;
        (id, true)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&PathNode> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut PathNode> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Every live node id in enumeration order (world name, then creation).
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.worlds
            .values()
            .flat_map(|w| w.node_ids().iter().copied())
            .collect()
    }

    /// Every live node in enumeration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &PathNode)> + '_ {
        self.worlds
            .values()
            .flat_map(|w| w.node_ids().iter().copied())
            .filter_map(|id| self.node(id).map(|n| (id, n)))
    }

    /// Nodes carrying destination `name`, in enumeration order.
    pub fn nodes_named(&self, name: &str) -> Vec<NodeId> {
        self.nodes()
            .filter(|(_, n)| n.has_name(name))
            .map(|(id, _)| id)
            .collect()
    }

    // ── Connections ───────────────────────────────────────────────────────

    /// Append a connection `from → to`.  No deduplication is performed.
    pub fn add_connection(
        &mut self,
        from: NodeId,
        to: NodeId,
        distance: f64,
        junction: impl Into<String>,
    ) -> GraphResult<()> {
        if self.node(to).is_none() {
            return Err(GraphError::NodeNotFound(to));
        }
        let source = self.node_mut(from).ok_or(GraphError::NodeNotFound(from))?;
        source.push_neighbour(PathConnection::new(to, distance, junction));
        Ok(())
    }

    /// Outgoing connections of `id`; empty for an unknown id.
    pub fn connections(&self, id: NodeId) -> &[PathConnection] {
        self.node(id).map(PathNode::neighbours).unwrap_or(&[])
    }

    // ── Bulk operations ───────────────────────────────────────────────────

    /// Remove every node of world `name`, along with any connection in other
    /// worlds that pointed at them.  Returns the removed ids.
    pub fn clear_world(&mut self, name: &str) -> Vec<NodeId> {
        let Some(world) = self.worlds.get_mut(name) else {
            return Vec::new();
        };
        let removed = world.take_all();
        self.worlds.remove(name);
        for id in &removed {
            if let Some(slot) = self.slots.get_mut(id.index()) {
                if slot.take().is_some() {
                    self.live -= 1;
                }
            }
        }
        let gone: FxHashSet<NodeId> = removed.iter().copied().collect();
        if !gone.is_empty() {
            for node in self.slots.iter_mut().flatten() {
                node.retain_neighbours(|c| !gone.contains(&c.destination));
            }
        }
        removed
    }

    /// Remove every node of every world.  Slots are emptied, not dropped, so
    /// previously issued ids resolve to `None` rather than to a new node.
    pub fn clear_all(&mut self) {
        self.slots.fill(None);
        self.worlds.clear();
        self.live = 0;
    }

    /// Drop the outgoing connections of every node in world `name`, keeping
    /// the nodes themselves.  Returns the ids to re-enqueue for refresh.
    pub fn reroute_world(&mut self, name: &str) -> Vec<NodeId> {
        let ids = match self.worlds.get(name) {
            Some(world) => world.node_ids().to_vec(),
            None => return Vec::new(),
        };
        for &id in &ids {
            if let Some(node) = self.node_mut(id) {
                node.clear_neighbours();
            }
        }
        ids
    }

    /// [`reroute_world`](Self::reroute_world) for every world.
    pub fn reroute_all(&mut self) -> Vec<NodeId> {
        for node in self.slots.iter_mut().flatten() {
            node.clear_neighbours();
        }
        self.node_ids()
    }

    /// Number every live node 0, 1, 2, … in enumeration order and store the
    /// ordinal in [`PathNode::index`].  Returns the ids in that order.
    pub fn assign_indices(&mut self) -> Vec<NodeId> {
        let order = self.node_ids();
        for (i, &id) in order.iter().enumerate() {
            if let Some(node) = self.node_mut(id) {
                node.index = i as u32;
            }
        }
        order
    }
}
