//! The three work queues drained by the scheduler.
//!
//! | Queue            | Holds                                   | Order            |
//! |------------------|-----------------------------------------|------------------|
//! | `DiscoveryQueue` | candidate rail blocks to scan once      | FIFO             |
//! | `RefreshSet`     | nodes whose edges must be (re)computed  | first insertion  |
//! | `OperationQueue` | in-flight edge-discovery walks          | FIFO             |

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use rp_core::{BlockLocation, NodeId};

use crate::PathFindOperation;

// ── DiscoveryQueue ────────────────────────────────────────────────────────────

/// Rail blocks suspected of carrying a marker.  Duplicates are allowed; the
/// scan drops a candidate whose location already holds a node.
#[derive(Default, Debug)]
pub struct DiscoveryQueue {
    inner: VecDeque<BlockLocation>,
}

impl DiscoveryQueue {
    pub fn push(&mut self, location: BlockLocation) {
        self.inner.push_back(location);
    }

    pub fn pop(&mut self) -> Option<BlockLocation> {
        self.inner.pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

// ── RefreshSet ────────────────────────────────────────────────────────────────

/// Nodes due for branch enumeration.  Each node appears at most once; drain
/// order is first-insertion order so that refresh is deterministic.
#[derive(Default, Debug)]
pub struct RefreshSet {
    order:   Vec<NodeId>,
    members: FxHashSet<NodeId>,
}

impl RefreshSet {
    /// Returns `false` if `node` was already pending.
    pub fn insert(&mut self, node: NodeId) -> bool {
        if !self.members.insert(node) {
            return false;
        }
        self.order.push(node);
        true
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }

    /// Take every pending node, leaving the set empty.
    pub fn drain(&mut self) -> Vec<NodeId> {
        self.members.clear();
        std::mem::take(&mut self.order)
    }

    /// Forget the given nodes.
    pub fn remove_all(&mut self, nodes: &[NodeId]) {
        let gone: FxHashSet<NodeId> = nodes.iter().copied().collect();
        self.order.retain(|id| !gone.contains(id));
        self.members.retain(|id| !gone.contains(id));
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

// ── OperationQueue ────────────────────────────────────────────────────────────

/// Pending edge-discovery walks, processed head first.
#[derive(Default, Debug)]
pub struct OperationQueue {
    inner: VecDeque<PathFindOperation>,
}

impl OperationQueue {
    pub fn push(&mut self, op: PathFindOperation) {
        self.inner.push_back(op);
    }

    /// Put a suspended operation back at the head so it resumes first.
    pub fn push_front(&mut self, op: PathFindOperation) {
        self.inner.push_front(op);
    }

    pub fn pop(&mut self) -> Option<PathFindOperation> {
        self.inner.pop_front()
    }

    pub fn front(&self) -> Option<&PathFindOperation> {
        self.inner.front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn retain(&mut self, keep: impl FnMut(&PathFindOperation) -> bool) {
        self.inner.retain(keep);
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathFindOperation> + '_ {
        self.inner.iter()
    }
}
