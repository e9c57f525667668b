//! Per-world node table.

use rustc_hash::FxHashMap;

use rp_core::NodeId;

/// The nodes of one named world.
///
/// Maps block coordinates to node slots and remembers creation order, which
/// is the order nodes are enumerated and written to snapshots.
#[derive(Clone, Debug, Default)]
pub struct PathWorld {
    name:        String,
    by_location: FxHashMap<(i32, i32, i32), NodeId>,
    order:       Vec<NodeId>,
}

impl PathWorld {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node at `coords`, if any.
    #[inline]
    pub fn get(&self, coords: (i32, i32, i32)) -> Option<NodeId> {
        self.by_location.get(&coords).copied()
    }

    /// Node ids in creation order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(crate) fn insert(&mut self, coords: (i32, i32, i32), id: NodeId) {
        self.by_location.insert(coords, id);
        self.order.push(id);
    }

    /// Forget every node; returns the ids that were removed.
    pub(crate) fn take_all(&mut self) -> Vec<NodeId> {
        self.by_location.clear();
        std::mem::take(&mut self.order)
    }
}
