//! Graph vertices and directed edges.

use std::collections::BTreeSet;
use std::fmt;

use rp_core::{BlockLocation, NodeId};

/// Reserved line that marks a named switcher in a snapshot name record.  It
/// can never be a destination name.
pub const SWITCHER_TOKEN: &str = "::traincarts::switchable::";

// ── PathConnection ────────────────────────────────────────────────────────────

/// A directed edge from the owning node to `destination`.
///
/// Connections are never deduplicated: walking the same junction twice
/// appends a second connection.  A full reroute is the supported way to drop
/// stale or repeated edges.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathConnection {
    pub destination: NodeId,

    /// Track-walk length from the source node to `destination`.  Not a
    /// straight-line distance.
    pub distance: f64,

    /// The junction taken at the source node to reach `destination`.
    pub junction: String,
}

impl PathConnection {
    pub fn new(destination: NodeId, distance: f64, junction: impl Into<String>) -> Self {
        Self { destination, distance, junction: junction.into() }
    }
}

// ── PathNode ──────────────────────────────────────────────────────────────────

/// A navigationally significant point on the track: a switcher, one or more
/// named destinations, or both.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    location:   BlockLocation,
    names:      BTreeSet<String>,
    switcher:   bool,
    neighbours: Vec<PathConnection>,

    /// Transient ordinal assigned by [`PathGraph::assign_indices`] right
    /// before a snapshot is written.  `u32::MAX` until then.
    ///
    /// [`PathGraph::assign_indices`]: crate::PathGraph::assign_indices
    pub index: u32,
}

impl PathNode {
    pub(crate) fn new(location: BlockLocation) -> Self {
        Self {
            location,
            names:      BTreeSet::new(),
            switcher:   false,
            neighbours: Vec::new(),
            index:      u32::MAX,
        }
    }

    #[inline]
    pub fn location(&self) -> &BlockLocation {
        &self.location
    }

    /// Destination names, in sorted order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[inline]
    pub fn contains_switcher(&self) -> bool {
        self.switcher
    }

    /// Flag this node as a switcher.  Returns `true` if the flag changed.
    pub fn add_switcher(&mut self) -> bool {
        !std::mem::replace(&mut self.switcher, true)
    }

    /// `true` if `name` can be stored and later read back unchanged: it is
    /// non-empty, has no line break and is not [`SWITCHER_TOKEN`].
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && !name.contains('\n') && name != SWITCHER_TOKEN
    }

    /// Attach a destination name.  Returns `true` if it was added; a name
    /// already present or not [valid](Self::is_valid_name) is refused.
    pub fn add_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        Self::is_valid_name(&name) && self.names.insert(name)
    }

    /// `true` if the node is a switcher or carries at least one name.
    #[inline]
    pub fn is_tagged(&self) -> bool {
        self.switcher || !self.names.is_empty()
    }

    /// Outgoing connections, in discovery order.
    #[inline]
    pub fn neighbours(&self) -> &[PathConnection] {
        &self.neighbours
    }

    pub(crate) fn push_neighbour(&mut self, connection: PathConnection) {
        self.neighbours.push(connection);
    }

    pub(crate) fn clear_neighbours(&mut self) {
        self.neighbours.clear();
    }

    pub(crate) fn retain_neighbours(&mut self, keep: impl FnMut(&PathConnection) -> bool) {
        self.neighbours.retain(keep);
    }

    /// Human-readable label for logs: the names, or `[switcher]`.
    pub fn display_name(&self) -> String {
        let mut label = if self.names.is_empty() {
            String::from("[switcher]")
        } else {
            self.names.iter().cloned().collect::<Vec<_>>().join("/")
        };
        if self.switcher && !self.names.is_empty() {
            label.push_str(" [switcher]");
        }
        format!("{label} at {}", self.location)
    }
}

impl PartialEq for PathNode {
    /// Nodes are equal when their locations are.
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}

impl Eq for PathNode {}

impl fmt::Display for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
