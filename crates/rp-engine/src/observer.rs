//! Provider observer trait for progress reporting and inspection.

use rp_core::{BlockLocation, NodeId, Tick};

use crate::OperationOutcome;

/// Counters for one scheduler invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BurstReport {
    /// Discovery candidates that were actually scanned (0 or 1).
    pub scans: usize,
    /// Operations created from the refresh set.
    pub operations_started: usize,
    /// Operations that reached a terminal state.
    pub operations_finished: usize,
    /// Operation steps taken.
    pub steps: usize,
    /// `true` if the time budget ran out with an operation still walking.
    pub yielded: bool,
}

/// Callbacks invoked by the [`PathProvider`][crate::PathProvider] while it
/// processes work.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — connection counter
///
/// ```rust
/// use rp_core::NodeId;
/// use rp_engine::ProviderObserver;
///
/// #[derive(Default)]
/// struct Connections(usize);
///
/// impl ProviderObserver for Connections {
///     fn on_connection(&mut self, _from: NodeId, _to: NodeId, _distance: f64, _junction: &str) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait ProviderObserver {
    /// A routing handler materialized a new node.
    fn on_node_created(&mut self, _node: NodeId, _location: &BlockLocation) {}

    /// An operation appended a connection.
    fn on_connection(&mut self, _from: NodeId, _to: NodeId, _distance: f64, _junction: &str) {}

    /// An operation reached a terminal state (including being dropped after a
    /// failed track step).
    fn on_operation_finished(&mut self, _origin: NodeId, _junction: &str, _outcome: &OperationOutcome) {}

    /// Called once at the end of every [`run`][crate::PathProvider::run].
    fn on_burst_end(&mut self, _tick: Tick, _report: &BurstReport) {}
}

/// A [`ProviderObserver`] that does nothing.
pub struct NoopObserver;

impl ProviderObserver for NoopObserver {}
