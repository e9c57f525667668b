//! The `PathProvider` struct and its scheduler loop.

use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use rp_core::{BlockLocation, HandlerId, NodeId, PathConfig, Tick};
use rp_graph::{PathGraph, PathWorld};
use rp_persist::{CsvExporter, SnapshotSummary, load_snapshot, save_snapshot};
use rp_routing::{HandlerChain, RouteOutcome, RoutingHandler};
use rp_track::{RailState, ScanCache, TrackWorld};

use crate::discovery::{Scan, branch_operations, scan};
use crate::queues::{DiscoveryQueue, OperationQueue, RefreshSet};
use crate::{
    BurstReport, EngineResult, OperationOutcome, PathFindOperation, PathRailInfo, ProviderObserver,
};

/// Log at `info` when `PathConfig::debug` is set, `debug` otherwise.
macro_rules! verbose {
    ($on:expr, $($arg:tt)+) => {
        if $on {
            tracing::info!($($arg)+)
        } else {
            tracing::debug!($($arg)+)
        }
    };
}

// ── PathProvider ──────────────────────────────────────────────────────────────

/// The path-finding graph engine.
///
/// `PathProvider<W>` owns the graph, the three work queues, the handler chain
/// and the scan cache, and drives discovery from a host-provided periodic
/// [`run`](Self::run) call:
///
/// 1. **Discovery**: if no operation is pending, scan one candidate block.
/// 2. **Refresh**: if no operation is pending, turn every node in the refresh
///    set into edge-discovery operations.
/// 3. **Operations**: advance the head operation in batches of
///    `config.step_count` steps, checking the time budget between batches.
///    Out of time mid-walk, the operation stays at the head and resumes on
///    the next call.
///
/// All graph mutation happens inside these calls; consumers read the settled
/// graph through [`graph`](Self::graph).
///
/// Create via [`ProviderBuilder`][crate::ProviderBuilder].
pub struct PathProvider<W: TrackWorld> {
    pub config: PathConfig,

    pub(crate) track:      W,
    pub(crate) graph:      PathGraph,
    pub(crate) handlers:   HandlerChain,
    pub(crate) cache:      ScanCache,
    pub(crate) discovery:  DiscoveryQueue,
    pub(crate) refresh:    RefreshSet,
    pub(crate) operations: OperationQueue,
    pub(crate) changed:    bool,
    pub(crate) tick:       Tick,
}

impl<W: TrackWorld> PathProvider<W> {
    // ── Read access ───────────────────────────────────────────────────────

    pub fn graph(&self) -> &PathGraph {
        &self.graph
    }

    pub fn world(&self, name: &str) -> Option<&PathWorld> {
        self.graph.world(name)
    }

    pub fn worlds(&self) -> impl Iterator<Item = &PathWorld> + '_ {
        self.graph.worlds()
    }

    pub fn track(&self) -> &W {
        &self.track
    }

    /// Mutable access to the track, e.g. to place or remove markers.  The
    /// scan cache is reset since it may now be stale.
    pub fn track_mut(&mut self) -> &mut W {
        self.cache.reset();
        &mut self.track
    }

    /// Number of completed [`run`](Self::run) calls.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// `true` while any of the three work queues is non-empty.
    pub fn is_processing(&self) -> bool {
        !self.discovery.is_empty() || !self.refresh.is_empty() || !self.operations.is_empty()
    }

    /// `true` if the graph changed since the last save or load.
    pub fn has_changes(&self) -> bool {
        self.changed
    }

    pub fn pending_discovery(&self) -> usize {
        self.discovery.len()
    }

    pub fn pending_refresh(&self) -> usize {
        self.refresh.len()
    }

    pub fn pending_operations(&self) -> usize {
        self.operations.len()
    }

    // ── Enqueueing ────────────────────────────────────────────────────────

    /// Queue `rail` for a one-time marker scan.
    pub fn discover_from_rail(&mut self, rail: BlockLocation) {
        self.discovery.push(rail);
    }

    /// Queue `node` for edge (re)computation.  Returns `false` if it was
    /// already queued or does not exist.
    pub fn schedule_node(&mut self, node: NodeId) -> bool {
        self.graph.node(node).is_some() && self.refresh.insert(node)
    }

    // ── Handlers ──────────────────────────────────────────────────────────

    pub fn register_routing_handler(&mut self, handler: Box<dyn RoutingHandler>) -> HandlerId {
        self.handlers.register(handler)
    }

    pub fn unregister_routing_handler(&mut self, id: HandlerId) -> EngineResult<()> {
        self.handlers.unregister(id)?;
        Ok(())
    }

    pub fn handlers(&self) -> &HandlerChain {
        &self.handlers
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// What `state` means for routing.
    ///
    /// Runs the handler chain at `state`, so a marker seen here for the first
    /// time creates (and schedules) its node.
    pub fn rail_info<O: ProviderObserver>(&mut self, state: &RailState, observer: &mut O) -> PathRailInfo {
        let route = self.handlers.route(state, &mut self.graph, &mut self.cache, &self.track);
        self.absorb(&route, observer);
        if route.blocked {
            PathRailInfo::Blocked
        } else if route.node.is_some() {
            PathRailInfo::Node
        } else {
            PathRailInfo::None
        }
    }

    // ── Scheduler ─────────────────────────────────────────────────────────

    /// Process queued work for at most `config.max_processing_ms`, plus one
    /// batch.
    pub fn run<O: ProviderObserver>(&mut self, observer: &mut O) -> BurstReport {
        let mut report = BurstReport::default();

        if self.operations.is_empty() && self.scan_next(observer) {
            report.scans = 1;
        }
        if self.operations.is_empty() {
            report.operations_started = self.materialize_refresh();
        }

        if !self.operations.is_empty() {
            let budget = self.config.budget();
            let start = Instant::now();
            while let Some(mut op) = self.operations.pop() {
                let done = loop {
                    let (done, steps) = self.run_batch(&mut op, observer);
                    report.steps += steps;
                    if done || start.elapsed() > budget {
                        break done;
                    }
                };
                if !done {
                    self.operations.push_front(op);
                    report.yielded = true;
                    break;
                }
                report.operations_finished += 1;
                if start.elapsed() > budget {
                    break;
                }
            }
            self.cache.reset();
        }

        observer.on_burst_end(self.tick, &report);
        self.tick = self.tick.next();
        report
    }

    /// Finish all queued work synchronously, ignoring the time budget.
    ///
    /// Pending discovery candidates are scanned, the refresh set is expanded,
    /// and every operation is walked to completion, repeatedly, until all
    /// three queues are empty.  Returns the number of operations run.
    pub fn stop<O: ProviderObserver>(&mut self, observer: &mut O) -> usize {
        let mut flushed = 0;
        loop {
            while !self.discovery.is_empty() {
                self.scan_next(observer);
            }
            self.materialize_refresh();
            if self.operations.is_empty() {
                break;
            }
            info!(
                pending = self.operations.len(),
                "performing {} pending path finding operations",
                self.operations.len()
            );
            while let Some(mut op) = self.operations.pop() {
                while !self.run_batch(&mut op, observer).0 {}
                flushed += 1;
            }
        }
        self.cache.reset();
        flushed
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Replace the graph with the snapshot at `path`.
    ///
    /// A missing file yields an empty graph.  A malformed file also leaves
    /// the graph empty and returns the error.  All queues are cleared; with
    /// `config.reroute_on_startup` every node is then rescheduled.
    pub fn enable(&mut self, path: &Path) -> EngineResult<()> {
        self.clear_queues();
        self.graph.clear_all();
        self.cache.reset();

        match load_snapshot(path) {
            Ok(Some(graph)) => self.graph = graph,
            Ok(None) => info!(path = %path.display(), "no path finding snapshot, starting empty"),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load path finding snapshot");
                self.changed = false;
                return Err(e.into());
            }
        }
        self.refresh.clear();
        self.changed = false;

        if self.config.reroute_on_startup {
            self.reroute();
        }
        Ok(())
    }

    /// Flush pending work, then release the graph and every queue.
    /// Returns the number of operations flushed.
    pub fn disable<O: ProviderObserver>(&mut self, observer: &mut O) -> usize {
        let flushed = self.stop(observer);
        self.graph = PathGraph::new();
        self.clear_queues();
        self.cache.reset();
        self.changed = false;
        flushed
    }

    /// Write the graph to `path`.
    ///
    /// An autosave with no changes since the last save or load is skipped and
    /// returns `Ok(None)`.
    pub fn save(&mut self, path: &Path, autosave: bool) -> EngineResult<Option<SnapshotSummary>> {
        if autosave && !self.changed {
            return Ok(None);
        }
        let summary = save_snapshot(path, &mut self.graph)?;
        self.changed = false;
        Ok(Some(summary))
    }

    /// Write `nodes.csv` and `connections.csv` into `dir`.
    pub fn export_csv(&mut self, dir: &Path) -> EngineResult<SnapshotSummary> {
        Ok(CsvExporter::export(dir, &mut self.graph)?)
    }

    // ── Bulk maintenance ──────────────────────────────────────────────────

    /// Remove every node of every world, with all refresh entries and
    /// operations.  Discovery candidates are kept.
    pub fn clear_all(&mut self) {
        self.graph.clear_all();
        self.refresh.clear();
        self.operations.clear();
        self.changed = true;
    }

    /// Remove every node of world `name`, with the refresh entries and
    /// operations that originate there.
    pub fn clear_world(&mut self, name: &str) -> usize {
        let removed = self.graph.clear_world(name);
        self.refresh.remove_all(&removed);
        self.operations.retain(|op| op.origin_location().world != name);
        if !removed.is_empty() {
            self.changed = true;
        }
        removed.len()
    }

    /// Drop every connection and reschedule every node.  Operations in flight
    /// are dropped since their origins are rescheduled anyway.
    pub fn reroute(&mut self) -> usize {
        let nodes = self.graph.reroute_all();
        self.operations.clear();
        for &id in &nodes {
            self.refresh.insert(id);
        }
        self.changed = true;
        nodes.len()
    }

    /// [`reroute`](Self::reroute) restricted to one world.
    pub fn reroute_world(&mut self, name: &str) -> usize {
        let nodes = self.graph.reroute_world(name);
        self.operations.retain(|op| op.origin_location().world != name);
        for &id in &nodes {
            self.refresh.insert(id);
        }
        if !nodes.is_empty() {
            self.changed = true;
        }
        nodes.len()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn clear_queues(&mut self) {
        self.discovery.clear();
        self.refresh.clear();
        self.operations.clear();
    }

    /// Pop candidates until one is actually scanned.  Returns `false` if the
    /// queue ran dry first.
    fn scan_next<O: ProviderObserver>(&mut self, observer: &mut O) -> bool {
        while let Some(location) = self.discovery.pop() {
            match scan(&location, &self.track, &self.handlers, &mut self.graph, &mut self.cache) {
                Scan::Known | Scan::NotTrack => continue,
                Scan::Scanned(route) => {
                    self.absorb(&route, observer);
                    return true;
                }
            }
        }
        false
    }

    /// Turn the whole refresh set into operations.  Returns how many were
    /// queued.
    fn materialize_refresh(&mut self) -> usize {
        let mut started = 0;
        for node in self.refresh.drain() {
            for op in branch_operations(node, &self.track, &self.graph, &mut self.cache) {
                verbose!(
                    self.config.debug,
                    origin = %node,
                    junction = op.junction(),
                    "discovering from {} into {}",
                    op.origin_location(),
                    op.junction()
                );
                self.operations.push(op);
                started += 1;
            }
        }
        started
    }

    /// Advance `op` by up to `config.step_count` steps.  Returns whether it
    /// finished and how many steps were taken.  A failed step finishes the
    /// operation with [`OperationOutcome::Failed`].
    fn run_batch<O: ProviderObserver>(&mut self, op: &mut PathFindOperation, observer: &mut O) -> (bool, usize) {
        for step in 0..self.config.step_count {
            match op.advance(&self.track, &self.handlers, &mut self.graph, &mut self.cache) {
                Ok(result) => {
                    self.absorb(&result.route, observer);
                    if result.finished {
                        self.finish(op, observer);
                        return (true, step + 1);
                    }
                }
                Err(e) => {
                    warn!(
                        origin = %op.origin_location(),
                        junction = op.junction(),
                        error = %e,
                        "dropping path finding operation after failed track step"
                    );
                    op.fail();
                    self.finish(op, observer);
                    return (true, step + 1);
                }
            }
        }
        (false, self.config.step_count)
    }

    fn finish<O: ProviderObserver>(&mut self, op: &PathFindOperation, observer: &mut O) {
        let Some(outcome) = op.outcome() else { return };
        if let OperationOutcome::Found { node, distance } = outcome {
            self.changed = true;
            let to = self
                .graph
                .node(*node)
                .map(|n| n.display_name())
                .unwrap_or_default();
            verbose!(
                self.config.debug,
                distance = *distance,
                junction = op.junction(),
                "made connection from {} to {}",
                op.origin_location(),
                to
            );
            observer.on_connection(op.origin(), *node, *distance, op.junction());
        }
        observer.on_operation_finished(op.origin(), op.junction(), outcome);
    }

    /// Apply the side effects of one handler dispatch: schedule newly created
    /// nodes and raise the change flag.
    fn absorb<O: ProviderObserver>(&mut self, route: &RouteOutcome, observer: &mut O) {
        if route.changed {
            self.changed = true;
        }
        for &id in &route.created {
            self.refresh.insert(id);
            if let Some(node) = self.graph.node(id) {
                verbose!(self.config.debug, node = %id, "created path node at {}", node.location());
                observer.on_node_created(id, node.location());
            }
        }
    }
}
