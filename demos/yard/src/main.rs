//! yard — drives the railpath engine over a small synthetic rail yard.
//!
//! Usage: `yard [config.json]`
//!
//! The optional JSON file deserializes into `PathConfig`; missing fields keep
//! their defaults.  Set `RUST_LOG=debug` to see every operation.

mod network;

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use rp_core::{BlockLocation, NodeId, PathConfig, Tick};
use rp_engine::{BurstReport, PathProvider, ProviderBuilder, ProviderObserver};
use rp_graph::PathGraph;
use rp_track::GridTrack;

use network::{at, build_yard};

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct YardObserver {
    nodes:       usize,
    connections: usize,
    bursts:      usize,
    yields:      usize,
}

impl ProviderObserver for YardObserver {
    fn on_node_created(&mut self, _node: NodeId, location: &BlockLocation) {
        self.nodes += 1;
        info!("new node at {location}");
    }

    fn on_connection(&mut self, _from: NodeId, _to: NodeId, _distance: f64, _junction: &str) {
        self.connections += 1;
    }

    fn on_burst_end(&mut self, _tick: Tick, report: &BurstReport) {
        self.bursts += 1;
        if report.yielded {
            self.yields += 1;
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config() -> Result<PathConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(PathConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

fn print_graph(graph: &PathGraph) {
    for (id, node) in graph.nodes() {
        println!("{}", node.display_name());
        for c in graph.connections(id) {
            let to = graph.node(c.destination).map(|n| n.display_name()).unwrap_or_default();
            println!("    {:<6} {:>6.1}  → {to}", c.junction, c.distance);
        }
    }
}

fn build_provider(config: PathConfig) -> Result<PathProvider<GridTrack>> {
    Ok(ProviderBuilder::new(build_yard()).config(config).build()?)
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = load_config()?;
    info!(?config, "starting yard demo");

    // 1. Discover from switcher A and let the scheduler drain the queues.
    let mut provider = build_provider(config.clone())?;
    provider.discover_from_rail(at(0, 0));

    let mut observer = YardObserver::default();
    let start = Instant::now();
    while provider.is_processing() {
        provider.run(&mut observer);
    }
    info!(
        nodes = observer.nodes,
        connections = observer.connections,
        bursts = observer.bursts,
        yields = observer.yields,
        "graph settled in {:.1?}",
        start.elapsed()
    );

    // 2. Persist, then reload into a fresh provider.
    let dir = tempfile::tempdir()?;
    let snapshot = dir.path().join("paths.dat");
    provider.save(&snapshot, false)?;
    provider.disable(&mut observer);

    let mut restored = build_provider(config)?;
    restored.enable(&snapshot)?;
    let summary = restored.export_csv(dir.path())?;
    info!(
        nodes = summary.nodes,
        connections = summary.connections,
        "reloaded snapshot and exported CSV to {}",
        dir.path().display()
    );

    println!();
    print_graph(restored.graph());
    Ok(())
}
