//! CSV export of a settled graph.
//!
//! Creates two files in the target directory:
//! - `nodes.csv`
//! - `connections.csv`

use std::path::Path;

use csv::Writer;

use rp_graph::PathGraph;

use crate::codec::SnapshotSummary;
use crate::PersistResult;

/// Writes a graph as two CSV tables.  Nodes are referenced by their
/// enumeration ordinal, which matches the snapshot index.
pub struct CsvExporter;

impl CsvExporter {
    pub fn export(dir: &Path, graph: &mut PathGraph) -> PersistResult<SnapshotSummary> {
        let order = graph.assign_indices();

        let mut nodes = Writer::from_path(dir.join("nodes.csv"))?;
        nodes.write_record(["index", "world", "x", "y", "z", "switcher", "names"])?;
        for &id in &order {
            let Some(node) = graph.node(id) else { continue };
            let loc = node.location();
            nodes.write_record(&[
                node.index.to_string(),
                loc.world.clone(),
                loc.x.to_string(),
                loc.y.to_string(),
                loc.z.to_string(),
                (node.contains_switcher() as u8).to_string(),
                node.names().collect::<Vec<_>>().join(";"),
            ])?;
        }
        nodes.flush()?;

        let mut connections = Writer::from_path(dir.join("connections.csv"))?;
        connections.write_record(["from", "to", "distance", "junction"])?;
        let mut total = 0;
        for &id in &order {
            let Some(from) = graph.node(id) else { continue };
            for edge in from.neighbours() {
                let Some(to) = graph.node(edge.destination) else { continue };
                connections.write_record(&[
                    from.index.to_string(),
                    to.index.to_string(),
                    edge.distance.to_string(),
                    edge.junction.clone(),
                ])?;
                total += 1;
            }
        }
        connections.flush()?;

        Ok(SnapshotSummary { nodes: order.len(), connections: total })
    }
}
