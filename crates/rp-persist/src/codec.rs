//! Binary encode/decode for graph snapshots.
//!
//! All integers and floats are big-endian.  Strings carry a `u16` byte
//! length.  The codec works on any `Read`/`Write`; compression is the file
//! layer's concern.

use std::io::{Read, Write};

use rp_core::{BlockLocation, NodeId};
use rp_graph::{PathGraph, PathNode};

use crate::{PersistError, PersistResult};

/// Name-record line marking a switcher that also carries destination names.
pub use rp_graph::SWITCHER_TOKEN;

/// Counts reported after a snapshot has been written or read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub nodes:       usize,
    pub connections: usize,
}

// ── Primitive writers ─────────────────────────────────────────────────────────

pub fn write_i32(w: &mut dyn Write, v: i32) -> PersistResult<()> {
    w.write_all(&v.to_be_bytes())?;
    Ok(())
}

pub fn write_f64(w: &mut dyn Write, v: f64) -> PersistResult<()> {
    w.write_all(&v.to_be_bytes())?;
    Ok(())
}

/// Write a `u16`-length-prefixed UTF-8 string.
pub fn write_utf(w: &mut dyn Write, s: &str) -> PersistResult<()> {
    let len = u16::try_from(s.len()).map_err(|_| PersistError::StringTooLong { len: s.len() })?;
    w.write_all(&len.to_be_bytes())?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

/// Write a non-negative collection length as an `i32`.
fn write_count(w: &mut dyn Write, n: usize) -> PersistResult<()> {
    let n = i32::try_from(n).map_err(|_| PersistError::Malformed {
        detail: format!("count {n} does not fit in i32"),
    })?;
    write_i32(w, n)
}

// ── Primitive readers ─────────────────────────────────────────────────────────

pub fn read_i32(r: &mut dyn Read) -> PersistResult<i32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_be_bytes(buf))
}

pub fn read_f64(r: &mut dyn Read) -> PersistResult<f64> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_be_bytes(buf))
}

pub fn read_utf(r: &mut dyn Read) -> PersistResult<String> {
    let mut len = [0u8; 2];
    r.read_exact(&mut len)?;
    let mut buf = vec![0u8; u16::from_be_bytes(len) as usize];
    r.read_exact(&mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn read_count(r: &mut dyn Read, what: &'static str) -> PersistResult<usize> {
    let count = read_i32(r)?;
    usize::try_from(count).map_err(|_| PersistError::NegativeCount { what, count })
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// The name record for one node: `""` for a bare switcher, the names joined
/// by newlines otherwise, prefixed by [`SWITCHER_TOKEN`] for a switcher.
///
/// Fails for a node the reader could not restore as it is: one with no tag,
/// or with a name that would split or turn into the token.
fn name_record(node: &PathNode) -> PersistResult<String> {
    let malformed = |what: String| PersistError::Malformed {
        detail: format!("node at {} {what}", node.location()),
    };
    if !node.is_tagged() {
        return Err(malformed("is neither a switcher nor named".into()));
    }
    if let Some(name) = node.names().find(|n| !PathNode::is_valid_name(n)) {
        return Err(malformed(format!("has unstorable name {name:?}")));
    }

    let names: Vec<&str> = node.names().collect();
    let record = match (node.contains_switcher(), names.is_empty()) {
        (_, true) => String::new(),
        (false, false) => names.join("\n"),
        (true, false) => {
            let mut record = String::from(SWITCHER_TOKEN);
            for name in names {
                record.push('\n');
                record.push_str(name);
            }
            record
        }
    };
    check_utf_len(&record)?;
    Ok(record)
}

fn check_utf_len(s: &str) -> PersistResult<()> {
    if s.len() > u16::MAX as usize {
        return Err(PersistError::StringTooLong { len: s.len() });
    }
    Ok(())
}

/// Write the whole graph.
///
/// Assigns every node's [`index`](rp_graph::PathNode::index) in the same
/// pass, so edge targets refer to positions in this snapshot only.  Every
/// record is checked before the first byte goes out, so an unstorable graph
/// leaves `w` untouched.
pub fn write_snapshot(w: &mut dyn Write, graph: &mut PathGraph) -> PersistResult<SnapshotSummary> {
    let order = graph.assign_indices();

    let mut records = Vec::with_capacity(order.len());
    for &id in &order {
        let Some(node) = graph.node(id) else { continue };
        check_utf_len(&node.location().world)?;
        for edge in graph.connections(id) {
            check_utf_len(&edge.junction)?;
            if graph.node(edge.destination).is_none() {
                return Err(PersistError::Malformed {
                    detail: format!("connection to missing node {}", edge.destination),
                });
            }
        }
        records.push((name_record(node)?, node.location()));
    }

    write_count(w, records.len())?;
    for (record, loc) in &records {
        write_utf(w, record)?;
        write_utf(w, &loc.world)?;
        write_i32(w, loc.x)?;
        write_i32(w, loc.y)?;
        write_i32(w, loc.z)?;
    }

    let mut connections = 0;
    for &id in &order {
        let edges = graph.connections(id);
        write_count(w, edges.len())?;
        for edge in edges {
            let target = graph
                .node(edge.destination)
                .ok_or_else(|| PersistError::Malformed {
                    detail: format!("connection to missing node {}", edge.destination),
                })?;
            write_i32(w, target.index as i32)?;
            write_f64(w, edge.distance)?;
            write_utf(w, &edge.junction)?;
        }
        connections += edges.len();
    }

    Ok(SnapshotSummary { nodes: records.len(), connections })
}

/// Read a whole graph.
///
/// Every node is created before any edge is wired, since edge targets may
/// point forwards as well as backwards.  Two records at the same location
/// resolve to the same node.
pub fn read_snapshot(r: &mut dyn Read) -> PersistResult<PathGraph> {
    let mut graph = PathGraph::new();

    let count = read_count(r, "node")?;
    let mut table: Vec<NodeId> = Vec::with_capacity(count.min(1 << 16));
    for _ in 0..count {
        let record = read_utf(r)?;
        let world = read_utf(r)?;
        let location = BlockLocation::new(world, read_i32(r)?, read_i32(r)?, read_i32(r)?);

        let (id, _) = graph.get_or_create_node(&location);
        if let Some(node) = graph.node_mut(id) {
            if record.is_empty() {
                node.add_switcher();
            } else {
                for part in record.split('\n') {
                    if part == SWITCHER_TOKEN {
                        node.add_switcher();
                    } else {
                        node.add_name(part);
                    }
                }
            }
        }
        table.push(id);
    }

    for i in 0..count {
        let edges = read_count(r, "connection")?;
        for _ in 0..edges {
            let index = read_i32(r)?;
            let target = usize::try_from(index)
                .ok()
                .and_then(|i| table.get(i).copied())
                .ok_or(PersistError::IndexOutOfRange { index, count })?;
            let distance = read_f64(r)?;
            let junction = read_utf(r)?;
            graph
                .add_connection(table[i], target, distance, junction)
                .map_err(|e| PersistError::Malformed { detail: e.to_string() })?;
        }
    }

    Ok(graph)
}
