//! Unit tests for rp-persist.

use std::io::Cursor;

use rp_core::BlockLocation;
use rp_graph::PathGraph;

use crate::{PersistError, read_snapshot, write_snapshot};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at(world: &str, x: i32, z: i32) -> BlockLocation {
    BlockLocation::new(world, x, 70, z)
}

/// Switcher at w[0] with two branches, Alpha at w[10], a named switcher at
/// w[0, 5] and a lone node in a second world.
fn sample_graph() -> PathGraph {
    let mut g = PathGraph::new();
    let (sw, _) = g.get_or_create_node(&at("w", 0, 0));
    let (alpha, _) = g.get_or_create_node(&at("w", 10, 0));
    let (yard, _) = g.get_or_create_node(&at("w", 0, 5));
    let (far, _) = g.get_or_create_node(&at("nether", -3, 8));

    g.node_mut(sw).unwrap().add_switcher();
    g.node_mut(alpha).unwrap().add_name("Alpha");
    g.node_mut(yard).unwrap().add_switcher();
    g.node_mut(yard).unwrap().add_name("Yard");
    g.node_mut(yard).unwrap().add_name("Depot");
    g.node_mut(far).unwrap().add_name("Far");

    g.add_connection(sw, alpha, 10.0, "east").unwrap();
    g.add_connection(sw, yard, 5.0, "south").unwrap();
    g.add_connection(alpha, sw, 10.0, "west").unwrap();
    g.add_connection(yard, far, 123.25, "north").unwrap();
    g
}

/// Structural fingerprint: per node (location, names, switcher) and per edge
/// (source, target, distance, junction), all keyed by location.
type Fingerprint = (
    Vec<(BlockLocation, Vec<String>, bool)>,
    Vec<(BlockLocation, BlockLocation, u64, String)>,
);

fn fingerprint(g: &PathGraph) -> Fingerprint {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    for (id, node) in g.nodes() {
        nodes.push((
            node.location().clone(),
            node.names().map(str::to_owned).collect(),
            node.contains_switcher(),
        ));
        for c in g.connections(id) {
            let to = g.node(c.destination).unwrap().location().clone();
            edges.push((node.location().clone(), to, c.distance.to_bits(), c.junction.clone()));
        }
    }
    nodes.sort();
    edges.sort();
    (nodes, edges)
}

fn encode(g: &mut PathGraph) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();
    write_snapshot(&mut buf, g).unwrap();
    buf
}

// ── Codec ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod codec {
    use super::*;
    use crate::SWITCHER_TOKEN;
    use crate::codec::{read_utf, write_utf};

    #[test]
    fn round_trip_preserves_structure() {
        let mut g = sample_graph();
        let bytes = encode(&mut g);
        let restored = read_snapshot(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(fingerprint(&restored), fingerprint(&g));
        assert_eq!(restored.node_count(), 4);
        assert_eq!(restored.connection_count(), 4);
    }

    #[test]
    fn empty_graph_is_four_zero_bytes() {
        let mut g = PathGraph::new();
        assert_eq!(encode(&mut g), vec![0, 0, 0, 0]);
        let restored = read_snapshot(&mut Cursor::new(vec![0, 0, 0, 0])).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn layout_is_big_endian_with_u16_strings() {
        let mut g = PathGraph::new();
        let (id, _) = g.get_or_create_node(&BlockLocation::new("w", 1, 2, 3));
        g.node_mut(id).unwrap().add_name("A");
        let bytes = encode(&mut g);
        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0, 1,          // node count
            0, 1, b'A',          // names
            0, 1, b'w',          // world
            0, 0, 0, 1,          // x
            0, 0, 0, 2,          // y
            0, 0, 0, 3,          // z
            0, 0, 0, 0,          // edge count
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn indices_follow_write_order() {
        let mut g = sample_graph();
        let summary = write_snapshot(&mut Vec::<u8>::new(), &mut g).unwrap();
        assert_eq!(summary.nodes, 4);
        assert_eq!(summary.connections, 4);
        // "nether" sorts before "w".
        let far = g.find_node(&at("nether", -3, 8)).unwrap();
        assert_eq!(g.node(far).unwrap().index, 0);
        let sw = g.find_node(&at("w", 0, 0)).unwrap();
        assert_eq!(g.node(sw).unwrap().index, 1);
    }

    #[test]
    fn named_switcher_uses_token_line() {
        let mut buf: Vec<u8> = Vec::new();
        let mut g = PathGraph::new();
        let (id, _) = g.get_or_create_node(&at("w", 0, 0));
        g.node_mut(id).unwrap().add_switcher();
        g.node_mut(id).unwrap().add_name("B");
        write_snapshot(&mut buf, &mut g).unwrap();
        let record = read_utf(&mut Cursor::new(&buf[4..])).unwrap();
        assert_eq!(record, format!("{SWITCHER_TOKEN}\nB"));
    }

    #[test]
    fn empty_name_record_reads_as_switcher() {
        let mut buf: Vec<u8> = Vec::new();
        buf.extend_from_slice(&1i32.to_be_bytes());
        write_utf(&mut buf, "").unwrap();
        write_utf(&mut buf, "w").unwrap();
        for v in [4i32, 5, 6, 0] {
            buf.extend_from_slice(&v.to_be_bytes());
        }
        let g = read_snapshot(&mut Cursor::new(buf)).unwrap();
        let (_, node) = g.nodes().next().unwrap();
        assert!(node.contains_switcher());
        assert_eq!(node.names().len(), 0);
    }

    #[test]
    fn forward_references_resolve() {
        let mut g = PathGraph::new();
        let (a, _) = g.get_or_create_node(&at("w", 0, 0));
        let (b, _) = g.get_or_create_node(&at("w", 1, 0));
        g.node_mut(a).unwrap().add_name("A");
        g.node_mut(b).unwrap().add_name("B");
        // a (index 0) points forward to b (index 1).
        g.add_connection(a, b, 1.5, "east").unwrap();
        let restored = read_snapshot(&mut Cursor::new(encode(&mut g))).unwrap();
        assert_eq!(fingerprint(&restored), fingerprint(&g));
    }

    #[test]
    fn negative_node_count_is_rejected() {
        let bytes = (-1i32).to_be_bytes().to_vec();
        let err = read_snapshot(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, PersistError::NegativeCount { what: "node", count: -1 }));
    }

    #[test]
    fn out_of_range_edge_target_is_rejected() {
        let mut g = PathGraph::new();
        let (only, _) = g.get_or_create_node(&at("w", 0, 0));
        g.node_mut(only).unwrap().add_name("Solo");
        g.add_connection(only, only, 1.0, "loop").unwrap();
        let mut bytes = encode(&mut g);
        // count(4) names(2+4) world(2+1) xyz(12) edge count(4), then the target.
        let target_at = 4 + 6 + 3 + 12 + 4;
        bytes[target_at..target_at + 4].copy_from_slice(&7i32.to_be_bytes());

        let err = read_snapshot(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, PersistError::IndexOutOfRange { index: 7, count: 1 }));
    }

    #[test]
    fn truncated_stream_is_io_error() {
        let mut g = sample_graph();
        let bytes = encode(&mut g);
        let cut = bytes[..bytes.len() - 3].to_vec();
        assert!(matches!(read_snapshot(&mut Cursor::new(cut)), Err(PersistError::Io(_))));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut buf: Vec<u8> = Vec::new();
        buf.extend_from_slice(&1i32.to_be_bytes());
        buf.extend_from_slice(&[0, 2, 0xff, 0xfe]);
        assert!(matches!(
            read_snapshot(&mut Cursor::new(buf)),
            Err(PersistError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn oversized_string_is_rejected() {
        let long = "x".repeat(70_000);
        let err = write_utf(&mut Vec::<u8>::new(), &long).unwrap_err();
        assert!(matches!(err, PersistError::StringTooLong { len: 70_000 }));
    }

    #[test]
    fn untagged_node_is_rejected_before_writing() {
        let mut g = sample_graph();
        let (bare, _) = g.get_or_create_node(&at("w", 2, 2));
        assert!(!g.node_mut(bare).unwrap().add_name(""));
        assert!(!g.node_mut(bare).unwrap().add_name("Up\nDown"));
        assert!(!g.node_mut(bare).unwrap().add_name(SWITCHER_TOKEN));

        let mut buf: Vec<u8> = Vec::new();
        let err = write_snapshot(&mut buf, &mut g).unwrap_err();
        assert!(matches!(err, PersistError::Malformed { .. }));
        assert!(buf.is_empty());
    }

    #[test]
    fn oversized_name_is_rejected_before_writing() {
        let mut g = sample_graph();
        let alpha = g.find_node(&at("w", 10, 0)).unwrap();
        g.node_mut(alpha).unwrap().add_name("x".repeat(70_000));

        let mut buf: Vec<u8> = Vec::new();
        let err = write_snapshot(&mut buf, &mut g).unwrap_err();
        assert!(matches!(err, PersistError::StringTooLong { .. }));
        assert!(buf.is_empty());
    }

    #[test]
    fn oversized_junction_is_rejected_before_writing() {
        let mut g = sample_graph();
        let sw = g.find_node(&at("w", 0, 0)).unwrap();
        let alpha = g.find_node(&at("w", 10, 0)).unwrap();
        g.add_connection(sw, alpha, 1.0, "j".repeat(65_536)).unwrap();

        let mut buf: Vec<u8> = Vec::new();
        let err = write_snapshot(&mut buf, &mut g).unwrap_err();
        assert!(matches!(err, PersistError::StringTooLong { len: 65_536 }));
        assert!(buf.is_empty());
    }

    #[test]
    fn tags_survive_exactly() {
        let mut g = PathGraph::new();
        let (plain, _) = g.get_or_create_node(&at("w", 0, 0));
        let (bare, _) = g.get_or_create_node(&at("w", 1, 0));
        let (both, _) = g.get_or_create_node(&at("w", 2, 0));
        g.node_mut(plain).unwrap().add_name("Line A");
        g.node_mut(plain).unwrap().add_name("Line B");
        g.node_mut(bare).unwrap().add_switcher();
        g.node_mut(both).unwrap().add_switcher();
        g.node_mut(both).unwrap().add_name("Junction 4");

        let restored = read_snapshot(&mut Cursor::new(encode(&mut g))).unwrap();
        assert_eq!(fingerprint(&restored), fingerprint(&g));
        let plain = restored.find_node(&at("w", 0, 0)).unwrap();
        assert!(!restored.node(plain).unwrap().contains_switcher());
        assert_eq!(restored.node(plain).unwrap().names().len(), 2);
    }

    #[test]
    fn duplicate_location_records_share_one_node() {
        let mut buf: Vec<u8> = Vec::new();
        buf.extend_from_slice(&2i32.to_be_bytes());
        for name in ["A", "B"] {
            write_utf(&mut buf, name).unwrap();
            write_utf(&mut buf, "w").unwrap();
            for v in [0i32, 0, 0] {
                buf.extend_from_slice(&v.to_be_bytes());
            }
        }
        buf.extend_from_slice(&0i32.to_be_bytes());
        buf.extend_from_slice(&0i32.to_be_bytes());
        let g = read_snapshot(&mut Cursor::new(buf)).unwrap();
        assert_eq!(g.node_count(), 1);
        let (_, node) = g.nodes().next().unwrap();
        assert_eq!(node.names().collect::<Vec<_>>(), ["A", "B"]);
    }
}

// ── Files ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod file {
    use super::*;
    use crate::{load_snapshot, save_snapshot};

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paths.dat");
        let mut g = sample_graph();
        let summary = save_snapshot(&path, &mut g).unwrap();
        assert_eq!(summary.nodes, 4);

        let restored = load_snapshot(&path).unwrap().unwrap();
        assert_eq!(fingerprint(&restored), fingerprint(&g));
    }

    #[test]
    fn failed_save_keeps_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paths.dat");
        let mut good = sample_graph();
        save_snapshot(&path, &mut good).unwrap();

        let mut bad = sample_graph();
        let alpha = bad.find_node(&at("w", 10, 0)).unwrap();
        bad.node_mut(alpha).unwrap().add_name("x".repeat(70_000));
        let err = save_snapshot(&path, &mut bad).unwrap_err();
        assert!(matches!(err, PersistError::StringTooLong { len: 70_000 }));

        let restored = load_snapshot(&path).unwrap().unwrap();
        assert_eq!(fingerprint(&restored), fingerprint(&good));
        // No temporary file is left behind.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn failed_save_with_untagged_node_keeps_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paths.dat");
        let mut good = sample_graph();
        save_snapshot(&path, &mut good).unwrap();

        let mut bad = sample_graph();
        bad.get_or_create_node(&at("w", 7, 7));
        assert!(matches!(save_snapshot(&path, &mut bad), Err(PersistError::Malformed { .. })));

        let restored = load_snapshot(&path).unwrap().unwrap();
        assert_eq!(fingerprint(&restored), fingerprint(&good));
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("paths.dat");
        assert!(matches!(save_snapshot(&path, &mut sample_graph()), Err(PersistError::Io(_))));
        assert!(!path.exists());
    }

    #[test]
    fn file_is_compressed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paths.dat");
        save_snapshot(&path, &mut sample_graph()).unwrap();
        let raw = std::fs::read(&path).unwrap();
        // zstd frame magic.
        assert_eq!(&raw[..4], &[0x28, 0xb5, 0x2f, 0xfd]);
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_snapshot(&dir.path().join("absent.dat")).unwrap().is_none());
    }

    #[test]
    fn garbage_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paths.dat");
        std::fs::write(&path, b"not a snapshot").unwrap();
        assert!(load_snapshot(&path).is_err());
    }
}

// ── CSV export ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod export {
    use super::*;
    use crate::CsvExporter;

    #[test]
    fn writes_both_tables() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = sample_graph();
        let summary = CsvExporter::export(dir.path(), &mut g).unwrap();
        assert_eq!(summary.nodes, 4);
        assert_eq!(summary.connections, 4);

        let nodes = std::fs::read_to_string(dir.path().join("nodes.csv")).unwrap();
        let mut lines = nodes.lines();
        assert_eq!(lines.next(), Some("index,world,x,y,z,switcher,names"));
        assert_eq!(lines.next(), Some("0,nether,-3,70,8,0,Far"));
        assert_eq!(nodes.lines().count(), 5);
        assert!(nodes.contains("w,0,70,5,1,Depot;Yard"));

        let conns = std::fs::read_to_string(dir.path().join("connections.csv")).unwrap();
        assert_eq!(conns.lines().next(), Some("from,to,distance,junction"));
        assert!(conns.contains("3,0,123.25,north"));
        assert_eq!(conns.lines().count(), 5);
    }
}
