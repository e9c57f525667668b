//! Compressed snapshot files.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use rp_graph::PathGraph;

use crate::codec::{SnapshotSummary, read_snapshot, write_snapshot};
use crate::PersistResult;

/// Write `graph` to `path` as a zstd-compressed snapshot, replacing any
/// existing file.
///
/// The snapshot is written to a temporary file next to `path` and renamed
/// over it only once complete.  On any error the previous file is left as it
/// was.
pub fn save_snapshot(path: &Path, graph: &mut PathGraph) -> PersistResult<SnapshotSummary> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;

    let mut encoder = zstd::stream::write::Encoder::new(
        BufWriter::new(tmp.as_file()),
        zstd::DEFAULT_COMPRESSION_LEVEL,
    )?;
    let summary = write_snapshot(&mut encoder, graph)?;
    encoder.finish()?.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    info!(
        path = %path.display(),
        nodes = summary.nodes,
        connections = summary.connections,
        "saved path finding graph"
    );
    Ok(summary)
}

/// Read the snapshot at `path`.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_snapshot(path: &Path) -> PersistResult<Option<PathGraph>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut decoder = zstd::stream::read::Decoder::new(BufReader::new(file))?;
    let graph = read_snapshot(&mut decoder)?;

    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        connections = graph.connection_count(),
        "loaded path finding graph"
    );
    Ok(Some(graph))
}
