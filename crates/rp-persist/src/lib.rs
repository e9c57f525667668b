//! `rp-persist` — graph snapshots and graph export.
//!
//! | Module    | Contents                                                           |
//! |-----------|--------------------------------------------------------------------|
//! | [`codec`] | Big-endian primitives, `write_snapshot`, `read_snapshot`           |
//! | [`file`]  | zstd-compressed snapshot files: `save_snapshot`, `load_snapshot`   |
//! | [`export`]| `CsvExporter` — `nodes.csv` and `connections.csv` for inspection   |
//! | [`error`] | `PersistError`, `PersistResult<T>`                                 |
//!
//! # Snapshot layout
//!
//! ```text
//! i32                 node count N
//! N × node record     names:utf  world:utf  x:i32  y:i32  z:i32
//! N × edge list       count:i32  count × (target:i32  distance:f64  junction:utf)
//! ```
//!
//! `utf` is a `u16` big-endian byte length followed by UTF-8 bytes.  The
//! names field is empty for a switcher with no names; a switcher that also
//! carries names writes [`SWITCHER_TOKEN`] as its first line.  Edge targets
//! are positions in the node record list.
//!
//! The writer refuses a graph it could not read back unchanged (a node with
//! no tag, an over-long string) before emitting anything, and
//! [`save_snapshot`] only replaces the target file once the new snapshot is
//! complete.
//!
//! There is no version field.  A format change requires rediscovering the
//! graph from scratch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rp_persist::{load_snapshot, save_snapshot};
//!
//! let summary = save_snapshot(Path::new("paths.dat"), &mut graph)?;
//! let restored = load_snapshot(Path::new("paths.dat"))?.unwrap_or_default();
//! ```

pub mod codec;
pub mod export;
pub mod error;
pub mod file;

#[cfg(test)]
mod tests;

pub use codec::{SWITCHER_TOKEN, SnapshotSummary, read_snapshot, write_snapshot};
pub use export::CsvExporter;
pub use error::{PersistError, PersistResult};
pub use file::{load_snapshot, save_snapshot};
