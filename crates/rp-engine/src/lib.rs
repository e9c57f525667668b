//! `rp-engine` — the path-finding graph engine.
//!
//! # Scheduler invocation
//!
//! ```text
//! run():
//!   ① Discovery  — no operation pending: scan one candidate block; handlers
//!                  may create nodes, which join the refresh set.
//!   ② Refresh    — no operation pending: every refresh-set node becomes
//!                  one operation per explorable junction.
//!   ③ Operations — advance the head operation step_count steps at a time;
//!                  between batches, yield if the time budget is spent.
//!                  A finished operation is popped and the next one starts.
//!   ④ Reset      — if any operation ran, clear the scan cache.
//! ```
//!
//! `stop()` repeats ①–③ with no budget until every queue is empty.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`provider`]  | `PathProvider` — queues, scheduler, control & query surface|
//! | [`builder`]   | `ProviderBuilder`                                          |
//! | [`discovery`] | marker scan, branch enumeration, nearest junction          |
//! | [`operation`] | `PathFindOperation`, `OperationOutcome`                    |
//! | [`queues`]    | `DiscoveryQueue`, `RefreshSet`, `OperationQueue`           |
//! | [`observer`]  | `ProviderObserver`, `NoopObserver`, `BurstReport`          |
//! | [`info`]      | `PathRailInfo`                                             |
//! | [`error`]     | `EngineError`, `EngineResult<T>`                           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut provider = ProviderBuilder::new(track)
//!     .config(config)
//!     .build()?;
//! provider.enable(Path::new("paths.dat"))?;
//! while host.is_running() {
//!     provider.run(&mut NoopObserver);   // once per host tick
//! }
//! provider.stop(&mut NoopObserver);
//! provider.save(Path::new("paths.dat"), false)?;
//! ```

pub mod builder;
pub mod discovery;
pub mod error;
pub mod info;
pub mod observer;
pub mod operation;
pub mod provider;
pub mod queues;


pub use builder::ProviderBuilder;
pub use error::{EngineError, EngineResult};
pub use info::PathRailInfo;
pub use observer::{BurstReport, NoopObserver, ProviderObserver};
pub use operation::{OperationOutcome, PathFindOperation, Step};
pub use provider::PathProvider;
