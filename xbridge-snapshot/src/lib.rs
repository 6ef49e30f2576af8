//! xbridge-snapshot
//!
//! Offline transaction snapshots for the xbridge bridge scripts.
//!
//! # Overview
//!
//! A snapshot captures a transaction together with every cell it consumes or
//! depends on, so the bridge lock and settlement scripts can be re-run in a
//! debugger without access to a node.
//!
//! ```text
//!  Transaction ──► CellDepResolver ──► concrete cell deps ─┐
//!       │            (dep groups expanded in place)        │
//!       │                                                  ▼
//!       └──── inputs ──────────────────────────► LedgerReader lookups
//!                                                          │
//!                                                          ▼
//!                                              TransactionSnapshot (JSON)
//! ```
//!
//! Lookups fan out concurrently behind a bounded buffer and fan back in in
//! transaction order, so the same transaction over the same ledger state
//! always produces a byte-identical document.

pub mod builder;
pub mod document;
pub mod error;
pub mod ledger;
pub mod memory;
pub mod resolver;

pub use builder::{SnapshotBuilder, SnapshotOptions};
pub use document::{MockCellDep, MockInfo, MockInput, TransactionSnapshot};
pub use error::{LedgerError, SnapshotError};
pub use ledger::{CommittedTransaction, LedgerReader, LiveCell};
pub use memory::InMemoryLedger;
pub use resolver::{parse_dep_group, CellDepResolver, DEFAULT_MAX_CONCURRENT_LOOKUPS};
