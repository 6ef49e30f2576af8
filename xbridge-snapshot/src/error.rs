//! Error types for ledger lookups and snapshot building.

use thiserror::Error;
use xbridge_types::{OutPoint, H256};

/// Errors reported by a [`LedgerReader`](crate::LedgerReader).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("live cell not found: {0}")]
    CellNotFound(OutPoint),

    #[error("transaction not found: {0}")]
    TransactionNotFound(H256),

    /// Transport or node failure.
    #[error("ledger RPC error: {0}")]
    Rpc(String),
}

/// Aggregated error type for dependency resolution and snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Dep group cell data is shorter than its declared record count.
    #[error("malformed dep group {out_point}: expected at least {expected} bytes, got {actual}")]
    MalformedDepGroup {
        out_point: OutPoint,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Lookup(#[from] LedgerError),

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
