//! Read-only access to ledger state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use xbridge_types::{CellOutput, HexBytes, OutPoint, H256};

use crate::error::LedgerError;

/// A live cell: its output and data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveCell {
    pub output: CellOutput,
    pub data: HexBytes,
}

/// Commitment of a transaction on chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedTransaction {
    /// Hash of the block header that includes the transaction.
    pub block_hash: H256,
}

/// Ledger lookups needed to snapshot a transaction.
///
/// Implementations are shared across concurrent lookups and own their retry
/// policy; an error returned here aborts the snapshot being built.
#[async_trait]
pub trait LedgerReader: Send + Sync {
    /// Fetch the live cell at `out_point`, including its data.
    async fn get_live_cell(&self, out_point: &OutPoint) -> Result<LiveCell, LedgerError>;

    /// Fetch the commitment of transaction `tx_hash`.
    async fn get_transaction(&self, tx_hash: &H256) -> Result<CommittedTransaction, LedgerError>;
}

#[async_trait]
impl<T: LedgerReader + ?Sized> LedgerReader for Arc<T> {
    async fn get_live_cell(&self, out_point: &OutPoint) -> Result<LiveCell, LedgerError> {
        (**self).get_live_cell(out_point).await
    }

    async fn get_transaction(&self, tx_hash: &H256) -> Result<CommittedTransaction, LedgerError> {
        (**self).get_transaction(tx_hash).await
    }
}

#[async_trait]
impl<T: LedgerReader + ?Sized> LedgerReader for &T {
    async fn get_live_cell(&self, out_point: &OutPoint) -> Result<LiveCell, LedgerError> {
        (**self).get_live_cell(out_point).await
    }

    async fn get_transaction(&self, tx_hash: &H256) -> Result<CommittedTransaction, LedgerError> {
        (**self).get_transaction(tx_hash).await
    }
}
