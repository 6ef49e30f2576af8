//! In-memory ledger, used for replaying snapshots and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use xbridge_types::{OutPoint, H256};

use crate::document::TransactionSnapshot;
use crate::error::LedgerError;
use crate::ledger::{CommittedTransaction, LedgerReader, LiveCell};

/// Ledger state held in hash maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    cells: HashMap<OutPoint, LiveCell>,
    transactions: HashMap<H256, CommittedTransaction>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_cell(&mut self, out_point: OutPoint, cell: LiveCell) {
        self.cells.insert(out_point, cell);
    }

    pub fn insert_transaction(&mut self, tx_hash: H256, block_hash: H256) {
        self.transactions
            .insert(tx_hash, CommittedTransaction { block_hash });
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Rebuild the ledger state a snapshot was taken against.
    ///
    /// Dep group cells are only present if the snapshot retained them.
    pub fn from_snapshot(snapshot: &TransactionSnapshot) -> Self {
        let mut ledger = Self::new();
        for mock in &snapshot.mock_info.inputs {
            let out_point = mock.input.previous_output.clone();
            ledger.insert_transaction(out_point.tx_hash, mock.header);
            ledger.insert_cell(
                out_point,
                LiveCell {
                    output: mock.output.clone(),
                    data: mock.data.clone(),
                },
            );
        }
        for mock in &snapshot.mock_info.cell_deps {
            let out_point = mock.cell_dep.out_point.clone();
            ledger.insert_transaction(out_point.tx_hash, mock.header);
            ledger.insert_cell(
                out_point,
                LiveCell {
                    output: mock.output.clone(),
                    data: mock.data.clone(),
                },
            );
        }
        ledger
    }
}

#[async_trait]
impl LedgerReader for InMemoryLedger {
    async fn get_live_cell(&self, out_point: &OutPoint) -> Result<LiveCell, LedgerError> {
        self.cells
            .get(out_point)
            .cloned()
            .ok_or_else(|| LedgerError::CellNotFound(out_point.clone()))
    }

    async fn get_transaction(&self, tx_hash: &H256) -> Result<CommittedTransaction, LedgerError> {
        self.transactions
            .get(tx_hash)
            .copied()
            .ok_or(LedgerError::TransactionNotFound(*tx_hash))
    }
}
