//! Transaction snapshot builder.

use futures::stream::{self, StreamExt, TryStreamExt};
use futures::try_join;
use tracing::{debug, info};
use xbridge_types::{CellDep, CellInput, Transaction};

use crate::document::{MockCellDep, MockInfo, MockInput, TransactionSnapshot};
use crate::error::SnapshotError;
use crate::ledger::LedgerReader;
use crate::resolver::{CellDepResolver, DEFAULT_MAX_CONCURRENT_LOOKUPS};

/// Tuning for [`SnapshotBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotOptions {
    /// Bound on in-flight lookups per fan-out stage.
    pub max_concurrent_lookups: usize,
    /// Keep dep group cells in the snapshot next to their expansion.
    pub retain_group_cells: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: DEFAULT_MAX_CONCURRENT_LOOKUPS,
            retain_group_cells: false,
        }
    }
}

impl SnapshotOptions {
    pub fn with_max_concurrent_lookups(mut self, limit: usize) -> Self {
        self.max_concurrent_lookups = limit.max(1);
        self
    }

    pub fn with_retain_group_cells(mut self, retain: bool) -> Self {
        self.retain_group_cells = retain;
        self
    }
}

/// Builds [`TransactionSnapshot`]s from a ledger reader.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder<L> {
    reader: L,
    options: SnapshotOptions,
}

impl<L: LedgerReader> SnapshotBuilder<L> {
    pub fn new(reader: L) -> Self {
        Self::with_options(reader, SnapshotOptions::default())
    }

    pub fn with_options(reader: L, options: SnapshotOptions) -> Self {
        Self { reader, options }
    }

    pub fn options(&self) -> &SnapshotOptions {
        &self.options
    }

    pub fn reader(&self) -> &L {
        &self.reader
    }

    /// Snapshot `tx` against the current ledger state.
    ///
    /// Inputs and cell deps are looked up concurrently and reassembled in
    /// transaction order. The first failed lookup aborts the build.
    pub async fn build(&self, tx: &Transaction) -> Result<TransactionSnapshot, SnapshotError> {
        info!(
            "Building snapshot for transaction with {} inputs and {} cell deps",
            tx.inputs.len(),
            tx.cell_deps.len()
        );

        let (inputs, cell_deps) = try_join!(self.mock_inputs(tx), self.mock_cell_deps(tx))?;

        info!(
            "Snapshot complete: {} inputs, {} resolved cell deps",
            inputs.len(),
            cell_deps.len()
        );
        Ok(TransactionSnapshot {
            mock_info: MockInfo {
                inputs,
                cell_deps,
                header_deps: tx.header_deps.clone(),
            },
            tx: tx.clone(),
        })
    }

    fn limit(&self) -> usize {
        self.options.max_concurrent_lookups.max(1)
    }

    async fn mock_inputs(&self, tx: &Transaction) -> Result<Vec<MockInput>, SnapshotError> {
        stream::iter(tx.inputs.iter().map(|input| self.mock_input(input)))
            .buffered(self.limit())
            .try_collect()
            .await
    }

    async fn mock_input(&self, input: &CellInput) -> Result<MockInput, SnapshotError> {
        let out_point = &input.previous_output;
        let (cell, committed) = try_join!(
            self.reader.get_live_cell(out_point),
            self.reader.get_transaction(&out_point.tx_hash)
        )?;
        debug!("Fetched input cell {}", out_point);
        Ok(MockInput {
            input: input.clone(),
            output: cell.output,
            data: cell.data,
            header: committed.block_hash,
        })
    }

    async fn mock_cell_deps(&self, tx: &Transaction) -> Result<Vec<MockCellDep>, SnapshotError> {
        let resolved = CellDepResolver::new(&self.reader)
            .with_max_concurrent_lookups(self.limit())
            .with_retain_group_cells(self.options.retain_group_cells)
            .resolve(&tx.cell_deps)
            .await?;

        let lookups = resolved.into_iter().map(|dep| self.mock_cell_dep(dep));
        stream::iter(lookups)
            .buffered(self.limit())
            .try_collect()
            .await
    }

    async fn mock_cell_dep(&self, cell_dep: CellDep) -> Result<MockCellDep, SnapshotError> {
        let out_point = &cell_dep.out_point;
        let (cell, committed) = try_join!(
            self.reader.get_live_cell(out_point),
            self.reader.get_transaction(&out_point.tx_hash)
        )?;
        debug!("Fetched dep cell {}", out_point);
        Ok(MockCellDep {
            output: cell.output,
            data: cell.data,
            header: committed.block_hash,
            cell_dep,
        })
    }
}
