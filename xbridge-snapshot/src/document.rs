//! Snapshot document.
//!
//! A snapshot pairs a transaction with every cell and header it touches, so
//! it can be replayed against a script debugger without a node. Field order
//! of every struct here is the serialized order.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use xbridge_types::{CellDep, CellInput, CellOutput, HexBytes, Transaction, H256};

use crate::error::SnapshotError;

/// A consumed input with the cell it spends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockInput {
    pub input: CellInput,
    pub output: CellOutput,
    pub data: HexBytes,
    /// Block hash committing the transaction that created the cell.
    pub header: H256,
}

/// A concrete (`code`) cell dep with the cell it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockCellDep {
    pub cell_dep: CellDep,
    pub output: CellOutput,
    pub data: HexBytes,
    pub header: H256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockInfo {
    pub inputs: Vec<MockInput>,
    pub cell_deps: Vec<MockCellDep>,
    pub header_deps: Vec<H256>,
}

/// Self-contained transaction fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSnapshot {
    pub mock_info: MockInfo,
    pub tx: Transaction,
}

impl TransactionSnapshot {
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the snapshot to `<dir>/<name>.json`, creating `dir` if needed.
    pub fn write_to_dir(
        &self,
        dir: impl AsRef<Path>,
        name: &str,
    ) -> Result<PathBuf, SnapshotError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let file_name = if name.ends_with(".json") {
            name.to_string()
        } else {
            format!("{}.json", name)
        };
        let path = dir.join(file_name);
        fs::write(&path, self.to_json_pretty()?)?;

        info!("Wrote transaction snapshot to {}", path.display());
        Ok(path)
    }
}
