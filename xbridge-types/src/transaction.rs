//! Transaction structure of the receiving ledger.
//!
//! Field declaration order is the canonical order used when a transaction is
//! re-emitted as JSON; do not reorder fields. Deserialization additionally
//! accepts the camelCase spelling produced by the JavaScript SDK.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::primitives::{quantity_u32, quantity_u64, HexBytes, H256};
use crate::script::Script;

/// Size of a packed out-point: 32-byte hash followed by a u32 LE index.
pub const OUT_POINT_SIZE: usize = 36;

/// Reference to an output of a previous transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OutPoint {
    #[serde(alias = "txHash")]
    pub tx_hash: H256,
    #[serde(with = "quantity_u32")]
    pub index: u32,
}

impl OutPoint {
    pub fn new(tx_hash: H256, index: u32) -> Self {
        Self { tx_hash, index }
    }

    /// Molecule struct serialization (`tx_hash ‖ index LE`).
    pub fn to_packed(&self) -> [u8; OUT_POINT_SIZE] {
        let mut out = [0u8; OUT_POINT_SIZE];
        out[..32].copy_from_slice(self.tx_hash.as_bytes());
        out[32..].copy_from_slice(&self.index.to_le_bytes());
        out
    }

    /// Inverse of [`OutPoint::to_packed`].
    pub fn from_packed(record: &[u8; OUT_POINT_SIZE]) -> Self {
        let mut tx_hash = [0u8; 32];
        tx_hash.copy_from_slice(&record[..32]);
        let mut index = [0u8; 4];
        index.copy_from_slice(&record[32..]);
        Self {
            tx_hash: H256(tx_hash),
            index: u32::from_le_bytes(index),
        }
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tx_hash, self.index)
    }
}

/// Whether a cell dep points at code or at a group of other deps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepType {
    Code,
    #[serde(alias = "depGroup")]
    DepGroup,
}

/// A cell dependency of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellDep {
    #[serde(alias = "outPoint")]
    pub out_point: OutPoint,
    #[serde(alias = "depType")]
    pub dep_type: DepType,
}

impl CellDep {
    pub fn code(out_point: OutPoint) -> Self {
        Self {
            out_point,
            dep_type: DepType::Code,
        }
    }

    pub fn dep_group(out_point: OutPoint) -> Self {
        Self {
            out_point,
            dep_type: DepType::DepGroup,
        }
    }
}

/// A transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellInput {
    #[serde(alias = "previousOutput")]
    pub previous_output: OutPoint,
    #[serde(with = "quantity_u64", default)]
    pub since: u64,
}

impl CellInput {
    pub fn new(previous_output: OutPoint, since: u64) -> Self {
        Self {
            previous_output,
            since,
        }
    }
}

/// A cell output: capacity plus lock and optional type script.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellOutput {
    #[serde(with = "quantity_u64")]
    pub capacity: u64,
    pub lock: Script,
    #[serde(rename = "type", default)]
    pub type_: Option<Script>,
}

/// A full transaction in canonical field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(with = "quantity_u32")]
    pub version: u32,
    #[serde(alias = "cellDeps")]
    pub cell_deps: Vec<CellDep>,
    #[serde(alias = "headerDeps", default)]
    pub header_deps: Vec<H256>,
    pub inputs: Vec<CellInput>,
    pub outputs: Vec<CellOutput>,
    #[serde(alias = "outputsData")]
    pub outputs_data: Vec<HexBytes>,
    #[serde(default)]
    pub witnesses: Vec<HexBytes>,
}
