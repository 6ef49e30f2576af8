//! Bridge lock argument encoding.
//!
//! Schema (molecule):
//!
//! ```text
//! table BridgeLockArgs {
//!     owner_cell_type_hash: Byte32,
//!     chain:                byte,
//!     asset:                Bytes,
//! }
//! ```
//!
//! The encoded bytes become a lock script argument checked on chain, so
//! encoding must stay a pure function of the three fields.

use serde::{Deserialize, Serialize};
use xbridge_types::molecule::{pack_bytes, pack_table, unpack_bytes, unpack_table};
use xbridge_types::primitives::encode_hex;
use xbridge_types::{ChainId, MoleculeError, H256};

use crate::error::AssetError;

const BUFFER: &str = "BridgeLockArgs";
const FIELD_COUNT: usize = 3;

/// Decoded bridge lock arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BridgeLockArgs {
    pub owner_cell_type_hash: H256,
    pub chain: ChainId,
    /// Foreign-chain identifier, carried as its UTF-8 bytes.
    pub asset: String,
}

impl BridgeLockArgs {
    pub fn new(owner_cell_type_hash: H256, chain: ChainId, asset: impl Into<String>) -> Self {
        Self {
            owner_cell_type_hash,
            chain,
            asset: asset.into(),
        }
    }

    /// Serialize to the molecule table layout.
    pub fn encode(&self) -> Vec<u8> {
        let chain = [self.chain.as_u8()];
        let asset = pack_bytes(self.asset.as_bytes());
        pack_table(&[self.owner_cell_type_hash.as_bytes(), &chain, &asset])
    }

    /// Encoded form as `0x`-prefixed hex.
    pub fn to_hex(&self) -> String {
        encode_hex(self.encode())
    }

    /// Parse the molecule table layout, rejecting anything that is not an
    /// exact encoding.
    pub fn decode(bytes: &[u8]) -> Result<Self, AssetError> {
        let fields = unpack_table(BUFFER, bytes, FIELD_COUNT)?;

        let owner_field = fields[0];
        if owner_field.len() != 32 {
            return Err(MoleculeError::FieldSizeMismatch {
                buffer: BUFFER,
                field: "owner_cell_type_hash",
                expected: 32,
                actual: owner_field.len(),
            }
            .into());
        }
        let mut owner_cell_type_hash = [0u8; 32];
        owner_cell_type_hash.copy_from_slice(owner_field);

        let chain_field = fields[1];
        if chain_field.len() != 1 {
            return Err(MoleculeError::FieldSizeMismatch {
                buffer: BUFFER,
                field: "chain",
                expected: 1,
                actual: chain_field.len(),
            }
            .into());
        }
        let chain = ChainId::try_from(chain_field[0])
            .map_err(|e| AssetError::MalformedArgs(format!("{}: {}", BUFFER, e)))?;

        let asset_bytes = unpack_bytes("BridgeLockArgs.asset", fields[2])?;
        let asset = String::from_utf8(asset_bytes.to_vec()).map_err(|e| {
            AssetError::MalformedArgs(format!("{}: asset is not valid UTF-8: {}", BUFFER, e))
        })?;

        Ok(Self {
            owner_cell_type_hash: H256(owner_cell_type_hash),
            chain,
            asset,
        })
    }

    /// Parse from a hex string with or without `0x`.
    pub fn from_hex(s: &str) -> Result<Self, AssetError> {
        let bytes = xbridge_types::primitives::decode_hex(s)
            .map_err(|e| AssetError::MalformedArgs(e.to_string()))?;
        Self::decode(&bytes)
    }
}
