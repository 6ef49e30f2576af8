//! Lock/type scripts and their hashes.

use serde::{Deserialize, Serialize};

use crate::error::TypesError;
use crate::hash::blake2b_256;
use crate::molecule::{pack_bytes, pack_table};
use crate::primitives::{HexBytes, H256};

/// How a script's `code_hash` is matched against cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ScriptHashType {
    Data = 0,
    Type = 1,
    Data1 = 2,
    Data2 = 4,
}

impl ScriptHashType {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ScriptHashType {
    type Error = TypesError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Data),
            1 => Ok(Self::Type),
            2 => Ok(Self::Data1),
            4 => Ok(Self::Data2),
            _ => Err(TypesError::UnknownHashType(value)),
        }
    }
}

/// A script as referenced from a cell output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Script {
    #[serde(alias = "codeHash")]
    pub code_hash: H256,
    #[serde(alias = "hashType")]
    pub hash_type: ScriptHashType,
    pub args: HexBytes,
}

impl Script {
    pub fn new(code_hash: H256, hash_type: ScriptHashType, args: impl Into<Vec<u8>>) -> Self {
        Self {
            code_hash,
            hash_type,
            args: HexBytes::new(args),
        }
    }

    /// Canonical molecule serialization (`table Script { code_hash, hash_type, args }`).
    pub fn to_molecule(&self) -> Vec<u8> {
        let hash_type = [self.hash_type.as_u8()];
        let args = pack_bytes(self.args.as_bytes());
        pack_table(&[self.code_hash.as_bytes(), &hash_type, &args])
    }

    /// Script hash: blake2b-256 over the canonical serialization.
    pub fn hash(&self) -> H256 {
        H256(blake2b_256(self.to_molecule()))
    }
}
