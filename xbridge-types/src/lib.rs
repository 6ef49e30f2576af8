//! xbridge-types
//!
//! Shared primitives for the xbridge asset layer: the cell-model ledger types
//! (scripts, out-points, cell deps, transactions), the foreign chain
//! identifiers, CKB-flavoured blake2b hashing and the molecule table packing
//! used for consensus-critical script arguments.
//!
//! All byte-carrying types serialize as `0x`-prefixed hex strings and all
//! integers as `0x<hex>` quantities, matching the ledger's JSON conventions.

pub mod chain;
pub mod error;
pub mod hash;
pub mod molecule;
pub mod primitives;
pub mod script;
pub mod transaction;

pub use chain::ChainId;
pub use error::{MoleculeError, TypesError};
pub use hash::{blake2b_256, CKB_HASH_PERSONALIZATION};
pub use primitives::{HexBytes, H256};
pub use script::{Script, ScriptHashType};
pub use transaction::{
    CellDep, CellInput, CellOutput, DepType, OutPoint, Transaction, OUT_POINT_SIZE,
};
