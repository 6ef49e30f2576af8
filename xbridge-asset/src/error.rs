//! Error types for asset identity and amount handling.

use thiserror::Error;
use xbridge_types::{ChainId, MoleculeError, TypesError};

/// Aggregated error type for the asset layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Asset could not be constructed from the given inputs.
    #[error("invalid asset: {0}")]
    Construction(String),

    /// A whitelist value was required but the asset has no entry.
    #[error("asset not configured: {0}")]
    NotConfigured(String),

    /// Operation is not defined for this chain variant.
    #[error("{operation} is not implemented for {chain} assets")]
    Unimplemented {
        operation: &'static str,
        chain: ChainId,
    },

    /// Bridge lock arguments could not be decoded.
    #[error("malformed bridge lock args: {0}")]
    MalformedArgs(String),

    /// Amount string is not a valid number for the asset.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

impl From<MoleculeError> for AssetError {
    fn from(err: MoleculeError) -> Self {
        AssetError::MalformedArgs(err.to_string())
    }
}

impl From<TypesError> for AssetError {
    fn from(err: TypesError) -> Self {
        AssetError::Construction(err.to_string())
    }
}
