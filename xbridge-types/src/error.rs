//! Error types for the shared primitives.

use thiserror::Error;

/// Errors raised while parsing primitive values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// Hex string could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded value has the wrong byte length.
    #[error("invalid length for {what}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Chain discriminant outside the known set.
    #[error("unknown chain discriminant: {0}")]
    UnknownChain(u8),

    /// Chain name outside the known set.
    #[error("unknown chain name: {0}")]
    UnknownChainName(String),

    /// Script hash type byte outside the known set.
    #[error("unknown script hash type: {0}")]
    UnknownHashType(u8),
}

/// Structural errors when unpacking molecule buffers.
///
/// Every variant names the buffer being read so that a failure deep inside a
/// nested structure can still be traced back to its source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoleculeError {
    /// Buffer is shorter than the fixed part of its header.
    #[error("{buffer}: header too short, expected at least {expected} bytes, got {actual}")]
    HeaderTooShort {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Declared total size disagrees with the buffer length.
    #[error("{buffer}: total size mismatch, header declares {expected} bytes, buffer has {actual}")]
    TotalSizeMismatch {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Table carries a different number of fields than the schema.
    #[error("{buffer}: field count mismatch, expected {expected}, got {actual}")]
    FieldCountMismatch {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A field offset is misaligned, decreasing or past the end of the buffer.
    #[error("{buffer}: invalid offset {offset} for field {field} (buffer length {len})")]
    InvalidOffset {
        buffer: &'static str,
        field: usize,
        offset: usize,
        len: usize,
    },

    /// A fixed-size field has the wrong length.
    #[error("{buffer}: field {field} expected {expected} bytes, got {actual}")]
    FieldSizeMismatch {
        buffer: &'static str,
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}
