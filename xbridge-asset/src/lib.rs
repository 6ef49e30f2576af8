//! xbridge-asset
//!
//! Foreign asset identity for the xbridge cross-chain bridge.
//!
//! # Overview
//!
//! An asset locked on a foreign chain is represented on the receiving ledger
//! by a settlement token whose type script is derived from the asset's
//! identity. This crate provides:
//!
//! 1. **Asset identity**: [`Asset`], one variant per supported source chain
//! 2. **Lock arguments**: the molecule encoding [`BridgeLockArgs`] that binds
//!    chain, foreign identifier and owner cell together
//! 3. **Amount policy**: decimal-aware conversion between raw and human
//!    amounts, minimal bridge amounts and fees
//!
//! # Derivation
//!
//! ```text
//! (owner_cell_type_hash, chain, address)
//!          │
//!          ▼  BridgeLockArgs::encode
//!   bridge lock args ──► bridge lock script ──► blake2b hash
//!                                                   │
//!                                                   ▼
//!                               sUDT type script (settlement locator)
//! ```

pub mod amount;
pub mod asset;
pub mod config;
pub mod error;
pub mod lock_args;

pub use amount::{humanize_amount, parse_amount, AmountPolicy, FeeDirection};
pub use asset::{Asset, EthAsset, ForeignAsset, NATIVE_ETH_ADDRESS};
pub use config::{AssetWhitelist, BridgeConfig, BridgeFee, ScriptDeployment, WhitelistEntry};
pub use error::AssetError;
pub use lock_args::BridgeLockArgs;

pub use xbridge_types::ChainId;
