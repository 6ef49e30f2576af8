//! Foreign chain identifiers.
//!
//! The numeric discriminant is part of the bridge lock arguments and is read
//! by on-chain scripts, so the values below must never be renumbered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// Source chain of a bridged asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum ChainId {
    /// Bitcoin
    Btc = 0,
    /// Ethereum (the only EVM-style chain with a whitelist)
    Eth = 1,
    /// EOS
    Eos = 2,
    /// Tron
    Tron = 3,
    /// Polkadot
    Polkadot = 4,
}

impl ChainId {
    /// Every supported chain, in discriminant order.
    pub const ALL: [ChainId; 5] = [
        ChainId::Btc,
        ChainId::Eth,
        ChainId::Eos,
        ChainId::Tron,
        ChainId::Polkadot,
    ];

    /// Serialized discriminant byte.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Upper-case ticker-style name.
    pub fn name(self) -> &'static str {
        match self {
            ChainId::Btc => "BTC",
            ChainId::Eth => "ETH",
            ChainId::Eos => "EOS",
            ChainId::Tron => "TRON",
            ChainId::Polkadot => "POLKADOT",
        }
    }

    /// Whether the chain has an asset whitelist with decimals and fees.
    pub fn has_whitelist(self) -> bool {
        matches!(self, ChainId::Eth)
    }
}

impl TryFrom<u8> for ChainId {
    type Error = TypesError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Btc),
            1 => Ok(Self::Eth),
            2 => Ok(Self::Eos),
            3 => Ok(Self::Tron),
            4 => Ok(Self::Polkadot),
            _ => Err(TypesError::UnknownChain(value)),
        }
    }
}

impl From<ChainId> for u8 {
    fn from(chain: ChainId) -> Self {
        chain.as_u8()
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChainId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChainId::ALL
            .into_iter()
            .find(|chain| chain.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TypesError::UnknownChainName(s.to_string()))
    }
}
