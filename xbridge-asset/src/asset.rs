//! Foreign asset identity.
//!
//! An [`Asset`] is an immutable value built from a chain, a foreign
//! identifier and the bridge configuration. It knows how to encode itself as
//! bridge lock arguments and how to derive the settlement (sUDT) type script
//! that represents it on the receiving ledger.

use tracing::debug;
use xbridge_types::{ChainId, Script, H256};

use crate::amount::{AmountPolicy, FeeDirection};
use crate::config::{BridgeConfig, WhitelistEntry};
use crate::error::AssetError;
use crate::lock_args::BridgeLockArgs;

/// Reserved ETH address standing for the chain's native coin.
pub const NATIVE_ETH_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

const ETH_ADDRESS_LEN: usize = 42;
const SUDT_ARGS_LEN: usize = 66;

/// Asset on a chain without a whitelist: identifier and owner anchor only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignAsset {
    address: String,
    owner_cell_type_hash: H256,
}

/// Asset on the EVM chain, carrying its whitelist configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthAsset {
    address: String,
    owner_cell_type_hash: H256,
    whitelist_entry: Option<WhitelistEntry>,
    sudt_args: Option<H256>,
    in_whitelist: bool,
}

impl EthAsset {
    fn new(
        config: &BridgeConfig,
        address: String,
        owner_cell_type_hash: H256,
    ) -> Result<Self, AssetError> {
        let whitelist = &config.eth_asset_whitelist;
        let whitelist_entry = whitelist.find(&address).cloned();
        let raw_sudt_args = whitelist_entry
            .as_ref()
            .and_then(|entry| entry.sudt_args.as_deref());

        if raw_sudt_args.is_none()
            && (address.len() != ETH_ADDRESS_LEN || !address.starts_with("0x"))
        {
            return Err(AssetError::Construction(format!(
                "invalid ETH asset address {}",
                address
            )));
        }

        let sudt_args = match raw_sudt_args {
            Some(raw) => {
                if raw.len() != SUDT_ARGS_LEN || !raw.starts_with("0x") {
                    return Err(AssetError::Construction(format!(
                        "invalid sUDT script args {}",
                        raw
                    )));
                }
                Some(H256::from_hex(raw)?)
            }
            None => None,
        };

        // An empty whitelist admits every asset, so only a populated list
        // demands a settlement identity for non-native tokens.
        if address != NATIVE_ETH_ADDRESS && sudt_args.is_none() && !whitelist.is_empty() {
            return Err(AssetError::Construction(format!(
                "missing sUDT script args for ETH asset {}",
                address
            )));
        }

        let in_whitelist = whitelist.permits(&address);
        Ok(Self {
            address,
            owner_cell_type_hash,
            whitelist_entry,
            sudt_args,
            in_whitelist,
        })
    }
}

/// A bridged asset, one variant per source chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    Btc(ForeignAsset),
    Eth(EthAsset),
    Eos(ForeignAsset),
    Tron(ForeignAsset),
    Polkadot(ForeignAsset),
}

impl Asset {
    /// Build and validate an asset.
    ///
    /// Without an explicit `owner_cell_type_hash` the hash of the configured
    /// owner cell type script is used, scoping the asset to this deployment.
    pub fn new(
        config: &BridgeConfig,
        chain: ChainId,
        address: impl Into<String>,
        owner_cell_type_hash: Option<H256>,
    ) -> Result<Self, AssetError> {
        let address = address.into();
        if address.is_empty() {
            return Err(AssetError::Construction(format!(
                "empty {} asset address",
                chain
            )));
        }
        let owner_cell_type_hash =
            owner_cell_type_hash.unwrap_or_else(|| config.owner_cell_type_hash());

        debug!("Constructing {} asset {}", chain, address);

        let foreign = |address: String| ForeignAsset {
            address,
            owner_cell_type_hash,
        };
        Ok(match chain {
            ChainId::Btc => Asset::Btc(foreign(address)),
            ChainId::Eth => Asset::Eth(EthAsset::new(config, address, owner_cell_type_hash)?),
            ChainId::Eos => Asset::Eos(foreign(address)),
            ChainId::Tron => Asset::Tron(foreign(address)),
            ChainId::Polkadot => Asset::Polkadot(foreign(address)),
        })
    }

    /// Build from a raw chain discriminant.
    pub fn from_discriminant(
        config: &BridgeConfig,
        chain: u8,
        address: impl Into<String>,
        owner_cell_type_hash: Option<H256>,
    ) -> Result<Self, AssetError> {
        let chain = ChainId::try_from(chain)?;
        Self::new(config, chain, address, owner_cell_type_hash)
    }

    /// Rebuild the asset named by encoded bridge lock arguments.
    pub fn from_bridge_lock_args(config: &BridgeConfig, bytes: &[u8]) -> Result<Self, AssetError> {
        let args = BridgeLockArgs::decode(bytes)?;
        Self::new(
            config,
            args.chain,
            args.asset,
            Some(args.owner_cell_type_hash),
        )
    }

    pub fn chain(&self) -> ChainId {
        match self {
            Asset::Btc(_) => ChainId::Btc,
            Asset::Eth(_) => ChainId::Eth,
            Asset::Eos(_) => ChainId::Eos,
            Asset::Tron(_) => ChainId::Tron,
            Asset::Polkadot(_) => ChainId::Polkadot,
        }
    }

    /// Foreign-chain identifier.
    pub fn address(&self) -> &str {
        match self {
            Asset::Eth(eth) => &eth.address,
            Asset::Btc(a) | Asset::Eos(a) | Asset::Tron(a) | Asset::Polkadot(a) => &a.address,
        }
    }

    pub fn owner_cell_type_hash(&self) -> H256 {
        match self {
            Asset::Eth(eth) => eth.owner_cell_type_hash,
            Asset::Btc(a) | Asset::Eos(a) | Asset::Tron(a) | Asset::Polkadot(a) => {
                a.owner_cell_type_hash
            }
        }
    }

    /// Whether the asset may be bridged. Always true off the EVM chain.
    pub fn in_whitelist(&self) -> bool {
        match self {
            Asset::Eth(eth) => eth.in_whitelist,
            _ => true,
        }
    }

    pub fn whitelist_entry(&self) -> Option<&WhitelistEntry> {
        match self {
            Asset::Eth(eth) => eth.whitelist_entry.as_ref(),
            _ => None,
        }
    }

    pub fn amount_policy(&self) -> AmountPolicy<'_> {
        AmountPolicy::new(self.chain(), self.whitelist_entry())
    }

    pub fn bridge_lock_args(&self) -> BridgeLockArgs {
        BridgeLockArgs::new(self.owner_cell_type_hash(), self.chain(), self.address())
    }

    /// Encoded bridge lock arguments.
    pub fn to_bridge_lock_args(&self) -> Vec<u8> {
        self.bridge_lock_args().encode()
    }

    /// Bridge lock script guarding this asset's custody cells.
    pub fn bridge_lockscript(&self, config: &BridgeConfig) -> Script {
        config.bridge_lock.script(self.to_bridge_lock_args())
    }

    /// Settlement token type script: the sUDT deployment with the bridge
    /// lock script's hash as args.
    pub fn settlement_locator(&self, config: &BridgeConfig) -> Script {
        let lock_hash = self.bridge_lockscript(config).hash();
        config.sudt_type.script(lock_hash.as_bytes().to_vec())
    }

    /// Whitelisted settlement identity, empty when none is configured.
    pub fn settlement_args(&self) -> Vec<u8> {
        match self {
            Asset::Eth(EthAsset {
                sudt_args: Some(args),
                ..
            }) => args.as_bytes().to_vec(),
            _ => Vec::new(),
        }
    }

    pub fn minimal_amount(&self) -> Result<String, AssetError> {
        self.amount_policy().minimal_amount()
    }

    pub fn bridge_fee(&self, direction: FeeDirection) -> Result<String, AssetError> {
        self.amount_policy().bridge_fee(direction)
    }

    pub fn humanize(&self, raw: &str) -> Result<String, AssetError> {
        self.amount_policy().humanize(raw)
    }

    pub fn parse_amount(&self, human: &str) -> Result<String, AssetError> {
        self.amount_policy().parse(human)
    }

    pub fn describe_amount(&self, raw: &str) -> Result<String, AssetError> {
        self.amount_policy().describe(raw)
    }
}
