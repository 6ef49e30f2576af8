//! Bridge configuration consumed by the asset layer.
//!
//! The configuration is a plain value handed to constructors; nothing in this
//! crate reads it from a global. The JSON shape follows the bridge's
//! deployment config file (camelCase keys).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::debug;
use xbridge_types::{Script, ScriptHashType, H256};

/// Environment variable naming the config file for [`BridgeConfig::from_env`].
pub const CONFIG_PATH_ENV: &str = "XBRIDGE_CONFIG";

/// Deployed script location (code hash + hash type), args supplied per use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptDeployment {
    pub code_hash: H256,
    pub hash_type: ScriptHashType,
}

impl ScriptDeployment {
    /// Instantiate the deployed script with the given args.
    pub fn script(&self, args: impl Into<Vec<u8>>) -> Script {
        Script::new(self.code_hash, self.hash_type, args)
    }
}

/// Inbound/outbound bridge fee as decimal strings of raw units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeFee {
    #[serde(rename = "in")]
    pub inbound: String,
    #[serde(rename = "out")]
    pub outbound: String,
}

/// One whitelisted EVM asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistEntry {
    /// Contract address on the foreign chain (matched case-insensitively).
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    pub symbol: String,
    #[serde(rename = "logoURI", default)]
    pub logo_uri: Option<String>,
    pub decimal: u8,
    pub minimal_bridge_amount: String,
    pub bridge_fee: BridgeFee,
    /// Settlement token identity on the receiving ledger, `0x` + 64 hex.
    #[serde(default)]
    pub sudt_args: Option<String>,
}

/// The EVM asset whitelist. Empty means every asset is allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetWhitelist(Vec<WhitelistEntry>);

impl AssetWhitelist {
    pub fn new(entries: Vec<WhitelistEntry>) -> Self {
        Self(entries)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WhitelistEntry> {
        self.0.iter()
    }

    /// Entry whose address matches case-insensitively.
    pub fn find(&self, address: &str) -> Option<&WhitelistEntry> {
        self.0
            .iter()
            .find(|entry| entry.address.eq_ignore_ascii_case(address))
    }

    /// Whether an address may be bridged under this list.
    pub fn permits(&self, address: &str) -> bool {
        self.is_empty() || self.find(address).is_some()
    }
}

/// Deployment-wide bridge configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Type script of the owner cell that gates minting.
    pub owner_cell_typescript: Script,
    /// Bridge lock script deployment.
    pub bridge_lock: ScriptDeployment,
    /// Settlement token (sUDT) type script deployment.
    pub sudt_type: ScriptDeployment,
    /// EVM asset whitelist.
    #[serde(default)]
    pub eth_asset_whitelist: AssetWhitelist,
}

impl BridgeConfig {
    /// Hash anchoring lock args to this deployment's owner cell.
    pub fn owner_cell_type_hash(&self) -> H256 {
        self.owner_cell_typescript.hash()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse bridge config")
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read bridge config {}", path.display()))?;
        let config = Self::from_json_str(&raw)
            .with_context(|| format!("invalid bridge config {}", path.display()))?;
        debug!(
            "Loaded bridge config from {} ({} whitelisted assets)",
            path.display(),
            config.eth_asset_whitelist.len()
        );
        Ok(config)
    }

    /// Load configuration from the file named by `XBRIDGE_CONFIG`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let path = env::var(CONFIG_PATH_ENV)
            .with_context(|| format!("{} must be set", CONFIG_PATH_ENV))?;
        Self::from_file(path)
    }
}
