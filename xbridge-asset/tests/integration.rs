//! Integration tests for asset identity, lock args and amount handling.

use proptest::prelude::*;
use xbridge_asset::{
    humanize_amount, parse_amount, Asset, AssetError, AssetWhitelist, BridgeConfig, BridgeLockArgs,
    ChainId, FeeDirection,
};
use xbridge_types::{Script, ScriptHashType, H256};

const CONFIG_JSON: &str = r#"{
    "ownerCellTypescript": {
        "codeHash": "0x1111111111111111111111111111111111111111111111111111111111111111",
        "hashType": "type",
        "args": "0x01"
    },
    "bridgeLock": {
        "codeHash": "0x2222222222222222222222222222222222222222222222222222222222222222",
        "hashType": "data"
    },
    "sudtType": {
        "codeHash": "0x3333333333333333333333333333333333333333333333333333333333333333",
        "hashType": "type"
    },
    "ethAssetWhitelist": [
        {
            "address": "0x7Af456bf0065aADAB2E6BEc6DaD3731899550b84",
            "symbol": "DAI",
            "decimal": 18,
            "minimalBridgeAmount": "1000000000000000",
            "bridgeFee": { "in": "1000000000000", "out": "2000000000000" },
            "sudtArgs": "0x4444444444444444444444444444444444444444444444444444444444444444"
        },
        {
            "address": "0xdAC17F958D2ee523a2206206994597C13D831ec7",
            "symbol": "USDT",
            "decimal": 6,
            "minimalBridgeAmount": "1000000",
            "bridgeFee": { "in": "0", "out": "500000" },
            "sudtArgs": "0x5555555555555555555555555555555555555555555555555555555555555555"
        }
    ]
}"#;

const DAI: &str = "0x7Af456bf0065aADAB2E6BEc6DaD3731899550b84";
const USDT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

fn whitelisted_config() -> BridgeConfig {
    BridgeConfig::from_json_str(CONFIG_JSON).expect("config should parse")
}

fn open_config() -> BridgeConfig {
    let mut config = whitelisted_config();
    config.eth_asset_whitelist = AssetWhitelist::default();
    config
}

fn arb_chain() -> impl Strategy<Value = ChainId> {
    (0u8..5).prop_map(|v| ChainId::try_from(v).unwrap())
}

// ═══════════════════════════════════════════════════════════════════════════════
// END-TO-END DERIVATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_whitelisted_dai_end_to_end() {
    let config = whitelisted_config();
    let dai = Asset::new(&config, ChainId::Eth, DAI, None).expect("DAI should construct");

    assert!(dai.in_whitelist());
    assert_eq!(dai.owner_cell_type_hash(), config.owner_cell_type_hash());
    assert_eq!(dai.settlement_args(), vec![0x44; 32]);
    assert_eq!(dai.minimal_amount().unwrap(), "1000000000000000");
    assert_eq!(dai.bridge_fee(FeeDirection::In).unwrap(), "1000000000000");
    assert_eq!(dai.humanize("1000000000000000").unwrap(), "0.001");
    assert_eq!(dai.parse_amount("0.001").unwrap(), "1000000000000000");

    let args = BridgeLockArgs::decode(&dai.to_bridge_lock_args()).unwrap();
    assert_eq!(args.chain, ChainId::Eth);
    assert_eq!(args.asset, DAI);
    assert_eq!(args.owner_cell_type_hash, config.owner_cell_type_hash());

    let lock = dai.bridge_lockscript(&config);
    let locator = dai.settlement_locator(&config);
    assert_eq!(
        locator,
        Script::new(
            config.sudt_type.code_hash,
            ScriptHashType::Type,
            lock.hash().as_bytes().to_vec()
        )
    );
}

#[test]
fn test_distinct_assets_have_distinct_locators() {
    let config = whitelisted_config();
    let dai = Asset::new(&config, ChainId::Eth, DAI, None).unwrap();
    let usdt = Asset::new(&config, ChainId::Eth, USDT, None).unwrap();
    let tron = Asset::new(&config, ChainId::Tron, DAI, None).unwrap();

    let locators = [
        dai.settlement_locator(&config),
        usdt.settlement_locator(&config),
        tron.settlement_locator(&config),
    ];
    assert_ne!(locators[0], locators[1]);
    assert_ne!(locators[0], locators[2]);
    assert_ne!(locators[1], locators[2]);
}

#[test]
fn test_usdt_amounts_use_entry_decimals() {
    let config = whitelisted_config();
    let address = USDT.to_uppercase().replacen("0X", "0x", 1);
    let usdt = Asset::new(&config, ChainId::Eth, address, None).unwrap();
    assert_eq!(usdt.describe_amount("1500000").unwrap(), "1.5 USDT");
    assert_eq!(usdt.bridge_fee(FeeDirection::Out).unwrap(), "500000");
    assert!(matches!(
        usdt.parse_amount("0.0000001"),
        Err(AssetError::InvalidAmount(_))
    ));
}

#[test]
fn test_lock_args_anchor_to_owner_cell() {
    let config = open_config();
    let a = Asset::new(&config, ChainId::Btc, "BTC", Some(H256([1; 32]))).unwrap();
    let b = Asset::new(&config, ChainId::Btc, "BTC", Some(H256([2; 32]))).unwrap();
    assert_ne!(a.to_bridge_lock_args(), b.to_bridge_lock_args());
    assert_ne!(a.settlement_locator(&config), b.settlement_locator(&config));
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROPERTIES
// ═══════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lock_args_decode_inverts_encode(
        owner in any::<[u8; 32]>(),
        chain in arb_chain(),
        asset in ".{0,64}",
    ) {
        let args = BridgeLockArgs::new(H256(owner), chain, asset);
        let encoded = args.encode();
        prop_assert_eq!(BridgeLockArgs::decode(&encoded).unwrap(), args.clone());
        prop_assert_eq!(encoded, args.encode());
    }

    #[test]
    fn asset_rebuilds_from_its_lock_args(
        owner in any::<[u8; 32]>(),
        chain in prop_oneof![
            Just(ChainId::Btc),
            Just(ChainId::Eos),
            Just(ChainId::Tron),
            Just(ChainId::Polkadot),
        ],
        address in "[a-zA-Z0-9]{1,48}",
    ) {
        let config = open_config();
        let asset = Asset::new(&config, chain, address, Some(H256(owner))).unwrap();
        let rebuilt = Asset::from_bridge_lock_args(&config, &asset.to_bridge_lock_args()).unwrap();
        prop_assert_eq!(rebuilt, asset);
    }

    #[test]
    fn amount_parse_inverts_humanize_u128(raw in any::<u128>(), decimal in 0u8..=30) {
        let raw = raw.to_string();
        let human = humanize_amount(&raw, decimal).unwrap();
        prop_assert_eq!(parse_amount(&human, decimal).unwrap(), raw);
    }

    #[test]
    fn amount_parse_inverts_humanize_wide(raw in "[1-9][0-9]{0,60}", decimal in 0u8..=36) {
        let human = humanize_amount(&raw, decimal).unwrap();
        prop_assert_eq!(parse_amount(&human, decimal).unwrap(), raw);
    }

    #[test]
    fn dai_amounts_round_trip(raw in any::<u64>(), extra in 0u64..=1_000_000) {
        // covers values past 2^63
        let config = whitelisted_config();
        let dai = Asset::new(&config, ChainId::Eth, DAI, None).unwrap();
        let raw = (u128::from(raw) * 1_000_001 + u128::from(extra)).to_string();
        let human = dai.humanize(&raw).unwrap();
        prop_assert_eq!(dai.parse_amount(&human).unwrap(), raw);
    }

    #[test]
    fn well_formed_eth_address_constructs(address in "0x[0-9a-fA-F]{40}") {
        let config = open_config();
        let asset = Asset::new(&config, ChainId::Eth, address.clone(), None).unwrap();
        prop_assert!(asset.in_whitelist());
        prop_assert_eq!(asset.address(), address.as_str());
    }

    #[test]
    fn mis_sized_eth_address_is_rejected(
        hex in prop_oneof!["[0-9a-f]{1,39}", "[0-9a-f]{41,64}"],
    ) {
        let config = open_config();
        let address = format!("0x{}", hex);
        let result = Asset::new(&config, ChainId::Eth, address, None);
        prop_assert!(matches!(result, Err(AssetError::Construction(_))));
    }
}
