//! Decimal-aware amount conversion.
//!
//! Raw amounts are base-10 integer strings in the asset's smallest unit and
//! routinely exceed 64 bits, so all arithmetic goes through `BigUint`. Human
//! amounts are plain decimal strings (no exponent form) with trailing
//! fractional zeros trimmed.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use xbridge_types::ChainId;

use crate::config::WhitelistEntry;
use crate::error::AssetError;

/// Fee direction relative to the receiving ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeDirection {
    /// Foreign chain → receiving ledger (mint).
    In,
    /// Receiving ledger → foreign chain (burn).
    Out,
}

/// Amount rules for one asset: its chain plus its whitelist entry, if any.
#[derive(Debug, Clone, Copy)]
pub struct AmountPolicy<'a> {
    chain: ChainId,
    entry: Option<&'a WhitelistEntry>,
}

impl<'a> AmountPolicy<'a> {
    pub fn new(chain: ChainId, entry: Option<&'a WhitelistEntry>) -> Self {
        Self { chain, entry }
    }

    fn configured(&self, operation: &'static str) -> Result<&'a WhitelistEntry, AssetError> {
        if !self.chain.has_whitelist() {
            return Err(AssetError::Unimplemented {
                operation,
                chain: self.chain,
            });
        }
        self.entry.ok_or_else(|| {
            AssetError::NotConfigured(format!("{} requires a whitelist entry", operation))
        })
    }

    /// `raw * 10^-decimal`.
    pub fn humanize(&self, raw: &str) -> Result<String, AssetError> {
        let entry = self.configured("humanize")?;
        humanize_amount(raw, entry.decimal)
    }

    /// `human * 10^decimal`.
    pub fn parse(&self, human: &str) -> Result<String, AssetError> {
        let entry = self.configured("parse")?;
        parse_amount(human, entry.decimal)
    }

    /// Humanized amount followed by the asset symbol, e.g. `"1.5 DAI"`.
    pub fn describe(&self, raw: &str) -> Result<String, AssetError> {
        let entry = self.configured("describe")?;
        Ok(format!(
            "{} {}",
            humanize_amount(raw, entry.decimal)?,
            entry.symbol
        ))
    }

    /// Minimal bridgeable raw amount; `"0"` on chains without a whitelist.
    pub fn minimal_amount(&self) -> Result<String, AssetError> {
        if !self.chain.has_whitelist() {
            return Ok("0".to_string());
        }
        let entry = self.configured("minimal_amount")?;
        Ok(entry.minimal_bridge_amount.clone())
    }

    /// Configured bridge fee; `"0"` on chains without a whitelist.
    pub fn bridge_fee(&self, direction: FeeDirection) -> Result<String, AssetError> {
        if !self.chain.has_whitelist() {
            return Ok("0".to_string());
        }
        let entry = self.configured("bridge_fee")?;
        Ok(match direction {
            FeeDirection::In => entry.bridge_fee.inbound.clone(),
            FeeDirection::Out => entry.bridge_fee.outbound.clone(),
        })
    }
}

fn pow10(exp: u8) -> BigUint {
    BigUint::from(10u32).pow(u32::from(exp))
}

fn parse_digits(s: &str, what: &str) -> Result<BigUint, AssetError> {
    let invalid = || AssetError::InvalidAmount(format!("invalid {}: {:?}", what, s));
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    s.parse::<BigUint>().map_err(|_| invalid())
}

/// Shift a raw integer amount `decimal` places to the right of the point.
pub fn humanize_amount(raw: &str, decimal: u8) -> Result<String, AssetError> {
    let raw = parse_digits(raw.trim(), "raw amount")?;
    if decimal == 0 {
        return Ok(raw.to_string());
    }

    let scale = pow10(decimal);
    let whole = &raw / &scale;
    let frac = &raw % &scale;

    if frac == BigUint::from(0u32) {
        return Ok(whole.to_string());
    }
    let width = usize::from(decimal);
    let frac_str = format!("{:0>width$}", frac.to_string());
    Ok(format!("{}.{}", whole, frac_str.trim_end_matches('0')))
}

/// Convert a human decimal amount to raw units.
pub fn parse_amount(human: &str, decimal: u8) -> Result<String, AssetError> {
    let human = human.trim();
    if human.is_empty() {
        return Err(AssetError::InvalidAmount("empty amount".to_string()));
    }

    let (whole_part, frac_part) = match human.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (human, ""),
    };
    if frac_part.contains('.') {
        return Err(AssetError::InvalidAmount(format!(
            "multiple decimal points: {}",
            human
        )));
    }
    if whole_part.is_empty() && frac_part.is_empty() {
        return Err(AssetError::InvalidAmount(format!("no digits: {}", human)));
    }
    if frac_part.len() > usize::from(decimal) {
        return Err(AssetError::InvalidAmount(format!(
            "{} has more than {} decimal places",
            human, decimal
        )));
    }

    let whole = if whole_part.is_empty() {
        BigUint::from(0u32)
    } else {
        parse_digits(whole_part, "whole part")?
    };
    let frac = if frac_part.is_empty() {
        BigUint::from(0u32)
    } else {
        let padded = format!("{:0<width$}", frac_part, width = usize::from(decimal));
        parse_digits(&padded, "fractional part")?
    };

    Ok((whole * pow10(decimal) + frac).to_string())
}
