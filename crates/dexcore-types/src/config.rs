//! Configuration types for the exchange core.
//!
//! Every validating node must run with the same configuration; changing
//! any field changes consensus-visible results.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::{AssetId, DexError, Result, constants};

/// How the fill clamp attributes the binding constraint when both sides
/// are short of balance and their capacities are exactly equal
/// (including both being zero).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The buyer's capacity binds: a bid taker keeps the maker, an ask
    /// taker rejects it. Matches the deployed exchange's behaviour.
    #[default]
    BuyerBinds,
    /// The maker's capacity binds on both sides; the maker is rejected.
    MakerBinds,
    /// The taker's capacity binds on both sides; the maker is kept.
    TakerBinds,
}

/// Consensus parameters for fill clamping and cancel fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    /// Identifier of the chain's native asset.
    pub native_asset: AssetId,
    /// Fixed cancel fee, in native smallest units.
    pub relayer_cancel_fee: U256,
    /// Denominator for fee rates.
    pub base_fee: U256,
    /// Canonical fixed-point scale for prices.
    pub base_price: U256,
    /// Equal-capacity attribution for the fill clamp.
    pub tie_break: TieBreak,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            native_asset: constants::NATIVE_ASSET,
            relayer_cancel_fee: constants::RELAYER_CANCEL_FEE,
            base_fee: constants::BASE_FEE,
            base_price: constants::BASE_PRICE,
            tie_break: TieBreak::default(),
        }
    }
}

impl ExchangeConfig {
    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations that would make the core divide by zero.
    pub fn validate(&self) -> Result<()> {
        if self.base_fee.is_zero() {
            return Err(DexError::Configuration("base_fee must be non-zero".into()));
        }
        if self.base_price.is_zero() {
            return Err(DexError::Configuration(
                "base_price must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Whether `asset` is the configured native asset.
    #[must_use]
    pub fn is_native(&self, asset: &AssetId) -> bool {
        self.native_asset == *asset
    }
}
