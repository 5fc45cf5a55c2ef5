//! # dexcore-types
//!
//! Shared types, errors, and configuration for the **dexcore** exchange core.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AssetId`], [`AccountHash`], [`pair_hash`]
//! - **Order model**: [`OrderItem`], [`OrderSide`]
//! - **Registry contract**: [`PriceRegistry`] (token decimals + median prices)
//! - **Configuration**: [`ExchangeConfig`], [`TieBreak`]
//! - **Errors**: [`DexError`] with `DX_ERR_` prefix codes
//! - **Constants**: canonical scales, fee denominators, the native asset

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod order;
pub mod registry;

// Re-export all primary types at crate root for ergonomic imports:
//   use dexcore_types::{OrderItem, OrderSide, ExchangeConfig, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use order::*;
pub use registry::*;

// The wide integer and address types are part of every public signature.
pub use alloy_primitives::{Address, B256, U256};

// Constants are accessed via `dexcore_types::constants::FOO`
// (not re-exported to avoid name collisions).
