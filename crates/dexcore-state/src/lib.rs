//! # dexcore-state
//!
//! **State plane for the exchange core.**
//!
//! - **Exchange state** ([`ExchangeStateDb`]): persisted per-account order
//!   nonces and per-pair median prices, with a deterministic state root
//! - **Registries** ([`TokenDecimalCache`], [`RegistryView`]): token
//!   decimals plus recorded prices, exposed through
//!   [`dexcore_types::PriceRegistry`] for fee resolution
//! - **Nonce allocator** ([`ManagedState`]): per-account windows of issued
//!   and free nonces layered over a private copy of the exchange state
//!
//! [`ManagedState`] is `Send + Sync`; share it across threads behind an
//! `Arc`.

pub mod managed_state;
pub mod registry;
pub mod state_db;

pub use managed_state::{ManagedState, NonceWindow};
pub use registry::{RegistryView, TokenDecimalCache};
pub use state_db::{ExchangeAccount, ExchangeStateDb};
