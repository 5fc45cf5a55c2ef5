//! Error types for the dexcore exchange core.
//!
//! All errors use the `DX_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 2xx: Nonce window errors
//! - 9xx: General / internal errors
//!
//! The fill-quantity and cancel-fee computations are total and never
//! return these; errors only surface at the configuration edge and on
//! explicit nonce commits.

use thiserror::Error;

use crate::AccountHash;

/// Central error enum for all dexcore operations.
#[derive(Debug, Error)]
pub enum DexError {
    // =================================================================
    // Nonce Errors (2xx)
    // =================================================================
    /// A nonce below the tracked window start can never be issued again.
    #[error("DX_ERR_200: Nonce {nonce} is below window start {nstart} for account {account}")]
    NonceBelowWindow {
        account: AccountHash,
        nonce: u64,
        nstart: u64,
    },

    /// Committing the nonce would grow the window past its slot limit.
    #[error("DX_ERR_201: Nonce window for account {account} would exceed {max} slots")]
    NonceWindowOverflow { account: AccountHash, max: usize },

    /// The account's next nonce would not fit in a `u64`.
    #[error("DX_ERR_202: Nonce space exhausted for account {account}")]
    NonceSpaceExhausted { account: AccountHash },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("DX_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config file, missing fields, etc.).
    #[error("DX_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, DexError>;

impl From<serde_json::Error> for DexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
