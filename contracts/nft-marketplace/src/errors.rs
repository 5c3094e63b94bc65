//! Typed error handling for the marketplace contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(MarketplaceError::Xxx)`, the SDK calls `env::panic_str()`
//! with the Display message — same on-wire behaviour as raw panics,
//! but with structured, testable code.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum MarketplaceError {
    /// Caller lacks permission (not the administrator, not the item's owner).
    Unauthorized(String),
    /// Attached deposit does not equal the configured listing fee.
    FeeMismatch(String),
    /// Attached deposit does not equal the listed price.
    PriceMismatch(String),
    /// Zero price supplied for a listing.
    InvalidPrice(String),
    /// Requested item id does not exist.
    NotFound(String),
    /// Item exists but is not in a purchasable state.
    NotListed(String),
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::FeeMismatch(msg) => write!(f, "Fee mismatch: {}", msg),
            Self::PriceMismatch(msg) => write!(f, "Price mismatch: {}", msg),
            Self::InvalidPrice(msg) => write!(f, "Invalid price: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::NotListed(msg) => write!(f, "Not listed: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl MarketplaceError {
    pub fn item_not_found() -> Self {
        Self::NotFound("Item not found".into())
    }
    pub fn not_listed() -> Self {
        Self::NotListed("Item is not listed for sale".into())
    }
    pub fn not_owner() -> Self {
        Self::Unauthorized("Only the item's current owner can re-list it".into())
    }
    pub fn not_custodian() -> Self {
        Self::Unauthorized("Sender is not the recorded custodian".into())
    }
    pub fn only_administrator() -> Self {
        Self::Unauthorized("Only the administrator can perform this action".into())
    }
}
