//! NEP-297 JSON event emission.
//!
//! Every event is one `EVENT_JSON:{...}` log line with the marketplace
//! standard envelope; external observers (indexers) key on `event` and
//! `operation`.

pub(crate) mod builder;
pub(crate) mod market;
mod types;

pub(crate) const STANDARD: &str = "nft-marketplace";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

/// Event type for all market state changes.
pub(crate) const MARKET: &str = "market_update";
