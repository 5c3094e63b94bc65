//! Single-asset marketplace ledger — mints items, escrows them while listed,
//! and exchanges ownership for payment in one indivisible unit of work.

use near_sdk::store::IterableMap;
use near_sdk::{env, near, AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise};

// --- Modules ---

mod errors;
mod events;
mod internal;
mod listing;
mod market;
mod registry;
pub mod types;
mod views;


pub use errors::MarketplaceError;
pub use types::*;

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Items,
    MarketItems,
}

// --- Contract State ---

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    /// From Cargo.toml; updated on each migration.
    pub version: String,

    /// Administrator: collects listing fees and may change them. Fixed at init.
    pub owner_id: AccountId,

    /// Flat charge (yoctoNEAR) escrowed on every listing and re-listing.
    pub listing_fee: u128,

    /// Registry: authoritative descriptor + custodian per item id.
    pub items: IterableMap<u64, Item>,

    /// Ledger: latest market record per item id; overwritten, never deleted.
    pub market_items: IterableMap<u64, MarketItem>,

    /// Next id to mint. Read and written by `registry_mint` only.
    pub next_item_id: u64,

    pub items_minted: u64,
    /// Completed settlements; monotonic, never decremented on re-list.
    pub items_sold: u64,
}
