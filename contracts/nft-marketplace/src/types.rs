use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

// --- Enums ---

/// Where an item currently sits. `Escrowed` means this contract holds it
/// while its listing is open; no individual is custodian during that window.
#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Debug, PartialEq)]
pub enum Custody {
    /// Recorded against an identity outside any listing flow.
    Held(AccountId),
    Escrowed,
    Owned(AccountId),
}

// --- Structs ---

/// Registry record. Created at mint, never deleted.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Item {
    /// Opaque off-chain descriptor reference (e.g. an IPFS URI).
    pub descriptor: String,
    pub custodian: AccountId,
}

/// Latest market state for an item id. Overwritten in place on re-list and
/// settlement; exactly one record exists per minted id, no history kept.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct MarketItem {
    /// yoctoNEAR. > 0 whenever listed.
    pub price: U128,
    /// Identity that opened the current listing.
    pub seller: AccountId,
    pub custody: Custody,
    /// Invariant: `Escrowed` ⇔ `!sold`, `Owned` ⇔ `sold`.
    pub sold: bool,
    /// Listing fee escrowed when this listing opened; forwarded to the
    /// administrator at settlement regardless of later fee changes.
    pub fee_paid: U128,
    /// Completed settlements for this id; `{item_id}:{sale_seq}` keys a sale.
    pub sale_seq: u32,
}

/// JSON view joining the registry and ledger records for one item.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct MarketItemView {
    pub item_id: u64,
    pub descriptor: String,
    pub price: U128,
    pub seller: AccountId,
    pub custody: Custody,
    pub sold: bool,
}
