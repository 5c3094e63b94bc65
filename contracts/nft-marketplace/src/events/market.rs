use near_sdk::json_types::U128;
use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::MARKET;

// --- MARKET_UPDATE ---

/// Emitted exactly once per successful mint-and-list or re-list.
pub(crate) fn emit_list(
    item_id: u64,
    price: U128,
    seller: &AccountId,
    custodian: &AccountId,
    sold: bool,
) {
    EventBuilder::new(MARKET, "list", seller)
        .field("item_id", item_id)
        .field("price", price)
        .field("seller", seller)
        .field("custodian", custodian)
        .field("sold", sold)
        .emit();
}

pub(crate) fn emit_purchase(
    item_id: u64,
    buyer_id: &AccountId,
    seller_id: &AccountId,
    price: U128,
    listing_fee: u128,
    sale_seq: u32,
) {
    EventBuilder::new(MARKET, "purchase", buyer_id)
        .field("item_id", item_id)
        .field("buyer_id", buyer_id)
        .field("seller_id", seller_id)
        .field("price", price)
        .field("listing_fee", listing_fee)
        .field("settlement_key", format!("{item_id}:{sale_seq}"))
        .emit();
}

pub(crate) fn emit_listing_fee_updated(owner_id: &AccountId, old_fee: u128, new_fee: u128) {
    EventBuilder::new(MARKET, "set_listing_fee", owner_id)
        .field("old_fee", old_fee)
        .field("new_fee", new_fee)
        .emit();
}
