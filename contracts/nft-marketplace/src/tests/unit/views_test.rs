use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::{U128, U64};
use near_sdk::testing_env;

// --- fetch_unsold_items ---

#[test]
fn fetch_unsold_items_returns_escrowed_only() {
    let mut contract = new_contract();
    let first = mint_default(&mut contract);
    let second = mint_default(&mut contract);
    buy_default(&mut contract, first);

    let unsold = contract.fetch_unsold_items(None, None);
    assert_eq!(unsold.len(), 1);
    assert_eq!(unsold[0].item_id, second);
    assert_eq!(unsold[0].custody, Custody::Escrowed);
    assert!(!unsold[0].sold);
}

#[test]
fn fetch_unsold_items_pagination() {
    let mut contract = new_contract();
    for _ in 0..5 {
        mint_default(&mut contract);
    }

    let page = contract.fetch_unsold_items(Some(U128(2)), Some(2));
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].item_id, 2);
    assert_eq!(page[1].item_id, 3);

    let tail = contract.fetch_unsold_items(Some(U128(4)), None);
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].item_id, 4);
}

// --- fetch_owned_by_caller ---

#[test]
fn fetch_owned_by_caller_tracks_settlements() {
    let mut contract = new_contract();
    let first = mint_default(&mut contract);
    mint_default(&mut contract);
    buy_default(&mut contract, first);

    let owned = contract.fetch_owned_by_caller(buyer(), None, None);
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].item_id, first);
    assert_eq!(owned[0].custody, Custody::Owned(buyer()));

    // Escrowed items belong to nobody.
    assert!(contract
        .fetch_owned_by_caller(seller(), None, None)
        .is_empty());
}

// --- fetch_listed_by_caller ---

#[test]
fn fetch_listed_by_caller_follows_current_seller() {
    let mut contract = new_contract();
    let item_id = mint_default(&mut contract);

    let listed = contract.fetch_listed_by_caller(seller(), None, None);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].seller, seller());

    // After sale and re-list by the buyer, the buyer is the seller of record.
    buy_default(&mut contract, item_id);
    testing_env!(context_with_deposit(buyer(), LISTING_FEE).build());
    contract.relist(item_id, U128(150)).unwrap();

    assert!(contract
        .fetch_listed_by_caller(seller(), None, None)
        .is_empty());
    let relisted = contract.fetch_listed_by_caller(buyer(), None, None);
    assert_eq!(relisted.len(), 1);
    assert_eq!(relisted[0].price, U128(150));
}

// --- idempotency ---

#[test]
fn views_are_pure_and_repeatable() {
    let mut contract = new_contract();
    let first = mint_default(&mut contract);
    mint_default(&mut contract);
    buy_default(&mut contract, first);

    assert_eq!(
        contract.fetch_unsold_items(None, None),
        contract.fetch_unsold_items(None, None)
    );
    assert_eq!(
        contract.fetch_owned_by_caller(buyer(), None, None),
        contract.fetch_owned_by_caller(buyer(), None, None)
    );
    assert_eq!(
        contract.fetch_listed_by_caller(seller(), None, None),
        contract.fetch_listed_by_caller(seller(), None, None)
    );
}

// --- fetch_item / totals ---

#[test]
fn fetch_item_joins_registry_descriptor() {
    let mut contract = new_contract();
    let item_id = mint_default(&mut contract);

    let view = contract.fetch_item(item_id).unwrap();
    assert_eq!(view.descriptor, "ipfs://x");
    assert_eq!(view.price, U128(PRICE));

    assert!(contract.fetch_item(42).is_none());
}

#[test]
fn totals_track_mints_and_settlements() {
    let mut contract = new_contract();
    assert_eq!(contract.total_items(), U64(0));
    assert_eq!(contract.total_sold(), U64(0));

    let item_id = mint_default(&mut contract);
    mint_default(&mut contract);
    buy_default(&mut contract, item_id);

    assert_eq!(contract.total_items(), U64(2));
    assert_eq!(contract.total_sold(), U64(1));

    // Re-listing never decrements the settlement count.
    testing_env!(context_with_deposit(buyer(), LISTING_FEE).build());
    contract.relist(item_id, U128(150)).unwrap();
    assert_eq!(contract.total_sold(), U64(1));
}
