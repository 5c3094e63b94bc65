//! Public marketplace surface: init, fee administration, mint-and-list,
//! re-list, and purchase.
//!
//! Every entry point validates all preconditions before its first state
//! mutation, so a returned error leaves the registry, the ledger, and every
//! balance exactly as they were.

use crate::*;
use near_sdk::json_types::U128;

#[near]
impl Contract {
    // --- Init ---

    #[init]
    pub fn new(owner_id: AccountId, listing_fee: U128) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            listing_fee: listing_fee.0,
            items: IterableMap::new(StorageKey::Items),
            market_items: IterableMap::new(StorageKey::MarketItems),
            next_item_id: 0,
            items_minted: 0,
            items_sold: 0,
        }
    }

    // --- Fee administration ---

    /// Administrator only.
    #[handle_result]
    pub fn set_listing_fee(&mut self, new_fee: U128) -> Result<(), MarketplaceError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        let old_fee = self.listing_fee;
        self.listing_fee = new_fee.0;
        events::market::emit_listing_fee_updated(&self.owner_id, old_fee, self.listing_fee);
        Ok(())
    }

    pub fn get_listing_fee(&self) -> U128 {
        U128(self.listing_fee)
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    // --- Mint and list ---

    /// Mints a fresh item and opens its first listing in one unit of work:
    /// a listing failure leaves no minted item behind. The attached deposit
    /// must equal the listing fee; it stays escrowed on this contract until
    /// the sale settles.
    #[payable]
    #[handle_result]
    pub fn mint_and_list(
        &mut self,
        descriptor: String,
        price: U128,
    ) -> Result<u64, MarketplaceError> {
        let fee_paid = self.check_exact_listing_fee()?;
        internal::check_positive_price(price.0)?;

        let seller = env::predecessor_account_id();
        let marketplace = env::current_account_id();
        let item_id = self.registry_mint(&marketplace, descriptor)?;
        self.ledger_create_listing(item_id, price.0, fee_paid, &seller);

        events::market::emit_list(item_id, price, &seller, &marketplace, false);
        Ok(item_id)
    }

    // --- Re-list ---

    /// Puts a previously sold item back on the market under a new price.
    /// Only its current owner may re-list; the attached deposit must equal
    /// the listing fee. Operates solely on the supplied `item_id` — the mint
    /// counter is never involved.
    #[payable]
    #[handle_result]
    pub fn relist(&mut self, item_id: u64, price: U128) -> Result<(), MarketplaceError> {
        let fee_paid = self.check_exact_listing_fee()?;
        internal::check_positive_price(price.0)?;

        let caller = env::predecessor_account_id();
        self.ledger_check_relist(item_id, &caller)?;

        // All preconditions hold; the mutations below cannot fail.
        let marketplace = env::current_account_id();
        self.registry_transfer_custody(item_id, &caller, &marketplace)?;
        self.ledger_apply_relist(item_id, price.0, fee_paid, &caller)?;

        events::market::emit_list(item_id, price, &caller, &marketplace, false);
        Ok(())
    }

    // --- Purchase ---

    /// Buys a listed item. The attached deposit must equal the listed price
    /// exactly. Custody and the sold flag commit first; then the escrowed fee
    /// goes to the administrator and the price to the seller.
    #[payable]
    #[handle_result]
    pub fn purchase(&mut self, item_id: u64) -> Result<(), MarketplaceError> {
        let buyer = env::predecessor_account_id();
        let amount_paid = env::attached_deposit().as_yoctonear();

        let receipt = self.ledger_settle_sale(item_id, &buyer, amount_paid)?;
        self.registry_transfer_custody(item_id, &env::current_account_id(), &buyer)?;
        self.items_sold += 1;

        let _ = Promise::new(self.owner_id.clone())
            .transfer(NearToken::from_yoctonear(receipt.fee_paid));
        let _ =
            Promise::new(receipt.seller.clone()).transfer(NearToken::from_yoctonear(receipt.price));

        events::market::emit_purchase(
            item_id,
            &buyer,
            &receipt.seller,
            U128(receipt.price),
            receipt.fee_paid,
            receipt.sale_seq,
        );
        Ok(())
    }
}
