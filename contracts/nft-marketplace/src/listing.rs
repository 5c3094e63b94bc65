//! Listing ledger: the listed → sold → re-listed state machine.

use crate::*;
use near_sdk::json_types::U128;

/// What `ledger_settle_sale` hands back for the payout leg. The ledger itself
/// moves no funds.
pub(crate) struct SettlementReceipt {
    pub seller: AccountId,
    pub price: u128,
    pub fee_paid: u128,
    pub sale_seq: u32,
}

impl Contract {
    /// Writes the initial market record for a freshly minted item, escrowed by
    /// this contract. Price and fee are validated by the caller before the
    /// mint, so this cannot fail.
    pub(crate) fn ledger_create_listing(
        &mut self,
        item_id: u64,
        price: u128,
        fee_paid: u128,
        seller: &AccountId,
    ) {
        self.market_items.insert(
            item_id,
            MarketItem {
                price: U128(price),
                seller: seller.clone(),
                custody: Custody::Escrowed,
                sold: false,
                fee_paid: U128(fee_paid),
                sale_seq: 0,
            },
        );
    }

    /// Checks that `caller` may re-list `item_id`. Read-only: the mutation
    /// happens in `ledger_apply_relist` once every precondition across
    /// components has passed.
    pub(crate) fn ledger_check_relist(
        &self,
        item_id: u64,
        caller: &AccountId,
    ) -> Result<(), MarketplaceError> {
        let record = self
            .market_items
            .get(&item_id)
            .ok_or_else(MarketplaceError::item_not_found)?;
        match &record.custody {
            Custody::Owned(owner) | Custody::Held(owner) if owner == caller => Ok(()),
            Custody::Escrowed => Err(MarketplaceError::Unauthorized(
                "Item is already listed and held in escrow".into(),
            )),
            _ => Err(MarketplaceError::not_owner()),
        }
    }

    /// Re-opens the listing: new price and seller, back into escrow.
    /// `sale_seq` carries across so settlement keys stay unique per id.
    pub(crate) fn ledger_apply_relist(
        &mut self,
        item_id: u64,
        price: u128,
        fee_paid: u128,
        seller: &AccountId,
    ) -> Result<(), MarketplaceError> {
        let record = self
            .market_items
            .get_mut(&item_id)
            .ok_or_else(MarketplaceError::item_not_found)?;
        record.price = U128(price);
        record.seller = seller.clone();
        record.custody = Custody::Escrowed;
        record.sold = false;
        record.fee_paid = U128(fee_paid);
        Ok(())
    }

    /// Marks `item_id` sold to `buyer` if exactly `amount_paid` matches the
    /// listed price. Moves no funds; the caller pays out from the receipt
    /// after the state commit.
    pub(crate) fn ledger_settle_sale(
        &mut self,
        item_id: u64,
        buyer: &AccountId,
        amount_paid: u128,
    ) -> Result<SettlementReceipt, MarketplaceError> {
        let record = self
            .market_items
            .get_mut(&item_id)
            .ok_or_else(MarketplaceError::item_not_found)?;
        if record.sold || record.custody != Custody::Escrowed {
            return Err(MarketplaceError::not_listed());
        }
        if amount_paid != record.price.0 {
            return Err(MarketplaceError::PriceMismatch(format!(
                "Attached deposit must equal the listed price of {} yoctoNEAR",
                record.price.0
            )));
        }

        record.sold = true;
        record.custody = Custody::Owned(buyer.clone());
        record.sale_seq += 1;

        Ok(SettlementReceipt {
            seller: record.seller.clone(),
            price: record.price.0,
            fee_paid: record.fee_paid.0,
            sale_seq: record.sale_seq,
        })
    }

    /// Lazy scan over ledger records matching `predicate`; restartable,
    /// read-only, finite.
    pub(crate) fn listings_where<'a, P>(
        &'a self,
        predicate: P,
    ) -> impl Iterator<Item = (u64, &'a MarketItem)> + 'a
    where
        P: Fn(&MarketItem) -> bool + 'a,
    {
        self.market_items
            .iter()
            .filter(move |&(_, record)| predicate(record))
            .map(|(id, record)| (*id, record))
    }
}
