//! Item registry: id allocation and custody bookkeeping.

use crate::*;

impl Contract {
    /// Allocates the next item id and records `custodian` as its holder.
    /// This is the only operation that reads or writes `next_item_id`;
    /// re-list and purchase never touch the counter.
    pub(crate) fn registry_mint(
        &mut self,
        custodian: &AccountId,
        descriptor: String,
    ) -> Result<u64, MarketplaceError> {
        let item_id = self.next_item_id;
        self.next_item_id = self
            .next_item_id
            .checked_add(1)
            .ok_or_else(|| MarketplaceError::InternalError("Item id counter overflow".into()))?;

        self.items.insert(
            item_id,
            Item {
                descriptor,
                custodian: custodian.clone(),
            },
        );
        self.items_minted += 1;
        Ok(item_id)
    }

    /// Moves custody of `item_id` from `from` to `to`. Fails if `from` is not
    /// the recorded custodian; the change is visible to all subsequent reads.
    pub(crate) fn registry_transfer_custody(
        &mut self,
        item_id: u64,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), MarketplaceError> {
        let item = self
            .items
            .get_mut(&item_id)
            .ok_or_else(MarketplaceError::item_not_found)?;
        if &item.custodian != from {
            return Err(MarketplaceError::not_custodian());
        }
        item.custodian = to.clone();
        Ok(())
    }
}
