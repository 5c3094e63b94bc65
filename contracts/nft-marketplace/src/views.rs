//! Read-only marketplace queries. Paginated with `from_index`/`limit` like
//! the NEP-181 enumeration methods; pure and repeatable.

use crate::*;
use near_sdk::json_types::{U128, U64};

impl Contract {
    fn make_view(&self, item_id: u64, record: &MarketItem) -> MarketItemView {
        let descriptor = self
            .items
            .get(&item_id)
            .map(|item| item.descriptor.clone())
            .unwrap_or_default();
        MarketItemView {
            item_id,
            descriptor,
            price: record.price,
            seller: record.seller.clone(),
            custody: record.custody.clone(),
            sold: record.sold,
        }
    }

    fn collect_views<'a>(
        &self,
        records: impl Iterator<Item = (u64, &'a MarketItem)>,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<MarketItemView> {
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(50).min(100) as usize;

        records
            .skip(start)
            .take(limit)
            .map(|(item_id, record)| self.make_view(item_id, record))
            .collect()
    }
}

#[near]
impl Contract {
    /// All records currently escrowed by the marketplace (listed, unsold).
    pub fn fetch_unsold_items(
        &self,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<MarketItemView> {
        self.collect_views(
            self.listings_where(|record| record.custody == Custody::Escrowed),
            from_index,
            limit,
        )
    }

    /// All records custodied by `account_id`. View calls carry no signer, so
    /// the caller supplies their own account here.
    pub fn fetch_owned_by_caller(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<MarketItemView> {
        self.collect_views(
            self.listings_where(move |record| {
                matches!(
                    &record.custody,
                    Custody::Owned(owner) | Custody::Held(owner) if owner == &account_id
                )
            }),
            from_index,
            limit,
        )
    }

    /// All records where `account_id` is the seller of the current listing.
    pub fn fetch_listed_by_caller(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<MarketItemView> {
        self.collect_views(
            self.listings_where(move |record| record.seller == account_id),
            from_index,
            limit,
        )
    }

    pub fn fetch_item(&self, item_id: u64) -> Option<MarketItemView> {
        self.market_items
            .get(&item_id)
            .map(|record| self.make_view(item_id, record))
    }

    pub fn total_items(&self) -> U64 {
        U64(self.items_minted)
    }

    pub fn total_sold(&self) -> U64 {
        U64(self.items_sold)
    }
}
