// Shared guards for the marketplace entry points.

use crate::*;

impl Contract {
    pub(crate) fn check_contract_owner(
        &self,
        account_id: &AccountId,
    ) -> Result<(), MarketplaceError> {
        if account_id != &self.owner_id {
            return Err(MarketplaceError::only_administrator());
        }
        Ok(())
    }

    /// The attached deposit must equal the configured listing fee exactly.
    /// Returns the amount so the caller can escrow it against the listing.
    pub(crate) fn check_exact_listing_fee(&self) -> Result<u128, MarketplaceError> {
        let attached = env::attached_deposit().as_yoctonear();
        if attached != self.listing_fee {
            return Err(MarketplaceError::FeeMismatch(format!(
                "Attached deposit must equal the listing fee of {} yoctoNEAR",
                self.listing_fee
            )));
        }
        Ok(attached)
    }
}

pub(crate) fn check_positive_price(price: u128) -> Result<(), MarketplaceError> {
    if price == 0 {
        return Err(MarketplaceError::InvalidPrice(
            "Price must be greater than 0".into(),
        ));
    }
    Ok(())
}
