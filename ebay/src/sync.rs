use crate::sell_api::ebay_client::EbayClient;
use crate::sell_api::inventory::{InventoryItemRequest, Product};
use crate::sell_api::offer::DEFAULT_END_REASON;
use log::Level::Warn;
use logging::jlog;
use marketplace::{ListingItem, MarketplaceResult, MarketplaceSync, SyncResult};
use serde_json::json;

impl MarketplaceSync for EbayClient {
    fn marketplace(&self) -> &'static str {
        crate::MARKETPLACE
    }

    /// Inventory first, then offer, then publish. Each stage's output is a
    /// precondition for the next, so ordering is fixed and there is no
    /// rollback: a failure past the inventory stage leaves the catalog entry
    /// upserted but unpublished, and a later call retries against the same
    /// SKU.
    fn sync_item_create_or_update(&self, item: &ListingItem) -> MarketplaceResult<SyncResult> {
        let description = item.listing_description().to_string();
        let inventory_request = InventoryItemRequest {
            product: Product {
                title: item.title.clone(),
                description: description.clone(),
            },
        };
        let inventory = self
            .inventory
            .upsert_inventory_item(&item.sku, &inventory_request)?;

        if !self.has_user_token() {
            jlog!(Warn, "ebay::sync", "Inventory synced without an offer; no seller token has been set", {
                "sku": item.sku
            });
            return Ok(SyncResult::inventory_only(inventory));
        }

        // TODO: map the local category onto an eBay category id before
        // passing it here.
        let offer = self.offer.create_offer(
            &item.sku,
            &item.price,
            item.quantity,
            &description,
            None,
            None,
        )?;
        let publish = self.offer.publish_offer(&offer.offer_id)?;

        Ok(SyncResult::published(inventory, offer.response, publish))
    }

    /// End the listing and drop the catalog entry, tolerating failure of
    /// either: local state is authoritative and remote cleanup is advisory,
    /// not a two-phase commit.
    fn sync_item_delete(&self, item: &ListingItem) -> MarketplaceResult<()> {
        match (item.ebay_offer_id.as_ref(), self.has_user_token()) {
            (Some(offer_id), true) => {
                if let Err(err) = self.offer.end_listing(offer_id, DEFAULT_END_REASON) {
                    if !err.is_remote_failure() {
                        return Err(err);
                    }
                    jlog!(Warn, "ebay::sync", "Failed to end listing", {
                        "sku": item.sku,
                        "offer_id": offer_id,
                        "stage": "end_listing",
                        "error": err.to_string()
                    });
                }
            }
            (Some(offer_id), false) => {
                jlog!(Warn, "ebay::sync", "Listing cannot be ended remotely; no seller token has been set", {
                    "sku": item.sku,
                    "offer_id": offer_id,
                    "stage": "end_listing"
                });
            }
            (None, _) => {}
        }

        if let Err(err) = self.inventory.delete_inventory_item(&item.sku) {
            if !err.is_remote_failure() {
                return Err(err);
            }
            jlog!(Warn, "ebay::sync", "Failed to delete inventory item", {
                "sku": item.sku,
                "stage": "delete_inventory",
                "error": err.to_string()
            });
        }

        Ok(())
    }
}
