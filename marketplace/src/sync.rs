use crate::error::MarketplaceResult;
use crate::item::ListingItem;
use serde::Serialize;
use serde_json::Value;

/// Outcome of one push to a marketplace, stage by stage. `None` is the
/// explicit "not attempted" marker: a stage whose precondition was not met,
/// or one that is not part of this marketplace's flow. Serializable so the
/// caller can merge it into its own response.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SyncResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<Value>,
}

impl SyncResult {
    /// Catalog data synced, listing deferred. A valid terminal state, not an
    /// error: a later call can pick up from the same SKU.
    pub fn inventory_only(inventory: Value) -> SyncResult {
        SyncResult {
            inventory: Some(inventory),
            ..Default::default()
        }
    }

    pub fn published(inventory: Value, offer: Value, publish: Value) -> SyncResult {
        SyncResult {
            inventory: Some(inventory),
            offer: Some(offer),
            publish: Some(publish),
            ..Default::default()
        }
    }

    /// For marketplaces that carry catalog data and sell-state in one call.
    pub fn single_listing(listing: Value) -> SyncResult {
        SyncResult {
            listing: Some(listing),
            ..Default::default()
        }
    }
}

/// The uniform contract every marketplace client exposes to the rest of the
/// system. Implementations are free to vary step count and preconditions
/// internally, but the two entry points and their failure policy are fixed:
/// create-or-update propagates failures of stages that later stages depend
/// on, delete never raises on a marketplace-side failure.
pub trait MarketplaceSync {
    fn marketplace(&self) -> &'static str;

    /// Push the item's current state to the marketplace. Partial completion
    /// (catalog synced, listing deferred for lack of a seller token) is a
    /// success; see the per-stage fields of the returned `SyncResult`.
    fn sync_item_create_or_update(&self, item: &ListingItem) -> MarketplaceResult<SyncResult>;

    /// Best-effort remote cleanup for a locally deleted item. Local state is
    /// authoritative; the caller's delete proceeds whatever happens here.
    fn sync_item_delete(&self, item: &ListingItem) -> MarketplaceResult<()>;
}
