use crate::auth::auth_client::AuthClient;
use crate::util::SellApiResponseExt;
use marketplace::{ApiRequest, Method, RequestAuth, SyncError, Transport};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::{Arc, RwLock};

/// Catalog-side representation of an item, independent of whether it is
/// listed for sale. Keyed by SKU, authorized with the application token.
pub struct InventoryEndpoint {
    base_uri: &'static str,
    auth: Arc<RwLock<AuthClient>>,
    transport: Box<dyn Transport + Send + Sync>,
}

#[derive(Clone, Debug, Serialize)]
pub struct InventoryItemRequest {
    pub product: Product,
}

#[derive(Clone, Debug, Serialize)]
pub struct Product {
    pub title: String,
    pub description: String,
}

impl InventoryEndpoint {
    pub fn new(
        base_uri: &'static str,
        auth: Arc<RwLock<AuthClient>>,
        transport: Box<dyn Transport + Send + Sync>,
    ) -> InventoryEndpoint {
        InventoryEndpoint {
            base_uri,
            auth,
            transport,
        }
    }

    fn application_token(&self) -> Result<String, SyncError> {
        self.auth
            .write()
            .map_err(|_| SyncError::ConcurrencyError)?
            .get_application_token()
    }

    fn item_url(&self, sku: &str) -> String {
        format!("{}/inventory_item/{}", self.base_uri, sku)
    }

    /// Idempotent create-or-replace of the catalog entry for a SKU.
    pub fn upsert_inventory_item(
        &self,
        sku: &str,
        item: &InventoryItemRequest,
    ) -> Result<Value, SyncError> {
        let token = self.application_token()?;
        let request = ApiRequest::new(Method::PUT, self.item_url(sku), RequestAuth::Bearer(token))
            .with_json(json!(item));
        self.transport.dispatch(request)?.success_json()
    }

    pub fn get_inventory_item(&self, sku: &str) -> Result<Value, SyncError> {
        let token = self.application_token()?;
        let request = ApiRequest::new(Method::GET, self.item_url(sku), RequestAuth::Bearer(token));
        self.transport.dispatch(request)?.success_json()
    }

    pub fn delete_inventory_item(&self, sku: &str) -> Result<(), SyncError> {
        let token = self.application_token()?;
        let request =
            ApiRequest::new(Method::DELETE, self.item_url(sku), RequestAuth::Bearer(token));
        self.transport.dispatch(request)?.success_json().map(|_| ())
    }
}
