use marketplace::{
    ApiError, ApiRequest, AuthError, ListingItem, Method, RequestAuth, SyncError, TokenTier,
    Transport,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::{Arc, RwLock};

/// Etsy does not split catalog data from sell-state the way eBay does; one
/// listing call carries everything.
pub struct ListingEndpoint {
    client_id: String,
    shop_id: Option<String>,
    access_token: Arc<RwLock<Option<String>>>,
    transport: Box<dyn Transport + Send + Sync>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateListingRequest {
    pub title: String,
    pub description: String,
    pub quantity: u32,
    pub price: String,
    pub who_made: String,
    pub is_supply: bool,
    pub when_made: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skus: Option<Vec<String>>,
}

impl CreateListingRequest {
    pub fn from_item(item: &ListingItem) -> CreateListingRequest {
        CreateListingRequest {
            title: item.title.clone(),
            description: item.listing_description().to_string(),
            quantity: item.quantity,
            price: item.price.clone(),
            // TODO: expose who_made / when_made on the listing record instead
            // of assuming resale of an existing product.
            who_made: "someone_else".to_string(),
            is_supply: false,
            when_made: "2020_2024".to_string(),
            skus: if item.sku.is_empty() {
                None
            } else {
                Some(vec![item.sku.clone()])
            },
        }
    }
}

impl ListingEndpoint {
    pub fn new(
        client_id: String,
        shop_id: Option<String>,
        access_token: Arc<RwLock<Option<String>>>,
        transport: Box<dyn Transport + Send + Sync>,
    ) -> ListingEndpoint {
        ListingEndpoint {
            client_id,
            shop_id,
            access_token,
            transport,
        }
    }

    fn bearer(&self) -> Result<String, SyncError> {
        let guard = self
            .access_token
            .read()
            .map_err(|_| SyncError::ConcurrencyError)?;
        match guard.as_ref() {
            Some(token) => Ok(token.clone()),
            None => AuthError {
                marketplace: crate::MARKETPLACE,
                tier: TokenTier::User,
                details: "no access token has been configured".to_string(),
            }
            .fail(),
        }
    }

    fn shop_id(&self) -> Result<&str, SyncError> {
        match self.shop_id.as_ref() {
            Some(shop_id) => Ok(shop_id),
            None => AuthError {
                marketplace: crate::MARKETPLACE,
                tier: TokenTier::User,
                details: "no shop id has been configured".to_string(),
            }
            .fail(),
        }
    }

    fn request(&self, method: Method, url: String) -> Result<ApiRequest, SyncError> {
        Ok(
            ApiRequest::new(method, url, RequestAuth::Bearer(self.bearer()?))
                .with_header("x-api-key", self.client_id.clone()),
        )
    }

    pub fn create_listing(&self, listing: &CreateListingRequest) -> Result<Value, SyncError> {
        let shop_id = self.shop_id()?;
        let url = format!("{}/shops/{}/listings", crate::BASE_URI, shop_id);
        let request = self.request(Method::POST, url)?.with_json(json!(listing));
        let response = self.transport.dispatch(request)?;
        if !response.is_success() {
            return ApiError {
                marketplace: crate::MARKETPLACE,
                status: response.status.as_u16(),
                body: response.body,
            }
            .fail();
        }
        response.json_value()
    }

    pub fn delete_listing(&self, listing_id: &str) -> Result<(), SyncError> {
        let shop_id = self.shop_id()?;
        let url = format!("{}/shops/{}/listings/{}", crate::BASE_URI, shop_id, listing_id);
        let request = self.request(Method::DELETE, url)?;
        let response = self.transport.dispatch(request)?;
        if !response.is_success() {
            return ApiError {
                marketplace: crate::MARKETPLACE,
                status: response.status.as_u16(),
                body: response.body,
            }
            .fail();
        }
        Ok(())
    }
}
