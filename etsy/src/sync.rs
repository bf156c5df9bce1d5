use crate::client::EtsyClient;
use crate::listings::CreateListingRequest;
use log::Level::Warn;
use logging::jlog;
use marketplace::{ListingItem, MarketplaceResult, MarketplaceSync, SyncResult};
use serde_json::json;

impl MarketplaceSync for EtsyClient {
    fn marketplace(&self) -> &'static str {
        crate::MARKETPLACE
    }

    /// One call does it all on Etsy; there is no separate inventory or
    /// publish stage to defer, so a missing seller token fails the call
    /// instead of producing a partial result.
    fn sync_item_create_or_update(&self, item: &ListingItem) -> MarketplaceResult<SyncResult> {
        let listing = self
            .listings
            .create_listing(&CreateListingRequest::from_item(item))?;
        Ok(SyncResult::single_listing(listing))
    }

    fn sync_item_delete(&self, item: &ListingItem) -> MarketplaceResult<()> {
        let listing_id = match item.etsy_listing_id.as_ref() {
            Some(listing_id) => listing_id,
            None => {
                jlog!(Warn, "etsy::sync", "No listing id is stored for this item; nothing to delete remotely", {
                    "sku": item.sku
                });
                return Ok(());
            }
        };

        if let Err(err) = self.listings.delete_listing(listing_id) {
            if !err.is_remote_failure() {
                return Err(err);
            }
            jlog!(Warn, "etsy::sync", "Failed to delete listing", {
                "sku": item.sku,
                "listing_id": listing_id,
                "stage": "delete_listing",
                "error": err.to_string()
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use marketplace::{
        Credentials, Environment, Method, RequestAuth, StatusCode, SyncError, TestTransport,
        TokenTier,
    };

    fn credentials(shop_id: Option<&str>) -> Credentials {
        Credentials {
            client_id: "etsy-key".to_string(),
            client_secret: "etsy-secret".to_string(),
            environment: Environment::Production,
            account_id: shop_id.map(|shop_id| shop_id.to_string()),
        }
    }

    fn client(transport: &TestTransport, shop_id: Option<&str>, token: Option<&str>) -> EtsyClient {
        let mut config = Config::new(credentials(shop_id));
        config.access_token = token.map(|token| token.to_string());
        EtsyClient::with_transport(config, Box::new(transport.clone()))
    }

    fn widget() -> ListingItem {
        let mut item = ListingItem::new("A1", "Widget");
        item.quantity = 2;
        item.price = "14.50".to_string();
        item
    }

    #[test]
    fn create_posts_one_listing_with_key_and_bearer() {
        let transport = TestTransport::new();
        transport.stub(
            Method::POST,
            "/listings",
            StatusCode::CREATED,
            r#"{"listing_id":981,"state":"draft"}"#,
        );
        let client = client(&transport, Some("shop-1"), Some("seller-token"));

        let result = client.sync_item_create_or_update(&widget()).unwrap();
        assert_eq!(
            Some(json!({"listing_id": 981, "state": "draft"})),
            result.listing
        );
        assert_eq!(None, result.inventory);
        assert_eq!(None, result.offer);
        assert_eq!(None, result.publish);

        let requests = transport.requests();
        assert_eq!(1, requests.len());
        assert!(requests[0].url.ends_with("/shops/shop-1/listings"));
        match &requests[0].auth {
            RequestAuth::Bearer(token) => assert_eq!("seller-token", token),
            other => panic!("expected a bearer token, got {:?}", other),
        }
        assert!(requests[0]
            .headers
            .iter()
            .any(|(name, value)| *name == "x-api-key" && value == "etsy-key"));
    }

    #[test]
    fn create_without_an_access_token_is_an_auth_error() {
        let transport = TestTransport::new();
        let client = client(&transport, Some("shop-1"), None);

        match client.sync_item_create_or_update(&widget()).err().unwrap() {
            SyncError::AuthError { tier, .. } => assert_eq!(TokenTier::User, tier),
            other => panic!("expected an auth error, got {}", other),
        }
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn create_without_a_shop_id_is_an_auth_error() {
        let transport = TestTransport::new();
        let client = client(&transport, None, Some("seller-token"));

        match client.sync_item_create_or_update(&widget()).err().unwrap() {
            SyncError::AuthError { .. } => {}
            other => panic!("expected an auth error, got {}", other),
        }
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn a_token_handed_over_later_unlocks_the_seller_operations() {
        let transport = TestTransport::new();
        transport.stub(Method::POST, "/listings", StatusCode::CREATED, "{}");
        let client = client(&transport, Some("shop-1"), None);
        assert!(!client.has_access_token());

        client.set_access_token("seller-token".to_string()).unwrap();
        assert!(client.has_access_token());
        client.sync_item_create_or_update(&widget()).unwrap();
        assert_eq!(1, transport.requests().len());
    }

    #[test]
    fn delete_without_a_stored_listing_id_is_a_warned_no_op() {
        let transport = TestTransport::new();
        let client = client(&transport, Some("shop-1"), Some("seller-token"));

        client.sync_item_delete(&widget()).unwrap();
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn delete_failures_are_logged_not_raised() {
        let transport = TestTransport::new();
        transport.stub(
            Method::DELETE,
            "/listings/",
            StatusCode::INTERNAL_SERVER_ERROR,
            "cannot delete",
        );
        let client = client(&transport, Some("shop-1"), Some("seller-token"));

        let mut item = widget();
        item.etsy_listing_id = Some("981".to_string());
        client.sync_item_delete(&item).unwrap();
        assert_eq!(1, transport.requests_to("/listings/981").len());
    }

    #[test]
    fn delete_without_a_token_is_tolerated_too() {
        let transport = TestTransport::new();
        let client = client(&transport, Some("shop-1"), None);

        let mut item = widget();
        item.etsy_listing_id = Some("981".to_string());
        client.sync_item_delete(&item).unwrap();
        // The auth failure is caught before anything reaches the wire.
        assert!(transport.requests().is_empty());
    }
}
