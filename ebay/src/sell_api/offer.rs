use crate::auth::auth_client::AuthClient;
use crate::util::SellApiResponseExt;
use log::Level::Info;
use logging::jlog;
use marketplace::{ApiError, ApiRequest, Method, RequestAuth, SyncError, Transport};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::{Arc, RwLock};

pub const DEFAULT_END_REASON: &str = "OUT_OF_STOCK";

/// Sell-side object binding a SKU to price, quantity and listing state.
/// These calls legally bind a specific seller, so every one of them requires
/// the user token.
pub struct OfferEndpoint {
    base_uri: &'static str,
    marketplace_id: String,
    auth: Arc<RwLock<AuthClient>>,
    transport: Box<dyn Transport + Send + Sync>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferRequest {
    pub sku: String,
    pub marketplace_id: String,
    pub pricing_summary: PricingSummary,
    pub available_quantity: u32,
    pub format: String,
    pub listing_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Seller policy overrides, merged into the payload root.
    #[serde(flatten)]
    pub listing_policies: Option<Value>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PricingSummary {
    pub price: Price,
}

#[derive(Clone, Debug, Serialize)]
pub struct Price {
    pub value: String,
    pub currency: String,
}

impl Price {
    pub fn usd(value: &str) -> Price {
        Price {
            value: value.to_string(),
            currency: "USD".to_string(),
        }
    }
}

/// Partial offer update; only the populated fields are sent.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_summary: Option<PricingSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_policies: Option<Value>,
}

/// A created offer: the identifier later stages need, plus the raw response
/// for the caller's records.
#[derive(Clone, Debug)]
pub struct CreatedOffer {
    pub offer_id: String,
    pub response: Value,
}

impl OfferEndpoint {
    pub fn new(
        base_uri: &'static str,
        marketplace_id: String,
        auth: Arc<RwLock<AuthClient>>,
        transport: Box<dyn Transport + Send + Sync>,
    ) -> OfferEndpoint {
        OfferEndpoint {
            base_uri,
            marketplace_id,
            auth,
            transport,
        }
    }

    fn user_token(&self) -> Result<String, SyncError> {
        self.auth
            .read()
            .map_err(|_| SyncError::ConcurrencyError)?
            .require_user_token()
    }

    pub fn create_offer(
        &self,
        sku: &str,
        price: &str,
        quantity: u32,
        description: &str,
        category_id: Option<String>,
        listing_policies: Option<Value>,
    ) -> Result<CreatedOffer, SyncError> {
        let token = self.user_token()?;
        let offer = CreateOfferRequest {
            sku: sku.to_string(),
            marketplace_id: self.marketplace_id.clone(),
            pricing_summary: PricingSummary {
                price: Price::usd(price),
            },
            available_quantity: quantity,
            format: "FIXED_PRICE".to_string(),
            listing_description: description.to_string(),
            category_id,
            listing_policies,
        };
        let request = ApiRequest::new(
            Method::POST,
            format!("{}/offer", self.base_uri),
            RequestAuth::Bearer(token),
        )
        .with_json(json!(offer));

        let response = self.transport.dispatch(request)?;
        let status = response.status;
        let body = response.success_json()?;
        match body.get("offerId").and_then(Value::as_str) {
            Some(offer_id) => Ok(CreatedOffer {
                offer_id: offer_id.to_string(),
                response: body,
            }),
            // A success body without an offer id leaves nothing to publish.
            None => ApiError {
                marketplace: crate::MARKETPLACE,
                status: status.as_u16(),
                body: body.to_string(),
            }
            .fail(),
        }
    }

    pub fn update_offer(&self, offer_id: &str, update: &OfferUpdate) -> Result<Value, SyncError> {
        let token = self.user_token()?;
        let request = ApiRequest::new(
            Method::PATCH,
            format!("{}/offer/{}", self.base_uri, offer_id),
            RequestAuth::Bearer(token),
        )
        .with_json(json!(update));
        self.transport.dispatch(request)?.success_json()
    }

    pub fn publish_offer(&self, offer_id: &str) -> Result<Value, SyncError> {
        let token = self.user_token()?;
        let request = ApiRequest::new(
            Method::POST,
            format!("{}/offer/{}/publish", self.base_uri, offer_id),
            RequestAuth::Bearer(token),
        );
        self.transport.dispatch(request)?.success_json()
    }

    /// There is no dedicated retire endpoint; an ended listing is an offer
    /// with nothing left to sell.
    pub fn end_listing(&self, offer_id: &str, reason: &str) -> Result<Value, SyncError> {
        jlog!(Info, "ebay::offer", "Ending listing", {
            "offer_id": offer_id,
            "reason": reason
        });
        let update = OfferUpdate {
            available_quantity: Some(0),
            listing_policies: Some(json!({})),
            ..Default::default()
        };
        self.update_offer(offer_id, &update)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use crate::sell_api::ebay_client::EbayClient;
    use marketplace::{Credentials, Environment, StatusCode, TestTransport, TokenTier};

    const TOKEN_BODY: &str = r#"{"access_token":"app-token","expires_in":7200}"#;

    fn client(transport: &TestTransport) -> EbayClient {
        let credentials = Credentials {
            client_id: "app-id".to_string(),
            client_secret: "app-secret".to_string(),
            environment: Environment::Sandbox,
            account_id: None,
        };
        EbayClient::with_transport(Config::new(credentials), Box::new(transport.clone()))
    }

    #[test]
    fn serialize_create_offer_request() {
        let offer = CreateOfferRequest {
            sku: "A1".to_string(),
            marketplace_id: "EBAY_US".to_string(),
            pricing_summary: PricingSummary {
                price: Price::usd("9.99"),
            },
            available_quantity: 3,
            format: "FIXED_PRICE".to_string(),
            listing_description: "A fine widget".to_string(),
            category_id: None,
            listing_policies: None,
        };
        assert_eq!(
            json!({
                "sku": "A1",
                "marketplaceId": "EBAY_US",
                "pricingSummary": {"price": {"value": "9.99", "currency": "USD"}},
                "availableQuantity": 3,
                "format": "FIXED_PRICE",
                "listingDescription": "A fine widget"
            }),
            json!(offer)
        );
    }

    #[test]
    fn listing_policies_merge_into_the_payload_root() {
        let offer = CreateOfferRequest {
            sku: "A1".to_string(),
            marketplace_id: "EBAY_US".to_string(),
            pricing_summary: PricingSummary {
                price: Price::usd("9.99"),
            },
            available_quantity: 1,
            format: "FIXED_PRICE".to_string(),
            listing_description: "A fine widget".to_string(),
            category_id: Some("12345".to_string()),
            listing_policies: Some(json!({"listingPolicies": {"fulfillmentPolicyId": "F-1"}})),
        };
        let value = json!(offer);
        assert_eq!("12345", value["categoryId"]);
        assert_eq!("F-1", value["listingPolicies"]["fulfillmentPolicyId"]);
    }

    #[test]
    fn serialize_partial_offer_update() {
        let update = OfferUpdate {
            available_quantity: Some(0),
            listing_policies: Some(json!({})),
            ..Default::default()
        };
        assert_eq!(
            json!({"availableQuantity": 0, "listingPolicies": {}}),
            json!(update)
        );
    }

    #[test]
    fn offer_operations_require_the_user_token() {
        let transport = TestTransport::new();
        let client = client(&transport);

        let create = client
            .offer
            .create_offer("A1", "9.99", 3, "Widget", None, None)
            .err()
            .unwrap();
        let publish = client.offer.publish_offer("O-1").err().unwrap();
        let end = client
            .offer
            .end_listing("O-1", DEFAULT_END_REASON)
            .err()
            .unwrap();
        for err in vec![create, publish, end] {
            match err {
                SyncError::AuthError { tier, .. } => assert_eq!(TokenTier::User, tier),
                other => panic!("expected an auth error, got {}", other),
            }
        }
        // Nothing reached the wire without a token.
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn offer_operations_delegate_once_a_user_token_is_set() {
        let transport = TestTransport::new();
        transport.stub(Method::POST, "oauth2/token", StatusCode::OK, TOKEN_BODY);
        transport.stub(Method::POST, "/offer", StatusCode::OK, r#"{"offerId":"O-1"}"#);
        let client = client(&transport);
        client.set_user_token("user-token".to_string(), None).unwrap();

        let created = client
            .offer
            .create_offer("A1", "9.99", 3, "Widget", None, None)
            .unwrap();
        assert_eq!("O-1", created.offer_id);

        let requests = transport.requests();
        assert_eq!(1, requests.len());
        match &requests[0].auth {
            RequestAuth::Bearer(token) => assert_eq!("user-token", token),
            other => panic!("expected a bearer token, got {:?}", other),
        }
    }

    #[test]
    fn end_listing_zeroes_the_available_quantity() {
        let transport = TestTransport::new();
        transport.stub(Method::PATCH, "/offer/", StatusCode::OK, "{}");
        let client = client(&transport);
        client.set_user_token("user-token".to_string(), None).unwrap();

        client.offer.end_listing("O-9", DEFAULT_END_REASON).unwrap();

        let requests = transport.requests_to("/offer/O-9");
        assert_eq!(1, requests.len());
        match &requests[0].body {
            marketplace::RequestBody::Json(body) => {
                assert_eq!(json!({"availableQuantity": 0, "listingPolicies": {}}), *body)
            }
            other => panic!("expected a JSON body, got {:?}", other),
        }
    }
}
