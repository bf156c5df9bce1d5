use crate::auth::auth_client::AuthClient;
use crate::auth::token::TokenEndpoint;
use crate::config::Config;
use crate::sell_api::inventory::InventoryEndpoint;
use crate::sell_api::offer::OfferEndpoint;
use chrono::{DateTime, Utc};
use marketplace::{Environment, HttpTransport, SyncError, Transport};
use std::sync::{Arc, RwLock};

/// Client for the eBay Sell APIs, split the way eBay splits them: catalog
/// (inventory) operations ride the application token, sell-side (offer)
/// operations ride the seller's token. Inventory sync can therefore proceed
/// before a seller has completed OAuth login.
pub struct EbayClient {
    pub inventory: InventoryEndpoint,
    pub offer: OfferEndpoint,
    auth: Arc<RwLock<AuthClient>>,
}

impl EbayClient {
    pub fn new(config: Config) -> Result<EbayClient, SyncError> {
        let transport = Box::new(HttpTransport::new()?);
        Ok(EbayClient::with_transport(config, transport))
    }

    pub fn from_env() -> Result<EbayClient, SyncError> {
        EbayClient::new(Config::from_env())
    }

    pub fn with_transport(
        config: Config,
        transport: Box<dyn Transport + Send + Sync>,
    ) -> EbayClient {
        let Config {
            credentials,
            marketplace_id,
            scope,
        } = config;
        let (oauth_uri, sell_inventory_uri) = match credentials.environment {
            Environment::Production => (
                crate::PRODUCTION_OAUTH_URI,
                crate::PRODUCTION_SELL_INVENTORY_URI,
            ),
            Environment::Sandbox => (crate::SANDBOX_OAUTH_URI, crate::SANDBOX_SELL_INVENTORY_URI),
        };

        let token = TokenEndpoint::new(credentials, oauth_uri, scope, transport.clone());
        let auth = Arc::new(RwLock::new(AuthClient::new(token)));
        EbayClient {
            inventory: InventoryEndpoint::new(sell_inventory_uri, auth.clone(), transport.clone()),
            offer: OfferEndpoint::new(sell_inventory_uri, marketplace_id, auth.clone(), transport),
            auth,
        }
    }

    /// Store a seller token obtained by the caller's OAuth flow. The expiry
    /// is advisory; this client never refreshes a seller token itself.
    pub fn set_user_token(
        &self,
        token: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), SyncError> {
        self.auth
            .write()
            .map_err(|_| SyncError::ConcurrencyError)?
            .set_user_token(token, expires_at);
        Ok(())
    }

    pub fn has_user_token(&self) -> bool {
        self.auth
            .read()
            .map(|auth| auth.has_user_token())
            .unwrap_or(false)
    }
}
