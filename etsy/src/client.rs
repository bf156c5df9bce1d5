use crate::config::Config;
use crate::listings::ListingEndpoint;
use marketplace::{HttpTransport, SyncError, Transport};
use std::sync::{Arc, RwLock};

pub struct EtsyClient {
    pub listings: ListingEndpoint,
    access_token: Arc<RwLock<Option<String>>>,
}

impl EtsyClient {
    pub fn new(config: Config) -> Result<EtsyClient, SyncError> {
        Ok(EtsyClient::with_transport(
            config,
            Box::new(HttpTransport::new()?),
        ))
    }

    pub fn from_env() -> Result<EtsyClient, SyncError> {
        EtsyClient::new(Config::from_env())
    }

    pub fn with_transport(
        config: Config,
        transport: Box<dyn Transport + Send + Sync>,
    ) -> EtsyClient {
        let Config {
            credentials,
            access_token,
        } = config;
        let access_token = Arc::new(RwLock::new(access_token));
        EtsyClient {
            listings: ListingEndpoint::new(
                credentials.client_id,
                credentials.account_id,
                access_token.clone(),
                transport,
            ),
            access_token,
        }
    }

    /// Seller tokens are minted and refreshed by an external OAuth flow;
    /// hand one over before calling seller-scoped operations.
    pub fn set_access_token(&self, token: String) -> Result<(), SyncError> {
        *self
            .access_token
            .write()
            .map_err(|_| SyncError::ConcurrencyError)? = Some(token);
        Ok(())
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token
            .read()
            .map(|token| token.is_some())
            .unwrap_or(false)
    }
}
