use crate::auth::access_token::AccessToken;
use marketplace::{
    ApiRequest, AuthError, Credentials, Method, RequestAuth, SyncError, TokenTier, Transport,
};

/// Client-credentials exchange against the eBay OAuth endpoint. eBay takes
/// the application key pair as HTTP Basic auth and the grant as a form body.
pub struct TokenEndpoint {
    credentials: Credentials,
    oauth_uri: &'static str,
    scope: String,
    transport: Box<dyn Transport + Send + Sync>,
}

impl TokenEndpoint {
    pub fn new(
        credentials: Credentials,
        oauth_uri: &'static str,
        scope: String,
        transport: Box<dyn Transport + Send + Sync>,
    ) -> TokenEndpoint {
        TokenEndpoint {
            credentials,
            oauth_uri,
            scope,
            transport,
        }
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("grant_type", "client_credentials".to_string()),
            ("scope", self.scope.clone()),
        ]
    }

    pub fn create(&self) -> Result<AccessToken, SyncError> {
        let request = ApiRequest::new(
            Method::POST,
            self.oauth_uri.to_string(),
            RequestAuth::Basic {
                user: self.credentials.client_id.clone(),
                password: self.credentials.client_secret.clone(),
            },
        )
        .with_form(self.form_fields());

        let response = self.transport.dispatch(request)?;
        if !response.is_success() {
            return AuthError {
                marketplace: crate::MARKETPLACE,
                tier: TokenTier::Application,
                details: format!(
                    "token endpoint returned {}: {}",
                    response.status.as_u16(),
                    response.body
                ),
            }
            .fail();
        }

        match response.json::<AccessToken>() {
            Ok(token) => Ok(token),
            Err(err) => AuthError {
                marketplace: crate::MARKETPLACE,
                tier: TokenTier::Application,
                details: format!("could not read token response: {}", err),
            }
            .fail(),
        }
    }
}
