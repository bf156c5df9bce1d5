use crate::auth::access_token::AccessToken;
use crate::auth::token::TokenEndpoint;
use chrono::{DateTime, Utc};
use marketplace::{AuthError, SyncError, TokenTier};

/// Externally obtained seller token. The expiry, when known, is advisory:
/// nothing here refreshes a user token.
pub struct UserToken {
    token: String,
    expires_at: Option<DateTime<Utc>>,
}

/// Both token tiers for one eBay application: the cached client-credentials
/// token and the seller token handed in by the caller. A host that shares a
/// client across threads wraps this in a lock; the check-refresh-store in
/// `get_application_token` must run under one exclusive acquisition.
pub struct AuthClient {
    token: TokenEndpoint,
    application_token: Option<AccessToken>,
    user_token: Option<UserToken>,
}

impl AuthClient {
    pub fn new(token: TokenEndpoint) -> AuthClient {
        AuthClient {
            token,
            application_token: None,
            user_token: None,
        }
    }

    /// Cached token while it lives, one fresh exchange when it does not.
    pub fn get_application_token(&mut self) -> Result<String, SyncError> {
        let refresh = match self.application_token.as_ref() {
            Some(token) => token.is_expired(),
            None => true,
        };
        if refresh {
            self.application_token = Some(self.token.create()?);
        }
        Ok(self
            .application_token
            .as_ref()
            .unwrap()
            .access_token
            .to_string())
    }

    pub fn set_user_token(&mut self, token: String, expires_at: Option<DateTime<Utc>>) {
        self.user_token = Some(UserToken { token, expires_at });
    }

    pub fn has_user_token(&self) -> bool {
        self.user_token.is_some()
    }

    pub fn user_token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.user_token.as_ref().and_then(|user| user.expires_at)
    }

    pub fn require_user_token(&self) -> Result<String, SyncError> {
        match self.user_token.as_ref() {
            Some(user) => Ok(user.token.clone()),
            None => AuthError {
                marketplace: crate::MARKETPLACE,
                tier: TokenTier::User,
                details: "no seller token has been set".to_string(),
            }
            .fail(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use marketplace::{Credentials, Environment, Method, StatusCode, TestTransport};

    fn auth_client(transport: &TestTransport) -> AuthClient {
        let credentials = Credentials {
            client_id: "app-id".to_string(),
            client_secret: "app-secret".to_string(),
            environment: Environment::Sandbox,
            account_id: None,
        };
        AuthClient::new(TokenEndpoint::new(
            credentials,
            crate::SANDBOX_OAUTH_URI,
            crate::DEFAULT_SELL_SCOPE.to_string(),
            Box::new(transport.clone()),
        ))
    }

    #[test]
    fn application_token_is_fetched_once_within_its_lifetime() {
        let transport = TestTransport::new();
        transport.stub(
            Method::POST,
            "oauth2/token",
            StatusCode::OK,
            r#"{"access_token":"app-token","expires_in":7200}"#,
        );
        let mut auth = auth_client(&transport);
        assert_eq!("app-token", auth.get_application_token().unwrap());
        assert_eq!("app-token", auth.get_application_token().unwrap());
        assert_eq!(1, transport.requests_to("oauth2/token").len());
    }

    #[test]
    fn expired_application_token_triggers_exactly_one_more_exchange() {
        let transport = TestTransport::new();
        transport.stub(
            Method::POST,
            "oauth2/token",
            StatusCode::OK,
            r#"{"access_token":"app-token","expires_in":60}"#,
        );
        let mut auth = auth_client(&transport);
        auth.get_application_token().unwrap();
        assert_eq!(1, transport.requests_to("oauth2/token").len());
        auth.get_application_token().unwrap();
        assert_eq!(2, transport.requests_to("oauth2/token").len());
    }

    #[test]
    fn require_user_token_guards_the_user_tier() {
        let transport = TestTransport::new();
        let mut auth = auth_client(&transport);
        assert!(!auth.has_user_token());
        match auth.require_user_token().err().unwrap() {
            SyncError::AuthError { tier, .. } => assert_eq!(TokenTier::User, tier),
            other => panic!("expected an auth error, got {}", other),
        }

        auth.set_user_token("user-token".to_string(), None);
        assert!(auth.has_user_token());
        assert_eq!("user-token", auth.require_user_token().unwrap());
        assert_eq!(None, auth.user_token_expires_at());
    }
}
