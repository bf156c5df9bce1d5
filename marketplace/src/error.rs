use snafu::Snafu;
use std::fmt;

pub type MarketplaceResult<T> = Result<T, SyncError>;

/// The trust level a token represents: the integration itself, or a specific
/// authorized seller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenTier {
    Application,
    User,
}

impl fmt::Display for TokenTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenTier::Application => write!(f, "application"),
            TokenTier::User => write!(f, "user"),
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum SyncError {
    #[snafu(display("No usable {} token for {}: {}", tier, marketplace, details))]
    AuthError {
        marketplace: &'static str,
        tier: TokenTier,
        details: String,
    },
    #[snafu(display("{} API error {}: {}", marketplace, status, body))]
    ApiError {
        marketplace: &'static str,
        status: u16,
        body: String,
    },
    #[snafu(display("Error occurred when calling {}: {}", url, source))]
    HttpError { url: String, source: reqwest::Error },
    #[snafu(display("Could not initialize the HTTP transport: {}", source))]
    TransportError { source: reqwest::Error },
    #[snafu(display("Could not deserialize response body:{}, Error:{}", body, source))]
    DeserializationError {
        body: String,
        source: serde_json::Error,
    },
    #[snafu(display("Could not lock the token cache because the mutex is poisoned"))]
    ConcurrencyError,
}

impl SyncError {
    /// Whether the failure happened on the marketplace side of the wire.
    /// Remote failures are tolerated during best-effort cleanup; anything
    /// else is a local defect and must propagate.
    pub fn is_remote_failure(&self) -> bool {
        match self {
            SyncError::AuthError { .. }
            | SyncError::ApiError { .. }
            | SyncError::HttpError { .. }
            | SyncError::DeserializationError { .. } => true,
            SyncError::TransportError { .. } | SyncError::ConcurrencyError => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn api_error_display_carries_the_status_code() {
        let error = SyncError::ApiError {
            marketplace: "eBay",
            status: 502,
            body: "upstream unavailable".to_string(),
        };
        let message = format!("{}", error);
        assert!(message.contains("502"));
        assert!(message.contains("upstream unavailable"));
    }

    #[test]
    fn cleanup_tolerates_remote_failures_only() {
        let remote = SyncError::ApiError {
            marketplace: "Etsy",
            status: 500,
            body: String::new(),
        };
        assert!(remote.is_remote_failure());
        assert!(!SyncError::ConcurrencyError.is_remote_failure());
    }
}
