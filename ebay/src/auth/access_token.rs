use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Reported lifetimes are trimmed by this margin so a token is never sent
/// right at its expiry instant.
pub const EXPIRY_MARGIN_SECONDS: i64 = 60;

fn default_expires_in() -> i64 {
    7200
}

#[derive(Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
    #[serde(default = "Utc::now")]
    fetched_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn is_expired(&self) -> bool {
        self.fetched_at + Duration::seconds(self.expires_in - EXPIRY_MARGIN_SECONDS) <= Utc::now()
    }
}
