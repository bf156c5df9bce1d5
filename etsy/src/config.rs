use dotenv::dotenv;
use log::Level::Warn;
use logging::jlog;
use marketplace::{Credentials, Environment};
use serde_json::json;
use std::env;

const ETSY_CLIENT_ID: &str = "ETSY_CLIENT_ID";
const ETSY_CLIENT_SECRET: &str = "ETSY_CLIENT_SECRET";
const ETSY_ENV: &str = "ETSY_ENV";
const ETSY_SHOP_ID: &str = "ETSY_SHOP_ID";
const ETSY_ACCESS_TOKEN: &str = "ETSY_ACCESS_TOKEN";

pub struct Config {
    pub credentials: Credentials,
    /// Seller bearer token minted by an external OAuth flow. Optional at
    /// construction; without it only construction succeeds, not API calls.
    pub access_token: Option<String>,
}

impl Config {
    pub fn new(credentials: Credentials) -> Config {
        Config {
            credentials,
            access_token: None,
        }
    }

    pub fn from_env() -> Config {
        dotenv().ok();

        let client_id =
            env::var(ETSY_CLIENT_ID).expect(&format!("{} must be defined.", ETSY_CLIENT_ID));
        let client_secret = env::var(ETSY_CLIENT_SECRET)
            .expect(&format!("{} must be defined.", ETSY_CLIENT_SECRET));
        let environment: Environment = env::var(ETSY_ENV)
            .expect(&format!("{} must be defined.", ETSY_ENV))
            .parse()
            .expect(&format!("{} must be 'sandbox' or 'production'.", ETSY_ENV));
        let account_id = env::var(ETSY_SHOP_ID).ok();
        let access_token = env::var(ETSY_ACCESS_TOKEN).ok();
        if account_id.is_none() || access_token.is_none() {
            jlog!(Warn, "etsy::config", "Etsy shop id and access token not provided; seller operations will be rejected", {
                "shop_id_present": account_id.is_some(),
                "access_token_present": access_token.is_some()
            });
        }

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
                environment,
                account_id,
            },
            access_token,
        }
    }
}
