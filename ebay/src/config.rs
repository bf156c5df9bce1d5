use dotenv::dotenv;
use marketplace::{Credentials, Environment};
use std::env;

const EBAY_CLIENT_ID: &str = "EBAY_CLIENT_ID";
const EBAY_CLIENT_SECRET: &str = "EBAY_CLIENT_SECRET";
const EBAY_ENV: &str = "EBAY_ENV";
const EBAY_SCOPE: &str = "EBAY_SCOPE";
const EBAY_MARKETPLACE_ID: &str = "EBAY_MARKETPLACE_ID";

pub struct Config {
    pub credentials: Credentials,
    pub marketplace_id: String,
    pub scope: String,
}

impl Config {
    pub fn new(credentials: Credentials) -> Config {
        Config {
            credentials,
            marketplace_id: crate::DEFAULT_MARKETPLACE_ID.to_string(),
            scope: crate::DEFAULT_SELL_SCOPE.to_string(),
        }
    }

    pub fn from_env() -> Config {
        dotenv().ok();

        let client_id =
            env::var(EBAY_CLIENT_ID).expect(&format!("{} must be defined.", EBAY_CLIENT_ID));
        let client_secret = env::var(EBAY_CLIENT_SECRET)
            .expect(&format!("{} must be defined.", EBAY_CLIENT_SECRET));
        let environment: Environment = env::var(EBAY_ENV)
            .expect(&format!("{} must be defined.", EBAY_ENV))
            .parse()
            .expect(&format!("{} must be 'sandbox' or 'production'.", EBAY_ENV));
        let scope =
            env::var(EBAY_SCOPE).unwrap_or_else(|_| crate::DEFAULT_SELL_SCOPE.to_string());
        let marketplace_id = env::var(EBAY_MARKETPLACE_ID)
            .unwrap_or_else(|_| crate::DEFAULT_MARKETPLACE_ID.to_string());

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
                environment,
                account_id: None,
            },
            marketplace_id,
            scope,
        }
    }
}
