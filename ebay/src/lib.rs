#![cfg_attr(not(debug_assertions), deny(unused_variables))]
#![cfg_attr(not(debug_assertions), deny(unused_imports))]
#![cfg_attr(not(debug_assertions), deny(dead_code))]
#![deny(unused_must_use)]

pub const MARKETPLACE: &str = "eBay";

pub const PRODUCTION_OAUTH_URI: &str = "https://api.ebay.com/identity/v1/oauth2/token";
pub const SANDBOX_OAUTH_URI: &str = "https://api.sandbox.ebay.com/identity/v1/oauth2/token";
pub const PRODUCTION_SELL_INVENTORY_URI: &str = "https://api.ebay.com/sell/inventory/v1";
pub const SANDBOX_SELL_INVENTORY_URI: &str = "https://api.sandbox.ebay.com/sell/inventory/v1";

pub const DEFAULT_SELL_SCOPE: &str = "https://api.ebay.com/oauth/api_scope/sell.inventory";
pub const DEFAULT_MARKETPLACE_ID: &str = "EBAY_US";

mod auth;
mod config;
mod sell_api;
mod sync;
mod util;

pub use auth::auth_client::AuthClient;
pub use auth::token::TokenEndpoint;
pub use config::Config;
pub use sell_api::ebay_client::EbayClient;
pub use sell_api::inventory::{InventoryEndpoint, InventoryItemRequest, Product};
pub use sell_api::offer::{
    CreateOfferRequest, CreatedOffer, OfferEndpoint, OfferUpdate, Price, PricingSummary,
    DEFAULT_END_REASON,
};
