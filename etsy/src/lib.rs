#![cfg_attr(not(debug_assertions), deny(unused_variables))]
#![cfg_attr(not(debug_assertions), deny(unused_imports))]
#![cfg_attr(not(debug_assertions), deny(dead_code))]
#![deny(unused_must_use)]

pub const MARKETPLACE: &str = "Etsy";

// Etsy has no sandbox; private test listings stand in for one.
pub const BASE_URI: &str = "https://openapi.etsy.com/v3/application";

mod client;
mod config;
mod listings;
mod sync;

pub use client::EtsyClient;
pub use config::Config;
pub use listings::{CreateListingRequest, ListingEndpoint};
