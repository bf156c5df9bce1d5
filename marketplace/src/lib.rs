#![cfg_attr(not(debug_assertions), deny(unused_variables))]
#![cfg_attr(not(debug_assertions), deny(unused_imports))]
#![cfg_attr(not(debug_assertions), deny(dead_code))]
// Unused results usually mean a dropped error
#![deny(unused_must_use)]

mod credentials;
mod error;
mod item;
mod sync;
pub mod test_transport;
mod transport;

pub use credentials::{Credentials, Environment};
pub use error::*;
pub use item::ListingItem;
pub use reqwest::{Method, StatusCode};
pub use sync::{MarketplaceSync, SyncResult};
pub use test_transport::TestTransport;
pub use transport::{
    ApiRequest, ApiResponse, HttpTransport, RequestAuth, RequestBody, Transport, REQUEST_TIMEOUT,
};
