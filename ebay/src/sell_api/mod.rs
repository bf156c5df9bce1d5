pub mod ebay_client;
pub mod inventory;
pub mod offer;
