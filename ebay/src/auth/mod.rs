pub mod access_token;
pub mod auth_client;
pub mod token;
