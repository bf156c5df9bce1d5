use serde::{Deserialize, Serialize};

fn default_price() -> String {
    "0.00".to_string()
}

/// The unit of synchronization handed over by the caller, shaped like the
/// listing row it was loaded from. The SKU is the sole correlation key
/// between the local record and marketplace inventory; the per-marketplace
/// id fields are only consulted when deleting.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListingItem {
    pub sku: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    /// String-formatted decimal, passed through to the marketplace untouched.
    #[serde(default = "default_price")]
    pub price: String,
    #[serde(default)]
    pub ebay_offer_id: Option<String>,
    #[serde(default)]
    pub etsy_listing_id: Option<String>,
}

impl ListingItem {
    pub fn new<S: Into<String>, T: Into<String>>(sku: S, title: T) -> ListingItem {
        ListingItem {
            sku: sku.into(),
            title: title.into(),
            description: None,
            category: None,
            quantity: 0,
            price: default_price(),
            ebay_offer_id: None,
            etsy_listing_id: None,
        }
    }

    /// The description shown on the listing; an absent or empty description
    /// falls back to the title.
    pub fn listing_description(&self) -> &str {
        match self.description.as_ref() {
            Some(description) if !description.is_empty() => description,
            _ => &self.title,
        }
    }
}
