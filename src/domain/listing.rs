use serde::{Deserialize, Serialize};

/// One property listing as read off the page.
///
/// Every field is the raw display text of its element, or `None` when the
/// element isn't there. Field order here is the key order in the JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub title: Option<String>,
    pub price: Option<String>,
    pub address: Option<String>,
    pub property_type: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}
