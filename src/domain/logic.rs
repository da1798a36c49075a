// src/domain/logic.rs

use crate::domain::listing::ListingRecord;

/// Case-sensitive substring check. A listing without an address, or with an
/// empty one, never matches.
pub fn address_matches_city(address: Option<&str>, city: &str) -> bool {
    match address {
        Some(addr) => !addr.is_empty() && addr.contains(city),
        None => false,
    }
}

impl ListingRecord {
    /// Only the address decides whether a listing belongs to `city`.
    pub fn is_in_city(&self, city: &str) -> bool {
        address_matches_city(self.address.as_deref(), city)
    }
}
