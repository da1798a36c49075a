use crate::domain::listing::ListingRecord;
use crate::scraper::ScraperError;
use std::fs;

/// Pretty JSON with two-space indent. Non-ASCII text is written as-is, not escaped.
pub fn listings_to_json(listings: &[ListingRecord]) -> Result<String, ScraperError> {
    serde_json::to_string_pretty(listings).map_err(|e| ScraperError::JsonWrite(e.to_string()))
}

/// Writes `listings` to `path`, replacing whatever was there.
pub fn save_listings_json(listings: &[ListingRecord], path: &str) -> Result<(), ScraperError> {
    let json = listings_to_json(listings)?;
    fs::write(path, json).map_err(|e| ScraperError::Io(format!("Failed to write {path}: {e}")))
}
