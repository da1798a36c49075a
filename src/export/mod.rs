pub(crate) mod json;

pub use json::save_listings_json;
