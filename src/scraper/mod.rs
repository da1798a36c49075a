mod extractor;
mod query;
mod scraper_error;
mod selectors;

pub use extractor::ListingExtractor;
pub use query::NodeQuery;
pub use scraper_error::ScraperError;
pub use selectors::ListingSelectors;
