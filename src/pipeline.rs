// src/pipeline.rs

use crate::config::ExtractConfig;
use crate::export::save_listings_json;
use crate::scraper::{ListingExtractor, ScraperError};
use scraper::Html;
use std::fs;

#[derive(Debug, PartialEq)]
pub struct ExtractionReport {
    pub wrappers_found: usize,
    pub matched: usize,
}

/// Read the saved page, keep the listings in `target_city`, write them out as JSON.
pub fn run(config: &ExtractConfig) -> Result<ExtractionReport, ScraperError> {
    let html = fs::read_to_string(&config.input_path)
        .map_err(|e| ScraperError::Io(format!("Failed to read {}: {e}", config.input_path)))?;

    let document = Html::parse_document(&html);
    let extractor = ListingExtractor::new()?;

    let wrappers_found = extractor.listing_blocks(&document).len();
    let matching = extractor.extract_in_city(&document, &config.target_city);

    save_listings_json(&matching, &config.output_path)?;
    eprintln!(
        "📄 {} of {wrappers_found} listings in {}",
        matching.len(),
        config.target_city
    );

    Ok(ExtractionReport {
        wrappers_found,
        matched: matching.len(),
    })
}

/// The line printed to stdout after a successful run.
pub fn confirmation_message(config: &ExtractConfig) -> String {
    format!("{} data saved to {}", config.target_city, config.output_path)
}
