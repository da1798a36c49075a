use crate::scraper::ScraperError;
use scraper::Selector;

const LISTING_WRAPPER: &str = "div.item-listing-wrap";
const TITLE: &str = "h2.item-title";
const PRICE: &str = "span.price";
const ADDRESS: &str = "address.item-address";
const AMENITIES: &str = "ul.item-amenities";
const PROPERTY_TYPE: &str = "li.h-type";
const AUTHOR: &str = "div.item-author";
const AUTHOR_LINK: &str = "a";
const DATE: &str = "div.item-date";

/// Compiled selectors for one listing card and the structural path of each field.
pub struct ListingSelectors {
    pub wrapper: Selector,
    pub title: Selector,
    pub price: Selector,
    pub address: Selector,
    pub amenities: Selector,
    pub property_type: Selector,
    pub author: Selector,
    pub author_link: Selector,
    pub date: Selector,
}

fn compile(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::HtmlParse(format!("selector '{css}': {e}")))
}

impl ListingSelectors {
    pub fn new() -> Result<Self, ScraperError> {
        Ok(Self {
            wrapper: compile(LISTING_WRAPPER)?,
            title: compile(TITLE)?,
            price: compile(PRICE)?,
            address: compile(ADDRESS)?,
            amenities: compile(AMENITIES)?,
            property_type: compile(PROPERTY_TYPE)?,
            author: compile(AUTHOR)?,
            author_link: compile(AUTHOR_LINK)?,
            date: compile(DATE)?,
        })
    }
}
