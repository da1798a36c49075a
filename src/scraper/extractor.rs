// extractor.rs
use crate::domain::listing::ListingRecord;
use crate::scraper::{ListingSelectors, NodeQuery, ScraperError};
use scraper::{ElementRef, Html};

pub struct ListingExtractor {
    selectors: ListingSelectors,
}

impl ListingExtractor {
    pub fn new() -> Result<Self, ScraperError> {
        Ok(Self {
            selectors: ListingSelectors::new()?,
        })
    }

    /// Every listing card in the document, in document order.
    pub fn listing_blocks<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        document.root_element().find_all(&self.selectors.wrapper)
    }

    /// One record per listing card, unfiltered.
    pub fn extract_all(&self, document: &Html) -> Vec<ListingRecord> {
        self.listing_blocks(document)
            .iter()
            .map(|block| self.extract_listing(block))
            .collect()
    }

    /// Records whose address contains `city`, in document order.
    pub fn extract_in_city(&self, document: &Html, city: &str) -> Vec<ListingRecord> {
        self.extract_all(document)
            .into_iter()
            .filter(|listing| listing.is_in_city(city))
            .collect()
    }

    /// Best effort: any missing element along a field's path leaves that field `None`.
    pub fn extract_listing<N: NodeQuery>(&self, block: &N) -> ListingRecord {
        let s = &self.selectors;

        // property type lives in the amenities list, author name in the author box link
        let property_type = block
            .find_first(&s.amenities)
            .and_then(|list| list.find_text(&s.property_type));

        let author = block
            .find_first(&s.author)
            .and_then(|author| author.find_text(&s.author_link));

        ListingRecord {
            title: block.find_text(&s.title),
            price: block.find_text(&s.price),
            address: block.find_text(&s.address),
            property_type,
            author,
            date: block.find_text(&s.date),
        }
    }
}
