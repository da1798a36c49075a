// query.rs
use scraper::{ElementRef, Selector};

/// The handful of tree lookups the extractor needs.
///
/// Lookups only search below the node they are called on; the node itself is
/// never a match. A missing element is `None`, never an error, so field paths
/// can be chained with `and_then`.
pub trait NodeQuery: Sized {
    fn find_first(&self, selector: &Selector) -> Option<Self>;

    fn find_all(&self, selector: &Selector) -> Vec<Self>;

    /// Descendant text pieces, each trimmed, empty pieces dropped, joined with no separator.
    fn text_content(&self) -> String;

    fn find_text(&self, selector: &Selector) -> Option<String> {
        self.find_first(selector).map(|node| node.text_content())
    }
}

impl<'a> NodeQuery for ElementRef<'a> {
    fn find_first(&self, selector: &Selector) -> Option<Self> {
        let scope = self.id();
        self.select(selector).find(|el| el.id() != scope)
    }

    fn find_all(&self, selector: &Selector) -> Vec<Self> {
        let scope = self.id();
        self.select(selector).filter(|el| el.id() != scope).collect()
    }

    fn text_content(&self) -> String {
        self.text()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect()
    }
}
