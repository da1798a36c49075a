use crate::config::ExtractConfig;
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// A listing card in the shape the real-estate page uses. `None` leaves the element out.
#[derive(Default)]
pub struct Card<'a> {
    pub title: Option<&'a str>,
    pub price: Option<&'a str>,
    pub address: Option<&'a str>,
    pub property_type: Option<&'a str>,
    pub author: Option<&'a str>,
    pub date: Option<&'a str>,
}

impl Card<'_> {
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<div class="item-listing-wrap hz-item-gallery-js">"#);
        if let Some(title) = self.title {
            html += &format!(r#"<h2 class="item-title"><a href="/p/1">{title}</a></h2>"#);
        }
        if let Some(price) = self.price {
            html += &format!(r#"<ul class="item-price-wrap"><li><span class="price">{price}</span></li></ul>"#);
        }
        if let Some(address) = self.address {
            html += &format!(r#"<address class="item-address">{address}</address>"#);
        }
        if let Some(kind) = self.property_type {
            html += &format!(
                r#"<ul class="item-amenities item-amenities-with-icons"><li class="h-beds">3 Beds</li><li class="h-type"><span>{kind}</span></li></ul>"#
            );
        }
        if let Some(author) = self.author {
            html += &format!(r#"<div class="item-author"><i class="icon"></i><a href="/agent">{author}</a></div>"#);
        }
        if let Some(date) = self.date {
            html += &format!(r#"<div class="item-date"><i class="icon"></i> {date}</div>"#);
        }
        html += "</div>";
        html
    }
}

pub fn page(cards: &[Card]) -> String {
    let body: String = cards.iter().map(Card::to_html).collect();
    format!("<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body><div class=\"listing-view\">{body}</div></body></html>")
}

/// Scratch directory unique to one test. Removed again when dropped.
pub struct ScratchDir(PathBuf);

impl Deref for ScratchDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

pub fn scratch_dir(name: &str) -> ScratchDir {
    let dir = std::env::temp_dir().join(format!("listing_extract_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap_or_else(|e| panic!("create scratch dir failed: {e}"));
    ScratchDir(dir)
}

/// Writes `html` as the input page and returns a config pointing into `dir`.
pub fn config_with_page(dir: &Path, html: &str) -> ExtractConfig {
    let input = dir.join("scrap.html");
    let output = dir.join("pokhara_data.json");
    fs::write(&input, html).unwrap_or_else(|e| panic!("write fixture failed: {e}"));

    ExtractConfig::new(
        input.to_string_lossy(),
        output.to_string_lossy(),
        "Pokhara",
    )
}
