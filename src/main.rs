use crate::config::ExtractConfig;

mod config;
mod domain;
mod export;
mod pipeline;
mod scraper;


fn main() {
    let config = ExtractConfig::default();

    if let Err(e) = pipeline::run(&config) {
        eprintln!("❌ Extraction failed: {e}");
        std::process::exit(1);
    }

    println!("{}", pipeline::confirmation_message(&config));
}
