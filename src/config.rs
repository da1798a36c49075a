// src/config.rs

/// Where to read the saved listings page, where to write the JSON, and which
/// city an address has to mention to be kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    pub input_path: String,
    pub output_path: String,
    pub target_city: String,
}

impl ExtractConfig {
    pub fn new(
        input_path: impl Into<String>,
        output_path: impl Into<String>,
        target_city: impl Into<String>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            target_city: target_city.into(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::new("scrap.html", "pokhara_data.json", "Pokhara")
    }
}
