use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScraperError {
    Io(String),
    HtmlParse(String),
    JsonWrite(String),
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Io(msg) => write!(f, "IO error: {msg}"),
            ScraperError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
            ScraperError::JsonWrite(msg) => write!(f, "JSON write error: {msg}"),
        }
    }
}

impl Error for ScraperError {}
