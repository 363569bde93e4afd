use std::error::Error as _;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ScanError {
    /// Render the error together with its source chain, skipping links whose
    /// text is already part of the message.
    pub fn describe(&self) -> String {
        let mut description = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            let text = err.to_string();
            if !text.is_empty() && !description.contains(&text) {
                description.push_str(": ");
                description.push_str(&text);
            }
            source = err.source();
        }
        description
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
