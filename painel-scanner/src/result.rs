use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of probing a single link: the HTTP status code the server
/// answered with, or a description of why no answer arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusResult {
    Code(u16),
    Failure(String),
}

impl StatusResult {
    /// Only an exact 200 counts as OK; redirects were already followed.
    pub fn is_ok(&self) -> bool {
        matches!(self, StatusResult::Code(200))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, StatusResult::Failure(_))
    }
}

impl fmt::Display for StatusResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusResult::Code(code) => write!(f, "{}", code),
            StatusResult::Failure(reason) => write!(f, "{}", reason),
        }
    }
}
