use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON from {url}: {reason}")]
    InvalidJson { url: String, reason: String },

    #[error("no regions found in response from {url}")]
    NoRegionsFound { url: String },

    #[error("invalid selector: {selector}")]
    InvalidSelector { selector: String },

    #[error("invalid pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
