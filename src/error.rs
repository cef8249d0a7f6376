// src/error.rs
use thiserror::Error;

/// Everything that can go wrong while scraping one unit of work.
///
/// The first four variants are recoverable: the current source or player is
/// abandoned and the run moves on. `Client` and `Io` from top-level output are not.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16, snippet: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("no recognized structure found for {name}")]
    StructureNotFound { name: String },

    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Whether the run may continue past this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ScrapeError::Client(_) | ScrapeError::Io(_))
    }
}
