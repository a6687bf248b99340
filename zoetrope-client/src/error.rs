//! Typed failures for the image feed.

/// Errors produced while fetching the remote image listing.
///
/// Cancellation is modeled as an error variant so callers can distinguish a
/// withdrawn request from a failed one; the feed state machine drops
/// cancelled results on the floor instead of surfacing them.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("missing listing API base URL")]
    MissingApiBase,

    #[error("invalid listing API base URL: {0}")]
    InvalidApiBase(#[from] url::ParseError),

    #[error("listing request failed: HTTP {status}")]
    Http { status: u16 },

    #[error("listing request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("listing request cancelled")]
    Cancelled,
}

impl FeedError {
    /// True when the result should be discarded silently.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FeedError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
