//! Error types for article-sieve.
//!
//! Only configuration mistakes are errors. A page without a content node,
//! an empty article list or an empty pagination set is a valid result.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The base URL used for link resolution could not be parsed.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        /// The rejected input.
        url: String,
        /// Parser diagnostic.
        #[source]
        source: url::ParseError,
    },

    /// The base URL parsed but names no host to resolve against
    /// (for example `mailto:` or `data:` URLs).
    #[error("base URL {0:?} has no host")]
    BaseUrlWithoutHost(String),

    /// The declared charset label is unknown to the decoder.
    #[error("unknown charset label: {0}")]
    UnknownCharset(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
