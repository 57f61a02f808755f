pub mod provider;

pub use provider::EmbeddingProvider;

use thiserror::Error;

/// Errors raised by embedding providers.
///
/// Every provider maps its failures onto this taxonomy so that callers can
/// react to a transport failure, a remote rejection or a malformed payload
/// without knowing which backend produced it.
#[derive(Debug, Clone, Error)]
pub enum EmbeddingError {
    /// The endpoint was reached but answered with a non-success status.
    #[error("Provider error -> HTTP Status {0}: {1}")]
    ProviderError(u16, String),
    /// The request never completed (DNS failure, connection refused, timeout).
    #[error("RequestError: {0}")]
    RequestError(String),
    /// The endpoint reported success but the payload had no usable embedding.
    #[error("ParseError: {0}")]
    ParseError(String),
}
