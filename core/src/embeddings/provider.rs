use crate::embeddings::EmbeddingError;
use async_trait::async_trait;

#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate the embedding vector for `text`.
    ///
    /// The credential and model identifier are per-call arguments rather than
    /// construction-time state, so one provider instance can serve requests
    /// for any account and model of its backend. `language` and `locale` are
    /// accepted for providers that shape their requests per language; the
    /// hosted providers shipped with this crate embed raw text and leave both
    /// untouched.
    ///
    /// The returned vector is exactly what the backend emitted, with no
    /// normalization applied.
    async fn embed(
        &self,
        api_key: &str,
        model: &str,
        text: &str,
        language: &str,
        locale: Option<&str>,
    ) -> Result<Vec<f64>, EmbeddingError>;
}
