pub mod math;

pub use math::cosine_similarity;

use crate::embeddings::{EmbeddingError, EmbeddingProvider};
use serde::Serialize;
use tracing::{debug, info};

/// Parameters of a single comparison, immutable for its duration.
///
/// The same credential, model, language and locale are used for both embedding
/// calls so the two vectors come out of the same embedding space.
#[derive(Debug, Clone)]
pub struct ComparisonRequest {
    pub api_key: String,
    /// Embedding model identifier, e.g. "text-embedding-3-small".
    pub model: String,
    /// Language code, e.g. "ja", "en", "fr".
    pub language: String,
    /// Locale, e.g. "ja_JP", "en_US", "fr_FR".
    pub locale: Option<String>,
    pub base_text: String,
    pub target_text: String,
}

/// Outcome of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Cosine similarity of the two embeddings, rounded to six decimal places.
    pub similarity: f64,
    /// Model identifier echoed from the request.
    pub model: String,
    /// Language code echoed from the request.
    pub language: String,
}

/// Compares the semantic similarity of two texts through an embedding provider.
///
/// The service is stateless beyond the provider it owns; one instance can be
/// shared across tasks and every comparison is independent.
pub struct SimilarityService<P: EmbeddingProvider> {
    provider: P,
}

impl<P: EmbeddingProvider> SimilarityService<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Computes the semantic similarity of the request's two texts.
    ///
    /// Fetches the embedding for the base text, then for the target text, and
    /// reduces the pair with cosine similarity. The calls are strictly
    /// sequential; when the first one fails the second is never issued.
    ///
    /// # Errors
    ///
    /// Any [`EmbeddingError`] raised by the provider is propagated unchanged.
    /// There is no partial result.
    pub async fn compare(
        &self,
        request: &ComparisonRequest,
    ) -> Result<ComparisonResult, EmbeddingError> {
        info!(
            model = %request.model,
            language = %request.language,
            "comparing texts"
        );
        let embedding_a = self
            .provider
            .embed(
                &request.api_key,
                &request.model,
                &request.base_text,
                &request.language,
                request.locale.as_deref(),
            )
            .await?;
        let embedding_b = self
            .provider
            .embed(
                &request.api_key,
                &request.model,
                &request.target_text,
                &request.language,
                request.locale.as_deref(),
            )
            .await?;

        let similarity = cosine_similarity(&embedding_a, &embedding_b);
        // six decimal places
        let similarity = (similarity * 1e6).round() / 1e6;
        debug!(
            similarity,
            dimension = embedding_a.len(),
            "comparison finished"
        );

        Ok(ComparisonResult {
            similarity,
            model: request.model.clone(),
            language: request.language.clone(),
        })
    }
}
