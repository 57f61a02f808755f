//! A [Voyage AI](https://voyageai.com) backend for textsim's `EmbeddingProvider` trait.
//!
//! The Voyage embeddings endpoint speaks the same wire shapes as the builtin
//! OpenAI provider: a JSON `{"model", "input"}` POST with bearer-token
//! authorization, answering `{"data": [{"embedding": [...]}]}` on success and
//! `{"error": {"message": ...}}` on failure.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use textsim::embeddings::{EmbeddingError, EmbeddingProvider};
use tracing::debug;

const VOYAGEAI_ENDPOINT: &str = "https://api.voyageai.com/v1/embeddings";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Implementation of textsim's `EmbeddingProvider` trait for Voyage AI.
///
/// Use with models such as `voyage-3-lite` or `voyage-large-2`. The
/// `language` and `locale` arguments of the trait are accepted but not
/// transmitted; Voyage embeds raw text regardless of declared language.
///
/// # Examples
///
/// ```rust,no_run
/// use textsim::similarity::SimilarityService;
/// use textsim_voyageai::VoyageAIEmbeddingProvider;
///
/// let service = SimilarityService::new(VoyageAIEmbeddingProvider::new());
/// ```
pub struct VoyageAIEmbeddingProvider {
    api_url: String,
    client: Client,
}

impl VoyageAIEmbeddingProvider {
    /// Creates a provider pointed at the official Voyage AI endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_api_url(VOYAGEAI_ENDPOINT)
    }

    /// Creates a provider pointed at a custom URL, for tests and proxies.
    #[must_use]
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            client: Client::new(),
        }
    }
}

impl Default for VoyageAIEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct VoyageAIEmbeddingResponse {
    pub data: Vec<VoyageAIEmbeddingData>,
}

#[derive(Deserialize)]
struct VoyageAIEmbeddingData {
    pub embedding: Vec<f64>,
}

#[derive(Deserialize)]
struct VoyageAIErrorResponse {
    error: Option<VoyageAIErrorBody>,
}

#[derive(Deserialize)]
struct VoyageAIErrorBody {
    message: Option<String>,
}

#[async_trait]
impl EmbeddingProvider for VoyageAIEmbeddingProvider {
    async fn embed(
        &self,
        api_key: &str,
        model: &str,
        text: &str,
        _language: &str,
        _locale: Option<&str>,
    ) -> Result<Vec<f64>, EmbeddingError> {
        let request_body = json!({
                "model": model,
                "input": text,
        });
        debug!(model, text_len = text.len(), "sending embedding request");
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| EmbeddingError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<VoyageAIErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(EmbeddingError::ProviderError(status.as_u16(), message));
        }

        let response = response
            .json::<VoyageAIEmbeddingResponse>()
            .await
            .map_err(|e| EmbeddingError::ParseError(e.to_string()))?;

        response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| {
                EmbeddingError::ParseError("response contained no embedding data".to_string())
            })
    }
}
