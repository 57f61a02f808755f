use crate::embeddings::{EmbeddingError, EmbeddingProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Implementation of the [`EmbeddingProvider`] trait for the
/// [OpenAI embeddings API](https://platform.openai.com/docs/guides/embeddings).
///
/// The provider holds nothing but the target URL and a reqwest client;
/// credential and model travel with every call. Each call performs exactly one
/// outbound request, bounded by a 30 second timeout, with no retries.
///
/// # Examples
///
/// ```rust,no_run
/// use textsim::embeddings::EmbeddingProvider;
/// use textsim::providers::embeddings::OpenAIEmbeddingProvider;
///
/// async fn example(api_key: &str) {
///     let provider = OpenAIEmbeddingProvider::new();
///     let vector = provider
///         .embed(api_key, "text-embedding-3-small", "hello", "en", None)
///         .await
///         .unwrap();
///     println!("dimension: {}", vector.len());
/// }
/// ```
pub struct OpenAIEmbeddingProvider {
    api_url: String,
    client: Client,
}

impl OpenAIEmbeddingProvider {
    /// Creates a provider pointed at the official OpenAI endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_api_url(OPENAI_ENDPOINT)
    }

    /// Creates a provider pointed at a custom URL, for OpenAI-compatible
    /// endpoints and for tests.
    #[must_use]
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            client: Client::new(),
        }
    }
}

impl Default for OpenAIEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct OpenAIEmbeddingResponse {
    pub data: Vec<OpenAIEmbeddingData>,
}

#[derive(Deserialize)]
struct OpenAIEmbeddingData {
    pub embedding: Vec<f64>,
}

#[derive(Deserialize)]
struct OpenAIErrorResponse {
    error: Option<OpenAIErrorBody>,
}

#[derive(Deserialize)]
struct OpenAIErrorBody {
    message: Option<String>,
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
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
                .json::<OpenAIErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            warn!(
                status = status.as_u16(),
                remote_message = %message,
                "embedding request rejected"
            );
            return Err(EmbeddingError::ProviderError(status.as_u16(), message));
        }

        let response = response
            .json::<OpenAIEmbeddingResponse>()
            .await
            .map_err(|e| EmbeddingError::ParseError(e.to_string()))?;

        let embedding = response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| {
                EmbeddingError::ParseError("response contained no embedding data".to_string())
            })?;
        debug!(dimension = embedding.len(), "embedding received");
        Ok(embedding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embed_parses_successful_response() {
        let mut mock_server = mockito::Server::new_async().await;
        let mock = mock_server
            .mock("POST", "/")
            .match_header("authorization", "Bearer sk-test")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(r#"{"data":[{"embedding":[0.1,-0.2,0.3]}]}"#)
            .create();

        let provider = OpenAIEmbeddingProvider::with_api_url(mock_server.url());
        let result = provider
            .embed("sk-test", "text-embedding-3-small", "hello", "en", None)
            .await;

        mock.assert();
        assert_eq!(result.unwrap(), vec![0.1, -0.2, 0.3]);
    }

    #[tokio::test]
    async fn embed_surfaces_remote_error_message() {
        let mut mock_server = mockito::Server::new_async().await;
        let _mock = mock_server
            .mock("POST", "/")
            .with_status(401)
            .with_body(r#"{"error":{"message":"Invalid API key"}}"#)
            .create();

        let provider = OpenAIEmbeddingProvider::with_api_url(mock_server.url());
        let result = provider
            .embed("sk-bad", "text-embedding-3-small", "hello", "en", None)
            .await;

        match result.unwrap_err() {
            EmbeddingError::ProviderError(status, message) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("expected ProviderError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn embed_falls_back_to_unknown_error_on_unparseable_body() {
        let mut mock_server = mockito::Server::new_async().await;
        let _mock = mock_server
            .mock("POST", "/")
            .with_status(500)
            .with_body("internal server error")
            .create();

        let provider = OpenAIEmbeddingProvider::with_api_url(mock_server.url());
        let result = provider
            .embed("sk-test", "text-embedding-3-small", "hello", "en", None)
            .await;

        match result.unwrap_err() {
            EmbeddingError::ProviderError(status, message) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Unknown error");
            }
            other => panic!("expected ProviderError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn embed_rejects_response_without_embedding_data() {
        let mut mock_server = mockito::Server::new_async().await;
        let _mock = mock_server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"data":[]}"#)
            .create();

        let provider = OpenAIEmbeddingProvider::with_api_url(mock_server.url());
        let result = provider
            .embed("sk-test", "text-embedding-3-small", "hello", "en", None)
            .await;

        assert!(matches!(result, Err(EmbeddingError::ParseError(_))));
    }

    #[tokio::test]
    async fn embed_fails_with_request_error_when_unreachable() {
        // reserved port with nothing listening
        let provider = OpenAIEmbeddingProvider::with_api_url("http://127.0.0.1:9");
        let result = provider
            .embed("sk-test", "text-embedding-3-small", "hello", "en", None)
            .await;

        assert!(matches!(result, Err(EmbeddingError::RequestError(_))));
    }

    #[tokio::test]
    #[ignore]
    async fn simple_openai_embed_request() {
        let api_key = std::env::var("OPENAI_API_KEY").unwrap();
        let provider = OpenAIEmbeddingProvider::new();

        let response = provider
            .embed(&api_key, "text-embedding-3-small", "test", "en", None)
            .await;

        assert!(response.is_ok());
    }
}
