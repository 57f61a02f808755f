//! # Textsim - Core API Documentation
//!
//! Textsim computes the semantic similarity of two short texts in the same
//! language by embedding each of them through a remote embedding API and
//! comparing the resulting vectors with cosine similarity.
//!
//! ## Components
//!
//! - **Embedding providers**: implementations of the [`embeddings::EmbeddingProvider`]
//!   trait that turn a text into a vector. The builtin
//!   [`providers::embeddings::OpenAIEmbeddingProvider`] talks to the OpenAI
//!   embeddings endpoint; further providers live in their own integration crates.
//! - **Similarity service**: [`similarity::SimilarityService`] owns a provider,
//!   fetches the two embeddings and reduces them to a single score.
//!
//! ## Example
//!
//! ```rust,no_run
//! use textsim::providers::embeddings::OpenAIEmbeddingProvider;
//! use textsim::similarity::{ComparisonRequest, SimilarityService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = SimilarityService::new(OpenAIEmbeddingProvider::new());
//!     let request = ComparisonRequest {
//!         api_key: std::env::var("OPENAI_API_KEY").unwrap(),
//!         model: "text-embedding-3-small".to_string(),
//!         language: "en".to_string(),
//!         locale: Some("en_US".to_string()),
//!         base_text: "The weather is nice today".to_string(),
//!         target_text: "The sky is clear and it feels great".to_string(),
//!     };
//!     let result = service.compare(&request).await.unwrap();
//!     println!("similarity: {}", result.similarity);
//! }
//! ```
//!
//! Comparing embeddings is only meaningful when both come from the same model;
//! the service guarantees this by issuing both embedding calls with the exact
//! request parameters it was handed.

/// Text embedding support
///
/// Contains:
/// - The `EmbeddingProvider` trait implemented by every embedding backend
/// - The `EmbeddingError` taxonomy shared by all providers
pub mod embeddings;

/// Builtin embedding providers
pub mod providers;

/// Similarity scoring
///
/// Contains:
/// - `SimilarityService` for orchestrating a comparison
/// - The request/result types
/// - The pure vector math
pub mod similarity;
