use textsim::providers::embeddings::OpenAIEmbeddingProvider;
use textsim::similarity::{ComparisonRequest, SimilarityService};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let api_key = match std::env::var("OPENAI_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Error: OPENAI_API_KEY environment variable is not set.");
            std::process::exit(1);
        }
    };

    let service = SimilarityService::new(OpenAIEmbeddingProvider::new());
    let result = service
        .compare(&ComparisonRequest {
            api_key,
            model: "text-embedding-3-small".to_string(),
            language: "ja".to_string(),
            locale: Some("ja_JP".to_string()),
            base_text: "今日は良い天気です".to_string(),
            target_text: "空が晴れていて気持ちが良い".to_string(),
        })
        .await
        .unwrap();

    println!(
        "similarity: {} (model: {}, language: {})",
        result.similarity, result.model, result.language
    );
}
