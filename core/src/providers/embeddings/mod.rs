mod openai;

pub use openai::OpenAIEmbeddingProvider;
