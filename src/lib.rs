//! # llmgate
//!
//! A thin gateway over OpenAI-compatible LLM services: chat completions with
//! server-side guided decoding (JSON schema, enumerated choice sets, regular
//! expressions) on one handle, embeddings on a second.
//!
//! Every operation is a single request/response round trip. There is no retry,
//! caching, or batching layer; failures propagate to the caller unchanged.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use llmgate::{CompletionGateway, GatewayConfig, build_messages};
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, JsonSchema)]
//! struct Analysis {
//!     sentiment: String,
//!     confidence: f32,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = CompletionGateway::new(GatewayConfig::from_env()?)?;
//!
//!     let messages = build_messages(
//!         "Analyze: 'This library is amazing!'",
//!         Some("You are a helpful assistant."),
//!     );
//!     let analysis: Analysis = gateway.generate_structured(messages).await?;
//!     println!("{}: {}", analysis.sentiment, analysis.confidence);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod gateway;
pub mod provider;

pub use crate::core::{
    error::GatewayError,
    http::HttpClientConfig,
    types::{ChatRole, Completion, CompletionUsage, Message, ResponseMetadata, build_messages},
};
pub use crate::gateway::CompletionGateway;
pub use crate::provider::{ChatProviderConfig, EmbeddingProviderConfig, GatewayConfig, Provider};
