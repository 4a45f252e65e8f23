pub mod error;
pub mod http;
pub mod types;

pub use error::GatewayError;
pub use http::{HttpClient, HttpClientConfig};
pub use types::{ChatRole, Completion, CompletionUsage, Message, ResponseMetadata, build_messages};
