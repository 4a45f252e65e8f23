//! Provider handle configuration.
//!
//! OpenRouter serves chat completions (it understands the vLLM-style guided
//! decoding extension fields); OpenAI serves embeddings, which OpenRouter does
//! not offer. Each handle is configured once, either from the environment or
//! through the `with_*` setters, and is immutable afterwards.

pub mod constants;

use std::env;

use crate::core::{error::GatewayError, http::HttpClientConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenRouter,
    OpenAI,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::OpenRouter => write!(f, "OpenRouter"),
            Provider::OpenAI => write!(f, "OpenAI"),
        }
    }
}

impl Provider {
    /// Get the default environment variable name for this provider's API key
    pub fn default_api_key_env_var(&self) -> &'static str {
        match self {
            Provider::OpenRouter => constants::openrouter::API_KEY_ENV_VAR,
            Provider::OpenAI => constants::openai::API_KEY_ENV_VAR,
        }
    }
}

/// Configuration for the chat completions handle.
#[derive(Debug, Clone)]
pub struct ChatProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl ChatProviderConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: constants::openrouter::API_BASE.to_string(),
            model: constants::openrouter::DEFAULT_MODEL.to_string(),
            max_tokens: constants::DEFAULT_MAX_TOKENS,
        }
    }

    /// Reads `OPENROUTER_API_KEY` (required) plus the optional base URL and
    /// model overrides.
    pub fn from_env() -> Result<Self, GatewayError> {
        let api_key = env::var(constants::openrouter::API_KEY_ENV_VAR).map_err(|_| {
            GatewayError::Configuration(format!(
                "{} not set",
                constants::openrouter::API_KEY_ENV_VAR
            ))
        })?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var(constants::openrouter::BASE_URL_ENV_VAR) {
            config.base_url = base_url;
        }
        if let Ok(model) = env::var(constants::openrouter::MODEL_ENV_VAR) {
            config.model = model;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn provider(&self) -> Provider {
        Provider::OpenRouter
    }
}

/// Configuration for the embeddings handle.
#[derive(Debug, Clone)]
pub struct EmbeddingProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl EmbeddingProviderConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: constants::openai::API_BASE.to_string(),
            model: constants::openai::DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }

    /// Reads `OPENAI_API_KEY` (required) plus the optional embedding model
    /// override.
    pub fn from_env() -> Result<Self, GatewayError> {
        let api_key = env::var(constants::openai::API_KEY_ENV_VAR).map_err(|_| {
            GatewayError::Configuration(format!("{} not set", constants::openai::API_KEY_ENV_VAR))
        })?;

        let mut config = Self::new(api_key);
        if let Ok(model) = env::var(constants::openai::EMBEDDING_MODEL_ENV_VAR) {
            config.model = model;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn provider(&self) -> Provider {
        Provider::OpenAI
    }
}

/// Everything the gateway needs, built once and handed to
/// `CompletionGateway::new`. No process-wide state.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub chat: ChatProviderConfig,
    pub embeddings: EmbeddingProviderConfig,
    pub http: HttpClientConfig,
}

impl GatewayConfig {
    pub fn new(chat: ChatProviderConfig, embeddings: EmbeddingProviderConfig) -> Self {
        Self {
            chat,
            embeddings,
            http: HttpClientConfig::default(),
        }
    }

    /// Builds both handles from the environment. Fails if either API key is
    /// missing.
    pub fn from_env() -> Result<Self, GatewayError> {
        Ok(Self::new(
            ChatProviderConfig::from_env()?,
            EmbeddingProviderConfig::from_env()?,
        ))
    }

    pub fn with_http_config(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }
}
