pub mod openrouter {
    pub const API_BASE: &str = "https://openrouter.ai/api/v1";
    pub const CHAT_COMPLETIONS_ENDPOINT: &str = "/chat/completions";
    pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.1-8b-instruct";
    pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";
    pub const BASE_URL_ENV_VAR: &str = "OPENROUTER_BASE_URL";
    pub const MODEL_ENV_VAR: &str = "OPENROUTER_MODEL";
}

pub mod openai {
    pub const API_BASE: &str = "https://api.openai.com/v1";
    pub const EMBEDDINGS_ENDPOINT: &str = "/embeddings";
    pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
    pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
    pub const EMBEDDING_MODEL_ENV_VAR: &str = "EMBEDDING_MODEL";
}

/// Token ceiling sent with every chat completion unless overridden.
pub const DEFAULT_MAX_TOKENS: u32 = 12_000;
