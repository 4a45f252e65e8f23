//! The completion gateway and its wire types.
//!
//! # API Compatibility
//!
//! The response structs keep fields the gateway does not currently read (choice
//! index, finish reason, embedding usage). They are part of the documented API
//! contract and are marked `#[allow(dead_code)]` rather than omitted.

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{
    error::GatewayError,
    http::HttpClient,
    types::{Completion, CompletionUsage, Message, ResponseMetadata},
};
use crate::provider::{GatewayConfig, Provider, constants};

/// Gateway over two pre-configured remote handles: chat completions with
/// guided decoding, and embeddings.
///
/// All methods take `&self` and perform one awaited round trip; callers may
/// issue them concurrently without coordination.
pub struct CompletionGateway {
    config: GatewayConfig,
    http: HttpClient,
}

impl CompletionGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let http = HttpClient::new(&config.http)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Generate a completion constrained to the JSON schema derived from `T`,
    /// then parse the assistant content into `T`.
    ///
    /// A payload that cannot be parsed into `T` is a `SchemaMismatch`.
    pub async fn generate_structured<T>(&self, messages: Vec<Message>) -> Result<T, GatewayError>
    where
        T: serde::de::DeserializeOwned + JsonSchema,
    {
        let schema = schema_for!(T);
        let schema_value =
            serde_json::to_value(&schema).map_err(|e| GatewayError::SchemaMismatch {
                message: "failed to serialize derived JSON schema".to_string(),
                source: Some(Box::new(e)),
            })?;

        let response = self
            .chat_request(messages, GuidedDecoding::Json(schema_value))
            .await?;
        let completion = into_completion(response, self.config.chat.provider())?;

        serde_json::from_str(&completion.content).map_err(|e| GatewayError::SchemaMismatch {
            message: "completion does not conform to the requested schema".to_string(),
            source: Some(Box::new(e)),
        })
    }

    /// Generate a completion constrained by a raw serialized JSON schema.
    ///
    /// The schema string is passed through unvalidated and the assistant
    /// content comes back unparsed.
    pub async fn generate_by_schema(
        &self,
        messages: Vec<Message>,
        schema: impl Into<String>,
    ) -> Result<Completion, GatewayError> {
        let response = self
            .chat_request(messages, GuidedDecoding::Json(Value::String(schema.into())))
            .await?;
        into_completion(response, self.config.chat.provider())
    }

    /// Constrain the completion to one of the supplied choices.
    ///
    /// Empty or duplicate choice sets are not rejected here; that policy
    /// belongs to the remote service.
    pub async fn choose(
        &self,
        messages: Vec<Message>,
        choices: Vec<String>,
    ) -> Result<String, GatewayError> {
        let response = self
            .chat_request(messages, GuidedDecoding::Choice(choices))
            .await?;
        Ok(into_completion(response, self.config.chat.provider())?.content)
    }

    /// Constrain the completion to match a regular expression.
    ///
    /// Pattern syntax is not validated locally; a bad pattern errors on the
    /// remote side.
    pub async fn match_regex(
        &self,
        messages: Vec<Message>,
        pattern: impl Into<String>,
    ) -> Result<String, GatewayError> {
        let response = self
            .chat_request(messages, GuidedDecoding::Regex(pattern.into()))
            .await?;
        Ok(into_completion(response, self.config.chat.provider())?.content)
    }

    /// Embed text via the embeddings handle, returning the dense vector.
    pub async fn embed(&self, text: impl Into<String>) -> Result<Vec<f32>, GatewayError> {
        let config = &self.config.embeddings;
        let request = EmbeddingsRequest {
            model: &config.model,
            input: text.into(),
        };
        let url = format!(
            "{}{}",
            config.base_url,
            constants::openai::EMBEDDINGS_ENDPOINT
        );

        let response: EmbeddingsResponse =
            self.http.post_json(&url, &config.api_key, &request).await?;

        let first =
            response
                .data
                .into_iter()
                .next()
                .ok_or_else(|| GatewayError::SchemaMismatch {
                    message: "embeddings response contained no data".to_string(),
                    source: None,
                })?;

        Ok(first.embedding)
    }

    async fn chat_request(
        &self,
        messages: Vec<Message>,
        guided: GuidedDecoding,
    ) -> Result<ChatCompletionResponse, GatewayError> {
        let config = &self.config.chat;
        let request = ChatCompletionRequest {
            model: &config.model,
            messages,
            max_tokens: config.max_tokens,
            guided,
        };
        let url = format!(
            "{}{}",
            config.base_url,
            constants::openrouter::CHAT_COMPLETIONS_ENDPOINT
        );

        self.http.post_json(&url, &config.api_key, &request).await
    }
}

/// Exactly one guided-decoding constraint rides on each chat request. The
/// externally tagged representation flattens into the provider's extension
/// field names.
#[derive(Debug, Serialize)]
enum GuidedDecoding {
    #[serde(rename = "guided_json")]
    Json(Value),
    #[serde(rename = "guided_choice")]
    Choice(Vec<String>),
    #[serde(rename = "guided_regex")]
    Regex(String),
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    max_tokens: u32,
    #[serde(flatten)]
    guided: GuidedDecoding,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    id: String,
    model: String,
    choices: Vec<ChatChoice>,
    usage: WireUsage,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,

    #[allow(dead_code)]
    #[serde(default)]
    index: Option<u32>,

    #[allow(dead_code)]
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    /// Always `assistant`.
    #[allow(dead_code)]
    role: String,

    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: i32,
    completion_tokens: i32,
    total_tokens: i32,
}

#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,

    #[allow(dead_code)]
    #[serde(default)]
    model: Option<String>,

    #[allow(dead_code)]
    #[serde(default)]
    usage: Option<EmbeddingsUsage>,
}

/// Embeddings usage has no completion-token count.
#[derive(Debug, Deserialize)]
struct EmbeddingsUsage {
    #[allow(dead_code)]
    #[serde(default)]
    prompt_tokens: i32,

    #[allow(dead_code)]
    #[serde(default)]
    total_tokens: i32,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,

    #[allow(dead_code)]
    #[serde(default)]
    index: Option<u32>,
}

fn into_completion(
    res: ChatCompletionResponse,
    provider: Provider,
) -> Result<Completion, GatewayError> {
    let choice = res
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::SchemaMismatch {
            message: "completion response contained no choices".to_string(),
            source: None,
        })?;

    let content = choice
        .message
        .content
        .ok_or_else(|| GatewayError::SchemaMismatch {
            message: "completion choice contained no content".to_string(),
            source: None,
        })?;

    Ok(Completion {
        content,
        usage: CompletionUsage {
            prompt_tokens: res.usage.prompt_tokens,
            completion_tokens: res.usage.completion_tokens,
            total_tokens: res.usage.total_tokens,
        },
        metadata: ResponseMetadata {
            provider,
            model: res.model,
            id: res.id,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guided_constraint_flattens_into_request_body() {
        let request = ChatCompletionRequest {
            model: "test-model",
            messages: crate::core::types::build_messages("hi", None),
            max_tokens: 64,
            guided: GuidedDecoding::Choice(vec!["yes".to_string(), "no".to_string()]),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["guided_choice"], serde_json::json!(["yes", "no"]));
        assert!(body.get("guided_json").is_none());
        assert!(body.get("guided_regex").is_none());
        assert_eq!(body["max_tokens"], 64);
    }

    #[test]
    fn missing_content_maps_to_schema_mismatch() {
        let response = ChatCompletionResponse {
            id: "resp_1".to_string(),
            model: "test-model".to_string(),
            choices: vec![ChatChoice {
                message: ChatChoiceMessage {
                    role: "assistant".to_string(),
                    content: None,
                },
                index: Some(0),
                finish_reason: None,
            }],
            usage: WireUsage {
                prompt_tokens: 1,
                completion_tokens: 0,
                total_tokens: 1,
            },
        };

        let err = into_completion(response, Provider::OpenRouter).unwrap_err();
        assert!(err.is_schema_mismatch());
    }
}
