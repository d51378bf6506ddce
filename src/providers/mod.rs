mod anthropic;
mod factory;
mod google;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use google::GoogleProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_post_prompt, POST_GENERATOR_PROMPT};

use crate::error::GeneratorError;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Send a single prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

/// HTTP client with the configured request timeout
fn http_client(timeout: Option<Duration>) -> Result<Client, GeneratorError> {
    let builder = match timeout {
        Some(timeout) => Client::builder().timeout(timeout),
        None => Client::builder(),
    };
    Ok(builder.build()?)
}

/// Read a JSON body, turning non-success statuses into provider errors
async fn read_json(provider: &str, response: Response) -> Result<Value, GeneratorError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GeneratorError::ProviderError(format!(
            "{} request failed with status {}: {}",
            provider, status, body
        )));
    }

    let body: Value = response.json().await?;
    debug!("{:?}", body);
    Ok(body)
}

/// Pull a text field out of a response body
fn extract_text(provider: &str, value: &Value) -> Result<String, GeneratorError> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        GeneratorError::ProviderError(format!("Failed to extract content from {} response", provider))
    })
}
