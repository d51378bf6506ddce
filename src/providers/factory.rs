use crate::config::{AiConfig, ProviderConfig};
use crate::error::GeneratorError;
use crate::providers::{AnthropicProvider, GoogleProvider, LlmProvider, OpenAIProvider};
use std::time::Duration;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        timeout: Option<Duration>,
    ) -> Result<Box<dyn LlmProvider>, GeneratorError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(GeneratorError::BuilderError(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        match provider_name {
            "openai" => Ok(Box::new(OpenAIProvider::new(config, timeout)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config, timeout)?)),
            "google" => Ok(Box::new(GoogleProvider::new(config, timeout)?)),
            _ => Err(GeneratorError::BuilderError(format!(
                "Unknown provider: {}",
                provider_name
            ))),
        }
    }

    /// Get the default provider from configuration
    ///
    /// A default provider without a configuration entry is created with its
    /// default model and the API key from the environment.
    pub fn get_default_provider(config: &AiConfig) -> Result<Box<dyn LlmProvider>, GeneratorError> {
        let provider_name = &config.default_provider;
        let provider_config = config.provider_or_default(provider_name);

        Self::create(
            provider_name,
            &provider_config,
            Some(Duration::from_secs(config.timeout)),
        )
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "anthropic", "google"]
    }
}
