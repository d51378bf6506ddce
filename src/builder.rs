use std::time::Duration;

use crate::config::{default_model, AiConfig, ProviderConfig};
use crate::providers::{LlmProvider, ProviderFactory};
use crate::{pipeline, GenerationResult, GeneratorError, Platform};

/// LLM provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAI,
    Anthropic,
    Google,
}

impl ProviderKind {
    /// Convert to provider name string used by the factory
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Google => "google",
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAI),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "google" | "gemini" => Ok(ProviderKind::Google),
            other => Err(GeneratorError::BuilderError(format!(
                "Unknown provider: {} (available: {})",
                other,
                ProviderFactory::available_providers().join(", ")
            ))),
        }
    }
}

/// Builder for configuring and running post generation
#[derive(Debug, Default)]
pub struct PostGeneratorBuilder {
    text: Option<String>,
    platforms: Vec<Platform>,
    provider: Option<ProviderKind>,
    timeout: Option<Duration>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
}

impl PostGeneratorBuilder {
    /// Set the raw text the posts are written from
    ///
    /// # Example
    /// ```
    /// use post_generator::PostGenerator;
    ///
    /// let builder = PostGenerator::builder()
    ///     .text("We just opened our second office in Lisbon.");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add a target platform
    ///
    /// # Example
    /// ```
    /// use post_generator::{Platform, PostGenerator};
    ///
    /// let builder = PostGenerator::builder()
    ///     .text("Release notes")
    ///     .platform(Platform::LinkedIn)
    ///     .platform(Platform::Twitter);
    /// ```
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platforms.push(platform);
        self
    }

    /// Add several target platforms at once
    pub fn platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.platforms.extend(platforms);
        self
    }

    /// Select the LLM provider
    ///
    /// Without this the default provider from the configuration is used.
    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the API key for the LLM provider
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the LLM provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[doc(hidden)]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn has_overrides(&self) -> bool {
        self.provider.is_some()
            || self.api_key.is_some()
            || self.model.is_some()
            || self.base_url.is_some()
            || self.timeout.is_some()
    }

    /// Resolve the provider from overrides and configuration
    fn create_provider(&self) -> Result<Box<dyn LlmProvider>, GeneratorError> {
        if !self.has_overrides() {
            let config = AiConfig::load()?;
            return ProviderFactory::get_default_provider(&config);
        }

        // A missing or broken config file should not block explicit settings
        let config = AiConfig::load().unwrap_or_default();
        let provider_name = self
            .provider
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| config.default_provider.clone());

        let mut provider_config = config
            .providers
            .get(&provider_name)
            .cloned()
            .unwrap_or_else(|| ProviderConfig::for_model(default_model(&provider_name)));
        provider_config.enabled = true;
        if let Some(api_key) = &self.api_key {
            provider_config.api_key = Some(api_key.clone());
        }
        if let Some(model) = &self.model {
            provider_config.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            provider_config.base_url = Some(base_url.clone());
        }

        let timeout = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs(config.timeout));
        ProviderFactory::create(&provider_name, &provider_config, Some(timeout))
    }

    /// Build and run the generation
    ///
    /// # Errors
    /// Returns `GeneratorError` if:
    /// - No text was given or it is blank
    /// - No platform was selected
    /// - The provider cannot be configured
    /// - The provider request fails
    ///
    /// # Example
    /// ```no_run
    /// # use post_generator::{Platform, PostGenerator};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = PostGenerator::builder()
    ///     .text("We just opened our second office in Lisbon.")
    ///     .platform(Platform::LinkedIn)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<GenerationResult, GeneratorError> {
        let text = self.text.as_deref().ok_or_else(|| {
            GeneratorError::BuilderError("No input text specified. Use .text()".to_string())
        })?;
        if text.trim().is_empty() {
            return Err(GeneratorError::InvalidInput(
                "Raw text cannot be empty".to_string(),
            ));
        }
        if self.platforms.is_empty() {
            return Err(GeneratorError::BuilderError(
                "No platform specified. Use .platform() or .platforms()".to_string(),
            ));
        }

        let provider = self.create_provider()?;
        pipeline::generate(provider.as_ref(), text, &self.platforms).await
    }
}

/// Main entry point for the builder API
pub struct PostGenerator;

impl PostGenerator {
    /// Creates a new builder for generating posts
    ///
    /// # Example
    /// ```
    /// use post_generator::PostGenerator;
    ///
    /// let builder = PostGenerator::builder();
    /// ```
    pub fn builder() -> PostGeneratorBuilder {
        PostGeneratorBuilder::default()
    }
}
