use thiserror::Error;

/// Errors that can occur while generating posts
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// HTTP request to the LLM provider failed
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Provider answered with an error status or an unexpected body
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Raw input text is missing or blank
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Platform name that is not one of the supported targets
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
