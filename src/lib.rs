pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod providers;
pub mod render;

pub use builder::{PostGenerator, PostGeneratorBuilder, ProviderKind};
pub use error::GeneratorError;
pub use model::{GenerationResult, Platform, PlatformPost};
pub use parser::{parse_optional, parse_response, parse_value};

/// Generate posts for the given platforms with the configured default provider
///
/// # Example
/// ```no_run
/// # use post_generator::{generate_posts, Platform};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let result = generate_posts(
///     "We just opened our second office in Lisbon.",
///     &[Platform::LinkedIn, Platform::Twitter],
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn generate_posts(
    text: &str,
    platforms: &[Platform],
) -> Result<GenerationResult, GeneratorError> {
    PostGenerator::builder()
        .text(text)
        .platforms(platforms.iter().copied())
        .build()
        .await
}

/// Generate posts for every supported platform
pub async fn generate_all_posts(text: &str) -> Result<GenerationResult, GeneratorError> {
    generate_posts(text, &Platform::all()).await
}
