use crate::error::GeneratorError;
use crate::model::{GenerationResult, Platform};
use crate::providers::{build_post_prompt, LlmProvider};
use log::{debug, info, warn};

/// Generate posts for `platforms` from `raw_text`
///
/// This pipeline:
/// 1. Validates the input (non-blank text, at least one platform)
/// 2. Builds the prompt from the template
/// 3. Calls the provider once
/// 4. Parses the reply, falling back to the raw text when nothing was recognised
pub async fn generate(
    provider: &dyn LlmProvider,
    raw_text: &str,
    platforms: &[Platform],
) -> Result<GenerationResult, GeneratorError> {
    if raw_text.trim().is_empty() {
        return Err(GeneratorError::InvalidInput(
            "Raw text cannot be empty".to_string(),
        ));
    }
    if platforms.is_empty() {
        return Err(GeneratorError::InvalidInput(
            "Select at least one platform".to_string(),
        ));
    }

    let platforms = dedup_platforms(platforms);
    let prompt = build_post_prompt(raw_text, &platforms);
    debug!("Prompt:\n{}", prompt);

    info!(
        "Generating posts for {} platform(s) with {}",
        platforms.len(),
        provider.provider_name()
    );
    let response = provider.generate(&prompt).await?;

    let result = GenerationResult::from_response(&response);
    match &result {
        GenerationResult::Posts(posts) => info!("Parsed {} post(s)", posts.len()),
        GenerationResult::Raw(_) => warn!("Could not split response into posts, keeping raw text"),
    }
    Ok(result)
}

/// Drop repeated platforms, keeping the first occurrence
fn dedup_platforms(platforms: &[Platform]) -> Vec<Platform> {
    let mut unique = Vec::with_capacity(platforms.len());
    for platform in platforms {
        if !unique.contains(platform) {
            unique.push(*platform);
        }
    }
    unique
}
