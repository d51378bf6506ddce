use crate::model::Platform;

/// Prompt template for generating per-platform posts.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro. It asks for `Platform Name:` / `post:` blocks,
/// which is the layout the response parser understands best.
///
/// Contains `{{PLATFORMS}}` and `{{TEXT}}` placeholders that are filled in
/// by [`build_post_prompt`].
pub const POST_GENERATOR_PROMPT: &str = include_str!("prompt.txt");

/// Injects the raw text and the requested platforms into the prompt template.
pub fn build_post_prompt(raw_text: &str, platforms: &[Platform]) -> String {
    let platforms = platforms
        .iter()
        .map(Platform::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    POST_GENERATOR_PROMPT
        .replace("{{PLATFORMS}}", &platforms)
        .replace("{{TEXT}}", raw_text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_embedded() {
        assert!(!POST_GENERATOR_PROMPT.is_empty());
        assert!(POST_GENERATOR_PROMPT.contains("Platform Name:"));
        assert!(POST_GENERATOR_PROMPT.contains("post:"));
        assert!(POST_GENERATOR_PROMPT.contains("{{PLATFORMS}}"));
        assert!(POST_GENERATOR_PROMPT.contains("{{TEXT}}"));
    }

    #[test]
    fn test_build_post_prompt() {
        let prompt = build_post_prompt(
            "  We released version 2.0 today.  ",
            &[Platform::LinkedIn, Platform::Twitter],
        );
        assert!(prompt.contains("LinkedIn, Twitter"));
        assert!(prompt.contains("We released version 2.0 today."));
        assert!(!prompt.contains("{{PLATFORMS}}"));
        assert!(!prompt.contains("{{TEXT}}"));
    }
}
