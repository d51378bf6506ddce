use crate::model::{GenerationResult, PlatformPost};

const RAW_NOTICE: &str = "Could not split the response into posts. Raw response:";

/// Render one post as a text card
pub fn render_card(post: &PlatformPost) -> String {
    let title = if post.platform.is_empty() {
        "(no platform)"
    } else {
        post.platform.as_str()
    };
    let underline = "=".repeat(title.chars().count());
    format!("{}\n{}\n{}\n", title, underline, post.post)
}

/// Render a generation result for the terminal
///
/// Posts become cards separated by a blank line; a raw result is printed
/// below a short notice.
pub fn render_text(result: &GenerationResult) -> String {
    match result {
        GenerationResult::Posts(posts) => posts
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n"),
        GenerationResult::Raw(raw) => format!("{}\n\n{}\n", RAW_NOTICE, raw.trim_end()),
    }
}

/// Render a generation result as pretty-printed JSON
pub fn render_json(result: &GenerationResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_card() {
        let card = render_card(&PlatformPost::new("Twitter", "Hello!"));
        assert_eq!(card, "Twitter\n=======\nHello!\n");
    }

    #[test]
    fn test_render_posts() {
        let result = GenerationResult::Posts(vec![
            PlatformPost::new("LinkedIn", "One"),
            PlatformPost::new("Twitter", "Two"),
        ]);
        let text = render_text(&result);
        assert_eq!(text, "LinkedIn\n========\nOne\n\nTwitter\n=======\nTwo\n");
    }

    #[test]
    fn test_render_raw() {
        let result = GenerationResult::Raw("just some text\n".to_string());
        let text = render_text(&result);
        assert!(text.starts_with(RAW_NOTICE));
        assert!(text.ends_with("just some text\n"));
    }

    #[test]
    fn test_render_json() {
        let result = GenerationResult::Raw("oops".to_string());
        let json = render_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "raw");
        assert_eq!(value["content"], "oops");
    }
}
