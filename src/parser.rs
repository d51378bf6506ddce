//! Turns a loosely structured LLM reply into per-platform posts.
//!
//! The reply is expected to look roughly like
//!
//! ```text
//! Platform Name: LinkedIn
//! post: Excited to share ...
//! ```
//!
//! but models rarely follow the format exactly, so every line is run through
//! an ordered list of recognizers and the first one that matches decides what
//! happens to it. Anything that cannot be placed is dropped; parsing never
//! fails.

use crate::model::PlatformPost;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Platform assigned to a `post:` block that has no heading before it.
pub const UNKNOWN_PLATFORM: &str = "Unknown";

/// Short label: 2-30 characters. A leading `#` is a hashtag, not a label.
const LABEL: &str = r"[A-Za-z0-9 &()+'\-][A-Za-z0-9 &()+#'\-]{1,29}";
const LABEL_LAZY: &str = r"[A-Za-z0-9 &()+'\-][A-Za-z0-9 &()+#'\-]{1,29}?";
const SEPARATOR: &str = r"[:\-–—]";
/// Separator between a label and text on the same line. A hyphen only counts
/// when followed by whitespace, so `Co-founder` stays one word.
const INLINE_SEPARATOR: &str = r"(?:[:–—]|-(?:\s|$))";

static HEADING_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:(?i:platform\s*name)\s*:\s*(?P<prefixed>{LABEL_LAZY})\s*{SEPARATOR}?|(?P<bare>{LABEL_LAZY})\s*{SEPARATOR})$"
    ))
    .expect("valid regex")
});

static INLINE_PLATFORM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)platform\s*name\s*:\s*(?P<name>{LABEL_LAZY})\s*(?:(?P<post>post\s*:)|[|,]|{INLINE_SEPARATOR}|$)"
    ))
    .expect("valid regex")
});

static POST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^post\s*:\s*(?P<text>.*)$").expect("valid regex"));

static INLINE_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?P<label>{LABEL_LAZY})\s*{INLINE_SEPARATOR}\s*(?P<rest>.+)$"
    ))
    .expect("valid regex")
});

static BARE_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^{LABEL}$")).expect("valid regex"));

static IMAGE_SUGGESTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[?\s*image\s*suggestion.*$").expect("valid regex"));

/// What a single trimmed line turned out to be.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// `LinkedIn:` or `Platform Name: LinkedIn`
    Heading(&'a str),
    /// `... Platform Name: LinkedIn post: text`
    InlinePlatform { name: &'a str, rest: &'a str },
    /// `post: text`
    PostMarker(&'a str),
    /// `LinkedIn: text`
    InlineHeading { label: &'a str, rest: &'a str },
    /// `LinkedIn`, only recognised before any record has started
    BareLabel(&'a str),
    Text(&'a str),
}

/// Classify a line. Recognizers run in a fixed order and the first match wins.
fn classify(line: &str, has_current: bool) -> Line<'_> {
    if let Some(caps) = HEADING_LINE.captures(line) {
        let (label, prefixed) = match (caps.name("prefixed"), caps.name("bare")) {
            (Some(m), _) => (clean_label(m.as_str()), true),
            (None, Some(m)) => (clean_label(m.as_str()), false),
            (None, None) => ("", false),
        };
        // "post:" is an empty body marker, not part of the platform name
        if !label.is_empty() && !is_post_marker(label, prefixed) {
            return Line::Heading(label);
        }
    }

    if let Some(caps) = INLINE_PLATFORM.captures(line) {
        let name = caps.name("name").map(|m| clean_label(m.as_str()));
        let end = caps.get(0).map(|m| m.end()).unwrap_or(line.len());
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            let mut rest = line[end..].trim();
            if caps.name("post").is_none() {
                rest = strip_post_prefix(rest);
            }
            return Line::InlinePlatform { name, rest };
        }
    }

    if let Some(caps) = POST_MARKER.captures(line) {
        let text = caps.name("text").map(|m| m.as_str().trim()).unwrap_or("");
        return Line::PostMarker(text);
    }

    if let Some(caps) = INLINE_HEADING.captures(line) {
        if let (Some(label), Some(rest)) = (caps.name("label"), caps.name("rest")) {
            let label = clean_label(label.as_str());
            if !label.is_empty() {
                return Line::InlineHeading {
                    label,
                    rest: rest.as_str().trim(),
                };
            }
        }
    }

    if !has_current && BARE_LABEL.is_match(line) {
        let label = clean_label(line);
        if !label.is_empty() {
            return Line::BareLabel(label);
        }
    }

    Line::Text(line)
}

/// Trim surrounding whitespace, list bullets and trailing dashes.
fn clean_label(label: &str) -> &str {
    label.trim_matches(['-', ' '])
}

fn is_post_marker(label: &str, prefixed: bool) -> bool {
    let lower = label.to_ascii_lowercase();
    lower == "post" || (prefixed && lower.ends_with(" post"))
}

fn strip_post_prefix(text: &str) -> &str {
    match POST_MARKER.captures(text).and_then(|caps| caps.name("text")) {
        Some(m) => m.as_str().trim(),
        None => text,
    }
}

fn append_text(target: &mut String, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}

/// Strip an image suggestion annotation and everything after it.
fn strip_image_suggestion(post: &str) -> String {
    IMAGE_SUGGESTION.replace(post, "").trim().to_string()
}

/// Accumulator for a single parse call.
#[derive(Debug, Default)]
struct ParseState {
    current: Option<PlatformPost>,
    posts: Vec<PlatformPost>,
}

impl ParseState {
    fn flush(&mut self) {
        if let Some(post) = self.current.take() {
            self.posts.push(post);
        }
    }

    fn start(&mut self, platform: &str, post: &str) {
        self.flush();
        self.current = Some(PlatformPost::new(platform.trim(), post.trim()));
    }

    fn apply(&mut self, line: Line<'_>) {
        match line {
            Line::Heading(label) | Line::BareLabel(label) => self.start(label, ""),
            Line::InlinePlatform { name, rest } | Line::InlineHeading { label: name, rest } => {
                self.start(name, rest)
            }
            Line::PostMarker(text) => {
                let current = self
                    .current
                    .get_or_insert_with(|| PlatformPost::new(UNKNOWN_PLATFORM, ""));
                append_text(&mut current.post, text);
            }
            Line::Text(text) => match self.current.as_mut() {
                Some(current) => append_text(&mut current.post, text),
                None => debug!("Skipping text before first heading: {}", text),
            },
        }
    }

    fn finish(mut self) -> Vec<PlatformPost> {
        self.flush();
        self.posts
            .into_iter()
            .map(|post| PlatformPost {
                post: strip_image_suggestion(&post.post),
                platform: post.platform,
            })
            .filter(|post| !post.is_empty())
            .collect()
    }
}

/// Parse a model reply into per-platform posts, in order of appearance.
///
/// Empty or unrecognisable input gives an empty vector.
pub fn parse_response(text: &str) -> Vec<PlatformPost> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let text = text.replace("**", "");
    let mut state = ParseState::default();

    for line in text.split(['\r', '\n']).map(str::trim).filter(|l| !l.is_empty()) {
        let line = classify(line, state.current.is_some());
        state.apply(line);
    }

    let posts = state.finish();
    debug!("Parsed {} platform posts", posts.len());
    posts
}

/// Like [`parse_response`] for input that may be missing.
pub fn parse_optional(text: Option<&str>) -> Vec<PlatformPost> {
    text.map(parse_response).unwrap_or_default()
}

/// Parse a JSON value taken from a provider response.
///
/// Anything other than a string (null, numbers, objects) yields no posts.
pub fn parse_value(value: &Value) -> Vec<PlatformPost> {
    parse_optional(value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post(platform: &str, text: &str) -> PlatformPost {
        PlatformPost::new(platform, text)
    }

    #[test]
    fn test_empty_and_unusable_input() {
        assert!(parse_response("").is_empty());
        assert!(parse_response("   \n\r\n  ").is_empty());
        assert!(parse_optional(None).is_empty());
        assert!(parse_value(&Value::Null).is_empty());
        assert!(parse_value(&json!(42)).is_empty());
        assert!(parse_value(&json!({"text": "Platform Name: X"})).is_empty());
    }

    #[test]
    fn test_platform_name_and_post_markers() {
        let posts = parse_response("Platform Name: LinkedIn\npost: Hello world");
        assert_eq!(posts, vec![post("LinkedIn", "Hello world")]);
    }

    #[test]
    fn test_colon_headings() {
        let posts = parse_response("LinkedIn:\nHello world\nTwitter:\nGoodbye");
        assert_eq!(
            posts,
            vec![post("LinkedIn", "Hello world"), post("Twitter", "Goodbye")]
        );
    }

    #[test]
    fn test_image_suggestion_is_removed() {
        let text = "Platform Name: Instagram\npost: Golden hour never disappoints. #sunset [Image Suggestion: a photo of a sunset] shot on film";
        let posts = parse_response(text);
        assert_eq!(
            posts,
            vec![post("Instagram", "Golden hour never disappoints. #sunset")]
        );
    }

    #[test]
    fn test_unbracketed_image_suggestion_is_removed() {
        let text = "Twitter:\nBig news today! image suggestion: confetti everywhere";
        assert_eq!(parse_response(text), vec![post("Twitter", "Big news today!")]);
    }

    #[test]
    fn test_orphan_post_marker_is_unknown() {
        let posts = parse_response("post: orphan text");
        assert_eq!(posts, vec![post(UNKNOWN_PLATFORM, "orphan text")]);
    }

    #[test]
    fn test_filler_only() {
        assert!(parse_response("Sure, here are some posts for you.").is_empty());
    }

    #[test]
    fn test_reparsing_post_text_yields_nothing() {
        let posts = parse_response(
            "Platform Name: LinkedIn\npost: Thrilled to announce our new release, built with care.",
        );
        assert_eq!(posts.len(), 1);
        assert!(parse_response(&posts[0].post).is_empty());
    }

    #[test]
    fn test_full_reply_keeps_order() {
        let text = "Sure! Here are your posts:\n\n\
            **Platform Name: Twitter**\n\
            post: Shipping day. Small team, big release!\n\
            [Image Suggestion: the team celebrating]\n\n\
            **Platform Name: LinkedIn**\n\
            post: After months of work, we are proud to launch.\n\
            Thanks to everyone who helped.\n\n\
            **Platform Name: Instagram**\n\
            post: Launch day vibes. #shipit";
        let posts = parse_response(text);
        assert_eq!(
            posts,
            vec![
                post("Twitter", "Shipping day. Small team, big release!"),
                post(
                    "LinkedIn",
                    "After months of work, we are proud to launch. Thanks to everyone who helped."
                ),
                post("Instagram", "Launch day vibes. #shipit"),
            ]
        );
    }

    #[test]
    fn test_inline_platform_with_post_on_same_line() {
        let posts = parse_response("Platform Name: LinkedIn post: All in one line.");
        assert_eq!(posts, vec![post("LinkedIn", "All in one line.")]);
    }

    #[test]
    fn test_inline_platform_after_leading_text() {
        let posts = parse_response("1. Platform Name: Twitter - Quick update, we are live.");
        assert_eq!(posts, vec![post("Twitter", "Quick update, we are live.")]);
    }

    #[test]
    fn test_inline_heading_with_content() {
        let posts = parse_response("LinkedIn: Proud of the team.\nTwitter - We did it!");
        assert_eq!(
            posts,
            vec![
                post("LinkedIn", "Proud of the team."),
                post("Twitter", "We did it!")
            ]
        );
    }

    #[test]
    fn test_bare_label_only_starts_first_record() {
        let posts = parse_response("LinkedIn\nHello there, network.\nSee you soon");
        assert_eq!(
            posts,
            vec![post("LinkedIn", "Hello there, network. See you soon")]
        );
    }

    #[test]
    fn test_case_insensitive_markers_keep_case() {
        let posts = parse_response("PLATFORM NAME: Instagram\nPOST: Mixed CASE Body.");
        assert_eq!(posts, vec![post("Instagram", "Mixed CASE Body.")]);
    }

    #[test]
    fn test_windows_and_old_mac_newlines() {
        let posts = parse_response("LinkedIn:\r\nFirst line.\rSecond line.");
        assert_eq!(posts, vec![post("LinkedIn", "First line. Second line.")]);
    }

    #[test]
    fn test_heading_without_body_is_kept() {
        let posts = parse_response("Twitter:\nLinkedIn:\nSomething to say.");
        assert_eq!(
            posts,
            vec![post("Twitter", ""), post("LinkedIn", "Something to say.")]
        );
    }

    #[test]
    fn test_dash_headings() {
        let posts = parse_response("Twitter —\nShort one.\nInstagram -\nPhoto time.");
        assert_eq!(
            posts,
            vec![post("Twitter", "Short one."), post("Instagram", "Photo time.")]
        );
    }

    #[test]
    fn test_empty_post_marker_is_not_a_heading() {
        let posts = parse_response("Platform Name: Twitter\npost:\nBody on the next line.");
        assert_eq!(posts, vec![post("Twitter", "Body on the next line.")]);
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify("LinkedIn:", false), Line::Heading("LinkedIn"));
        assert_eq!(
            classify("Platform Name: LinkedIn", true),
            Line::Heading("LinkedIn")
        );
        assert_eq!(
            classify("post: hi", true),
            Line::PostMarker("hi")
        );
        assert_eq!(
            classify("Twitter: hi", true),
            Line::InlineHeading {
                label: "Twitter",
                rest: "hi"
            }
        );
        assert_eq!(classify("Twitter", false), Line::BareLabel("Twitter"));
        assert_eq!(classify("Twitter", true), Line::Text("Twitter"));
        assert_eq!(classify("#launch #ai", true), Line::Text("#launch #ai"));
    }

    #[test]
    fn test_parenthesised_heading() {
        let posts = parse_response("(LinkedIn):\nHello there.");
        assert_eq!(posts, vec![post("(LinkedIn)", "Hello there.")]);
    }

    #[test]
    fn test_bullet_headings() {
        let posts = parse_response("- LinkedIn: A longer note for the network.\n- Twitter: Big news today.");
        assert_eq!(
            posts,
            vec![
                post("LinkedIn", "A longer note for the network."),
                post("Twitter", "Big news today.")
            ]
        );
    }

    #[test]
    fn test_hyphenated_platform_name_before_post_marker() {
        assert_eq!(
            classify("Platform Name: Re-Launch Blog post: hi", false),
            Line::InlinePlatform {
                name: "Re-Launch Blog",
                rest: "hi"
            }
        );
    }

    #[test]
    fn test_hyphenated_inline_heading() {
        let posts = parse_response("Co-founder note: we are hiring.");
        assert_eq!(posts, vec![post("Co-founder note", "we are hiring.")]);
    }

    #[test]
    fn test_platform_name_with_empty_post_marker() {
        let posts = parse_response("Platform Name: LinkedIn post:\nBody on the next line.");
        assert_eq!(posts, vec![post("LinkedIn", "Body on the next line.")]);
    }

    #[test]
    fn test_hashtag_line_is_not_a_heading() {
        let posts = parse_response("Instagram:\nSunny.\n#summer: #beach");
        assert_eq!(posts, vec![post("Instagram", "Sunny. #summer: #beach")]);
    }

    #[test]
    fn test_reparsing_label_shaped_post_starts_a_record() {
        let posts = parse_response("LinkedIn:\nHello world");
        assert_eq!(posts, vec![post("LinkedIn", "Hello world")]);

        // A body that is itself a short label is read as a bare label
        assert_eq!(parse_response(&posts[0].post), vec![post("Hello world", "")]);
        // while a body with sentence punctuation is dropped
        assert!(parse_response("Hello world, again.").is_empty());
    }
}
