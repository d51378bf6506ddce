use crate::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single generated post for one platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformPost {
    /// Free-form platform label as written by the model, e.g. "LinkedIn" or "Unknown"
    pub platform: String,
    /// Post body with formatting markers and image suggestions removed
    pub post: String,
}

impl PlatformPost {
    pub fn new(platform: impl Into<String>, post: impl Into<String>) -> Self {
        PlatformPost {
            platform: platform.into(),
            post: post.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.platform.is_empty() && self.post.is_empty()
    }
}

/// Target platforms that can be requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    LinkedIn,
    Twitter,
    Instagram,
}

impl Platform {
    pub fn all() -> Vec<Platform> {
        vec![Platform::LinkedIn, Platform::Twitter, Platform::Instagram]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linkedin" => Ok(Platform::LinkedIn),
            "twitter" | "x" => Ok(Platform::Twitter),
            "instagram" => Ok(Platform::Instagram),
            _ => Err(GeneratorError::UnknownPlatform(s.trim().to_string())),
        }
    }
}

/// Outcome of a generation request.
///
/// `Posts` is returned when the response could be split into per-platform
/// records; otherwise the untouched response text is kept in `Raw` so the
/// caller can still show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum GenerationResult {
    Posts(Vec<PlatformPost>),
    Raw(String),
}

impl GenerationResult {
    pub fn from_response(response: &str) -> Self {
        let posts = crate::parser::parse_response(response);
        if posts.is_empty() {
            GenerationResult::Raw(response.to_string())
        } else {
            GenerationResult::Posts(posts)
        }
    }

    pub fn posts(&self) -> &[PlatformPost] {
        match self {
            GenerationResult::Posts(posts) => posts,
            GenerationResult::Raw(_) => &[],
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, GenerationResult::Raw(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str_is_case_insensitive() {
        assert_eq!("linkedin".parse::<Platform>().unwrap(), Platform::LinkedIn);
        assert_eq!(" TWITTER ".parse::<Platform>().unwrap(), Platform::Twitter);
        assert_eq!("X".parse::<Platform>().unwrap(), Platform::Twitter);
        assert_eq!("Instagram".parse::<Platform>().unwrap(), Platform::Instagram);
    }

    #[test]
    fn test_platform_from_str_unknown() {
        let result = "myspace".parse::<Platform>();
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("myspace"));
        }
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::LinkedIn.to_string(), "LinkedIn");
        assert_eq!(Platform::all().len(), 3);
    }

    #[test]
    fn test_from_response_with_posts() {
        let result = GenerationResult::from_response("Platform Name: Twitter\npost: Short and sweet");
        assert!(!result.is_raw());
        assert_eq!(
            result.posts(),
            &[PlatformPost::new("Twitter", "Short and sweet")]
        );
    }

    #[test]
    fn test_from_response_falls_back_to_raw() {
        let text = "Sorry, I can't help with that.";
        let result = GenerationResult::from_response(text);
        assert_eq!(result, GenerationResult::Raw(text.to_string()));
        assert!(result.posts().is_empty());
    }

    #[test]
    fn test_serialize_result() {
        let result = GenerationResult::Posts(vec![PlatformPost::new("LinkedIn", "Hi")]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["kind"], "posts");
        assert_eq!(json["content"][0]["platform"], "LinkedIn");
        assert_eq!(json["content"][0]["post"], "Hi");
    }
}
