use std::path::PathBuf;

/// Apps Script deployment backing the post list and guestbook.
pub const DEFAULT_BACKEND_URL: &str = "https://script.google.com/macros/s/AKfycbxoWvpXDXkmaAkv6fs8ACgW4JJvqba3KpQLfeCGqo7ZYxi6vmgKAg9QVoNrvEmtzO2J/exec";

/// Storage key holding the liked post ids.
pub const DEFAULT_LIKED_POSTS_KEY: &str = "myWebsiteLikedPosts";

/// Site configuration DTO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Backend processing URL. Consumed by page collaborators, never called here.
    pub backend_url: String,

    /// Key the liked post ids are stored under
    pub liked_posts_key: String,

    /// Backing file for the persistent key-value store.
    /// `None` means "use the application data directory".
    pub data_file: Option<PathBuf>,
}

impl SiteConfig {
    pub fn defaults() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            liked_posts_key: DEFAULT_LIKED_POSTS_KEY.to_string(),
            data_file: None,
        }
    }

    /// Create SiteConfig from a TOML value.
    ///
    /// Missing keys keep their default. Present values are taken as-is,
    /// an empty string included.
    pub fn from_toml(toml_value: &toml::Value) -> Self {
        let defaults = Self::defaults();
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        Self {
            backend_url: str_at("backend", "url").unwrap_or(defaults.backend_url),
            liked_posts_key: str_at("storage", "liked_posts_key")
                .unwrap_or(defaults.liked_posts_key),
            data_file: str_at("storage", "data_file").map(PathBuf::from),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let value: toml::Value = toml::from_str(
            r#"
            [backend]
            url = "https://example.test/exec"

            [storage]
            liked_posts_key = "likes"
            data_file = "/tmp/pagekit/storage.json"
            "#,
        )
        .unwrap();

        let config = SiteConfig::from_toml(&value);

        assert_eq!(config.backend_url, "https://example.test/exec");
        assert_eq!(config.liked_posts_key, "likes");
        assert_eq!(
            config.data_file,
            Some(PathBuf::from("/tmp/pagekit/storage.json"))
        );
    }

    #[test]
    fn test_from_toml_keeps_defaults_for_missing_keys() {
        let value: toml::Value = toml::from_str("[storage]\n").unwrap();

        let config = SiteConfig::from_toml(&value);

        assert_eq!(config, SiteConfig::defaults());
        assert_eq!(config.liked_posts_key, "myWebsiteLikedPosts");
    }

    #[test]
    fn test_from_toml_ignores_wrongly_typed_values() {
        let value: toml::Value = toml::from_str("[backend]\nurl = 42\n").unwrap();

        let config = SiteConfig::from_toml(&value);

        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }
}
