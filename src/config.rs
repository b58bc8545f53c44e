use crate::error::{Error, Result};
use crate::i18n::Locale;
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_REPOS_LIMIT: usize = 12;
pub const DEFAULT_FALLBACK_TAG: &str = "Project";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_username: Option<String>,
    pub github_token: Option<String>,
    pub api_url: String,
    pub include_private: bool,
    pub repos_limit: usize,
    pub excluded_tags: Vec<String>,
    pub fallback_tag: String,
    pub locale: Locale,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; `from_env` is the process-environment case.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let github_username = non_empty("GITHUB_USERNAME");
        let github_token = non_empty("GITHUB_TOKEN");

        let api_url = non_empty("GITHUB_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let include_private = non_empty("INCLUDE_PRIVATE")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        let repos_limit = match non_empty("REPOS_LIMIT") {
            Some(v) => v.trim().parse().map_err(|_| {
                Error::Config(format!("REPOS_LIMIT must be a positive integer, got {:?}", v))
            })?,
            None => DEFAULT_REPOS_LIMIT,
        };

        let excluded_tags = non_empty("EXCLUDED_TAGS")
            .map(|v| {
                v.split(',')
                    .map(|tag| tag.trim().to_string())
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_excluded_tags);

        let fallback_tag = non_empty("FALLBACK_TAG")
            .unwrap_or_else(|| DEFAULT_FALLBACK_TAG.to_string());

        let locale = match non_empty("LOCALE") {
            Some(v) => v.parse()?,
            None => Locale::default(),
        };

        Ok(Self {
            github_username,
            github_token,
            api_url,
            include_private,
            repos_limit,
            excluded_tags,
            fallback_tag,
            locale,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_username: None,
            github_token: None,
            api_url: DEFAULT_API_URL.to_string(),
            include_private: false,
            repos_limit: DEFAULT_REPOS_LIMIT,
            excluded_tags: default_excluded_tags(),
            fallback_tag: DEFAULT_FALLBACK_TAG.to_string(),
            locale: Locale::default(),
        }
    }
}

fn default_excluded_tags() -> Vec<String> {
    vec!["GitHub".to_string(), "github".to_string()]
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub include_private: bool,
    pub repos_limit: usize,
    pub excluded_tags: Vec<String>,
    pub fallback_tag: String,
    pub locale: Locale,
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig::from(&Config::default())
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            include_private: config.include_private,
            repos_limit: config.repos_limit,
            excluded_tags: config.excluded_tags.clone(),
            fallback_tag: config.fallback_tag.clone(),
            locale: config.locale,
            show_progress: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.repos_limit, 12);
        assert_eq!(config.excluded_tags, vec!["GitHub", "github"]);
        assert_eq!(config.fallback_tag, "Project");
        assert!(config.github_token.is_none());
        assert!(!config.include_private);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GITHUB_USERNAME", "octocat"),
            ("GITHUB_TOKEN", "ghp_abc"),
            ("GITHUB_API_URL", "http://localhost:8080/"),
            ("INCLUDE_PRIVATE", "TRUE"),
            ("REPOS_LIMIT", "5"),
            ("EXCLUDED_TAGS", "Hacktoberfest, ,Demo"),
            ("LOCALE", "vi"),
        ]))
        .unwrap();

        assert_eq!(config.github_username.as_deref(), Some("octocat"));
        assert_eq!(config.github_token.as_deref(), Some("ghp_abc"));
        assert_eq!(config.api_url, "http://localhost:8080");
        assert!(config.include_private);
        assert_eq!(config.repos_limit, 5);
        assert_eq!(config.excluded_tags, vec!["Hacktoberfest", "Demo"]);
        assert_eq!(config.locale, Locale::Vietnamese);
    }

    #[test]
    fn test_empty_token_is_absent() {
        let config = Config::from_lookup(lookup(&[("GITHUB_TOKEN", "  ")])).unwrap();
        assert!(config.github_token.is_none());
    }

    #[test]
    fn test_invalid_limit() {
        let result = Config::from_lookup(lookup(&[("REPOS_LIMIT", "many")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
