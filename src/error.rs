use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error: {}{}{}", render_status(.status), render_detail(.detail), render_hint(.hint))]
    Api {
        status: u16,
        detail: Option<String>,
        hint: Option<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn render_status(status: &u16) -> String {
    match reqwest::StatusCode::from_u16(*status)
        .ok()
        .and_then(|s| s.canonical_reason())
    {
        Some(reason) => format!("{} - {}", status, reason),
        None => status.to_string(),
    }
}

fn render_detail(detail: &Option<String>) -> String {
    match detail {
        Some(message) => format!("\nDetails: {}", message),
        None => String::new(),
    }
}

fn render_hint(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!("\n\n{}", hint),
        None => String::new(),
    }
}

/// Remediation text for the statuses a repository listing commonly fails with.
pub fn remediation_hint(status: u16, username: &str) -> Option<String> {
    match status {
        401 => Some(
            "Authentication failed. Please check your GitHub token.\n\
             Troubleshooting:\n\
             1. Verify the token is correct and not expired\n\
             2. Check the token has the 'repo' scope (for private repos)\n\
             3. For fine-grained tokens, ensure 'Repository access' includes your repos"
                .to_string(),
        ),
        403 => Some(
            "Access forbidden. Check token permissions (the 'repo' scope is needed for private repos) or the API rate limit."
                .to_string(),
        ),
        404 => Some(format!(
            "User not found or endpoint not available. Check username: {}",
            username
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_includes_detail_and_hint() {
        let err = Error::Api {
            status: 404,
            detail: Some("Not Found".to_string()),
            hint: remediation_hint(404, "octocat"),
        };
        let message = err.to_string();
        assert!(message.starts_with("GitHub API error: 404 - Not Found"));
        assert!(message.contains("Details: Not Found"));
        assert!(message.contains("Check username: octocat"));
    }

    #[test]
    fn test_api_error_without_detail() {
        let err = Error::Api {
            status: 500,
            detail: None,
            hint: remediation_hint(500, "octocat"),
        };
        assert_eq!(err.to_string(), "GitHub API error: 500 - Internal Server Error");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn test_unregistered_status_has_no_reason() {
        let err = Error::Api {
            status: 599,
            detail: None,
            hint: None,
        };
        assert_eq!(err.to_string(), "GitHub API error: 599");
    }

    #[test]
    fn test_auth_failure() {
        let err = Error::Api {
            status: 401,
            detail: None,
            hint: remediation_hint(401, "octocat"),
        };
        assert!(err.is_auth_failure());
        assert!(err.to_string().starts_with("GitHub API error: 401 - Unauthorized"));
        assert!(err.to_string().contains("Authentication failed"));
    }
}
