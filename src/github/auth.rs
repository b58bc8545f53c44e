use std::fmt;

/// Shape of a GitHub personal access token, inferred from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `ghp_...`
    Classic,
    /// `github_pat_...` or `github_...`
    FineGrained,
    Unknown,
}

impl TokenKind {
    pub fn detect(token: &str) -> Self {
        if token.starts_with("ghp_") {
            TokenKind::Classic
        } else if token.starts_with("github_pat_") || token.starts_with("github_") {
            TokenKind::FineGrained
        } else {
            TokenKind::Unknown
        }
    }

    pub fn preferred_scheme(&self) -> AuthScheme {
        match self {
            TokenKind::Classic => AuthScheme::Token,
            TokenKind::FineGrained | TokenKind::Unknown => AuthScheme::Bearer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// Legacy `Authorization: token <t>`.
    Token,
    Bearer,
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthScheme::Token => f.write_str("token"),
            AuthScheme::Bearer => f.write_str("Bearer"),
        }
    }
}

#[derive(Clone)]
pub struct Credentials {
    token: String,
    scheme: AuthScheme,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let scheme = TokenKind::detect(&token).preferred_scheme();
        Self { token, scheme }
    }

    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    pub fn header_value(&self) -> String {
        format!("{} {}", self.scheme, self.token)
    }

    /// Credentials to retry with after a 401, if the scheme has a fallback.
    pub fn fallback(&self) -> Option<Credentials> {
        match self.scheme {
            AuthScheme::Bearer => Some(Credentials {
                token: self.token.clone(),
                scheme: AuthScheme::Token,
            }),
            AuthScheme::Token => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("scheme", &self.scheme)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_token_kind() {
        assert_eq!(TokenKind::detect("ghp_abc123"), TokenKind::Classic);
        assert_eq!(TokenKind::detect("github_pat_11AA"), TokenKind::FineGrained);
        assert_eq!(TokenKind::detect("github_xyz"), TokenKind::FineGrained);
        assert_eq!(TokenKind::detect("gho_oauth"), TokenKind::Unknown);
    }

    #[test]
    fn test_header_value() {
        assert_eq!(Credentials::new("ghp_abc").header_value(), "token ghp_abc");
        assert_eq!(
            Credentials::new("github_pat_abc").header_value(),
            "Bearer github_pat_abc"
        );
        assert_eq!(Credentials::new("opaque").header_value(), "Bearer opaque");
    }

    #[test]
    fn test_fallback_only_from_bearer() {
        let fallback = Credentials::new("opaque").fallback().unwrap();
        assert_eq!(fallback.header_value(), "token opaque");
        assert!(fallback.fallback().is_none());
        assert!(Credentials::new("ghp_abc").fallback().is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", Credentials::new("ghp_secret"));
        assert!(!debug.contains("ghp_secret"));
    }
}
