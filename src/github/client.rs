use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::{Config, DEFAULT_API_URL};
use crate::error::{remediation_hint, Error, Result};
use crate::github::auth::{AuthScheme, Credentials};
use crate::github::paginator::{Paginator, PER_PAGE};
use crate::github::rate_limit::RateLimitTracker;
use crate::github::transport::{ApiResponse, HttpTransport, Transport};
use crate::models::repository::ApiErrorBody;
use crate::models::{LanguageBytes, Repository};

pub struct GitHubClient {
    transport: Arc<dyn Transport>,
    credentials: RwLock<Option<Credentials>>,
    has_token: bool,
    rate_limits: RateLimitTracker,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        Ok(Self::with_transport(
            Arc::new(HttpTransport::new()?),
            DEFAULT_API_URL,
            token,
        ))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(
            Arc::new(HttpTransport::new()?),
            &config.api_url,
            config.github_token.as_deref(),
        ))
    }

    pub fn with_transport(
        transport: Arc<dyn Transport>,
        base_url: &str,
        token: Option<&str>,
    ) -> Self {
        let credentials = token
            .filter(|t| !t.trim().is_empty())
            .map(|t| Credentials::new(t.trim()));

        Self {
            transport,
            has_token: credentials.is_some(),
            credentials: RwLock::new(credentials),
            rate_limits: RateLimitTracker::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn has_token(&self) -> bool {
        self.has_token
    }

    /// Scheme that the next request will authenticate with.
    pub async fn auth_scheme(&self) -> Option<AuthScheme> {
        self.credentials.read().await.as_ref().map(|c| c.scheme())
    }

    /// Issues one GET, retrying once with the legacy `token` scheme when a
    /// `Bearer` request is rejected with 401. A successful retry makes the
    /// legacy scheme sticky for this client.
    pub(crate) async fn request(&self, url: &str) -> Result<ApiResponse> {
        let credentials = self.credentials.read().await.clone();
        let authorization = credentials.as_ref().map(|c| c.header_value());

        let response = self.transport.get(url, authorization.as_deref()).await?;
        self.rate_limits.update_from_headers(&response.headers);

        if response.status != reqwest::StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        let Some(fallback) = credentials.as_ref().and_then(|c| c.fallback()) else {
            return Ok(response);
        };

        tracing::info!("Bearer authorization rejected, retrying with token scheme");
        let retry = self
            .transport
            .get(url, Some(&fallback.header_value()))
            .await?;
        self.rate_limits.update_from_headers(&retry.headers);

        if retry.is_success() {
            *self.credentials.write().await = Some(fallback);
        }

        Ok(retry)
    }

    pub(crate) fn api_error(&self, response: &ApiResponse, username: &str) -> Error {
        let status = response.status.as_u16();
        let detail = serde_json::from_str::<ApiErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.message);

        let mut hint = remediation_hint(status, username);
        if status == 403 {
            if let Some(limits) = self.rate_limits.last().filter(|l| l.is_exhausted()) {
                let reset = limits
                    .reset_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "an unknown time".to_string());
                hint = hint.map(|h| format!("{}\nRate limit exhausted; it resets at {}.", h, reset));
            }
        }

        Error::Api {
            status,
            detail,
            hint,
        }
    }

    /// Lists the repositories owned by `username`, minus forks.
    ///
    /// With a token and `include_private`, the authenticated owner listing
    /// is used and private repositories are kept; otherwise they are dropped.
    pub async fn list_repositories(
        &self,
        username: &str,
        include_private: bool,
    ) -> Result<Vec<Repository>> {
        let keep_private = include_private && self.has_token;

        let url = if keep_private {
            format!("{}/user/repos?affiliation=owner", self.base_url)
        } else {
            validate_username(username)?;
            format!("{}/users/{}/repos", self.base_url, username)
        };

        if keep_private {
            tracing::info!("Fetching repositories owned by the authenticated user");
        } else {
            tracing::info!("Fetching repositories for: {}", username);
        }
        let repos: Vec<Repository> = Paginator::new(self)
            .fetch_all(&url, PER_PAGE, username)
            .await?;
        let fetched = repos.len();

        let repos: Vec<Repository> = repos
            .into_iter()
            .filter(|r| !r.fork)
            .filter(|r| keep_private || !r.private)
            .collect();

        tracing::info!(
            "Fetched {} repositories, {} after excluding forks and private repos",
            fetched,
            repos.len()
        );
        Ok(repos)
    }

    pub async fn get_languages(&self, repo: &Repository) -> Result<LanguageBytes> {
        let response = self.request(&repo.languages_url).await?;

        if !response.is_success() {
            return Err(self.api_error(&response, &repo.owner.login));
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    pub fn rate_limits(&self) -> &RateLimitTracker {
        &self.rate_limits
    }
}

/// Rejects names that would escape the `/users/{name}/repos` path segment.
fn validate_username(username: &str) -> Result<()> {
    let valid = !username.is_empty()
        && !username.contains("..")
        && !username.chars().any(|c| {
            matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control()
        });

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidUsername(username.to_string()))
    }
}
