use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::error::Result;

pub const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Performs GET requests against the GitHub API.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, authorization: Option<&str>) -> Result<ApiResponse>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_V3));
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static(concat!("gitfolio/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, authorization: Option<&str>) -> Result<ApiResponse> {
        let mut request = self.client.get(url);
        if let Some(value) = authorization {
            let mut value = HeaderValue::from_str(value)?;
            value.set_sensitive(true);
            request = request.header(header::AUTHORIZATION, value);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
