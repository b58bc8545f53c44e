#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use gitfolio::github::{ApiResponse, Transport};
use gitfolio::Result;

pub const BASE_URL: &str = "https://api.test";

#[derive(Clone)]
struct Route {
    status: StatusCode,
    body: String,
    headers: HeaderMap,
    delay: Option<Duration>,
    /// Only answer requests carrying this authorization header.
    authorization: Option<Option<String>>,
}

/// Serves canned responses keyed by URL and records every request.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, Vec<Route>>>,
    requests: Mutex<Vec<(String, Option<String>)>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, url: &str, status: u16, body: Value) {
        self.add(url, status, body, HeaderMap::new(), None, None);
    }

    /// Responds with extra response headers, e.g. rate-limit counters.
    pub fn respond_with_headers(
        &self,
        url: &str,
        status: u16,
        body: Value,
        headers: &[(&'static str, &'static str)],
    ) {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(HeaderName::from_static(*name), HeaderValue::from_static(*value));
        }
        self.add(url, status, body, map, None, None);
    }

    pub fn respond_slowly(&self, url: &str, body: Value, delay: Duration) {
        self.add(url, 200, body, HeaderMap::new(), Some(delay), None);
    }

    /// Responds only when the request carries `authorization`.
    pub fn respond_with_auth(&self, url: &str, authorization: Option<&str>, status: u16, body: Value) {
        self.add(
            url,
            status,
            body,
            HeaderMap::new(),
            None,
            Some(authorization.map(|a| a.to_string())),
        );
    }

    fn add(
        &self,
        url: &str,
        status: u16,
        body: Value,
        headers: HeaderMap,
        delay: Option<Duration>,
        authorization: Option<Option<String>>,
    ) {
        let route = Route {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.to_string(),
            headers,
            delay,
            authorization,
        };
        self.routes
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push(route);
    }

    pub fn requests(&self) -> Vec<(String, Option<String>)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|(url, _)| url.starts_with(prefix))
            .count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str, authorization: Option<&str>) -> Result<ApiResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), authorization.map(|a| a.to_string())));

        let route = {
            let routes = self.routes.lock().unwrap();
            routes.get(url).and_then(|candidates| {
                candidates
                    .iter()
                    .find(|r| match &r.authorization {
                        Some(expected) => expected.as_deref() == authorization,
                        None => true,
                    })
                    .cloned()
            })
        };

        let route = route.unwrap_or(Route {
            status: StatusCode::NOT_FOUND,
            body: json!({ "message": "Not Found" }).to_string(),
            headers: HeaderMap::new(),
            delay: None,
            authorization: None,
        });

        if let Some(delay) = route.delay {
            tokio::time::sleep(delay).await;
        }

        Ok(ApiResponse {
            status: route.status,
            headers: route.headers,
            body: route.body,
        })
    }
}

pub fn user_repos_url(username: &str, page: u32) -> String {
    format!("{}/users/{}/repos?per_page=100&page={}", BASE_URL, username, page)
}

pub fn owner_repos_url(page: u32) -> String {
    format!("{}/user/repos?affiliation=owner&per_page=100&page={}", BASE_URL, page)
}

pub fn languages_url(name: &str) -> String {
    format!("{}/repos/octocat/{}/languages", BASE_URL, name)
}

pub fn repo_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{} description", name),
        "language": "Rust",
        "topics": [],
        "stargazers_count": 1,
        "forks_count": 0,
        "homepage": null,
        "html_url": format!("https://github.com/octocat/{}", name),
        "languages_url": languages_url(name),
        "owner": { "login": "octocat" },
        "fork": false,
        "private": false,
        "updated_at": format!("2024-01-{:02}T00:00:00Z", (id % 28) + 1)
    })
}

pub fn repo_page(start_id: u64, count: u64) -> Value {
    Value::Array(
        (start_id..start_id + count)
            .map(|id| repo_json(id, &format!("repo-{}", id)))
            .collect(),
    )
}
