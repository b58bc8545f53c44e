use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::github::client::GitHubClient;

pub const PER_PAGE: u32 = 100;

pub struct Paginator<'a> {
    client: &'a GitHubClient,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Fetches every page of `base_url`.
    ///
    /// Stops at the first page holding fewer than `per_page` items, so an
    /// account with exactly `k * per_page` items costs `k + 1` requests.
    /// `username` only feeds the error hint.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        base_url: &str,
        per_page: u32,
        username: &str,
    ) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let separator = if base_url.contains('?') { "&" } else { "?" };
            let url = format!("{}{}per_page={}&page={}", base_url, separator, per_page, page);

            tracing::debug!("Fetching: {}", url);
            let response = self.client.request(&url).await?;
            if !response.is_success() {
                return Err(self.client.api_error(&response, username));
            }

            let items: Vec<T> = serde_json::from_str(&response.body)?;
            let items_count = items.len();
            all_items.extend(items);

            if items_count == 0 || items_count < per_page as usize {
                break;
            }

            page += 1;
        }

        Ok(all_items)
    }
}
