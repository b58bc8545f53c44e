use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use std::sync::Mutex;

/// Remaining calls at which a warning is logged.
const LOW_WATERMARK: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub limit: Option<u32>,
    pub remaining: u32,
    pub reset_at: Option<DateTime<Utc>>,
}

impl RateLimitStatus {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let remaining = header_number::<u32>(headers, "x-ratelimit-remaining")?;
        let limit = header_number::<u32>(headers, "x-ratelimit-limit");
        let reset_at = header_number::<i64>(headers, "x-ratelimit-reset")
            .and_then(|ts| DateTime::from_timestamp(ts, 0));

        Some(Self {
            limit,
            remaining,
            reset_at,
        })
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Last rate-limit headers seen by a client. Observed only; requests are never delayed.
#[derive(Debug, Default)]
pub struct RateLimitTracker {
    last: Mutex<Option<RateLimitStatus>>,
}

impl RateLimitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_from_headers(&self, headers: &HeaderMap) {
        let Some(status) = RateLimitStatus::from_headers(headers) else {
            return;
        };

        if status.remaining <= LOW_WATERMARK {
            tracing::warn!(
                "GitHub rate limit low: {} remaining, resets at {}",
                status.remaining,
                status
                    .reset_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "unknown".to_string())
            );
        }

        if let Ok(mut last) = self.last.lock() {
            *last = Some(status);
        }
    }

    pub fn last(&self) -> Option<RateLimitStatus> {
        self.last.lock().ok().and_then(|last| *last)
    }
}
