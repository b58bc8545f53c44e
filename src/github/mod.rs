pub mod auth;
pub mod client;
pub mod paginator;
pub mod rate_limit;
pub mod transport;

pub use auth::{AuthScheme, Credentials, TokenKind};
pub use client::GitHubClient;
pub use paginator::{Paginator, PER_PAGE};
pub use rate_limit::{RateLimitStatus, RateLimitTracker};
pub use transport::{ApiResponse, HttpTransport, Transport};
