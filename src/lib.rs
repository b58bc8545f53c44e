pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod github;
pub mod taxonomy;
pub mod analysis;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use i18n::Locale;
pub use analysis::{ProfilePipeline, ProfileSession};
