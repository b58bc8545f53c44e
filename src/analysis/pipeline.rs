use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::aggregator::LanguageAggregator;
use crate::analysis::projects::{most_recent, ProjectTransformer};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::{LanguageEntry, Project, Repository};

pub struct ProfilePipeline {
    github: GitHubClient,
    transformer: ProjectTransformer,
    config: PipelineConfig,
}

impl ProfilePipeline {
    pub fn new(github: GitHubClient, config: PipelineConfig) -> Self {
        Self {
            github,
            transformer: ProjectTransformer::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn github(&self) -> &GitHubClient {
        &self.github
    }

    pub fn transformer(&self) -> &ProjectTransformer {
        &self.transformer
    }

    /// Every non-fork repository of `username`, private ones included only
    /// when a token is configured and `include_private` is set.
    pub async fn repositories(&self, username: &str) -> Result<Vec<Repository>> {
        self.github
            .list_repositories(username, self.config.include_private)
            .await
    }

    /// Top programming languages across all of `username`'s repositories.
    pub async fn languages(&self, username: &str) -> Result<Vec<LanguageEntry>> {
        tracing::info!("Aggregating languages for: {}", username);
        let repos = self.repositories(username).await?;

        let pb = self.progress_bar(repos.len() as u64);
        let entries = LanguageAggregator::new(&self.github)
            .aggregate(&repos, &pb)
            .await;
        pb.finish_and_clear();

        tracing::info!(
            "Aggregated {} languages from {} repositories",
            entries.len(),
            repos.len()
        );
        Ok(entries)
    }

    /// The most recently updated repositories as project cards.
    pub async fn projects(&self, username: &str) -> Result<Vec<Project>> {
        let repos = self.repositories(username).await?;
        Ok(self.to_projects(repos))
    }

    pub fn to_projects(&self, repos: Vec<Repository>) -> Vec<Project> {
        let repos = most_recent(repos, self.config.repos_limit);
        self.transformer.transform(&repos)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} repos")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}
