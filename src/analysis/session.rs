use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::analysis::pipeline::ProfilePipeline;
use crate::error::Result;
use crate::models::{FetchState, LanguageEntry, Project, Repository};

/// A fetch state plus the number of the latest refresh that targets it.
struct Tracked<T> {
    generation: AtomicU64,
    state: Mutex<FetchState<T>>,
}

impl<T: Default + Clone> Tracked<T> {
    fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            state: Mutex::new(FetchState::idle()),
        }
    }

    /// Starts a refresh, superseding any refresh still in flight.
    async fn begin(&self) -> u64 {
        let mut state = self.state.lock().await;
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        state.loading = true;
        state.error = None;
        ticket
    }

    /// Applies `next` unless a newer refresh started after `ticket`.
    async fn finish(&self, ticket: u64, next: FetchState<T>) -> bool {
        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            return false;
        }
        *state = next;
        true
    }

    async fn snapshot(&self) -> FetchState<T> {
        self.state.lock().await.clone()
    }
}

fn settle<T: Default>(result: Result<T>) -> FetchState<T> {
    match result {
        Ok(data) => FetchState::ready(data),
        Err(e) => {
            tracing::error!("GitHub fetch failed: {}", e);
            FetchState::failed(e)
        }
    }
}

/// Holds what a profile view renders and keeps it consistent with the most
/// recent request: a refresh that is overtaken by a newer one for the same
/// resource is dropped when it resolves.
pub struct ProfileSession {
    pipeline: Arc<ProfilePipeline>,
    languages: Tracked<Vec<LanguageEntry>>,
    repositories: Tracked<Vec<Repository>>,
}

impl ProfileSession {
    pub fn new(pipeline: Arc<ProfilePipeline>) -> Self {
        Self {
            pipeline,
            languages: Tracked::new(),
            repositories: Tracked::new(),
        }
    }

    /// Returns whether the result was applied.
    pub async fn refresh_languages(&self, username: &str) -> bool {
        let ticket = self.languages.begin().await;

        let next = if username.trim().is_empty() {
            FetchState::idle()
        } else {
            settle(self.pipeline.languages(username).await)
        };

        let applied = self.languages.finish(ticket, next).await;
        if !applied {
            tracing::debug!("Discarding superseded language fetch for {}", username);
        }
        applied
    }

    /// Returns whether the result was applied.
    pub async fn refresh_repositories(&self, username: &str) -> bool {
        let ticket = self.repositories.begin().await;

        let next = if username.trim().is_empty() {
            FetchState::idle()
        } else {
            settle(self.pipeline.repositories(username).await)
        };

        let applied = self.repositories.finish(ticket, next).await;
        if !applied {
            tracing::debug!("Discarding superseded repository fetch for {}", username);
        }
        applied
    }

    pub async fn languages(&self) -> FetchState<Vec<LanguageEntry>> {
        self.languages.snapshot().await
    }

    pub async fn repositories(&self) -> FetchState<Vec<Repository>> {
        self.repositories.snapshot().await
    }

    /// Project cards for the repositories currently held.
    pub async fn projects(&self) -> Vec<Project> {
        let repos = self.repositories.snapshot().await.data;
        self.pipeline.to_projects(repos)
    }
}
