use chrono::{DateTime, Utc};

use crate::config::PipelineConfig;
use crate::i18n::Locale;
use crate::models::{Project, Repository};
use crate::taxonomy::{capitalize_words, display_name, title_case};

const MAX_TOPIC_TAGS: usize = 5;

const PLACEHOLDER_IMAGE_IDS: [u64; 10] = [
    1460925895917,
    1557821552,
    1454165804606,
    1461749286829,
    1504864292467,
    1551650975,
    1551288049,
    1541467131941,
    1551697786,
    1553877528,
];

pub struct ProjectTransformer {
    excluded_tags: Vec<String>,
    fallback_tag: String,
    locale: Locale,
}

impl ProjectTransformer {
    pub fn new(excluded_tags: Vec<String>, fallback_tag: impl Into<String>, locale: Locale) -> Self {
        Self {
            excluded_tags,
            fallback_tag: fallback_tag.into(),
            locale,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            config.excluded_tags.clone(),
            config.fallback_tag.clone(),
            config.locale,
        )
    }

    pub fn transform(&self, repos: &[Repository]) -> Vec<Project> {
        self.transform_at(repos, Utc::now())
    }

    /// `now` only feeds the cache-busting part of homepage preview images.
    pub fn transform_at(&self, repos: &[Repository], now: DateTime<Utc>) -> Vec<Project> {
        repos
            .iter()
            .enumerate()
            .map(|(index, repo)| self.project(index, repo, now))
            .collect()
    }

    fn project(&self, index: usize, repo: &Repository, now: DateTime<Utc>) -> Project {
        let image = match repo.homepage {
            Some(_) => format!(
                "https://opengraph.githubassets.com/{}/{}/{}",
                now.timestamp_millis(),
                repo.owner.login,
                repo.name
            ),
            None => format!(
                "https://images.unsplash.com/photo-{}?w=500&h=300&fit=crop",
                PLACEHOLDER_IMAGE_IDS[index % PLACEHOLDER_IMAGE_IDS.len()]
            ),
        };

        Project {
            id: repo.id,
            title: title_case(&repo.name, &['-', '_']),
            description: repo
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| self.locale.no_description().to_string()),
            image,
            tags: self.tags(repo),
            github: repo.html_url.clone(),
            demo: repo.homepage.clone().unwrap_or_else(|| repo.html_url.clone()),
            homepage: repo.homepage.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated: repo.updated_at,
        }
    }

    /// Primary language, then up to five topics, deduplicated in order.
    pub fn tags(&self, repo: &Repository) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();

        if let Some(language) = &repo.language {
            tags.push(display_name(language).to_string());
        }

        for topic in repo.topics.iter().take(MAX_TOPIC_TAGS) {
            let tag = capitalize_words(topic, '-');
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        tags.retain(|tag| !tag.trim().is_empty() && !self.excluded_tags.contains(tag));

        if tags.is_empty() {
            tags.push(self.fallback_tag.clone());
        }
        tags
    }
}

/// Projects most recently updated first, capped at `limit`.
pub fn most_recent(mut repos: Vec<Repository>, limit: usize) -> Vec<Repository> {
    repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    repos.truncate(limit);
    repos
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            TagFilter::All
        } else {
            TagFilter::Tag(value.to_string())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub search: String,
    pub tag: TagFilter,
}

impl ProjectFilter {
    pub fn new(search: impl Into<String>, tag: TagFilter) -> Self {
        Self {
            search: search.into(),
            tag,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = project.title.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle);

        let matches_tag = match &self.tag {
            TagFilter::All => true,
            TagFilter::Tag(tag) => project.has_tag(tag),
        };

        matches_search && matches_tag
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Every tag used by `projects`, in order of first appearance.
pub fn all_tags(projects: &[Project]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}
