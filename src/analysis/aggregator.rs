use futures::future::join_all;
use indicatif::ProgressBar;
use std::collections::HashMap;

use crate::github::GitHubClient;
use crate::models::{LanguageBytes, LanguageEntry, Repository};
use crate::taxonomy::{is_programming_language, normalize_language_name};

pub const TOP_LANGUAGES: usize = 10;

/// Byte totals keyed by name, kept in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct OrderedTotals {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl OrderedTotals {
    pub fn add(&mut self, name: &str, bytes: u64) {
        match self.index.get(name) {
            Some(&i) => self.entries[i].1 += bytes,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), bytes));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, bytes)| (name.as_str(), *bytes))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Language bytes merged across repositories.
#[derive(Debug, Clone, Default)]
pub struct LanguageTotals {
    pub raw: OrderedTotals,
    pub normalized: OrderedTotals,
    pub total_bytes: u64,
}

impl LanguageTotals {
    pub fn merge(&mut self, languages: &LanguageBytes) {
        for (name, bytes) in languages.iter() {
            self.raw.add(name, bytes);
            self.normalized.add(normalize_language_name(name), bytes);
            self.total_bytes += bytes;
        }
    }

    /// Bytes of the names that count as programming languages.
    pub fn programming_bytes(&self) -> u64 {
        self.normalized
            .iter()
            .filter(|(name, _)| is_programming_language(name))
            .map(|(_, bytes)| bytes)
            .sum()
    }

    /// Ranks programming languages by bytes.
    ///
    /// Percentages are relative to the programming-only subtotal and are
    /// rounded independently, so they need not sum to exactly 100. Equal
    /// byte counts keep their order of first appearance.
    pub fn top_entries(&self, limit: usize) -> Vec<LanguageEntry> {
        let programming_total = self.programming_bytes();

        let mut entries: Vec<LanguageEntry> = self
            .normalized
            .iter()
            .filter(|(name, _)| is_programming_language(name))
            .map(|(name, bytes)| LanguageEntry {
                name: name.to_string(),
                bytes,
                percentage: percentage(bytes, programming_total),
            })
            .collect();

        entries.sort_by(|a, b| b.bytes.cmp(&a.bytes));
        entries.truncate(limit);
        entries
    }
}

fn percentage(bytes: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((bytes as f64 / total as f64) * 100.0).round() as u8
}

/// Merges per-repository byte maps into the ranked top-N list.
pub fn aggregate_languages(per_repo: &[LanguageBytes], limit: usize) -> Vec<LanguageEntry> {
    let mut totals = LanguageTotals::default();
    for languages in per_repo {
        totals.merge(languages);
    }
    totals.top_entries(limit)
}

pub struct LanguageAggregator<'a> {
    github: &'a GitHubClient,
}

impl<'a> LanguageAggregator<'a> {
    pub fn new(github: &'a GitHubClient) -> Self {
        Self { github }
    }

    /// Fetches every repository's languages concurrently.
    ///
    /// A repository whose fetch fails contributes an empty map; the result
    /// has one map per input repository, in input order.
    pub async fn fetch_all(&self, repos: &[Repository], progress: &ProgressBar) -> Vec<LanguageBytes> {
        let futures = repos.iter().map(|repo| {
            let progress = progress.clone();
            async move {
                let languages = match self.github.get_languages(repo).await {
                    Ok(languages) => languages,
                    Err(e) => {
                        tracing::warn!("Failed to fetch languages for {}: {}", repo.name, e);
                        LanguageBytes::new()
                    }
                };
                progress.inc(1);
                languages
            }
        });

        join_all(futures).await
    }

    pub async fn aggregate(&self, repos: &[Repository], progress: &ProgressBar) -> Vec<LanguageEntry> {
        let per_repo = self.fetch_all(repos, progress).await;
        aggregate_languages(&per_repo, TOP_LANGUAGES)
    }
}
