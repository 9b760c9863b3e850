//! Profile metrics and the lookup capability.
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Longest login GitHub accepts.
pub const MAX_HANDLE_LEN: usize = 39;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    MergedPrs,
    Stars,
    DiscussionAnswers,
    CoauthoredCommits,
}

impl MetricKey {
    pub const ALL: [Self; 4] = [
        Self::MergedPrs,
        Self::Stars,
        Self::DiscussionAnswers,
        Self::CoauthoredCommits,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MergedPrs => "Merged pull requests",
            Self::Stars => "Stars on owned repositories",
            Self::DiscussionAnswers => "Accepted discussion answers",
            Self::CoauthoredCommits => "Co-authored commits",
        }
    }
}

/// One lookup's worth of profile data. Only measured metrics are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfileMetrics {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
    #[serde(default)]
    pub metrics: BTreeMap<MetricKey, u64>,
}

impl ProfileMetrics {
    #[must_use]
    pub fn get(&self, key: MetricKey) -> Option<u64> {
        self.metrics.get(&key).copied()
    }

    /// Metric value with unmeasured keys read as zero.
    #[must_use]
    pub fn value(&self, key: MetricKey) -> u64 {
        self.get(key).unwrap_or(0)
    }

    #[must_use]
    pub fn has(&self, key: MetricKey) -> bool {
        self.metrics.contains_key(&key)
    }

    #[must_use]
    pub fn with_metric(mut self, key: MetricKey, value: u64) -> Self {
        self.metrics.insert(key, value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("User not found")]
    NotFound,
    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("Failed to fetch user profile: {0}")]
    Unavailable(String),
}

/// Source of public profile metrics.
#[async_trait(?Send)]
pub trait MetricsProvider {
    /// Look up a profile by handle. No retries are attempted.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] when no public profile exists,
    /// [`LookupError::RateLimited`] when the upstream throttles, and
    /// [`LookupError::Unavailable`] for any other failure.
    async fn lookup(&self, handle: &str) -> Result<ProfileMetrics, LookupError>;
}

fn handle_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$").ok())
        .as_ref()
}

/// Trim a user-entered handle and check it could be a real login.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] when the handle cannot name a profile.
pub fn normalize_handle(raw: &str) -> Result<String, LookupError> {
    let handle = raw.trim().trim_start_matches('@');
    let valid = handle.len() <= MAX_HANDLE_LEN
        && handle_pattern().is_some_and(|re| re.is_match(handle));
    if valid {
        Ok(handle.to_string())
    } else {
        Err(LookupError::NotFound)
    }
}
