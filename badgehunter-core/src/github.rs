//! GitHub REST metrics provider.
//!
//! The profile request decides success: its status is classified into a
//! [`LookupError`]. The merged-PR search and repository listing are
//! best-effort and leave their metric absent when they fail. Stars are
//! summed over the first page of owned repositories only.

use async_trait::async_trait;
use serde::Deserialize;

use crate::metrics::{LookupError, MetricKey, MetricsProvider, ProfileMetrics, normalize_handle};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const REPOS_PAGE_SIZE: u32 = 100;

/// API base URL, overridable at build time with `GITHUB_API_BASE`.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("GITHUB_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

#[derive(Debug, Clone, Deserialize)]
struct UserProfile {
    login: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    avatar_url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SearchCount {
    total_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct RepoSummary {
    #[serde(default)]
    stargazers_count: u64,
}

/// Map the profile response status onto the lookup taxonomy.
///
/// # Errors
///
/// 404 is [`LookupError::NotFound`], 403 and 429 are
/// [`LookupError::RateLimited`], any other non-2xx is
/// [`LookupError::Unavailable`].
pub fn classify_profile_status(status: u16) -> Result<(), LookupError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(LookupError::NotFound),
        403 | 429 => Err(LookupError::RateLimited),
        other => Err(LookupError::Unavailable(format!("HTTP {other}"))),
    }
}

#[derive(Debug, Clone)]
pub struct GithubMetricsProvider<T> {
    transport: T,
    api_base: String,
}

impl<T: HttpTransport> GithubMetricsProvider<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_base(transport, api_base())
    }

    #[must_use]
    pub fn with_base(transport: T, api_base: impl Into<String>) -> Self {
        Self {
            transport,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn profile_url(&self, handle: &str) -> String {
        format!("{}/users/{handle}", self.api_base)
    }

    #[must_use]
    pub fn merged_prs_url(&self, handle: &str) -> String {
        format!(
            "{}/search/issues?q=author:{handle}+type:pr+is:merged",
            self.api_base
        )
    }

    #[must_use]
    pub fn repos_url(&self, handle: &str) -> String {
        format!(
            "{}/users/{handle}/repos?per_page={REPOS_PAGE_SIZE}&type=owner",
            self.api_base
        )
    }

    async fn get(&self, url: String) -> Result<HttpResponse, LookupError> {
        let request = HttpRequest::get(url).with_header("Accept", "application/vnd.github+json");
        self.transport
            .send(request)
            .await
            .map_err(|err| LookupError::Unavailable(err.to_string()))
    }

    async fn fetch_profile(&self, handle: &str) -> Result<UserProfile, LookupError> {
        let response = self.get(self.profile_url(handle)).await?;
        classify_profile_status(response.status)?;
        serde_json::from_str(&response.body)
            .map_err(|err| LookupError::Unavailable(format!("malformed profile: {err}")))
    }

    async fn fetch_merged_prs(&self, handle: &str) -> Option<u64> {
        let response = self.get(self.merged_prs_url(handle)).await.ok()?;
        if !response.is_success() {
            log::debug!("merged PR search for {handle} returned {}", response.status);
            return None;
        }
        serde_json::from_str::<SearchCount>(&response.body)
            .ok()
            .map(|search| search.total_count)
    }

    async fn fetch_star_total(&self, handle: &str) -> Option<u64> {
        let response = self.get(self.repos_url(handle)).await.ok()?;
        if !response.is_success() {
            log::debug!("repository listing for {handle} returned {}", response.status);
            return None;
        }
        serde_json::from_str::<Vec<RepoSummary>>(&response.body)
            .ok()
            .map(|repos| {
                repos
                    .iter()
                    .fold(0_u64, |acc, repo| acc.saturating_add(repo.stargazers_count))
            })
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> MetricsProvider for GithubMetricsProvider<T> {
    async fn lookup(&self, handle: &str) -> Result<ProfileMetrics, LookupError> {
        let handle = normalize_handle(handle)?;
        log::info!("looking up GitHub profile {handle}");

        let profile = self.fetch_profile(&handle).await?;
        let mut metrics = ProfileMetrics {
            name: profile
                .name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| profile.login.clone()),
            username: profile.login,
            avatar_url: profile.avatar_url,
            ..ProfileMetrics::default()
        };
        // Measurable counters fall back to 0 so their ladders stay listed.
        let merged_prs = self.fetch_merged_prs(&handle).await.unwrap_or(0);
        let stars = self.fetch_star_total(&handle).await.unwrap_or(0);
        metrics.metrics.insert(MetricKey::MergedPrs, merged_prs);
        metrics.metrics.insert(MetricKey::Stars, stars);
        Ok(metrics)
    }
}
