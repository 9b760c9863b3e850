//! Remote providers wired to the browser transport and build-time config.

use badgehunter_core::{GeminiAdvisor, GithubMetricsProvider};

use crate::fetch::FetchTransport;

pub type Metrics = GithubMetricsProvider<FetchTransport>;
pub type Advisor = GeminiAdvisor<FetchTransport>;

/// GitHub provider against `GITHUB_API_BASE` (or the public API).
#[must_use]
pub fn metrics_provider() -> Metrics {
    GithubMetricsProvider::new(FetchTransport)
}

/// Gemini advisor keyed by the build-time `GEMINI_API_KEY`.
#[must_use]
pub fn advice_provider() -> Advisor {
    let advisor = GeminiAdvisor::from_env(FetchTransport);
    if option_env!("GEMINI_API_KEY").is_none() {
        log::warn!("GEMINI_API_KEY was not set at build time; the assistant will apologise");
    }
    advisor
}
