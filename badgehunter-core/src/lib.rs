//! Badge Hunter Core
//!
//! Platform-agnostic logic for the Badge Hunter catalog and progress browser.
//! This crate holds the badge catalog, tier evaluation, gallery queries and
//! the local collection store, plus the metrics and advice providers that
//! talk to remote services through an injected [`HttpTransport`].

pub mod advice;
pub mod catalog;
pub mod collection;
pub mod github;
pub mod metrics;
pub mod numbers;
pub mod palette;
pub mod progress;
pub mod query;
pub mod tiers;
pub mod transport;

// Re-export commonly used types
pub use advice::{
    APOLOGY, AdviceError, AdviceMode, AdviceProvider, ChatMessage, ChatRole, Conversation,
    EMPTY_REPLY, GREETING, GeminiAdvisor,
};
pub use catalog::{
    Badge, BadgeStatus, Catalog, CatalogIssue, Difficulty, Rarity, Tier, TroubleshootingTip,
    catalog, troubleshooting_tips,
};
pub use collection::{
    CollectionState, CollectionStorage, CollectionStore, MemoryStorage, MemoryStorageError,
    OWNED_KEY, StoreError, THEME_KEY, Theme,
};
pub use github::GithubMetricsProvider;
pub use metrics::{LookupError, MetricKey, MetricsProvider, ProfileMetrics, normalize_handle};
pub use palette::{RarityPalette, tier_pill_classes};
pub use progress::{BadgeProgress, evaluate_badge, progress_report};
pub use query::{CatalogQuery, CategoryFilter, OwnershipFilter, QueryResult, SortKey, query};
pub use tiers::{TierProgress, evaluate};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
