//! Badge catalog model and static data loading.
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::OnceLock;

use crate::metrics::MetricKey;

const DEFAULT_BADGE_DATA: &str =
    include_str!("../../badgehunter-web/static/assets/data/badges.json");
const DEFAULT_TIPS_DATA: &str = include_str!("../../badgehunter-web/static/assets/data/tips.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStatus {
    Active,
    Retired,
    Unreleased,
    ProfileHighlight,
}

impl BadgeStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Retired => "Retired",
            Self::Unreleased => "Unreleased",
            Self::ProfileHighlight => "Profile Highlight",
        }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// How hard a badge is to earn. Values outside the known set load as
/// [`Difficulty::Unknown`] and rank below everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
    Exclusive,
    Unknown,
}

impl Difficulty {
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Extreme => 4,
            Self::Exclusive => 5,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
            Self::Exclusive => "Exclusive",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            "extreme" => Self::Extreme,
            "exclusive" => Self::Exclusive,
            _ => Self::Unknown,
        }
    }
}

/// How rare a badge is among profiles. Unknown values rank lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
    Mythic,
    Unknown,
}

impl Rarity {
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Common => 1,
            Self::Uncommon => 2,
            Self::Rare => 3,
            Self::Legendary => 4,
            Self::Mythic => 5,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Legendary => "Legendary",
            Self::Mythic => "Mythic",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<String> for Rarity {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "common" => Self::Common,
            "uncommon" => Self::Uncommon,
            "rare" => Self::Rare,
            "legendary" => Self::Legendary,
            "mythic" => Self::Mythic,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    pub criteria: String,
    /// Display color hint, e.g. `text-amber-700`.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub threshold: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    pub description: String,
    pub how_to_earn: String,
    pub status: BadgeStatus,
    pub difficulty: Difficulty,
    pub category: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub tiers: Vec<Tier>,
    #[serde(default)]
    pub guide_steps: Vec<String>,
    #[serde(default)]
    pub metric_key: Option<MetricKey>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Badge {
    #[must_use]
    pub fn has_tiers(&self) -> bool {
        !self.tiers.is_empty()
    }

    /// Case-insensitive substring match over the searchable text fields.
    /// `needle` must already be lowercased; an empty needle matches.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(needle);
        hit(&self.name)
            || hit(&self.description)
            || hit(&self.how_to_earn)
            || self.guide_steps.iter().any(|step| hit(step))
    }
}

/// A data problem found by [`Catalog::validate`]. None of these stop the
/// catalog from loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateId { badge_id: String },
    NonIncreasingThreshold { badge_id: String, tier: String },
    MissingMetricKey { badge_id: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { badge_id } => write!(f, "duplicate badge id '{badge_id}'"),
            Self::NonIncreasingThreshold { badge_id, tier } => write!(
                f,
                "badge '{badge_id}' tier '{tier}' does not raise the threshold"
            ),
            Self::MissingMetricKey { badge_id } => {
                write!(f, "tiered badge '{badge_id}' has no metric key")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog(pub Vec<Badge>);

impl Catalog {
    #[must_use]
    pub const fn empty() -> Self {
        Self(vec![])
    }

    /// Parse a catalog from a JSON array of badges.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not a valid badge list.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self)
    }

    /// Load the catalog bundled with the client. Falls back to an empty
    /// catalog if the bundled data cannot be parsed.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_BADGE_DATA).unwrap_or_else(|err| {
            log::error!("bundled badge catalog is malformed: {err}");
            Self::empty()
        })
    }

    #[must_use]
    pub fn badges(&self) -> &[Badge] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Badge> {
        self.0.iter().find(|badge| badge.id == id)
    }

    /// Distinct category labels in alphabetical order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|badge| badge.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        for badge in &self.0 {
            if !seen.insert(badge.id.as_str()) {
                issues.push(CatalogIssue::DuplicateId {
                    badge_id: badge.id.clone(),
                });
            }
            if badge.has_tiers() && badge.metric_key.is_none() {
                issues.push(CatalogIssue::MissingMetricKey {
                    badge_id: badge.id.clone(),
                });
            }
            let mut previous: Option<u64> = None;
            for tier in &badge.tiers {
                let Some(threshold) = tier.threshold else {
                    continue;
                };
                if previous.is_some_and(|prev| threshold <= prev) {
                    issues.push(CatalogIssue::NonIncreasingThreshold {
                        badge_id: badge.id.clone(),
                        tier: tier.name.clone(),
                    });
                }
                previous = Some(threshold);
            }
        }
        issues
    }
}

/// Shared catalog parsed from the bundled data on first use.
#[must_use]
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let catalog = Catalog::load_from_static();
        for issue in catalog.validate() {
            log::warn!("catalog: {issue}");
        }
        catalog
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TroubleshootingTip {
    pub title: String,
    pub description: String,
}

#[must_use]
pub fn troubleshooting_tips() -> &'static [TroubleshootingTip] {
    static TIPS: OnceLock<Vec<TroubleshootingTip>> = OnceLock::new();
    TIPS.get_or_init(|| serde_json::from_str(DEFAULT_TIPS_DATA).unwrap_or_default())
}
