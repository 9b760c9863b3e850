//! Gallery filtering and sorting.
//!
//! A query narrows the catalog by free text, ownership and category, sorts
//! the survivors stably, then splits them into the active grid and the
//! legacy grid (retired, unreleased and profile highlights).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::catalog::{Badge, Catalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OwnershipFilter {
    #[default]
    All,
    Owned,
    Unowned,
}

impl OwnershipFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Owned, Self::Unowned];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Badges",
            Self::Owned => "Owned",
            Self::Unowned => "Unowned",
        }
    }

    #[must_use]
    pub const fn admits(self, owned: bool) -> bool {
        match self {
            Self::All => true,
            Self::Owned => owned,
            Self::Unowned => !owned,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Selector choices: `All` first, then each catalog category.
    #[must_use]
    pub fn options(catalog: &Catalog) -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(catalog.categories().into_iter().map(Self::Named))
            .collect()
    }

    /// Parse a selector value; `All` (any case) or empty selects everything.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Named(name) => name,
        }
    }

    #[must_use]
    pub fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Name,
    Difficulty,
    Category,
    Rarity,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Name, Self::Difficulty, Self::Category, Self::Rarity];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Difficulty => "Difficulty",
            Self::Category => "Category",
            Self::Rarity => "Rarity",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.label().eq_ignore_ascii_case(value.trim()))
    }

    #[must_use]
    pub fn compare(self, a: &Badge, b: &Badge) -> Ordering {
        match self {
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            Self::Difficulty => a.difficulty.rank().cmp(&b.difficulty.rank()),
            Self::Rarity => a.rarity.rank().cmp(&b.rarity.rank()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub text: String,
    pub ownership: OwnershipFilter,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryResult<'a> {
    pub active: Vec<&'a Badge>,
    pub legacy: Vec<&'a Badge>,
}

impl QueryResult<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len() + self.legacy.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.legacy.is_empty()
    }
}

#[must_use]
pub fn query<'a>(
    catalog: &'a Catalog,
    request: &CatalogQuery,
    owned: &BTreeSet<String>,
) -> QueryResult<'a> {
    let needle = request.text.trim().to_lowercase();
    let mut matches: Vec<&Badge> = catalog
        .badges()
        .iter()
        .filter(|badge| badge.matches_text(&needle))
        .filter(|badge| request.ownership.admits(owned.contains(&badge.id)))
        .filter(|badge| request.category.admits(&badge.category))
        .collect();
    matches.sort_by(|a, b| request.sort.compare(a, b));

    let (active, legacy) = matches
        .into_iter()
        .partition(|badge| badge.status.is_active());
    QueryResult { active, legacy }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(badges: &[&'a Badge]) -> Vec<&'a str> {
        badges.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn default_query_splits_active_and_legacy() {
        let catalog = Catalog::load_from_static();
        let result = query(&catalog, &CatalogQuery::default(), &BTreeSet::new());
        assert_eq!(result.len(), catalog.len());
        assert!(result.active.iter().all(|b| b.status.is_active()));
        assert!(result.legacy.iter().all(|b| !b.status.is_active()));
        assert_eq!(
            ids(&result.legacy),
            vec!["arctic-code-vault", "developer-program", "pro", "mars-2020"]
        );
    }

    #[test]
    fn owned_filter_contains_only_owned() {
        let catalog = Catalog::load_from_static();
        let owned: BTreeSet<String> = ["yolo".to_string()].into();
        let request = CatalogQuery {
            ownership: OwnershipFilter::Owned,
            ..CatalogQuery::default()
        };
        let result = query(&catalog, &request, &owned);
        assert_eq!(ids(&result.active), vec!["yolo"]);
        assert!(result.legacy.is_empty());

        let unowned = query(
            &catalog,
            &CatalogQuery {
                ownership: OwnershipFilter::Unowned,
                ..CatalogQuery::default()
            },
            &owned,
        );
        assert_eq!(unowned.len(), catalog.len() - 1);
        assert!(!ids(&unowned.active).contains(&"yolo"));
    }

    #[test]
    fn rarity_sort_orders_by_rank() {
        let catalog = Catalog::load_from_static();
        let picked = ["starstruck", "galaxy-brain", "pull-shark"];
        let subset = Catalog(
            picked
                .iter()
                .filter_map(|id| catalog.get(id).cloned())
                .collect(),
        );
        let request = CatalogQuery {
            sort: SortKey::Rarity,
            ..CatalogQuery::default()
        };
        let result = query(&subset, &request, &BTreeSet::new());
        assert_eq!(
            ids(&result.active),
            vec!["pull-shark", "galaxy-brain", "starstruck"]
        );
    }

    #[test]
    fn sort_is_stable_for_equal_ranks() {
        let catalog = Catalog::load_from_static();
        let request = CatalogQuery {
            sort: SortKey::Rarity,
            ..CatalogQuery::default()
        };
        let result = query(&catalog, &request, &BTreeSet::new());
        let commons: Vec<&str> = result
            .active
            .iter()
            .filter(|b| b.rarity.rank() == 1)
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(commons, vec!["pull-shark", "yolo", "public-sponsor"]);
    }

    #[test]
    fn text_matches_guide_steps_case_insensitively() {
        let catalog = Catalog::load_from_static();
        let request = CatalogQuery {
            text: "  CO-AUTHORED ".to_string(),
            ..CatalogQuery::default()
        };
        let result = query(&catalog, &request, &BTreeSet::new());
        assert!(ids(&result.active).contains(&"pair-extraordinaire"));
        assert!(!ids(&result.active).contains(&"starstruck"));
    }

    #[test]
    fn category_filter_matches_exactly() {
        let catalog = Catalog::load_from_static();
        let request = CatalogQuery {
            category: CategoryFilter::from_value("Events"),
            sort: SortKey::Name,
            ..CatalogQuery::default()
        };
        let result = query(&catalog, &request, &BTreeSet::new());
        assert!(result.active.is_empty());
        assert_eq!(ids(&result.legacy), vec!["arctic-code-vault", "mars-2020"]);

        let options = CategoryFilter::options(&catalog);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options.len(), catalog.categories().len() + 1);
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
    }

    #[test]
    fn sort_keys_parse_from_labels() {
        assert_eq!(SortKey::from_value("rarity"), Some(SortKey::Rarity));
        assert_eq!(SortKey::from_value("bogus"), None);
    }
}
