//! Explicit color tables for rarity chips and tier pills.
//!
//! Each entry pairs a foreground with its background tint so views never
//! derive one class from another by string rewriting.

use crate::catalog::Rarity;

/// Tailwind class sets for one rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityPalette {
    /// Compact chip used on gallery cards.
    pub chip: &'static str,
    /// Larger pill used on the detail view.
    pub pill: &'static str,
}

impl Rarity {
    #[must_use]
    pub const fn palette(self) -> RarityPalette {
        match self {
            Self::Common => RarityPalette {
                chip: "bg-slate-100 text-slate-600 dark:bg-slate-800/50 dark:text-slate-400 border-slate-200 dark:border-slate-700",
                pill: "bg-slate-100 text-slate-700 dark:bg-slate-800 dark:text-slate-300",
            },
            Self::Uncommon => RarityPalette {
                chip: "bg-emerald-50 text-emerald-600 dark:bg-emerald-900/20 dark:text-emerald-400 border-emerald-200 dark:border-emerald-800",
                pill: "bg-emerald-100 text-emerald-700 dark:bg-emerald-900/50 dark:text-emerald-300",
            },
            Self::Rare => RarityPalette {
                chip: "bg-blue-50 text-blue-600 dark:bg-blue-900/20 dark:text-blue-400 border-blue-200 dark:border-blue-800",
                pill: "bg-blue-100 text-blue-700 dark:bg-blue-900/50 dark:text-blue-300",
            },
            Self::Legendary => RarityPalette {
                chip: "bg-purple-50 text-purple-600 dark:bg-purple-900/20 dark:text-purple-400 border-purple-200 dark:border-purple-800",
                pill: "bg-purple-100 text-purple-700 dark:bg-purple-900/50 dark:text-purple-300",
            },
            Self::Mythic => RarityPalette {
                chip: "bg-amber-50 text-amber-600 dark:bg-amber-900/20 dark:text-amber-400 border-amber-200 dark:border-amber-800",
                pill: "bg-amber-100 text-amber-700 dark:bg-amber-900/50 dark:text-amber-300",
            },
            Self::Unknown => RarityPalette {
                chip: "bg-gray-100 text-gray-600 border-gray-200",
                pill: "bg-gray-100 text-gray-700",
            },
        }
    }
}

const TIER_PILLS: &[(&str, &str)] = &[
    ("text-amber-700", "bg-amber-100 text-amber-700 border-amber-300"),
    ("text-slate-400", "bg-gray-100 text-slate-500 border-slate-300"),
    ("text-yellow-400", "bg-yellow-100 text-yellow-600 border-yellow-300"),
];

const NEUTRAL_TIER_PILL: &str = "bg-gray-100 text-gray-700 border-gray-300";

/// Pill classes for a tier's color hint; unrecognized hints get a neutral pill.
#[must_use]
pub fn tier_pill_classes(color_hint: &str) -> &'static str {
    TIER_PILLS
        .iter()
        .find(|&&(hint, _)| hint == color_hint)
        .map_or(NEUTRAL_TIER_PILL, |&(_, classes)| classes)
}
