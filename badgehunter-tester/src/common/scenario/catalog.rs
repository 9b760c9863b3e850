use anyhow::{Context, Result};
use badgehunter_core::{Catalog, CatalogIssue, catalog, evaluate};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

const BROKEN_CATALOG: &str = r#"[
  {"id": "twin", "name": "Twin", "description": "d", "how_to_earn": "h",
   "status": "active", "difficulty": "easy", "category": "Code & PRs", "rarity": "common"},
  {"id": "twin", "name": "Twin Again", "description": "d", "how_to_earn": "h",
   "status": "active", "difficulty": "easy", "category": "Code & PRs", "rarity": "common"},
  {"id": "slide", "name": "Slide", "description": "d", "how_to_earn": "h",
   "status": "active", "difficulty": "hard", "category": "Community", "rarity": "rare",
   "tiers": [
     {"name": "Bronze", "criteria": "c", "threshold": 10},
     {"name": "Silver", "criteria": "c", "threshold": 10},
     {"name": "Gold", "criteria": "c", "threshold": 5}
   ]}
]"#;

/// The bundled catalog is clean, and a broken one reports every issue
/// without making evaluation panic.
pub fn catalog_validation(rng: &mut ChaCha8Rng) -> Result<()> {
    let issues = catalog().validate();
    anyhow::ensure!(issues.is_empty(), "bundled catalog issues: {issues:?}");

    let broken = Catalog::from_json(BROKEN_CATALOG).context("parsing broken fixture")?;
    let issues = broken.validate();
    let expected = [
        CatalogIssue::DuplicateId {
            badge_id: "twin".to_string(),
        },
        CatalogIssue::MissingMetricKey {
            badge_id: "slide".to_string(),
        },
        CatalogIssue::NonIncreasingThreshold {
            badge_id: "slide".to_string(),
            tier: "Silver".to_string(),
        },
        CatalogIssue::NonIncreasingThreshold {
            badge_id: "slide".to_string(),
            tier: "Gold".to_string(),
        },
    ];
    anyhow::ensure!(issues == expected, "unexpected issues: {issues:?}");

    let slide = broken.get("slide").context("slide missing")?;
    let value = rng.gen_range(0..=20);
    let progress = evaluate(&slide.tiers, value);
    anyhow::ensure!(
        (0.0..=100.0).contains(&progress.percent),
        "malformed ladder gave {} at {value}",
        progress.percent
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn validation_scenario_holds() {
        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            catalog_validation(&mut rng).unwrap();
        }
    }
}
