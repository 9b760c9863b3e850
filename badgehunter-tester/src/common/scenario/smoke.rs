use anyhow::Result;
use badgehunter_core::{MetricKey, catalog, tier_pill_classes, troubleshooting_tips};
use rand_chacha::ChaCha8Rng;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::browser::PageProbe;

pub struct SmokeScenario;

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        let page = PageProbe::new(driver);
        page.open_fresh(&ctx.base_url).await?;

        let cards = page.card_count().await?;
        anyhow::ensure!(
            cards == catalog().len(),
            "gallery should show every badge, got {cards}"
        );
        let counter = page.text("#owned-counter").await?;
        anyhow::ensure!(
            counter == format!("0/{}", catalog().len()),
            "fresh collection counter was {counter:?}"
        );
        page.text("#legacy-badges").await?;

        if ctx.verbose {
            println!("  🌐 Gallery rendered {cards} cards, counter {counter}");
        }
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Gallery Smoke Test", smoke_expectation))
    }
}

fn smoke_expectation(_rng: &mut ChaCha8Rng) -> Result<()> {
    let catalog = catalog();
    anyhow::ensure!(catalog.len() == 11, "catalog should hold 11 badges, got {}", catalog.len());
    anyhow::ensure!(
        troubleshooting_tips().len() == 5,
        "expected 5 troubleshooting tips"
    );

    let tiered: Vec<_> = catalog.badges().iter().filter(|b| b.has_tiers()).collect();
    anyhow::ensure!(tiered.len() == 4, "expected 4 tiered badges, got {}", tiered.len());
    for badge in tiered {
        let key = badge.metric_key;
        anyhow::ensure!(
            key.is_some_and(|k| MetricKey::ALL.contains(&k)),
            "{} has no usable metric key",
            badge.id
        );
        for tier in &badge.tiers {
            anyhow::ensure!(
                tier_pill_classes(&tier.color) != tier_pill_classes(""),
                "{} tier {} falls back to the neutral pill",
                badge.id,
                tier.name
            );
        }
    }

    let legacy = catalog
        .badges()
        .iter()
        .filter(|b| !b.status.is_active())
        .count();
    anyhow::ensure!(legacy == 4, "expected 4 legacy badges, got {legacy}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn smoke_expectation_holds_for_bundled_data() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        smoke_expectation(&mut rng).unwrap();
    }
}
