use anyhow::{Context, Result};
use badgehunter_core::{CollectionStore, MemoryStorage, OWNED_KEY, THEME_KEY, Theme, catalog};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::browser::PageProbe;

fn seeded_badge_id(seed: u64) -> &'static str {
    let badges = catalog().badges();
    let len = u64::try_from(badges.len()).unwrap_or(1).max(1);
    let idx = usize::try_from(seed % len).unwrap_or(0);
    badges.get(idx).map_or("pull-shark", |badge| badge.id.as_str())
}

pub struct CollectionScenario;

#[async_trait::async_trait]
impl BrowserScenario for CollectionScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        let page = PageProbe::new(driver);
        let id = seeded_badge_id(ctx.seed);
        let expected = format!("1/{}", catalog().len());

        page.open_fresh(&ctx.base_url).await?;
        page.click(&format!("article[data-badge-id='{id}'] .owned-toggle"))
            .await?;
        let counter = page.text("#owned-counter").await?;
        anyhow::ensure!(counter == expected, "after marking {id} counter was {counter:?}");

        page.reload().await?;
        let counter = page.text("#owned-counter").await?;
        anyhow::ensure!(counter == expected, "after reload counter was {counter:?}");

        let stored = page.stored().await?;
        let owned = stored.owned.context("owned set was not persisted")?;
        anyhow::ensure!(
            owned == format!("[\"{id}\"]"),
            "persisted owned set was {owned}"
        );
        if ctx.verbose {
            println!("  🌐 {id} stayed owned across reload");
        }
        Ok(())
    }
}

impl CombinedScenario for CollectionScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(
            "Collection Persistence",
            collection_round_trip,
        ))
    }
}

fn collection_round_trip(rng: &mut ChaCha8Rng) -> Result<()> {
    let storage = MemoryStorage::new();
    let mut store = CollectionStore::load(storage.clone(), None);

    let mut ids: Vec<&str> = catalog().badges().iter().map(|b| b.id.as_str()).collect();
    ids.shuffle(rng);
    let take = rng.gen_range(0..=ids.len());
    for id in &ids[..take] {
        store.toggle_owned(id)?;
    }
    anyhow::ensure!(store.owned_count() == take, "expected {take} owned badges");

    let before = storage.get(OWNED_KEY);
    let probe = ids.choose(rng).copied().unwrap_or("pull-shark");
    store.toggle_owned(probe)?;
    store.toggle_owned(probe)?;
    anyhow::ensure!(
        storage.get(OWNED_KEY) == before || (take == 0 && storage.get(OWNED_KEY).as_deref() == Some("[]")),
        "double toggle of {probe} changed the stored set"
    );

    let reloaded = CollectionStore::load(storage, None);
    anyhow::ensure!(
        reloaded.state() == store.state(),
        "reload produced {:?}, expected {:?}",
        reloaded.state(),
        store.state()
    );
    Ok(())
}

pub struct ThemeScenario;

#[async_trait::async_trait]
impl BrowserScenario for ThemeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        let page = PageProbe::new(driver);
        page.open_fresh(&ctx.base_url).await?;

        let before = page.is_dark().await?;
        page.click("#theme-toggle").await?;
        anyhow::ensure!(page.is_dark().await? != before, "toggle did not switch the theme");

        page.reload().await?;
        let after = page.is_dark().await?;
        anyhow::ensure!(after != before, "theme reverted after reload");

        let expected = if after { Theme::Dark } else { Theme::Light };
        let stored = page.stored().await?;
        anyhow::ensure!(
            stored.theme.as_deref() == Some(expected.as_str()),
            "persisted theme was {:?}",
            stored.theme
        );
        if ctx.verbose {
            println!("  🌐 theme {} survived reload", expected.as_str());
        }
        Ok(())
    }
}

impl CombinedScenario for ThemeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Theme Persistence", theme_round_trip))
    }
}

fn theme_round_trip(rng: &mut ChaCha8Rng) -> Result<()> {
    let system_dark = rng.gen_bool(0.5);
    let storage = MemoryStorage::new();
    let mut store = CollectionStore::load(storage.clone(), Some(system_dark));
    let initial = if system_dark { Theme::Dark } else { Theme::Light };
    anyhow::ensure!(store.theme() == initial, "unset theme should follow the system");

    let flips = rng.gen_range(1..6);
    for _ in 0..flips {
        store.set_theme(store.theme().toggled())?;
    }
    let expected = if flips % 2 == 0 { initial } else { initial.toggled() };
    anyhow::ensure!(store.theme() == expected, "theme after {flips} flips");
    anyhow::ensure!(
        storage.get(THEME_KEY).as_deref() == Some(expected.as_str()),
        "stored theme out of sync"
    );

    // A stored choice wins over the opposite system preference.
    let reloaded = CollectionStore::load(storage, Some(!expected.is_dark()));
    anyhow::ensure!(reloaded.theme() == expected, "stored theme lost on reload");
    Ok(())
}
