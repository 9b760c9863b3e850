use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thirtyfour::prelude::*;

/// Persisted client state as read back from `localStorage`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StoredState {
    pub owned: Option<String>,
    pub theme: Option<String>,
}

impl StoredState {
    /// Owned badge ids; an absent or unreadable entry reads as empty.
    #[must_use]
    pub fn owned_ids(&self) -> Vec<String> {
        self.owned
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }
}

/// Thin helpers over a driver pointed at the Badge Hunter client.
#[derive(Debug, Clone)]
pub struct PageProbe<'a> {
    driver: &'a WebDriver,
}

impl<'a> PageProbe<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    /// Load the client with empty storage.
    pub async fn open_fresh(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        self.driver
            .execute("window.localStorage.clear();", vec![])
            .await
            .context("clearing localStorage")?;
        self.reload().await
    }

    pub async fn reload(&self) -> Result<()> {
        self.driver.refresh().await?;
        self.driver
            .find(By::Id("main"))
            .await
            .context("client did not mount after reload")?;
        Ok(())
    }

    pub async fn text(&self, css: &str) -> Result<String> {
        let elem = self
            .driver
            .find(By::Css(css))
            .await
            .with_context(|| format!("missing element {css}"))?;
        Ok(elem.text().await?.trim().to_string())
    }

    pub async fn click(&self, css: &str) -> Result<()> {
        self.driver
            .find(By::Css(css))
            .await
            .with_context(|| format!("missing element {css}"))?
            .click()
            .await?;
        Ok(())
    }

    pub async fn card_count(&self) -> Result<usize> {
        Ok(self
            .driver
            .find_all(By::Css("article[data-badge-id]"))
            .await?
            .len())
    }

    pub async fn is_dark(&self) -> Result<bool> {
        let ret = self
            .driver
            .execute(
                "return document.documentElement.classList.contains('dark');",
                vec![],
            )
            .await?;
        Ok(ret.json().as_bool().unwrap_or(false))
    }

    pub async fn stored(&self) -> Result<StoredState> {
        let ret = self
            .driver
            .execute(
                "return { owned: localStorage.getItem('my_badges'), theme: localStorage.getItem('theme') };",
                vec![],
            )
            .await?;
        parse_stored(ret.json())
    }
}

fn parse_stored(value: &Value) -> Result<StoredState> {
    serde_json::from_value(value.clone()).context("decoding stored state")
}
