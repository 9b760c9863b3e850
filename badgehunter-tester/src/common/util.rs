use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::{fs, path::Path};
use thirtyfour::prelude::*;

use crate::browser::PageProbe;
use crate::common::scenario::ScenarioCtx;

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str, seed: u64) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/seed-{seed}/{ts}")
}

/// Summary written as `failure.json` next to the screenshot and DOM dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub scenario: String,
    pub seed: u64,
    pub base_url: String,
    pub page_url: Option<String>,
    pub owned_ids: Vec<String>,
    pub theme: Option<String>,
    pub error_chain: Vec<String>,
}

impl FailureReport {
    fn new(scenario: &str, ctx: &ScenarioCtx, err: &anyhow::Error) -> Self {
        Self {
            scenario: scenario.to_string(),
            seed: ctx.seed,
            base_url: ctx.base_url.clone(),
            error_chain: err.chain().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Default)]
struct FailureArtifacts {
    screenshot: Option<Vec<u8>>,
    dom: Option<String>,
    report: FailureReport,
}

/// Record what the client looked like when `scenario` failed. Every probe is
/// best-effort; only directory and report writes can fail.
pub async fn capture_artifacts(
    driver: &WebDriver,
    ctx: &ScenarioCtx,
    scenario: &str,
    dir: &str,
    err: &anyhow::Error,
) -> Result<()> {
    let mut report = FailureReport::new(scenario, ctx, err);
    report.page_url = driver.current_url().await.ok().map(|url| url.to_string());
    if let Ok(stored) = PageProbe::new(driver).stored().await {
        report.owned_ids = stored.owned_ids();
        report.theme = stored.theme;
    }

    let artifacts = FailureArtifacts {
        screenshot: driver.screenshot_as_png().await.ok(),
        dom: driver.source().await.ok(),
        report,
    };
    write_artifacts(Path::new(dir), &artifacts)
}

fn write_artifacts(dir: &Path, artifacts: &FailureArtifacts) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;

    if let Some(png) = &artifacts.screenshot {
        save_optional(&dir.join("screenshot.png"), png);
    }
    if let Some(dom) = &artifacts.dom {
        save_optional(&dir.join("dom.html"), dom.as_bytes());
    }
    let report = serde_json::to_vec_pretty(&artifacts.report).context("encoding failure report")?;
    fs::write(dir.join("failure.json"), report).context("writing failure report")?;
    Ok(())
}

fn save_optional(path: &Path, bytes: &[u8]) {
    if let Err(err) = fs::write(path, bytes) {
        log::warn!("{} not saved: {err}", path.display());
    }
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse the `--seeds` list; every token must be an unsigned integer.
pub fn parse_seeds(tokens: &[String]) -> Result<Vec<u64>> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed {token:?}"))
        })
        .collect()
}
