use anyhow::{Context, Result};
use badgehunter_core::{Tier, TierProgress, catalog, evaluate};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

const EPSILON: f64 = 1e-9;

fn tier_name(tier: Option<&Tier>) -> Option<&str> {
    tier.map(|t| t.name.as_str())
}

fn expect_progress(
    tiers: &[Tier],
    value: u64,
    current: Option<&str>,
    next: Option<&str>,
    percent: f64,
) -> Result<()> {
    let progress = evaluate(tiers, value);
    anyhow::ensure!(
        tier_name(progress.current.as_ref()) == current,
        "value {value}: current {:?}, expected {current:?}",
        progress.current.as_ref().map(|t| &t.name)
    );
    anyhow::ensure!(
        tier_name(progress.next.as_ref()) == next,
        "value {value}: next {:?}, expected {next:?}",
        progress.next.as_ref().map(|t| &t.name)
    );
    anyhow::ensure!(
        (progress.percent - percent).abs() < EPSILON,
        "value {value}: percent {}, expected {percent}",
        progress.percent
    );
    Ok(())
}

/// The Pull Shark ladder `[Bronze 2, Silver 16, Gold 1024]` at its edges.
pub fn ladder_scenarios(_rng: &mut ChaCha8Rng) -> Result<()> {
    let tiers = &catalog()
        .get("pull-shark")
        .context("pull-shark missing from catalog")?
        .tiers;

    expect_progress(tiers, 16, Some("Silver"), Some("Gold"), 0.0)?;
    expect_progress(tiers, 1024, Some("Gold"), None, 100.0)?;
    expect_progress(tiers, 0, None, Some("Bronze"), 0.0)?;
    expect_progress(tiers, 9, Some("Bronze"), Some("Silver"), 50.0)?;
    Ok(())
}

fn random_ladder(rng: &mut ChaCha8Rng) -> Vec<Tier> {
    let len = rng.gen_range(1..=4);
    let mut threshold = 0_u64;
    (0..len)
        .map(|idx| {
            threshold += rng.gen_range(1..=500);
            Tier {
                name: format!("T{idx}"),
                criteria: String::new(),
                color: String::new(),
                threshold: Some(threshold),
            }
        })
        .collect()
}

fn greatest_reached(tiers: &[Tier], value: u64) -> Option<&str> {
    tiers
        .iter()
        .filter(|tier| tier.threshold.is_some_and(|t| t <= value))
        .next_back()
        .map(|tier| tier.name.as_str())
}

/// Walk a random strictly increasing ladder with rising values: the
/// current tier is the greatest reached, percent stays in `[0, 100]`, and
/// it never drops while the bracket is unchanged.
pub fn sweep_properties(rng: &mut ChaCha8Rng) -> Result<()> {
    let ladder = random_ladder(rng);
    let top = ladder.last().and_then(|t| t.threshold).unwrap_or(1);
    let step_cap = top / 8 + 1;

    let mut value = 0_u64;
    let mut previous: Option<TierProgress> = None;
    while value <= top + step_cap {
        let progress = evaluate(&ladder, value);
        anyhow::ensure!(
            (0.0..=100.0).contains(&progress.percent),
            "percent {} out of range at {value}",
            progress.percent
        );
        anyhow::ensure!(
            tier_name(progress.current.as_ref()) == greatest_reached(&ladder, value),
            "wrong current tier at {value}"
        );
        if let Some(prev) = &previous
            && prev.current == progress.current
        {
            anyhow::ensure!(
                progress.percent + EPSILON >= prev.percent,
                "percent fell from {} to {} at {value}",
                prev.percent,
                progress.percent
            );
        }
        previous = Some(progress);
        value += rng.gen_range(1..=step_cap);
    }

    let past_top = evaluate(&ladder, top.saturating_mul(2));
    anyhow::ensure!(past_top.is_maxed(), "ladder should be maxed past its top");
    anyhow::ensure!((past_top.percent - 100.0).abs() < EPSILON, "maxed ladder below 100%");
    Ok(())
}
