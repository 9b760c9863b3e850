use anyhow::Result;
use rand_chacha::ChaCha8Rng;
use thirtyfour::prelude::*;

pub mod catalog;
pub mod collection;
pub mod query;
pub mod remote;
pub mod smoke;
pub mod tiers;

#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub base_url: String,
    pub seed: u64,
    pub verbose: bool,
}

/// One logic iteration. The generator is seeded per iteration, so a failing
/// seed reproduces exactly.
pub type LogicCheck = fn(&mut ChaCha8Rng) -> Result<()>;

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: LogicCheck,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: LogicCheck) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()>;

    fn has_browser_run(&self) -> bool {
        true
    }
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// Scenario with no browser counterpart.
#[derive(Clone)]
pub struct LogicScenario {
    name: &'static str,
    check: LogicCheck,
}

impl LogicScenario {
    pub const fn new(name: &'static str, check: LogicCheck) -> Self {
        Self { name, check }
    }
}

#[async_trait::async_trait]
impl BrowserScenario for LogicScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx) -> Result<()> {
        anyhow::bail!("{} has no browser run", self.name)
    }

    fn has_browser_run(&self) -> bool {
        false
    }
}

impl CombinedScenario for LogicScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(self.name, self.check))
    }
}

const SCENARIOS: [(&str, &str); 10] = [
    ("smoke", "Gallery Smoke Test"),
    ("collection", "Collection Persistence"),
    ("theme", "Theme Persistence"),
    ("tier-ladder", "Tier Ladder Scenarios"),
    ("tier-sweep", "Tier Sweep Properties"),
    ("owned-filter", "Owned Filter Query"),
    ("rarity-sort", "Rarity Sort Order"),
    ("lookup-not-found", "Lookup Error Classification"),
    ("advice-apology", "Advice Failure Apology"),
    ("catalog-validation", "Catalog Validation"),
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "collection" | "ownership" => Some(Box::new(collection::CollectionScenario)),
        "theme" => Some(Box::new(collection::ThemeScenario)),
        "tier-ladder" | "ladder" => Some(Box::new(LogicScenario::new(
            "Tier Ladder Scenarios",
            tiers::ladder_scenarios,
        ))),
        "tier-sweep" | "sweep" => Some(Box::new(LogicScenario::new(
            "Tier Sweep Properties",
            tiers::sweep_properties,
        ))),
        "owned-filter" => Some(Box::new(LogicScenario::new(
            "Owned Filter Query",
            query::owned_filter,
        ))),
        "rarity-sort" => Some(Box::new(LogicScenario::new(
            "Rarity Sort Order",
            query::rarity_sort,
        ))),
        "lookup-not-found" | "lookup" => Some(Box::new(LogicScenario::new(
            "Lookup Error Classification",
            remote::lookup_classification,
        ))),
        "advice-apology" | "advice" => Some(Box::new(LogicScenario::new(
            "Advice Failure Apology",
            remote::advice_apology,
        ))),
        "catalog-validation" | "catalog" => Some(Box::new(LogicScenario::new(
            "Catalog Validation",
            catalog::catalog_validation,
        ))),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.to_vec()
}

pub fn all_scenario_keys() -> Vec<String> {
    SCENARIOS.iter().map(|(key, _)| (*key).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, description) in list_scenarios() {
            let scenario = get_scenario(key).unwrap_or_else(|| panic!("{key} missing"));
            let logic = scenario.as_logic_scenario().expect("logic run");
            assert_eq!(logic.name, description);
        }
        assert!(get_scenario("bogus").is_none());
    }

    #[test]
    fn only_dom_scenarios_run_in_browser() {
        let browser: Vec<&str> = list_scenarios()
            .into_iter()
            .filter_map(|(key, _)| get_scenario(key).filter(|s| s.has_browser_run()).map(|_| key))
            .collect();
        assert_eq!(browser, ["smoke", "collection", "theme"]);
    }
}
