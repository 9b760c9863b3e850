use anyhow::Result;
use badgehunter_core::{
    APOLOGY, AdviceMode, AdviceProvider, GeminiAdvisor, GithubMetricsProvider, LookupError,
    MetricsProvider,
};
use futures::executor::block_on;
use rand::Rng;
use rand::distributions::Alphanumeric;
use rand_chacha::ChaCha8Rng;

use crate::logic::fixtures::{FIXTURE_API, ScriptedTransport};

fn random_handle(rng: &mut ChaCha8Rng) -> String {
    let len = rng.gen_range(3..=20);
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

/// Profile statuses map onto the lookup taxonomy; malformed handles never
/// reach the network.
pub fn lookup_classification(rng: &mut ChaCha8Rng) -> Result<()> {
    let handle = random_handle(rng);
    let cases = [
        (404, LookupError::NotFound),
        (403, LookupError::RateLimited),
        (429, LookupError::RateLimited),
        (500, LookupError::Unavailable("HTTP 500".to_string())),
    ];
    for (status, expected) in cases {
        let transport = ScriptedTransport::new().route(&format!("/users/{handle}"), status, "{}");
        let provider = GithubMetricsProvider::with_base(transport, FIXTURE_API);
        let outcome = block_on(provider.lookup(&handle));
        anyhow::ensure!(
            outcome.as_ref().err() == Some(&expected),
            "status {status} for {handle} gave {outcome:?}"
        );
    }

    let transport = ScriptedTransport::new();
    let requests = transport.counter();
    let provider = GithubMetricsProvider::with_base(transport, FIXTURE_API);
    let bad = format!("{handle} with spaces");
    anyhow::ensure!(
        block_on(provider.lookup(&bad)) == Err(LookupError::NotFound),
        "malformed handle should be NotFound"
    );
    anyhow::ensure!(requests.get() == 0, "malformed handle hit the network");
    Ok(())
}

/// Every advice failure path resolves to the fixed apology.
pub fn advice_apology(rng: &mut ChaCha8Rng) -> Result<()> {
    let mode = if rng.gen_bool(0.5) {
        AdviceMode::Deep
    } else {
        AdviceMode::Fast
    };
    let question = format!("How do I get Pull Shark? #{}", rng.r#gen::<u16>());

    let keyless_transport = ScriptedTransport::new();
    let requests = keyless_transport.counter();
    let keyless = GeminiAdvisor::new(keyless_transport, None).with_base_url(FIXTURE_API);
    anyhow::ensure!(block_on(keyless.ask(&question, mode)) == APOLOGY, "missing key");
    anyhow::ensure!(requests.get() == 0, "keyless advisor hit the network");

    let offline = GeminiAdvisor::new(ScriptedTransport::new(), Some("k".into()))
        .with_base_url(FIXTURE_API);
    anyhow::ensure!(block_on(offline.ask(&question, mode)) == APOLOGY, "network failure");

    let endpoint = offline.endpoint(mode);
    for (status, body) in [(500, "{}"), (200, "not json")] {
        let advisor = GeminiAdvisor::new(
            ScriptedTransport::new().route_url(endpoint.clone(), status, body),
            Some("k".into()),
        )
        .with_base_url(FIXTURE_API);
        anyhow::ensure!(
            block_on(advisor.ask(&question, mode)) == APOLOGY,
            "status {status} with body {body:?}"
        );
    }

    let answering = GeminiAdvisor::new(
        ScriptedTransport::new().route_url(
            endpoint,
            200,
            r#"{"candidates":[{"content":{"parts":[{"text":"Merge two PRs."}]}}]}"#,
        ),
        Some("k".into()),
    )
    .with_base_url(FIXTURE_API);
    let reply = block_on(answering.ask(&question, mode));
    anyhow::ensure!(reply == "Merge two PRs.", "healthy reply was {reply:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn remote_scenarios_hold() {
        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            lookup_classification(&mut rng).unwrap();
            advice_apology(&mut rng).unwrap();
        }
    }

    #[test]
    fn random_handles_are_valid_logins() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let handle = random_handle(&mut rng);
        assert!(badgehunter_core::normalize_handle(&handle).is_ok());
    }
}
