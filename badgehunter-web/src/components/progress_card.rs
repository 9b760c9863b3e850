use badgehunter_core::{BadgeProgress, numbers::percent_to_u8, tier_pill_classes};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entry: BadgeProgress,
}

/// Width style for the progress bar; percent is already clamped.
fn bar_width(percent: f64) -> String {
    format!("width: {percent:.1}%")
}

#[function_component(ProgressCard)]
pub fn progress_card(p: &Props) -> Html {
    let entry = &p.entry;
    let progress = &entry.progress;
    let maxed = progress.is_maxed();

    let current_pill = progress.current.as_ref().map_or_else(Html::default, |tier| {
        html! {
            <span class={classes!("tier-pill", tier_pill_classes(&tier.color))}>
                { tier.name.clone() }
            </span>
        }
    });
    let caption = match (&progress.next, maxed) {
        (_, true) => "Max Level Achieved!".to_string(),
        (Some(next), false) => format!("Next: {}", next.name),
        (None, false) => String::new(),
    };
    let fraction = match (maxed, progress.target()) {
        (false, Some(target)) => format!("{} / {target}", entry.value),
        _ => String::new(),
    };
    let bar_class = classes!("progress-fill", if maxed { "bg-github-success" } else { "bg-github-accent" });

    html! {
        <article class="progress-card" data-badge-id={entry.badge.id.clone()}>
            <header class="progress-card-head">
                <div class="badge-emoji" aria-hidden="true">{ entry.badge.emoji.clone() }</div>
                <div>
                    <h4>{ entry.badge.name.clone() }</h4>
                    <div class="progress-current">
                        { "Current: " }<span class="font-mono">{ entry.value.to_string() }</span>
                    </div>
                </div>
                { current_pill }
            </header>
            <div class="progress-meta">
                <span class="progress-caption">{ caption }</span>
                <span class="progress-fraction">{ fraction }</span>
            </div>
            <div class="progress-track" role="progressbar" aria-valuemin="0" aria-valuemax="100"
                aria-valuenow={percent_to_u8(progress.percent).to_string()}>
                <div class={bar_class} style={bar_width(progress.percent)}></div>
            </div>
            <p class="progress-note">{ "* Stats estimated via public API. May be delayed." }</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use badgehunter_core::{MetricKey, ProfileMetrics, catalog, evaluate_badge};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(value: u64) -> String {
        let metrics = ProfileMetrics::default().with_metric(MetricKey::MergedPrs, value);
        let entry = evaluate_badge(catalog().get("pull-shark").unwrap(), &metrics);
        block_on(LocalServerRenderer::<ProgressCard>::with_props(Props { entry }).render())
    }

    #[test]
    fn partial_progress_shows_next_tier_and_fraction() {
        let html = render(9);
        assert!(html.contains("Next: Silver"));
        assert!(html.contains("9 / 16"));
        assert!(html.contains("width: 50.0%"));
        assert!(html.contains(r#"aria-valuenow="50""#));
        assert!(html.contains("Bronze"));
    }

    #[test]
    fn maxed_ladder_celebrates() {
        let html = render(2048);
        assert!(html.contains("Max Level Achieved!"));
        assert!(html.contains("width: 100.0%"));
        assert!(html.contains(r#"aria-valuenow="100""#));
        assert!(html.contains("bg-github-success"));
    }

    #[test]
    fn zero_has_no_current_tier() {
        let html = render(0);
        assert!(html.contains("Next: Bronze"));
        assert!(html.contains("0 / 2"));
        assert!(!html.contains("tier-pill"));
    }
}
