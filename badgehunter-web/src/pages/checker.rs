use badgehunter_core::{LookupError, ProfileMetrics, catalog, progress_report};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::progress_card::ProgressCard;

/// State of the most recent profile lookup. Each lookup replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupStatus {
    #[default]
    Idle,
    Loading,
    Loaded(ProfileMetrics),
    Failed(String),
}

impl From<Result<ProfileMetrics, LookupError>> for LookupStatus {
    fn from(result: Result<ProfileMetrics, LookupError>) -> Self {
        match result {
            Ok(metrics) => Self::Loaded(metrics),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

impl LookupStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CheckerPageProps {
    pub status: LookupStatus,
    pub on_lookup: Callback<String>,
}

#[function_component(CheckerPage)]
pub fn checker_page(props: &CheckerPageProps) -> Html {
    let handle = use_state(String::new);

    let on_input = {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };
    let on_submit = {
        let handle = handle.clone();
        let cb = props.on_lookup.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = handle.trim();
            if !value.is_empty() {
                cb.emit(value.to_string());
            }
        })
    };

    let loading = props.status.is_loading();
    let submit_label = if loading { "Checking…" } else { "Check" };
    let error = match &props.status {
        LookupStatus::Failed(message) => html! {
            <div id="lookup-error" class="lookup-error" role="alert">{ message.clone() }</div>
        },
        _ => Html::default(),
    };
    let results = match &props.status {
        LookupStatus::Loaded(metrics) => render_results(metrics),
        _ => Html::default(),
    };

    html! {
        <div class="checker glass-panel">
            <header class="checker-head">
                <h2>{ "Progress Checker" }</h2>
                <p>{ "Track your journey towards the next tier." }</p>
            </header>
            <form class="lookup-form" onsubmit={on_submit}>
                <label for="handle-input" class="sr-only">{ "GitHub username" }</label>
                <span class="handle-prefix" aria-hidden="true">{ "@" }</span>
                <input id="handle-input" type="text" placeholder="github_username"
                    value={(*handle).clone()} oninput={on_input} />
                <button id="lookup-submit" type="submit" disabled={loading}>
                    { submit_label }
                </button>
            </form>
            { error }
            { results }
        </div>
    }
}

fn render_results(metrics: &ProfileMetrics) -> Html {
    let report = progress_report(catalog(), metrics);
    let cards = report.into_iter().map(|entry| {
        let key = entry.badge.id.clone();
        html! { <ProgressCard key={key} {entry} /> }
    });
    let body = if metrics.metrics.is_empty() {
        html! { <p class="no-metrics">{ "No trackable metrics were returned for this profile." }</p> }
    } else {
        html! { <div class="progress-grid">{ for cards }</div> }
    };
    html! {
        <div class="lookup-results">
            <div class="profile-summary">
                <img src={metrics.avatar_url.clone()} alt={metrics.username.clone()} class="avatar" />
                <div>
                    <h3>{ metrics.name.clone() }</h3>
                    <p>{ format!("@{}", metrics.username) }</p>
                </div>
            </div>
            { body }
        </div>
    }
}
