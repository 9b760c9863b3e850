use badgehunter_core::{Badge, BadgeStatus, tier_pill_classes};
use yew::prelude::*;

use crate::paths;

#[derive(Properties, PartialEq, Clone)]
pub struct DetailPageProps {
    pub badge: Badge,
    pub owned: bool,
    pub on_back: Callback<()>,
    pub on_toggle_owned: Callback<String>,
}

#[function_component(DetailPage)]
pub fn detail_page(props: &DetailPageProps) -> Html {
    let badge = &props.badge;
    let back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle = {
        let cb = props.on_toggle_owned.clone();
        let id = badge.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };

    let artwork = badge.image_url.as_deref().map_or_else(
        || html! { <div class="detail-emoji" aria-hidden="true">{ badge.emoji.clone() }</div> },
        |url| html! { <img class="detail-image" src={paths::image_src(url)} alt={badge.name.clone()} /> },
    );
    let collect_label = if props.owned {
        "Collected"
    } else {
        "Add to Collection"
    };
    let status_chip = match badge.status {
        BadgeStatus::Active => Html::default(),
        status => html! { <span class="chip chip-status">{ status.label() }</span> },
    };

    let steps = badge.guide_steps.iter().enumerate().map(|(idx, step)| {
        html! {
            <li class="guide-step">
                <span class="step-number">{ (idx + 1).to_string() }</span>
                <p>{ step.clone() }</p>
            </li>
        }
    });
    let tiers = if badge.has_tiers() {
        let rows = badge.tiers.iter().map(|tier| {
            let threshold = tier
                .threshold
                .map_or_else(Html::default, |t| html! { <span class="tier-threshold">{ format!("{t}+") }</span> });
            html! {
                <li class="tier-row">
                    <span class={classes!("tier-pill", tier_pill_classes(&tier.color))}>{ tier.name.clone() }</span>
                    { threshold }
                    <p class="tier-criteria">{ tier.criteria.clone() }</p>
                </li>
            }
        });
        html! { <ol class="tier-list">{ for rows }</ol> }
    } else {
        html! { <div class="single-tier">{ "Single Tier Achievement" }</div> }
    };

    html! {
        <section class="badge-detail" data-badge-id={badge.id.clone()}>
            <button type="button" class="back-btn" onclick={back}>{ "← Back to Gallery" }</button>
            <div class="detail-hero glass-panel">
                { artwork }
                <div class="detail-summary">
                    <div class="badge-chips">
                        <span class={classes!("chip", badge.rarity.palette().pill)}>{ badge.rarity.label() }</span>
                        <span class="chip chip-difficulty">{ badge.difficulty.label() }</span>
                        { status_chip }
                    </div>
                    <h1>{ badge.name.clone() }</h1>
                    <p class="detail-description">{ badge.description.clone() }</p>
                    <button id="detail-owned-toggle" type="button"
                        class={classes!("collect-btn", props.owned.then_some("collect-btn-owned"))}
                        aria-pressed={props.owned.to_string()} onclick={toggle}>
                        { collect_label }
                    </button>
                </div>
            </div>
            <div class="detail-body">
                <div class="detail-guide">
                    <h2>{ "How to Earn" }</h2>
                    <p class="how-to-earn">{ badge.how_to_earn.clone() }</p>
                    <ol class="guide-steps">{ for steps }</ol>
                </div>
                <aside class="detail-stats">
                    <h2>{ "Tier Breakdown" }</h2>
                    { tiers }
                    <h3>{ "Details" }</h3>
                    <dl class="detail-facts">
                        <dt>{ "Category" }</dt>
                        <dd>{ badge.category.clone() }</dd>
                        <dt>{ "Metric Key" }</dt>
                        <dd class="font-mono">
                            { badge.metric_key.map_or("-", |key| key.label()) }
                        </dd>
                    </dl>
                </aside>
            </div>
        </section>
    }
}
