use badgehunter_core::troubleshooting_tips;
use yew::prelude::*;

/// Troubleshooting tips for badges that fail to appear.
#[function_component(HelpPage)]
pub fn help_page() -> Html {
    let tips = troubleshooting_tips().iter().map(|tip| {
        html! {
            <article class="tip glass-panel">
                <span class="tip-icon" aria-hidden="true">{ "⚠️" }</span>
                <div>
                    <h4>{ tip.title.clone() }</h4>
                    <p>{ tip.description.clone() }</p>
                </div>
            </article>
        }
    });
    html! {
        <section class="help">
            <h2 class="sr-only">{ "Troubleshooting" }</h2>
            { for tips }
        </section>
    }
}
