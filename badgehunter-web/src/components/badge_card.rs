use badgehunter_core::{Badge, BadgeStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub badge: Badge,
    pub owned: bool,
    pub on_toggle_owned: Callback<String>,
    pub on_open: Callback<String>,
}

#[function_component(BadgeCard)]
pub fn badge_card(p: &Props) -> Html {
    let badge = &p.badge;
    let open = {
        let cb = p.on_open.clone();
        let id = badge.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let toggle = {
        let cb = p.on_toggle_owned.clone();
        let id = badge.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id.clone());
        })
    };

    let card_class = classes!(
        "badge-card",
        "glass-panel",
        (badge.status == BadgeStatus::Retired).then_some("badge-card-retired"),
        p.owned.then_some("badge-card-owned"),
    );
    let (toggle_title, toggle_icon) = if p.owned {
        ("Remove from collection", "✓")
    } else {
        ("Mark as owned", "+")
    };

    html! {
        <article class={card_class} data-badge-id={badge.id.clone()} onclick={open}>
            <div class="badge-card-top">
                <div class="badge-emoji" aria-hidden="true">{ badge.emoji.clone() }</div>
                <button type="button" class="owned-toggle" title={toggle_title}
                    aria-label={toggle_title} aria-pressed={p.owned.to_string()} onclick={toggle}>
                    { toggle_icon }
                </button>
            </div>
            <h3 class="badge-name">{ badge.name.clone() }</h3>
            <p class="badge-description">{ badge.description.clone() }</p>
            <div class="badge-chips">
                <span class={classes!("chip", badge.rarity.palette().chip)}>{ badge.rarity.label() }</span>
                <span class="chip chip-difficulty">{ badge.difficulty.label() }</span>
            </div>
            <div class="badge-tooltip" role="tooltip">
                <strong>{ "How to Earn" }</strong>
                <p>{ badge.how_to_earn.clone() }</p>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use badgehunter_core::catalog;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(id: &str, owned: bool) -> String {
        let props = Props {
            badge: catalog().get(id).cloned().unwrap(),
            owned,
            on_toggle_owned: Callback::noop(),
            on_open: Callback::noop(),
        };
        block_on(LocalServerRenderer::<BadgeCard>::with_props(props).render())
    }

    #[test]
    fn shows_rarity_chip_and_guide() {
        let html = render("starstruck", false);
        assert!(html.contains("Starstruck"));
        assert!(html.contains("Legendary"));
        assert!(html.contains("bg-purple-50"));
        assert!(html.contains("Mark as owned"));
        assert!(html.contains("How to Earn"));
    }

    #[test]
    fn owned_and_retired_cards_are_marked() {
        let html = render("mars-2020", true);
        assert!(html.contains("badge-card-owned"));
        assert!(html.contains("badge-card-retired"));
        assert!(html.contains("Remove from collection"));
    }
}
