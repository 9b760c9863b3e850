use std::collections::BTreeSet;

use badgehunter_core::{
    Badge, CatalogQuery, CategoryFilter, OwnershipFilter, SortKey, catalog, query,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::badge_card::BadgeCard;

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryPageProps {
    pub query: CatalogQuery,
    pub owned: BTreeSet<String>,
    pub on_query: Callback<CatalogQuery>,
    pub on_toggle_owned: Callback<String>,
    pub on_open: Callback<String>,
}

fn ownership_value(filter: OwnershipFilter) -> &'static str {
    match filter {
        OwnershipFilter::All => "all",
        OwnershipFilter::Owned => "owned",
        OwnershipFilter::Unowned => "unowned",
    }
}

fn ownership_from_value(value: &str) -> OwnershipFilter {
    OwnershipFilter::ALL
        .into_iter()
        .find(|filter| ownership_value(*filter) == value)
        .unwrap_or_default()
}

#[function_component(GalleryPage)]
pub fn gallery_page(props: &GalleryPageProps) -> Html {
    let result = query(catalog(), &props.query, &props.owned);

    let on_category = {
        let cb = props.on_query.clone();
        let current = props.query.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(CatalogQuery {
                category: CategoryFilter::from_value(&select.value()),
                ..current.clone()
            });
        })
    };
    let on_ownership = {
        let cb = props.on_query.clone();
        let current = props.query.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(CatalogQuery {
                ownership: ownership_from_value(&select.value()),
                ..current.clone()
            });
        })
    };

    let categories = CategoryFilter::options(catalog()).into_iter().map(|option| {
        let selected = option == props.query.category;
        html! { <option value={option.label().to_string()} {selected}>{ option.label() }</option> }
    });
    let ownership_options = OwnershipFilter::ALL.into_iter().map(|filter| {
        let selected = filter == props.query.ownership;
        html! { <option value={ownership_value(filter)} {selected}>{ filter.label() }</option> }
    });
    let sort_buttons = SortKey::ALL.into_iter().map(|key| {
        let active = key == props.query.sort;
        let onclick = {
            let cb = props.on_query.clone();
            let current = props.query.clone();
            Callback::from(move |_| {
                cb.emit(CatalogQuery {
                    sort: key,
                    ..current.clone()
                });
            })
        };
        html! {
            <button type="button" class={classes!("sort-btn", active.then_some("sort-btn-active"))}
                aria-pressed={active.to_string()} {onclick}>
                { key.label() }
            </button>
        }
    });

    let cards = |badges: &[&Badge]| -> Html {
        badges
            .iter()
            .map(|badge| {
                html! {
                    <BadgeCard
                        key={badge.id.clone()}
                        badge={(*badge).clone()}
                        owned={props.owned.contains(&badge.id)}
                        on_toggle_owned={props.on_toggle_owned.clone()}
                        on_open={props.on_open.clone()}
                    />
                }
            })
            .collect()
    };

    let active_grid = if result.active.is_empty() {
        html! { <div class="empty-grid"><p>{ "No active badges found." }</p></div> }
    } else {
        cards(&result.active)
    };
    let legacy_section = if result.legacy.is_empty() {
        Html::default()
    } else {
        html! {
            <section id="legacy-badges" class="badge-section badge-section-legacy">
                <h3 class="section-title">{ "Legacy & Retired" }</h3>
                <div class="badge-grid">{ cards(&result.legacy) }</div>
            </section>
        }
    };

    html! {
        <div class="gallery">
            <div class="control-bar glass-panel">
                <div class="collection-count">
                    <span class="font-semibold">{ "Collection" }</span>
                    <span id="owned-counter" class="counter-pill">
                        { format!("{}/{}", props.owned.len(), catalog().len()) }
                    </span>
                </div>
                <div class="controls">
                    <label for="category-filter" class="sr-only">{ "Category" }</label>
                    <select id="category-filter" onchange={on_category}>{ for categories }</select>
                    <label for="ownership-filter" class="sr-only">{ "Ownership" }</label>
                    <select id="ownership-filter" onchange={on_ownership}>{ for ownership_options }</select>
                    <div class="sort-buttons" role="group" aria-label="Sort by">{ for sort_buttons }</div>
                </div>
            </div>
            <section id="active-badges" class="badge-section">
                <h3 class="section-title">{ "Active Achievements" }</h3>
                <div class="badge-grid">{ active_grid }</div>
            </section>
            { legacy_section }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_values_round_trip() {
        for filter in OwnershipFilter::ALL {
            assert_eq!(ownership_from_value(ownership_value(filter)), filter);
        }
        assert_eq!(ownership_from_value("bogus"), OwnershipFilter::All);
    }
}
