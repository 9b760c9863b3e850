use badgehunter_core::catalog;
use yew::prelude::*;

use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::navbar::Navbar;
use crate::pages::assistant::AssistantPage;
use crate::pages::checker::CheckerPage;
use crate::pages::detail::DetailPage;
use crate::pages::gallery::GalleryPage;
use crate::pages::help::HelpPage;
use crate::pages::not_found::NotFound;
use crate::routes::Route;

pub fn render_app(state: &AppState, route: Option<&Route>, handlers: &AppHandlers) -> Html {
    let route = route.cloned().unwrap_or(Route::Gallery);
    let collection = &*state.collection;

    let main_view = match &route {
        Route::Gallery => html! {
            <GalleryPage
                query={(*state.query).clone()}
                owned={collection.owned.clone()}
                on_query={handlers.query.clone()}
                on_toggle_owned={handlers.toggle_owned.clone()}
                on_open={handlers.open_badge.clone()}
            />
        },
        Route::Badge { id } => match catalog().get(id) {
            Some(badge) => html! {
                <DetailPage
                    badge={badge.clone()}
                    owned={collection.owned.contains(id)}
                    on_back={handlers.go_home.clone()}
                    on_toggle_owned={handlers.toggle_owned.clone()}
                />
            },
            None => html! {
                <NotFound
                    message={AttrValue::from(format!("No badge with id \"{id}\"."))}
                    on_go_home={handlers.go_home.clone()}
                />
            },
        },
        Route::Checker => html! {
            <CheckerPage status={(*state.lookup).clone()} on_lookup={handlers.lookup.clone()} />
        },
        Route::Assistant => html! {
            <AssistantPage
                conversation={(*state.conversation).clone()}
                mode={*state.advice_mode}
                pending={*state.advice_pending}
                on_send={handlers.send_message.clone()}
                on_toggle_mode={handlers.toggle_advice_mode.clone()}
            />
        },
        Route::Help => html! { <HelpPage /> },
        Route::NotFound => html! { <NotFound on_go_home={handlers.go_home.clone()} /> },
    };

    let storage_banner = (*state.storage_error).as_ref().map_or_else(Html::default, |err| {
        html! { <div class="storage-error" role="alert">{ format!("Changes were not saved: {err}") }</div> }
    });

    html! {
        <>
            <Navbar
                active={route.tab()}
                theme={collection.theme}
                search={AttrValue::from(state.query.text.clone())}
                on_tab={handlers.tab.clone()}
                on_search={handlers.search.clone()}
                on_toggle_theme={handlers.toggle_theme.clone()}
            />
            <main id="main" role="main">
                { storage_banner }
                { main_view }
            </main>
        </>
    }
}
