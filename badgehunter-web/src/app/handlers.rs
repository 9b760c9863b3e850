use badgehunter_core::{AdviceMode, AdviceProvider, CatalogQuery, MetricsProvider};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Navigator;

use crate::app::state::AppState;
use crate::dom;
use crate::pages::checker::LookupStatus;
use crate::routes::{Route, Tab};
use crate::services;

/// Callbacks shared by the navbar and pages.
#[derive(Clone)]
pub struct AppHandlers {
    pub toggle_owned: Callback<String>,
    pub toggle_theme: Callback<()>,
    pub query: Callback<CatalogQuery>,
    pub search: Callback<String>,
    pub tab: Callback<Tab>,
    pub open_badge: Callback<String>,
    pub go_home: Callback<()>,
    pub lookup: Callback<String>,
    pub send_message: Callback<String>,
    pub toggle_advice_mode: Callback<()>,
}

impl AppHandlers {
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            toggle_owned: build_toggle_owned(state),
            toggle_theme: build_toggle_theme(state),
            query: build_query(state),
            search: build_search(state, navigator.clone()),
            tab: build_tab(navigator.clone()),
            open_badge: build_open_badge(navigator.clone()),
            go_home: build_go_home(navigator),
            lookup: build_lookup(state),
            send_message: build_send_message(state),
            toggle_advice_mode: build_toggle_advice_mode(state),
        }
    }
}

fn push(navigator: Option<&Navigator>, route: &Route) {
    if let Some(nav) = navigator {
        nav.push(route);
    }
}

fn build_toggle_owned(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |id: String| {
        let outcome = state.store.borrow_mut().toggle_owned(&id);
        match outcome {
            Ok(owned) => {
                log::debug!("badge {id} owned: {owned}");
                state.storage_error.set(None);
            }
            Err(err) => {
                log::error!("could not save collection: {err}");
                state.storage_error.set(Some(err.to_string()));
            }
        }
        state.sync_collection();
    })
}

fn build_toggle_theme(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let next = state.collection.theme.toggled();
        let outcome = state.store.borrow_mut().set_theme(next);
        if let Err(err) = outcome {
            log::error!("could not save theme: {err}");
            state.storage_error.set(Some(err.to_string()));
        }
        state.sync_collection();
        dom::apply_theme(state.store.borrow().theme());
    })
}

fn build_query(state: &AppState) -> Callback<CatalogQuery> {
    let query = state.query.clone();
    Callback::from(move |next: CatalogQuery| query.set(next))
}

/// Typing in the search box always lands on the gallery.
fn build_search(state: &AppState, navigator: Option<Navigator>) -> Callback<String> {
    let query = state.query.clone();
    Callback::from(move |text: String| {
        query.set(CatalogQuery {
            text,
            ..(*query).clone()
        });
        push(navigator.as_ref(), &Route::Gallery);
    })
}

fn build_tab(navigator: Option<Navigator>) -> Callback<Tab> {
    Callback::from(move |tab: Tab| push(navigator.as_ref(), &Route::from_tab(tab)))
}

fn build_open_badge(navigator: Option<Navigator>) -> Callback<String> {
    Callback::from(move |id: String| {
        push(navigator.as_ref(), &Route::Badge { id });
        dom::scroll_to_top();
    })
}

fn build_go_home(navigator: Option<Navigator>) -> Callback<()> {
    Callback::from(move |()| push(navigator.as_ref(), &Route::Gallery))
}

/// Lookups are not coalesced: whichever response lands last is shown.
fn build_lookup(state: &AppState) -> Callback<String> {
    let lookup = state.lookup.clone();
    Callback::from(move |handle: String| {
        lookup.set(LookupStatus::Loading);
        let lookup = lookup.clone();
        spawn_local(async move {
            let result = services::metrics_provider().lookup(&handle).await;
            if let Err(err) = &result {
                log::info!("lookup for {handle} failed: {err}");
            }
            lookup.set(result.into());
        });
    })
}

fn build_send_message(state: &AppState) -> Callback<String> {
    let conversation = state.conversation.clone();
    let pending = state.advice_pending.clone();
    let mode = state.advice_mode.clone();
    Callback::from(move |text: String| {
        if *pending {
            return;
        }
        let mut next = (*conversation).clone();
        let Some(query) = next.push_user(&text) else {
            return;
        };
        conversation.set(next.clone());
        pending.set(true);

        let mode = *mode;
        let conversation = conversation.clone();
        let pending = pending.clone();
        spawn_local(async move {
            let reply = services::advice_provider().ask(&query, mode).await;
            next.push_reply(reply, mode);
            conversation.set(next);
            pending.set(false);
        });
    })
}

fn build_toggle_advice_mode(state: &AppState) -> Callback<()> {
    let mode = state.advice_mode.clone();
    Callback::from(move |()| {
        mode.set(match *mode {
            AdviceMode::Fast => AdviceMode::Deep,
            AdviceMode::Deep => AdviceMode::Fast,
        });
    })
}
