use std::cell::RefCell;
use std::rc::Rc;

use badgehunter_core::{
    AdviceMode, CatalogQuery, CollectionState, CollectionStore, Conversation,
};
use yew::prelude::*;

use crate::dom;
use crate::pages::checker::LookupStatus;
use crate::storage::WebCollectionStorage;

pub type BrowserStore = CollectionStore<WebCollectionStorage>;

#[derive(Clone)]
pub struct AppState {
    /// Write-through store; `collection` mirrors its state for rendering.
    pub store: Rc<RefCell<BrowserStore>>,
    pub collection: UseStateHandle<CollectionState>,
    pub query: UseStateHandle<CatalogQuery>,
    pub lookup: UseStateHandle<LookupStatus>,
    pub conversation: UseStateHandle<Conversation>,
    pub advice_mode: UseStateHandle<AdviceMode>,
    pub advice_pending: UseStateHandle<bool>,
    pub storage_error: UseStateHandle<Option<String>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let store = use_mut_ref(|| CollectionStore::load(WebCollectionStorage, dom::prefers_dark()));
    let collection = {
        let store = store.clone();
        use_state(move || store.borrow().state().clone())
    };
    AppState {
        store,
        collection,
        query: use_state(CatalogQuery::default),
        lookup: use_state(LookupStatus::default),
        conversation: use_state(Conversation::new),
        advice_mode: use_state(AdviceMode::default),
        advice_pending: use_state(|| false),
        storage_error: use_state(|| None::<String>),
    }
}

impl AppState {
    /// Copy the store's state into the render handle after a mutation.
    pub fn sync_collection(&self) {
        self.collection.set(self.store.borrow().state().clone());
    }
}
