//! `localStorage` adapter for the collection store.

use badgehunter_core::CollectionStorage;

use crate::dom;

/// Collection storage backed by the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebCollectionStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage rejected '{key}': {reason}")]
    Rejected { key: String, reason: String },
}

impl CollectionStorage for WebCollectionStorage {
    type Error = WebStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage()
            .map_err(|err| WebStorageError::Unavailable(dom::js_error_message(&err)))?;
        storage
            .get_item(key)
            .map_err(|err| WebStorageError::Rejected {
                key: key.to_string(),
                reason: dom::js_error_message(&err),
            })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage()
            .map_err(|err| WebStorageError::Unavailable(dom::js_error_message(&err)))?;
        storage
            .set_item(key, value)
            .map_err(|err| WebStorageError::Rejected {
                key: key.to_string(),
                reason: dom::js_error_message(&err),
            })
    }
}
