//! The user's local collection: owned badge ids and the theme preference.
//!
//! Every mutation is written through to a [`CollectionStorage`] before it
//! returns. When a write fails the in-memory change is rolled back, so the
//! persisted state always equals the state the caller observes.

use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

pub const OWNED_KEY: &str = "my_badges";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Key-value persistence port for the collection.
pub trait CollectionStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError<E: std::error::Error + 'static> {
    #[error("collection storage failed: {0}")]
    Storage(#[source] E),
    #[error("collection could not be serialized: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectionState {
    pub owned: BTreeSet<String>,
    pub theme: Theme,
}

#[derive(Debug, Clone)]
pub struct CollectionStore<S> {
    storage: S,
    state: CollectionState,
}

impl<S: CollectionStorage> CollectionStore<S> {
    /// Load persisted state. Missing or malformed entries fall back to an
    /// empty collection and the system theme (light when unknown).
    #[must_use]
    pub fn load(storage: S, system_prefers_dark: Option<bool>) -> Self {
        let owned = match storage.read(OWNED_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<BTreeSet<String>>(&raw).unwrap_or_else(|err| {
                log::warn!("discarding malformed {OWNED_KEY} entry: {err}");
                BTreeSet::new()
            }),
            Ok(None) => BTreeSet::new(),
            Err(err) => {
                log::warn!("could not read {OWNED_KEY}: {err}");
                BTreeSet::new()
            }
        };

        let stored_theme = match storage.read(THEME_KEY) {
            Ok(value) => value.as_deref().and_then(Theme::parse),
            Err(err) => {
                log::warn!("could not read {THEME_KEY}: {err}");
                None
            }
        };
        let theme = stored_theme.unwrap_or(match system_prefers_dark {
            Some(true) => Theme::Dark,
            _ => Theme::Light,
        });

        Self {
            storage,
            state: CollectionState { owned, theme },
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CollectionState {
        &self.state
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn is_owned(&self, id: &str) -> bool {
        self.state.owned.contains(id)
    }

    #[must_use]
    pub const fn owned_ids(&self) -> &BTreeSet<String> {
        &self.state.owned
    }

    #[must_use]
    pub fn owned_count(&self) -> usize {
        self.state.owned.len()
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.state.theme
    }

    /// Flip ownership of `id` and persist the whole set. Returns whether the
    /// badge is owned afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving membership unchanged, if the set cannot be
    /// persisted.
    pub fn toggle_owned(&mut self, id: &str) -> Result<bool, StoreError<S::Error>> {
        let owned_now = if self.state.owned.remove(id) {
            false
        } else {
            self.state.owned.insert(id.to_string());
            true
        };

        if let Err(err) = self.persist_owned() {
            if owned_now {
                self.state.owned.remove(id);
            } else {
                self.state.owned.insert(id.to_string());
            }
            return Err(err);
        }
        Ok(owned_now)
    }

    /// Persist a theme choice.
    ///
    /// # Errors
    ///
    /// Returns an error, keeping the previous theme, if it cannot be stored.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StoreError<S::Error>> {
        self.storage
            .write(THEME_KEY, theme.as_str())
            .map_err(StoreError::Storage)?;
        self.state.theme = theme;
        Ok(())
    }

    fn persist_owned(&self) -> Result<(), StoreError<S::Error>> {
        let encoded = serde_json::to_string(&self.state.owned)?;
        self.storage
            .write(OWNED_KEY, &encoded)
            .map_err(StoreError::Storage)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("in-memory storage rejected write to '{0}'")]
pub struct MemoryStorageError(pub String);

/// Shared in-memory storage. Clones see the same entries, which lets a test
/// reload a store from what a previous store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Make subsequent writes fail, as a full or disabled browser store would.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl CollectionStorage for MemoryStorage {
    type Error = MemoryStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.read_only.get() {
            return Err(MemoryStorageError(key.to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_membership_and_serialization() {
        let storage = MemoryStorage::new();
        let mut store = CollectionStore::load(storage.clone(), None);
        store.toggle_owned("yolo").unwrap();
        let before = storage.get(OWNED_KEY);

        assert!(store.toggle_owned("pull-shark").unwrap());
        assert!(store.is_owned("pull-shark"));
        assert!(!store.toggle_owned("pull-shark").unwrap());
        assert!(!store.is_owned("pull-shark"));
        assert_eq!(storage.get(OWNED_KEY), before);
        assert_eq!(store.owned_count(), 1);
    }

    #[test]
    fn persisted_state_reloads_equal() {
        let storage = MemoryStorage::new();
        let mut store = CollectionStore::load(storage.clone(), Some(false));
        store.toggle_owned("starstruck").unwrap();
        store.toggle_owned("quickdraw").unwrap();
        store.set_theme(Theme::Dark).unwrap();

        let reloaded = CollectionStore::load(storage, Some(false));
        assert_eq!(reloaded.state(), store.state());
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn owned_set_is_stored_as_sorted_json_array() {
        let storage = MemoryStorage::new();
        let mut store = CollectionStore::load(storage.clone(), None);
        store.toggle_owned("yolo").unwrap();
        store.toggle_owned("pro").unwrap();
        assert_eq!(storage.get(OWNED_KEY).as_deref(), Some(r#"["pro","yolo"]"#));
    }

    #[test]
    fn malformed_entries_fall_back_to_defaults() {
        let storage = MemoryStorage::new()
            .with_entry(OWNED_KEY, "{not json")
            .with_entry(THEME_KEY, "sepia");
        let store = CollectionStore::load(storage, Some(true));
        assert_eq!(store.owned_count(), 0);
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn legacy_array_with_duplicates_loads_as_set() {
        let storage = MemoryStorage::new().with_entry(OWNED_KEY, r#"["yolo","pro","yolo"]"#);
        let store = CollectionStore::load(storage, None);
        assert_eq!(store.owned_count(), 2);
        assert!(store.is_owned("pro"));
    }

    #[test]
    fn theme_prefers_stored_then_system_then_light() {
        let stored = MemoryStorage::new().with_entry(THEME_KEY, "light");
        assert_eq!(CollectionStore::load(stored, Some(true)).theme(), Theme::Light);
        assert_eq!(
            CollectionStore::load(MemoryStorage::new(), Some(true)).theme(),
            Theme::Dark
        );
        assert_eq!(
            CollectionStore::load(MemoryStorage::new(), None).theme(),
            Theme::Light
        );
    }

    #[test]
    fn failed_write_rolls_back() {
        let storage = MemoryStorage::new();
        let mut store = CollectionStore::load(storage.clone(), None);
        store.toggle_owned("yolo").unwrap();
        storage.set_read_only(true);

        assert!(matches!(
            store.toggle_owned("pro"),
            Err(StoreError::Storage(_))
        ));
        assert!(!store.is_owned("pro"));
        assert!(store.toggle_owned("yolo").is_err());
        assert!(store.is_owned("yolo"));
        assert!(store.set_theme(Theme::Dark).is_err());
        assert_eq!(store.theme(), Theme::Light);

        let reloaded = CollectionStore::load(storage, None);
        assert_eq!(reloaded.state(), store.state());
    }

    #[test]
    fn theme_round_trips_through_text() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
