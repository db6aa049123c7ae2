//! Light/dark theme with a persisted preference.
//!
//! The preference lives under [`THEME_STORAGE_KEY`] as `"light"` or
//! `"dark"`. On load the stored value is applied (light when absent or
//! unrecognized); every apply writes it back. Toggling flips the mode that
//! is currently applied, not the stored one.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. When `localStorage` is unavailable the manager
//! runs on an in-memory store and the preference simply does not survive
//! a reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;
use std::fmt;

use crate::consts::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"dark"` / `"light"` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable string key-value store.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Process-local store, used in tests and when `localStorage` is missing.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Owns the applied theme and its store.
#[derive(Debug)]
pub struct ThemeManager<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Read the stored preference and apply it.
    pub fn load(store: S) -> Self {
        let stored = store.load(THEME_STORAGE_KEY).as_deref().and_then(Theme::parse).unwrap_or_default();
        let mut manager = Self { store, current: stored };
        manager.apply(stored);
        manager
    }

    /// Apply `theme` and persist it.
    pub fn apply(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        self.store.save(THEME_STORAGE_KEY, theme.as_str());
        theme
    }

    /// Apply the opposite of the currently applied theme.
    pub fn toggle(&mut self) -> Theme {
        self.apply(self.current.opposite())
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store, e.g. to simulate a reload.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{LocalStore, SharedTheme, mount};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Document, Storage};

    use super::{MemoryStore, PreferenceStore, Theme, ThemeManager};
    use crate::config::DomHooks;
    use crate::dom;

    const BODY_DARK_CLASS: &str = "dark-mode";
    const TOGGLE_DARK_CLASS: &str = "dark";

    /// `localStorage`, or memory when the browser refuses access.
    pub enum LocalStore {
        Browser(Storage),
        Memory(MemoryStore),
    }

    impl LocalStore {
        pub fn open() -> Self {
            match web_sys::window().map(|w| w.local_storage()) {
                Some(Ok(Some(storage))) => Self::Browser(storage),
                _ => {
                    log::warn!("localStorage unavailable; theme preference will not persist");
                    Self::Memory(MemoryStore::new())
                }
            }
        }
    }

    impl PreferenceStore for LocalStore {
        fn load(&self, key: &str) -> Option<String> {
            match self {
                Self::Browser(storage) => storage.get_item(key).unwrap_or_default(),
                Self::Memory(mem) => mem.load(key),
            }
        }

        fn save(&mut self, key: &str, value: &str) {
            match self {
                Self::Browser(storage) => {
                    if let Err(e) = storage.set_item(key, value) {
                        log::warn!("failed to persist theme: {e:?}");
                    }
                }
                Self::Memory(mem) => mem.save(key, value),
            }
        }
    }

    pub type SharedTheme = Rc<RefCell<ThemeManager<LocalStore>>>;

    fn paint(document: &Document, hooks: &DomHooks, theme: Theme) {
        if let Some(body) = document.body() {
            dom::set_class(&body, BODY_DARK_CLASS, theme.is_dark());
        }
        if let Some(toggle) = document.get_element_by_id(&hooks.theme_toggle_id) {
            dom::set_class(&toggle, TOGGLE_DARK_CLASS, theme.is_dark());
        }
    }

    /// Load and paint the stored theme, then wire the toggle control.
    ///
    /// Always returns the manager so other units can read the applied mode,
    /// even when the toggle control is missing.
    pub fn mount(document: &Document, hooks: &DomHooks) -> SharedTheme {
        let manager = ThemeManager::load(LocalStore::open());
        paint(document, hooks, manager.current());
        log::debug!("theme loaded: {}", manager.current());
        let shared = Rc::new(RefCell::new(manager));

        let Some(toggle) = document.get_element_by_id(&hooks.theme_toggle_id) else {
            log::warn!("theme toggle #{} not found; toggling disabled", hooks.theme_toggle_id);
            return shared;
        };

        let for_click = Rc::clone(&shared);
        let document = document.clone();
        let hooks = hooks.clone();
        let wired = dom::on_click(&toggle, move |_event| {
            let next = for_click.borrow_mut().toggle();
            paint(&document, &hooks, next);
        });
        if let Err(e) = wired {
            log::warn!("theme toggle not wired: {e}");
        }
        shared
    }
}
