//! # Session and theme persistence
//!
//! [`SessionStore`] is the typed view over a [`KeyValueStore`]. It owns the
//! only state that survives page navigation:
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `usuarioLogado` | Username of the logged-in user |
//! | `tipoUsuario` | Role string returned by the backend on login |
//! | `theme` | `"light"` or `"dark"` |
//!
//! Logout calls [`SessionStore::clear`], which empties the whole backing
//! store and not just these three keys.

use crate::kv::KeyValueStore;

pub const USER_KEY: &str = "usuarioLogado";
pub const ROLE_KEY: &str = "tipoUsuario";
pub const THEME_KEY: &str = "theme";

/// Identity of the logged-in user as persisted in storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub username: Option<String>,
    pub role: Option<String>,
}

impl Session {
    /// The acting username, or `fallback` when nobody is logged in.
    pub fn username_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.username.as_deref().unwrap_or(fallback)
    }

    pub fn role_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.role.as_deref().unwrap_or(fallback)
    }
}

/// Display theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognised reads as `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle button: the moon offers dark mode, the sun
    /// offers light mode.
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Light => "\u{1F319}",
            Theme::Dark => "\u{2600}\u{FE0F}",
        }
    }
}

/// Typed access to session and theme values in a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn session(&self) -> Session {
        Session {
            username: self.store.get(USER_KEY),
            role: self.store.get(ROLE_KEY),
        }
    }

    /// Persist username and role after a successful login.
    pub fn save_session(&self, username: &str, role: &str) {
        self.store.set(USER_KEY, username);
        self.store.set(ROLE_KEY, role);
    }

    /// The stored theme, if a valid one is stored.
    pub fn stored_theme(&self) -> Option<Theme> {
        self.store.get(THEME_KEY).as_deref().and_then(Theme::parse)
    }

    /// The stored theme, or the default when none is stored.
    pub fn theme(&self) -> Theme {
        self.stored_theme().unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }

    /// Make sure a valid theme is stored and return it.
    pub fn init_theme(&self) -> Theme {
        match self.stored_theme() {
            Some(theme) => theme,
            None => {
                let theme = Theme::default();
                self.set_theme(theme);
                theme
            }
        }
    }

    /// Flip the stored theme and return the new value.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }

    /// Forget everything, theme included.
    pub fn clear(&self) {
        self.store.clear();
    }
}
