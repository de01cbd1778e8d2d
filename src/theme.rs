//! Light/dark theme, persisted in browser local storage under the
//! `"theme"` key and applied as a `dark` class on the document root.

use web_sys::window;

const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Reads the stored theme. Defaults to dark when storage is unavailable,
/// empty, or holds an unrecognized value.
pub fn load() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok())
        .flatten()
        .and_then(|value| Theme::parse(&value))
        .unwrap_or(Theme::Dark)
}

/// Persists the theme. Storage write failures (private mode, quota) are
/// ignored: the in-memory theme still applies for the session.
pub fn store(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Toggles the `dark` class on `<html>` so the stylesheet's variable sets
/// switch.
pub fn apply(theme: Theme) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let result = match theme {
            Theme::Dark => root.class_list().add_1("dark"),
            Theme::Light => root.class_list().remove_1("dark"),
        };
        if result.is_err() {
            log::warn!("failed to apply {} theme class", theme.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_the_original() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn parse_round_trips_the_stored_names() {
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }

    #[test]
    fn unknown_stored_values_are_rejected() {
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse(""), None);
    }
}
