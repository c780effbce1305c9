//! Theme preference model and the theme-source boundary.
//!
//! The page never owns theme state. It talks to a [`ThemeSource`] (the provider in
//! `ui::theme`, or a stub in tests) through three operations: read the preference,
//! read the resolved theme, and request a new preference.

use std::fmt;
use std::str::FromStr;

/// `localStorage` key the provider persists the preference under
pub const THEME_STORAGE_KEY: &str = "linguabot-theme";

/// Class applied to `<html>` while the dark theme is active
pub const DARK_CLASS: &str = "dark";

/// User theme preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    /// Follow `prefers-color-scheme`
    System,
    #[default]
    Light,
    Dark,
}

/// Concretely applied theme after resolving [`Theme::System`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown theme {0:?}, expected one of: system, light, dark")]
pub struct ParseThemeError(pub String);

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Resolve against the current system preference
    pub fn resolve(&self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::System if system_prefers_dark => ResolvedTheme::Dark,
            Theme::System => ResolvedTheme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Theme::System),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ResolvedTheme {
    pub fn is_dark(&self) -> bool {
        matches!(self, ResolvedTheme::Dark)
    }

    /// Preference that switches away from this theme
    pub fn opposite(&self) -> Theme {
        match self {
            ResolvedTheme::Dark => Theme::Light,
            ResolvedTheme::Light => Theme::Dark,
        }
    }
}

/// Theme context boundary: `{current theme, resolved theme, setter}`
pub trait ThemeSource {
    /// Stored preference (may be `System`)
    fn theme(&self) -> Theme;

    /// Theme actually applied
    fn resolved_theme(&self) -> ResolvedTheme;

    /// Request a new preference; persistence is up to the source
    fn set_theme(&self, theme: Theme);
}

/// Switch dark to light and anything else to dark.
///
/// Returns the requested preference.
pub fn toggle_theme<S: ThemeSource + ?Sized>(source: &S) -> Theme {
    let next = source.resolved_theme().opposite();
    source.set_theme(next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct StubSource {
        theme: Cell<Theme>,
        system_dark: bool,
        writes: Cell<usize>,
    }

    impl StubSource {
        fn new(theme: Theme, system_dark: bool) -> Self {
            Self {
                theme: Cell::new(theme),
                system_dark,
                writes: Cell::new(0),
            }
        }
    }

    impl ThemeSource for StubSource {
        fn theme(&self) -> Theme {
            self.theme.get()
        }

        fn resolved_theme(&self) -> ResolvedTheme {
            self.theme.get().resolve(self.system_dark)
        }

        fn set_theme(&self, theme: Theme) {
            self.writes.set(self.writes.get() + 1);
            self.theme.set(theme);
        }
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("system".parse::<Theme>(), Ok(Theme::System));
        // Stored values are compared exactly, like the pre-paint script does
        assert!(" Light ".parse::<Theme>().is_err());
        assert!("DARK".parse::<Theme>().is_err());
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ParseThemeError("sepia".to_string()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for theme in [Theme::System, Theme::Light, Theme::Dark] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::default().resolve(true), ResolvedTheme::Light);
    }

    #[test]
    fn test_resolve_system() {
        assert_eq!(Theme::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(Theme::System.resolve(false), ResolvedTheme::Light);
        assert_eq!(Theme::Dark.resolve(false), ResolvedTheme::Dark);
    }

    #[test]
    fn test_toggle_from_dark_gives_light() {
        let source = StubSource::new(Theme::Dark, false);
        assert_eq!(toggle_theme(&source), Theme::Light);
        assert_eq!(source.resolved_theme(), ResolvedTheme::Light);
    }

    #[test]
    fn test_toggle_from_light_gives_dark() {
        let source = StubSource::new(Theme::Light, true);
        assert_eq!(toggle_theme(&source), Theme::Dark);
        assert_eq!(source.resolved_theme(), ResolvedTheme::Dark);
    }

    #[test]
    fn test_toggle_system_dark_resolves_light() {
        let source = StubSource::new(Theme::System, true);
        assert!(source.resolved_theme().is_dark());

        toggle_theme(&source);

        assert_eq!(source.theme(), Theme::Light);
        assert_eq!(source.resolved_theme(), ResolvedTheme::Light);
    }

    #[test]
    fn test_toggle_twice_restores_resolved_theme() {
        for (theme, system_dark) in [
            (Theme::Light, false),
            (Theme::Dark, false),
            (Theme::System, true),
            (Theme::System, false),
        ] {
            let source = StubSource::new(theme, system_dark);
            let original = source.resolved_theme();

            toggle_theme(&source);
            assert_ne!(source.resolved_theme(), original);
            toggle_theme(&source);

            assert_eq!(source.resolved_theme(), original);
            assert_eq!(source.writes.get(), 2);
        }
    }
}
