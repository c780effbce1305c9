//! Framework-free page logic: scroll styling, theme boundary, mount gating and
//! static content.

#[cfg(feature = "ssr")]
pub mod config;
pub mod lifecycle;
pub mod motion;
pub mod navbar;
pub mod site;
pub mod theme;

pub use lifecycle::{MountPhase, SCROLL_SUBSCRIPTIONS, SubscriptionGuard, SubscriptionTracker};
pub use navbar::{MenuState, NavbarStyle, Parallax, SCROLL_THRESHOLD, hero_parallax, navbar_style};
pub use site::{ChatWidget, NAV_ITEMS, NavItem};
pub use theme::{ParseThemeError, ResolvedTheme, Theme, ThemeSource, toggle_theme};
