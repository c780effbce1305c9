//! Theme provider
//!
//! Provides:
//! - ThemeContext, the page's [`ThemeSource`]
//! - System theme detection via prefers-color-scheme
//! - LocalStorage persistence
//! - The inline pre-paint script that applies the stored theme before hydration

use leptos::prelude::*;

use crate::core::theme::{DARK_CLASS, ResolvedTheme, THEME_STORAGE_KEY, Theme, ThemeSource};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Stored preference
    pub theme: RwSignal<Theme>,
    /// System prefers dark mode
    pub system_prefers_dark: RwSignal<bool>,
    /// Effective theme (considering system preference)
    pub resolved: Memo<ResolvedTheme>,
}

impl ThemeSource for ThemeContext {
    fn theme(&self) -> Theme {
        self.theme.get_untracked()
    }

    fn resolved_theme(&self) -> ResolvedTheme {
        self.resolved.get_untracked()
    }

    fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        persist_theme(theme);
    }
}

impl ThemeContext {
    /// Apply the dark class to the document element
    pub fn apply_theme_class(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(html) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
            {
                let class_list = html.class_list();
                if self.resolved.get_untracked().is_dark() {
                    let _ = class_list.add_1(DARK_CLASS);
                } else {
                    let _ = class_list.remove_1(DARK_CLASS);
                }
            }
        }
    }
}

/// Persist theme to localStorage
fn persist_theme(theme: Theme) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = theme;
    }
}

/// Load theme from localStorage, falling back to the default on missing or bad values
fn load_persisted_theme() -> Theme {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(THEME_STORAGE_KEY) {
                    return value.parse().unwrap_or_default();
                }
            }
        }
    }
    Theme::default()
}

/// Detect system color scheme preference
fn detect_system_prefers_dark() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                return media_query.matches();
            }
        }
    }
    false
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let theme = RwSignal::new(load_persisted_theme());
    let system_prefers_dark = RwSignal::new(detect_system_prefers_dark());

    let resolved = Memo::new(move |_| theme.get().resolve(system_prefers_dark.get()));

    let ctx = ThemeContext {
        theme,
        system_prefers_dark,
        resolved,
    };

    // Listen for system theme changes
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                        move |e: web_sys::MediaQueryListEvent| {
                            system_prefers_dark.set(e.matches());
                        },
                    );

                    let _ = media_query.add_event_listener_with_callback(
                        "change",
                        handler.as_ref().unchecked_ref(),
                    );

                    // Lives as long as the page
                    handler.forget();
                }
            }
        });
    }

    // Apply theme class initially and on changes
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let _ = ctx.resolved.get();
            ctx.apply_theme_class();
        });
    }

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// Inline script run in `<head>` before first paint.
///
/// Mirrors [`provide_theme_context`] so the server-rendered page already carries
/// the right `dark` class when the stored or system theme is dark.
pub fn theme_init_script() -> String {
    format!(
        "(function(){{try{{var t=localStorage.getItem('{key}')||'{default}';\
         var d=t==='dark'||(t==='system'&&window.matchMedia('(prefers-color-scheme: dark)').matches);\
         document.documentElement.classList.toggle('{dark}',d);}}catch(e){{}}}})();",
        key = THEME_STORAGE_KEY,
        default = Theme::default().as_str(),
        dark = DARK_CLASS,
    )
}
