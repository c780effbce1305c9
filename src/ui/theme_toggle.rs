//! Light/dark theme toggle button

use leptos::prelude::*;

use crate::core::theme::{ResolvedTheme, toggle_theme};
use crate::ui::hooks::use_mounted;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_theme_context;

const BUTTON_SIZE: &str = "w-9 h-9 p-0 inline-flex items-center justify-center rounded-md";

/// Icon offered for the resolved theme: the sun switches to light, the moon to dark
pub fn toggle_icon(resolved: ResolvedTheme) -> &'static str {
    if resolved.is_dark() {
        icons::SUN
    } else {
        icons::MOON
    }
}

fn toggle_label(resolved: ResolvedTheme) -> &'static str {
    if resolved.is_dark() {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    }
}

/// Theme toggle button.
///
/// Until mounted it renders an inert, same-size placeholder so the theme is never
/// read before the client knows it.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();
    let mounted = use_mounted();

    move || {
        if !mounted.get() {
            return view! {
                <button type="button" class=BUTTON_SIZE disabled=true aria-hidden="true" tabindex="-1">
                    <div class="h-4 w-4"></div>
                </button>
            }
            .into_any();
        }

        let resolved = theme.resolved.get();
        let icon_class = if resolved.is_dark() {
            "h-4 w-4 text-amber-500 transition-all duration-200"
        } else {
            "h-4 w-4 text-slate-600 transition-all duration-200"
        };

        view! {
            <button
                type="button"
                class=format!(
                    "{BUTTON_SIZE} hover:bg-white/20 dark:hover:bg-slate-800/50 backdrop-blur-sm \
                     border border-white/10 dark:border-slate-700/50 transition-all duration-200"
                )
                on:click=move |_| {
                    toggle_theme(&theme);
                }
                aria-label=toggle_label(resolved)
                title=toggle_label(resolved)
            >
                <Icon name=toggle_icon(resolved) class=icon_class />
                <span class="sr-only">"Toggle theme"</span>
            </button>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::provide_theme_context;

    #[test]
    fn test_server_render_is_inert_placeholder() {
        let owner = Owner::new();
        owner.with(|| {
            provide_theme_context();
            let html = view! { <ThemeToggle/> }.to_html();

            assert!(html.contains(BUTTON_SIZE));
            assert!(html.contains("disabled"));
            assert!(html.contains(r#"aria-hidden="true""#));
            assert!(!html.contains("<svg"));
            assert!(!html.contains("Switch to"));
        });
        owner.cleanup();
    }

    #[test]
    fn test_dark_offers_sun() {
        assert_eq!(toggle_icon(ResolvedTheme::Dark), icons::SUN);
        assert_eq!(toggle_label(ResolvedTheme::Dark), "Switch to light theme");
    }

    #[test]
    fn test_light_offers_moon() {
        assert_eq!(toggle_icon(ResolvedTheme::Light), icons::MOON);
        assert_eq!(toggle_label(ResolvedTheme::Light), "Switch to dark theme");
    }
}
