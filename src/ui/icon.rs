use leptos::prelude::*;

/// Inline stroke icon (Lucide geometry, 24x24 viewBox)
#[component]
pub fn Icon(
    /// Icon name, see [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icon_markup(name)
        ></svg>
    }
}

/// Icon names
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const GLOBE: &str = "globe";
    pub const MENU: &str = "menu";
    pub const MESSAGE_CIRCLE: &str = "message-circle";
    pub const MOON: &str = "moon";
    pub const PLAY: &str = "play";
    pub const SHIELD: &str = "shield";
    pub const SPARKLES: &str = "sparkles";
    pub const STAR: &str = "star";
    pub const SUN: &str = "sun";
    pub const X: &str = "x";
}

/// SVG child markup for an icon; unknown names render empty
pub fn icon_markup(name: &str) -> &'static str {
    match name {
        icons::ARROW_RIGHT => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
        icons::GLOBE => {
            r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#
        }
        icons::MENU => {
            r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
        }
        icons::MESSAGE_CIRCLE => r#"<path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"/>"#,
        icons::MOON => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
        icons::PLAY => r#"<polygon points="6 3 20 12 6 21 6 3"/>"#,
        icons::SHIELD => {
            r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#
        }
        icons::SPARKLES => {
            r#"<path d="M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z"/><path d="M20 3v4"/><path d="M22 5h-4"/><path d="M4 17v2"/><path d="M5 18H3"/>"#
        }
        icons::STAR => {
            r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
        }
        icons::SUN => {
            r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#
        }
        icons::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icons_have_markup() {
        for name in [
            icons::ARROW_RIGHT,
            icons::GLOBE,
            icons::MENU,
            icons::MESSAGE_CIRCLE,
            icons::MOON,
            icons::PLAY,
            icons::SHIELD,
            icons::SPARKLES,
            icons::STAR,
            icons::SUN,
            icons::X,
        ] {
            assert!(!icon_markup(name).is_empty(), "missing markup for {name}");
        }
    }

    #[test]
    fn test_unknown_icon_is_empty() {
        assert_eq!(icon_markup("does-not-exist"), "");
    }
}
