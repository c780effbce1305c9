//! Static site metadata shared by the server shell and the hydrated page.

/// Document title
pub const SITE_TITLE: &str = "LinguaBot - Multilingual AI Customer Support";

/// Meta description
pub const SITE_DESCRIPTION: &str = "Multilingual AI support bots for India's diverse customers. Speak your customers' language instantly.";

/// Document language
pub const SITE_LANG: &str = "en";

/// Inter font stylesheet
pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap";

/// Hosted chat widget loaded when `CHAT_WIDGET_SRC` is unset
pub const DEFAULT_CHAT_WIDGET_SRC: &str = "https://linguachatbotapi.netlify.app/chatbot.js";

/// Name of the `<meta>` tag carrying the chat widget source to the browser
pub const CHAT_WIDGET_META: &str = "linguabot:chat-widget";

/// Third-party chat widget script include
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatWidget {
    src: String,
}

impl ChatWidget {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }

    pub fn src(&self) -> &str {
        &self.src
    }
}

/// In-page navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

/// Navigation entries, in display order
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { name: "Features", href: "#features" },
    NavItem { name: "Pricing", href: "#pricing" },
    NavItem { name: "Demo", href: "#demo" },
    NavItem { name: "Contact", href: "#contact" },
];
