//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::site::{ChatWidget, DEFAULT_CHAT_WIDGET_SRC};

/// Environment variable holding the chat widget script URL
pub const CHAT_WIDGET_SRC_VAR: &str = "CHAT_WIDGET_SRC";

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CHAT_WIDGET_SRC must be an http(s) URL or a root-relative path, got {0:?}")]
    InvalidChatWidgetSrc(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Third-party chat widget script. `None` disables the include.
    pub chat_widget: Option<ChatWidget>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(CHAT_WIDGET_SRC_VAR).ok();
        Self::from_chat_widget_src(raw.as_deref())
    }

    /// Build config from an optional raw `CHAT_WIDGET_SRC` value.
    ///
    /// Unset falls back to the hosted widget, an empty string disables it.
    pub fn from_chat_widget_src(raw: Option<&str>) -> Result<Self, ConfigError> {
        let chat_widget = match raw.map(str::trim) {
            None => Some(ChatWidget::new(DEFAULT_CHAT_WIDGET_SRC)),
            Some("") => None,
            Some(src) if is_valid_script_src(src) => Some(ChatWidget::new(src)),
            Some(src) => return Err(ConfigError::InvalidChatWidgetSrc(src.to_string())),
        };

        Ok(Self { chat_widget })
    }

    /// Check if the chat widget is enabled
    pub fn has_chat_widget(&self) -> bool {
        self.chat_widget.is_some()
    }
}

fn is_valid_script_src(src: &str) -> bool {
    src.starts_with("https://")
        || src.starts_with("http://")
        || (src.starts_with('/') && !src.starts_with("//"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_uses_hosted_widget() {
        let config = Config::from_chat_widget_src(None).unwrap();

        assert!(config.has_chat_widget());
        assert_eq!(
            config.chat_widget.unwrap().src(),
            "https://linguachatbotapi.netlify.app/chatbot.js"
        );
    }

    #[test]
    fn test_empty_disables_widget() {
        let config = Config::from_chat_widget_src(Some("  ")).unwrap();
        assert!(!config.has_chat_widget());
    }

    #[test]
    fn test_custom_sources() {
        let remote = Config::from_chat_widget_src(Some("https://cdn.example.com/w.js")).unwrap();
        assert_eq!(remote.chat_widget.unwrap().src(), "https://cdn.example.com/w.js");

        let local = Config::from_chat_widget_src(Some("/static/widget.js")).unwrap();
        assert_eq!(local.chat_widget.unwrap().src(), "/static/widget.js");
    }

    #[test]
    fn test_rejects_invalid_sources() {
        for bad in ["widget.js", "//cdn.example.com/w.js", "javascript:alert(1)"] {
            assert_eq!(
                Config::from_chat_widget_src(Some(bad)),
                Err(ConfigError::InvalidChatWidgetSrc(bad.to_string()))
            );
        }
    }
}
