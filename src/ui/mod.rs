pub mod chat_widget;
pub mod hooks;
pub mod icon;
pub mod pages;
pub mod theme;
pub mod theme_toggle;

pub use chat_widget::ChatWidgetLoader;
pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
pub use theme::{ThemeContext, provide_theme_context, use_theme_context};
pub use theme_toggle::ThemeToggle;
