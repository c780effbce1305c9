//! Deferred third-party chat widget include.
//!
//! The server shell writes the widget URL into a `<meta>` tag; once the page is
//! interactive this component appends an async `<script>` for it. Loading is
//! fire-and-forget: no callback, no retry, failures are the browser's concern.

use leptos::prelude::*;

use crate::core::site::{CHAT_WIDGET_META, ChatWidget};

/// Marker attribute on the injected script, so it is only ever added once
pub const WIDGET_SCRIPT_MARKER: &str = "data-linguabot-widget";

/// CSS selector for the meta tag carrying the widget URL
pub fn widget_meta_selector() -> String {
    format!("meta[name=\"{CHAT_WIDGET_META}\"]")
}

/// Per-request context hook providing the configured widget, if any.
///
/// Install it on every server-rendered response, including the fallback handler
/// for unknown paths, so the shell always sees the same widget.
pub fn chat_widget_context(
    widget: Option<ChatWidget>,
) -> impl Fn() + Clone + Send + Sync + 'static {
    move || {
        if let Some(widget) = widget.clone() {
            provide_context(widget);
        }
    }
}

/// `<meta>` tag carrying the widget URL from context; renders nothing without one
#[component]
pub fn ChatWidgetMeta() -> impl IntoView {
    use_context::<ChatWidget>().map(|widget| {
        view! { <meta name=CHAT_WIDGET_META content=widget.src().to_string()/> }
    })
}

/// Load the chat widget after hydration
#[component]
pub fn ChatWidgetLoader() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| inject_chat_widget());
}

#[cfg(not(feature = "ssr"))]
fn inject_chat_widget() {
    use leptos::logging::warn;
    use leptos::wasm_bindgen::JsCast;
    use leptos::web_sys;

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let src = match document.query_selector(&widget_meta_selector()) {
        Ok(Some(meta)) => meta.get_attribute("content"),
        _ => None,
    };
    let Some(src) = src.filter(|src| !src.is_empty()) else {
        return;
    };

    if let Ok(Some(_)) = document.query_selector(&format!("script[{WIDGET_SCRIPT_MARKER}]")) {
        return;
    }

    let script = match document
        .create_element("script")
        .map(|element| element.unchecked_into::<web_sys::HtmlScriptElement>())
    {
        Ok(script) => script,
        Err(err) => {
            warn!("chat widget: could not create script element: {err:?}");
            return;
        }
    };
    script.set_src(&src);
    script.set_async(true);
    let _ = script.set_attribute(WIDGET_SCRIPT_MARKER, "");

    if let Some(body) = document.body() {
        if let Err(err) = body.append_child(&script) {
            warn!("chat widget: could not append script: {err:?}");
        }
    }
}
