use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::site::{FONT_STYLESHEET, SITE_DESCRIPTION, SITE_LANG, SITE_TITLE};
use crate::ui::chat_widget::ChatWidgetMeta;
use crate::ui::theme::theme_init_script;
use crate::ui::{ChatWidgetLoader, LandingPage, NotFoundPage, provide_theme_context};

/// Document shell rendered on the server.
///
/// The chat widget source comes from a `ChatWidget` in context (provided per
/// request by the server); without one the widget is not loaded.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=SITE_LANG>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                // Applies the stored theme before first paint
                <script inner_html=theme_init_script()></script>
                <ChatWidgetMeta/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="font-sans antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_theme_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/linguabot.css"/>

        <Link rel="preconnect" href="https://fonts.googleapis.com"/>
        <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
        <Link rel="stylesheet" href=FONT_STYLESHEET/>

        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </main>
        </Router>

        <ChatWidgetLoader/>
    }
}
