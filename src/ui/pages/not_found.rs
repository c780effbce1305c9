//! Not found page component
//!
//! A 404 page for any path other than the landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-slate-100 dark:from-slate-950 dark:to-slate-900
                    flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-gradient-to-br from-emerald-500 to-indigo-600 rounded-full
                            flex items-center justify-center shadow-lg">
                    <Icon name=icons::MESSAGE_CIRCLE class="w-12 h-12 text-white" />
                </div>

                <h1 class="text-6xl font-bold text-slate-900 dark:text-slate-100 mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-slate-800 dark:text-slate-200 mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-slate-600 dark:text-slate-400 mb-8 max-w-md mx-auto">
                    "We couldn't find that page in any language."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-gradient-to-r from-emerald-500 to-emerald-600 hover:from-emerald-600
                                hover:to-emerald-700 text-white font-semibold rounded-lg transition-colors"
                >
                    "Back to LinguaBot"
                </A>
            </div>
        </div>
    }
}
