//! Landing page component
//!
//! The single marketing page for LinguaBot:
//! - Fixed navigation bar that turns prominent once the page scrolls past 50px
//! - Collapsible mobile menu
//! - Hero section with a light parallax, CTAs and trust indicators
//! - Mocked multilingual chat transcript with floating greeting bubbles
//! - Scroll demonstration section
//!
//! Until the first client render completes the page shows a skeleton with the same
//! layout, so server and hydrated markup always agree.

use leptos::prelude::*;

use crate::core::motion::{
    CHAT_CUSTOMER_DELAY, CHAT_REPLY_DELAY, CHAT_TRANSLATION_DELAY, CHAT_TYPING_DELAY,
    ENTRANCE_SECS, Entrance, FLOATING_GREETINGS, FloatingGreeting, bubble_style, typing_dot_style,
};
use crate::core::{MenuState, NAV_ITEMS, NavbarStyle, Parallax, hero_parallax, navbar_style};
use crate::ui::hooks::{use_mounted, use_scroll_offset};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme_toggle::ThemeToggle;

const CTA_CLASS: &str = "bg-gradient-to-r from-emerald-500 to-emerald-600 hover:from-emerald-600 \
    hover:to-emerald-700 text-white font-semibold rounded-md transition-all duration-200";

const BADGE_CLASS: &str = "inline-flex items-center rounded-full px-4 py-2 text-sm font-medium \
    bg-white/70 dark:bg-slate-800/70 backdrop-blur-sm border border-slate-200/70 \
    dark:border-slate-700/70 hover:bg-white/90 dark:hover:bg-slate-800/90 transition-colors";

/// Landing page with mount gating and scroll-driven navbar
#[component]
pub fn LandingPage() -> impl IntoView {
    let mounted = use_mounted();
    let offset = use_scroll_offset();

    // Memos only notify when the derived value changes, so scrolling within one
    // variant does not re-render the navbar.
    let navbar = Memo::new(move |_| navbar_style(offset.get()));
    let parallax = Memo::new(move |_| hero_parallax(offset.get()));

    view! {
        <Show when=move || mounted.get() fallback=|| view! { <LoadingSkeleton /> }>
            <div class="min-h-screen bg-gradient-to-br from-slate-50 via-emerald-50/20 to-indigo-50/10
                        dark:from-slate-950 dark:via-slate-900 dark:to-slate-800 relative overflow-hidden">
                <BackgroundBlobs />
                <Navbar variant=navbar />
                <Hero parallax=parallax />
                <ScrollDemoSection />
            </div>
            <LandingStyles />
        </Show>
    }
}

/// Fixed navigation bar
#[component]
fn Navbar(variant: Memo<NavbarStyle>) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    view! {
        <nav class=move || variant.get().nav_class()>
            <div class="max-w-7xl mx-auto">
                <div class=move || variant.get().surface_class()>
                    <div class="flex justify-between items-center">
                        <Logo />

                        // Desktop Navigation
                        <div class="hidden lg:flex items-center space-x-8">
                            {NAV_ITEMS
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <a href=item.href class=move || variant.get().link_class()>
                                            {item.name}
                                            <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-gradient-to-r from-emerald-500
                                                         to-indigo-500 group-hover:w-full transition-all duration-300"></span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <ThemeToggle />
                            <button
                                type="button"
                                class=format!("{CTA_CLASS} px-6 py-2 text-sm shadow-md hover:shadow-lg")
                            >
                                "Get Started"
                            </button>
                        </div>

                        // Mobile Navigation
                        <div class="lg:hidden flex items-center space-x-4">
                            <ThemeToggle />
                            <button
                                type="button"
                                class="p-2 rounded-md focus:ring-2 focus:ring-emerald-500 focus:ring-offset-2"
                                on:click=move |_| menu.update(MenuState::toggle)
                                aria-label="Toggle menu"
                                aria-expanded=move || { if menu.get().is_open() { "true" } else { "false" } }
                            >
                                {move || {
                                    if menu.get().is_open() {
                                        view! { <Icon name=icons::X class="w-5 h-5" /> }
                                    } else {
                                        view! { <Icon name=icons::MENU class="w-5 h-5" /> }
                                    }
                                }}
                            </button>
                        </div>
                    </div>

                    <Show when=move || menu.get().is_open()>
                        <MobileMenu menu=menu />
                    </Show>
                </div>
            </div>
        </nav>
    }
}

/// Collapsible menu for small screens; any link closes it
#[component]
fn MobileMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <div class="lg:hidden border-t border-slate-200/50 dark:border-slate-700/50 mt-4 pt-4 lb-menu-enter">
            <div class="space-y-3">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <a
                                href=item.href
                                class="block text-slate-700 dark:text-slate-300 hover:text-emerald-600
                                       dark:hover:text-emerald-400 font-medium py-2 px-3 rounded-lg hover:bg-slate-100
                                       dark:hover:bg-slate-800 transition-colors focus:outline-none focus:ring-2
                                       focus:ring-emerald-500"
                                on:click=move |_| menu.update(MenuState::close)
                            >
                                {item.name}
                            </a>
                        }
                    })
                    .collect_view()}
                <button type="button" class=format!("{CTA_CLASS} w-full py-2 text-sm")>
                    "Get Started"
                </button>
            </div>
        </div>
    }
}

/// Logo mark and wordmark
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3">
            <div class="w-10 h-10 bg-gradient-to-br from-emerald-500 to-indigo-600 rounded-xl
                        flex items-center justify-center shadow-lg">
                <Icon name=icons::MESSAGE_CIRCLE class="w-6 h-6 text-white" />
            </div>
            <div>
                <span class="text-xl font-bold bg-gradient-to-r from-emerald-600 to-indigo-600 bg-clip-text text-transparent">
                    "LinguaBot"
                </span>
                <div class="text-xs text-slate-500 dark:text-slate-400 font-medium">"AI Support"</div>
            </div>
        </div>
    }
}

/// Hero section: copy on the left, chat mockup on the right
#[component]
fn Hero(parallax: Memo<Parallax>) -> impl IntoView {
    view! {
        <section
            class="relative z-10 px-4 lg:px-6 pt-24 lg:pt-32 pb-16 lg:pb-24"
            style=move || parallax.get().style()
        >
            <div class="max-w-7xl mx-auto">
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-16 items-center">
                    <div class="space-y-8 text-center lg:text-left">
                        <div class="space-y-6" style=Entrance::Up.style(0.0, ENTRANCE_SECS)>
                            <h1 class="text-4xl sm:text-5xl lg:text-6xl xl:text-7xl font-extrabold leading-[1.1] tracking-tight">
                                <span class="bg-gradient-to-r from-emerald-600 via-emerald-500 to-indigo-600 bg-clip-text text-transparent">
                                    "Speak Your Customers' Language."
                                </span>
                                <br />
                                <span class="text-slate-900 dark:text-slate-100">"Instantly."</span>
                            </h1>

                            <p
                                class="text-lg sm:text-xl lg:text-2xl text-slate-600 dark:text-slate-300 font-medium
                                       max-w-2xl mx-auto lg:mx-0 leading-relaxed"
                                style=Entrance::Up.style(0.2, ENTRANCE_SECS)
                            >
                                "Multilingual AI support bots that understand India's diverse customers and respond in their preferred language."
                            </p>
                        </div>

                        <HeroActions />
                        <TrustIndicators />
                    </div>

                    <div class="relative" style=Entrance::FromRight.style(0.3, 1.0)>
                        <div class="relative w-full max-w-lg mx-auto">
                            <ChatMockup />
                            {FLOATING_GREETINGS
                                .into_iter()
                                .map(|greeting| view! { <FloatingBubble greeting=greeting /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Primary and secondary calls to action
#[component]
fn HeroActions() -> impl IntoView {
    view! {
        <div
            class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start"
            style=Entrance::Up.style(0.4, ENTRANCE_SECS)
        >
            <button
                type="button"
                class="inline-flex items-center justify-center bg-gradient-to-r from-emerald-500 to-emerald-600
                       hover:from-emerald-600 hover:to-emerald-700 text-white shadow-lg hover:shadow-xl
                       hover:shadow-emerald-500/25 transform hover:scale-[1.02] transition-all duration-300 px-8 py-4
                       text-lg font-semibold rounded-xl focus:ring-2 focus:ring-emerald-500 focus:ring-offset-2 group"
            >
                "Book a Free Demo"
                <Icon name=icons::ARROW_RIGHT class="ml-2 w-5 h-5 group-hover:translate-x-1 transition-transform" />
            </button>

            <a
                href="#demo"
                class="inline-flex items-center justify-center border-2 border-slate-200 dark:border-slate-700
                       text-slate-700 dark:text-slate-300 hover:text-emerald-600 dark:hover:text-emerald-400
                       hover:border-emerald-300 dark:hover:border-emerald-600 font-medium text-lg group px-8 py-4
                       rounded-xl transition-all duration-300 focus:ring-2 focus:ring-emerald-500 focus:ring-offset-2"
            >
                <Icon name=icons::PLAY class="mr-2 w-5 h-5 group-hover:scale-110 transition-transform" />
                "See How It Works"
            </a>
        </div>
    }
}

/// Star rating and feature badges
#[component]
fn TrustIndicators() -> impl IntoView {
    view! {
        <div class="space-y-4" style=Entrance::Up.style(0.6, ENTRANCE_SECS)>
            <div class="flex items-center justify-center lg:justify-start space-x-2 text-sm text-slate-600 dark:text-slate-400">
                <div class="flex items-center space-x-1" aria-label="Rated 5 out of 5">
                    {(0..5)
                        .map(|_| view! { <Icon name=icons::STAR class="w-4 h-4 fill-emerald-500 text-emerald-500" /> })
                        .collect_view()}
                </div>
                <span class="font-medium">"Trusted by 120+ brands across India"</span>
            </div>

            <div class="flex flex-wrap gap-3 justify-center lg:justify-start">
                <FeatureBadge icon=icons::GLOBE icon_class="w-4 h-4 mr-2 text-indigo-500" label="10+ Languages" />
                <FeatureBadge icon=icons::SHIELD icon_class="w-4 h-4 mr-2 text-emerald-500" label="GDPR Compliant" />
                <FeatureBadge icon=icons::SPARKLES icon_class="w-4 h-4 mr-2 text-amber-500" label="99.9% Uptime" />
            </div>
        </div>
    }
}

#[component]
fn FeatureBadge(
    icon: &'static str,
    icon_class: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <span class=BADGE_CLASS>
            <Icon name=icon class=icon_class />
            {label}
        </span>
    }
}

/// Glass card with a scripted support conversation
#[component]
fn ChatMockup() -> impl IntoView {
    view! {
        <div class="relative bg-white/10 dark:bg-white/5 backdrop-blur-xl rounded-3xl border border-white/20
                    dark:border-white/10 shadow-2xl p-6 lg:p-8 hover:scale-[1.01] transition-transform duration-500">
            <div class="space-y-4">
                <div class="flex items-center space-x-3 mb-6">
                    <div class="w-3 h-3 bg-red-400 rounded-full"></div>
                    <div class="w-3 h-3 bg-yellow-400 rounded-full"></div>
                    <div class="w-3 h-3 bg-green-400 rounded-full"></div>
                    <span class="text-sm text-slate-600 dark:text-slate-400 font-medium ml-4">
                        "Customer Support Chat"
                    </span>
                </div>

                // Customer message
                <div class="flex justify-end" style=Entrance::FromRight.style(CHAT_CUSTOMER_DELAY, 0.5)>
                    <div class="bg-indigo-500 text-white px-4 py-3 rounded-2xl rounded-br-md max-w-xs shadow-lg">
                        <p class="text-sm font-medium" lang="hi">"मुझे अपने ऑर्डर की स्थिति जानना है"</p>
                        <span class="text-xs opacity-75 block mt-1">"Hindi • Customer"</span>
                    </div>
                </div>

                <TypingIndicator />

                // Bot reply
                <div class="flex justify-start" style=Entrance::FromLeft.style(CHAT_REPLY_DELAY, 0.5)>
                    <div class="bg-gradient-to-r from-emerald-500 to-emerald-600 text-white px-4 py-3 rounded-2xl
                                rounded-bl-md max-w-xs shadow-lg">
                        <p class="text-sm font-medium">
                            "I can help you check your order status! Please provide your order number."
                        </p>
                        <span class="text-xs opacity-75 block mt-1">"English • AI Assistant"</span>
                    </div>
                </div>

                <div
                    class="flex items-center justify-center space-x-2 py-3"
                    style=Entrance::Fade.style(CHAT_TRANSLATION_DELAY, 0.5)
                >
                    <div class="w-2 h-2 bg-emerald-400 rounded-full animate-pulse"></div>
                    <span class="text-xs text-slate-500 dark:text-slate-400 font-medium">
                        "Real-time translation active"
                    </span>
                </div>
            </div>
        </div>
    }
}

/// Three bouncing dots
#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex justify-start" style=Entrance::Fade.style(CHAT_TYPING_DELAY, 0.5)>
            <div class="bg-slate-200 dark:bg-slate-700 px-4 py-3 rounded-2xl rounded-bl-md" aria-label="Assistant is typing">
                <div class="flex space-x-1">
                    {(0..3)
                        .map(|index| {
                            view! {
                                <div
                                    class="w-2 h-2 bg-slate-400 rounded-full animate-bounce"
                                    style=typing_dot_style(index)
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Greeting bubble that pops in, then bobs forever
#[component]
fn FloatingBubble(greeting: FloatingGreeting) -> impl IntoView {
    view! {
        <div
            class=format!(
                "absolute {} {} backdrop-blur-sm px-3 py-2 rounded-full shadow-lg border border-white/50 \
                 dark:border-slate-700/50 text-sm font-medium pointer-events-none",
                greeting.position,
                greeting.color,
            )
            style=bubble_style(greeting.delay)
            aria-hidden="true"
        >
            {greeting.text}
        </div>
    }
}

/// Slowly drifting gradient blobs behind everything
#[component]
fn BackgroundBlobs() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute -top-40 -left-40 w-80 h-80 bg-gradient-to-br from-emerald-400/5 to-emerald-600/3
                        rounded-full blur-3xl lb-blob-a"></div>
            <div class="absolute -bottom-40 -right-40 w-96 h-96 bg-gradient-to-br from-indigo-400/4 to-indigo-600/2
                        rounded-full blur-3xl lb-blob-b"></div>
        </div>
    }
}

/// Tall section so the navbar transition can be seen
#[component]
fn ScrollDemoSection() -> impl IntoView {
    view! {
        <section id="demo" class="relative z-10 px-4 lg:px-6 py-24 bg-white/50 dark:bg-slate-900/50">
            <div class="max-w-7xl mx-auto text-center">
                <h2 class="text-3xl lg:text-4xl font-bold text-slate-900 dark:text-slate-100 mb-6">
                    "Scroll to see the navbar effect"
                </h2>
                <p class="text-lg text-slate-600 dark:text-slate-300 max-w-2xl mx-auto">
                    "Notice how the navigation becomes more prominent as you scroll down, providing better usability while keeping the hero section clean."
                </p>
            </div>
        </section>
    }
}

/// Placeholder with the page's structure, shown until mounted
#[component]
fn LoadingSkeleton() -> impl IntoView {
    view! {
        <div
            class="min-h-screen bg-gradient-to-br from-slate-50 to-slate-100 dark:from-slate-950 dark:to-slate-900 animate-pulse"
            aria-busy="true"
        >
            <div class="p-6">
                <div class="max-w-7xl mx-auto">
                    <div class="bg-slate-200 dark:bg-slate-800 rounded-2xl h-20 mb-8"></div>
                    <div class="grid lg:grid-cols-2 gap-12 items-center">
                        <div class="space-y-6">
                            <div class="bg-slate-200 dark:bg-slate-800 rounded-lg h-16 w-3/4"></div>
                            <div class="bg-slate-200 dark:bg-slate-800 rounded-lg h-8 w-full"></div>
                            <div class="bg-slate-200 dark:bg-slate-800 rounded-lg h-12 w-1/2"></div>
                        </div>
                        <div class="bg-slate-200 dark:bg-slate-800 rounded-3xl h-96"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Keyframes for the page's decorative motion
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes lb-fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }

            @keyframes lb-fade-in-up {
                from { opacity: 0; transform: translateY(30px); }
                to { opacity: 1; transform: translateY(0); }
            }

            @keyframes lb-fade-in-left {
                from { opacity: 0; transform: translateX(-20px); }
                to { opacity: 1; transform: translateX(0); }
            }

            @keyframes lb-fade-in-right {
                from { opacity: 0; transform: translateX(20px); }
                to { opacity: 1; transform: translateX(0); }
            }

            /* Floating bubbles */
            @keyframes lb-pop-in {
                from { opacity: 0; scale: 0; }
                to { opacity: 1; scale: 1; }
            }

            @keyframes lb-bob {
                0%, 100% { translate: 0 0; }
                50% { translate: 0 -8px; }
            }

            /* Background blobs */
            @keyframes lb-blob-a {
                0% { transform: scale(1) rotate(0deg); }
                50% { transform: scale(1.1) rotate(90deg); }
                100% { transform: scale(1) rotate(180deg); }
            }

            @keyframes lb-blob-b {
                0% { transform: scale(1.1) rotate(180deg); }
                50% { transform: scale(1) rotate(90deg); }
                100% { transform: scale(1.1) rotate(0deg); }
            }

            .lb-blob-a { animation: lb-blob-a 30s linear infinite; }
            .lb-blob-b { animation: lb-blob-b 35s linear infinite; }

            /* Mobile menu */
            @keyframes lb-menu-enter {
                from { opacity: 0; max-height: 0; }
                to { opacity: 1; max-height: 24rem; }
            }

            .lb-menu-enter {
                overflow: hidden;
                animation: lb-menu-enter 0.2s ease-out both;
            }

            @media (prefers-reduced-motion: reduce) {
                .lb-blob-a, .lb-blob-b { animation: none; }
            }
            "#
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::provide_theme_context;

    #[test]
    fn test_server_render_is_skeleton_only() {
        let owner = Owner::new();
        owner.with(|| {
            provide_theme_context();
            let html = view! { <LandingPage/> }.to_html();

            assert!(html.contains("animate-pulse"));
            assert!(html.contains(r#"aria-busy="true""#));
            assert!(!html.contains("<nav"));
            assert!(!html.contains(r##"href="#features""##));
            assert!(!html.contains("<svg"));
        });
        owner.cleanup();
    }
}
