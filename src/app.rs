mod about;
mod contact;
mod hero;
mod projects;
mod reveal;

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{copyright_notice, profile, NAV_LINKS};
use crate::state::MenuState;

use about::About;
use contact::Contact;
use hero::Hero;
use projects::Projects;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-primary">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", profile::OWNER) />
        <Meta
            name="description"
            content=format!("{} - {}. Projects, skills and contact.", profile::OWNER, profile::ROLE)
        />

        // single page; sections are reached through #fragments
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <NavBar />
        <main>
            <Hero />
            <About />
            <Projects />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());

    view! {
        <nav class="fixed w-full bg-white/80 backdrop-blur-sm z-50 shadow-sm">
            <div class="max-w-6xl mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    <a href="#" class="text-xl md:text-3xl font-bold">
                        "Portfolio"
                    </a>
                    <button
                        class="md:hidden p-2"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || if menu.with(|m| m.is_open()) { "true" } else { "false" }
                        on:click=move |_| set_menu.update(MenuState::toggle)
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d=move || menu.with(|m| m.toggle_path())
                            />
                        </svg>
                    </button>
                    <div class="hidden md:flex space-x-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href class="hover:text-accent transition-colors">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <Show when=move || menu.with(|m| m.is_open())>
                <div class="md:hidden bg-white menu-slide">
                    <div class="px-4 py-2 space-y-2">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="block py-2 hover:text-accent transition-colors"
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn Footer() -> impl IntoView {
    // read once on the server and shipped with the page, so hydration
    // never sees a different year
    let year = leptos::server::SharedValue::new(|| chrono::Utc::now().year()).into_inner();
    view! {
        <footer class="bg-primary text-white py-8">
            <div class="max-w-6xl mx-auto px-4 text-center">
                <p>{copyright_notice(year)}</p>
            </div>
        </footer>
    }
}
