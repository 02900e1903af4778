use leptos::prelude::*;

use crate::content::{profile, SocialLink, HERO_LINKS};

// Hero elements animate on load rather than on scroll.
fn entrance_delay(ms: u32) -> String {
    format!("animation-delay: {ms}ms")
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen relative overflow-hidden bg-gradient-to-br from-background via-card to-background">
            <div class="absolute inset-0 bg-grid-pattern opacity-[0.02]" />
            <div class="relative flex items-center justify-center px-4">
                <div class="max-w-4xl mx-auto text-center pt-32">
                    <div class="mb-8 entrance-pop">
                        <div class="w-60 h-60 mx-auto mb-10 rounded-full overflow-hidden border-4 border-accent/20 shadow-xl">
                            <img
                                src=profile::PHOTO
                                alt="Profile"
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </div>
                    <h1
                        class="entrance-rise text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-accent to-blue-600 text-transparent bg-clip-text animate-gradient"
                        style=entrance_delay(300)
                    >
                        {profile::HEADLINE}
                    </h1>
                    <div class="entrance-rise relative mb-8" style=entrance_delay(500)>
                        <p class="text-xl md:text-2xl text-secondary">{profile::ROLE}</p>
                        <div class="h-1 w-24 bg-accent mx-auto mt-6 rounded-full" />
                    </div>
                    <div
                        class="entrance-rise flex justify-center space-x-6 mb-12"
                        style=entrance_delay(700)
                    >
                        {HERO_LINKS
                            .iter()
                            .map(|link| view! { <HeroLink link=*link /> })
                            .collect_view()}
                    </div>
                    <div class="entrance-fade" style=entrance_delay(900)>
                        <a
                            href="#projects"
                            class="inline-block px-8 py-3 bg-accent text-white rounded-lg shadow-lg hover:shadow-xl hover:bg-accent/90 transition-all"
                        >
                            "View My Work"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroLink(link: SocialLink) -> impl IntoView {
    view! {
        <a
            href=link.url
            target="_blank"
            rel="noopener noreferrer"
            class="group relative press-scale"
            aria-label=link.label
        >
            <div class="absolute inset-0 bg-accent rounded-lg blur opacity-20 group-hover:opacity-30 transition-opacity" />
            <div class="relative p-3 bg-card rounded-lg shadow-lg group-hover:shadow-xl transition-all">
                <i class=format!("{} text-2xl text-accent", link.icon.class()) />
            </div>
            <span class="absolute -bottom-8 left-1/2 -translate-x-1/2 text-sm text-secondary opacity-0 group-hover:opacity-100 transition-opacity">
                {link.label}
            </span>
        </a>
    }
}
