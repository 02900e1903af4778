use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{profile, SkillEntry, TimelineEntry, SKILLS, TIMELINE};
use crate::state::{AboutState, AboutTab};

fn panel_class(base: &str, visible: bool) -> String {
    if visible {
        format!("{base} panel-enter")
    } else {
        format!("{base} hidden")
    }
}

#[component]
pub fn About() -> impl IntoView {
    let (about, set_about) = signal(AboutState::new(SKILLS.len()));

    view! {
        <section id="about" class="py-20 px-4 bg-white">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-6">"About Me"</h2>
                    <div class="h-1 w-24 bg-accent mx-auto mb-6 rounded-full" />
                    <p class="text-secondary max-w-3xl mx-auto">{profile::ABOUT_BLURB}</p>
                </Reveal>

                <div class="flex justify-center space-x-4 mb-12" role="tablist">
                    {AboutTab::all()
                        .into_iter()
                        .map(|tab| {
                            let active = move || about.with(|s| s.is_visible(tab));
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || if active() { "true" } else { "false" }
                                    on:click=move |_| set_about.update(|s| s.select_tab(tab))
                                    class=move || {
                                        if active() {
                                            "tab-button tab-active px-6 py-2 rounded-full bg-accent text-white shadow-lg transition-all duration-300"
                                        } else {
                                            "tab-button px-6 py-2 rounded-full bg-gray-100 text-secondary hover:bg-gray-200 transition-all duration-300"
                                        }
                                    }
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                // both panels stay mounted; the inactive one is only hidden
                <div
                    role="tabpanel"
                    class=move || {
                        panel_class("space-y-8", about.with(|s| s.is_visible(AboutTab::Journey)))
                    }
                >
                    <div class="max-w-3xl mx-auto">
                        {TIMELINE
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                view! {
                                    <TimelineItem
                                        entry=*entry
                                        index
                                        is_last={index == TIMELINE.len() - 1}
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div
                    role="tabpanel"
                    class=move || {
                        panel_class(
                            "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8",
                            about.with(|s| s.is_visible(AboutTab::Skills)),
                        )
                    }
                >
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| {
                            view! { <SkillCard skill=*skill index about set_about /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry, index: usize, is_last: bool) -> impl IntoView {
    view! {
        <Reveal class="flex items-start mb-8 relative" delay_ms={index as u64 * 200}>
            <div class="flex-shrink-0 w-12 h-12 bg-accent rounded-full flex items-center justify-center text-white">
                <i class=entry.icon.class() />
            </div>
            <div class="ml-4">
                <span class="text-sm text-accent font-semibold">{entry.year}</span>
                <h3 class="text-xl font-semibold mb-2">{entry.title}</h3>
                <p class="text-secondary">{entry.description}</p>
            </div>
            {(!is_last)
                .then(|| view! { <div class="absolute left-6 top-12 w-0.5 h-16 bg-accent/20" /> })}
        </Reveal>
    }
}

#[component]
fn SkillCard(
    skill: SkillEntry,
    index: usize,
    about: ReadSignal<AboutState>,
    set_about: WriteSignal<AboutState>,
) -> impl IntoView {
    view! {
        <Reveal delay_ms={index as u64 * 100}>
            <div
                class="bg-gray-50 p-6 rounded-lg shadow-lg hover:shadow-xl hover:scale-105 transition-all duration-300 h-full"
                on:mouseenter=move |_| set_about.update(|s| s.hover_skill(index))
                on:mouseleave=move |_| set_about.update(|s| s.leave_skill())
            >
                <div class=move || {
                    if about.with(|s| s.is_skill_hovered(index)) {
                        "spin-icon spin-icon-active text-3xl text-accent mb-4"
                    } else {
                        "spin-icon text-3xl text-accent mb-4"
                    }
                }>
                    <i class=skill.icon.class() />
                </div>
                <h4 class="text-xl font-semibold mb-2">{skill.title}</h4>
                <p class="text-secondary mb-4">{skill.description}</p>
                <div class="flex flex-wrap gap-2">
                    {skill
                        .technologies
                        .iter()
                        .enumerate()
                        .map(|(i, tech)| {
                            view! {
                                <span
                                    class="entrance-fade text-sm px-2 py-1 bg-white rounded-full shadow-sm"
                                    style=format!("animation-delay: {}ms", i * 100)
                                >
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}
