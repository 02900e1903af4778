use leptos::{either::Either, prelude::*};

use super::reveal::Reveal;
use crate::content::{profile, Icon, ProjectRecord};
use crate::state::{ModalClick, ProjectGallery};

#[component]
pub fn Projects() -> impl IntoView {
    let gallery = RwSignal::new(ProjectGallery::default());
    let open_project = Callback::new(move |title: &'static str| {
        gallery.update(|g| {
            if let Err(e) = g.select(title) {
                log::warn!("{e}");
            }
        });
    });
    // only a change of selection remounts the modal
    let selected = Memo::new(move |_| gallery.with(|g| g.selected()));

    view! {
        <section id="projects" class="py-20 px-4 bg-background relative">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">"Featured Projects"</h2>
                    <div class="h-1 w-24 bg-accent mx-auto mb-6 rounded-full" />
                    <p class="text-secondary max-w-3xl mx-auto mb-8">{profile::PROJECTS_BLURB}</p>
                    <SearchBar gallery />
                </Reveal>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    // keyed by title: cards that stay visible keep their node and
                    // their stagger index from when they mounted; a card filtered
                    // out and back in remounts and plays its entrance again
                    <For
                        each=move || {
                            gallery.with(|g| g.visible().into_iter().enumerate().collect::<Vec<_>>())
                        }
                        key=|(_, project)| project.title
                        children=move |(index, project)| {
                            view! { <ProjectCard project index on_open=open_project /> }
                        }
                    />
                </div>

                {move || {
                    selected.get().map(|project| view! { <ProjectModal project gallery /> })
                }}
            </div>
        </section>
    }
}

#[component]
fn SearchBar(gallery: RwSignal<ProjectGallery>) -> impl IntoView {
    let filtering = Memo::new(move |_| gallery.with(|g| g.is_filtering()));

    view! {
        <div class="relative max-w-md mx-auto">
            <input
                type="text"
                aria-label="Search projects"
                placeholder="Search projects by name or technology..."
                class="w-full px-4 py-2 pl-10 rounded-lg border border-gray-300 focus:border-accent focus:ring-2 focus:ring-accent/20 transition-all"
                prop:value=move || gallery.with(|g| g.filter_text().to_string())
                on:input=move |ev| gallery.update(|g| g.set_filter(event_target_value(&ev)))
            />
            {move || {
                if filtering.get() {
                    Either::Left(
                        view! {
                            <button
                                type="button"
                                aria-label="Clear search"
                                class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400 cursor-pointer"
                                on:click=move |_| gallery.update(|g| g.clear_filter())
                            >
                                <i class=Icon::Close.class() />
                            </button>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <i class=format!(
                                "{} absolute left-3 top-1/2 -translate-y-1/2 text-gray-400",
                                Icon::Search.class(),
                            ) />
                        },
                    )
                }
            }}
        </div>
    }
}

#[component]
fn ProjectCard(
    project: &'static ProjectRecord,
    index: usize,
    on_open: Callback<&'static str>,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);

    view! {
        <Reveal threshold=0.2 delay_ms={index as u64 * 200}>
            <div
                class="group bg-card rounded-xl shadow-lg hover:shadow-xl transition-all duration-300 overflow-hidden cursor-pointer h-full"
                on:click=move |_| on_open.run(project.title)
                on:mouseenter=move |_| set_hovered.set(true)
                on:mouseleave=move |_| set_hovered.set(false)
            >
                <div class="relative overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        class=move || {
                            if hovered.get() {
                                "w-full h-48 object-cover transition-transform duration-300 scale-110"
                            } else {
                                "w-full h-48 object-cover transition-transform duration-300"
                            }
                        }
                    />
                    <div class=move || {
                        if hovered.get() {
                            "absolute inset-0 bg-accent/20 flex items-center justify-center transition-opacity duration-300 opacity-100"
                        } else {
                            "absolute inset-0 bg-accent/20 flex items-center justify-center transition-opacity duration-300 opacity-0"
                        }
                    }>
                        <span class="text-white bg-black/50 px-4 py-2 rounded-lg">
                            "View Details"
                        </span>
                    </div>
                </div>
                <div class="p-6">
                    <h3 class="text-xl font-semibold mb-2 group-hover:text-accent transition-colors">
                        {project.title}
                    </h3>
                    <p class="text-secondary mb-4">{project.description}</p>
                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .tags
                            .iter()
                            .enumerate()
                            .map(|(i, tag)| {
                                view! {
                                    <span
                                        class="entrance-pop px-3 py-1 bg-hover rounded-full text-sm text-accent"
                                        style=format!("animation-delay: {}ms", i * 100)
                                    >
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn ProjectModal(project: &'static ProjectRecord, gallery: RwSignal<ProjectGallery>) -> impl IntoView {
    let click = move |target: ModalClick| gallery.update(|g| g.modal_click(target));

    view! {
        <div
            class="modal-fade fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50"
            on:click=move |_| click(ModalClick::Backdrop)
        >
            <div
                role="dialog"
                aria-modal="true"
                aria-label=project.title
                class="modal-pop bg-white rounded-xl p-6 max-w-2xl w-full max-h-[90vh] overflow-y-auto"
                // clicks inside the dialog must never reach the backdrop
                on:click=move |ev| {
                    ev.stop_propagation();
                    click(ModalClick::Body);
                }
            >
                <div class="relative">
                    <button
                        type="button"
                        aria-label="Close"
                        class="absolute right-0 top-0 p-2 hover:text-accent transition-colors"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            click(ModalClick::CloseButton);
                        }
                    >
                        <i class=Icon::Close.class() />
                    </button>
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-64 object-cover rounded-lg mb-6"
                    />
                    <h3 class="text-2xl font-bold mb-4">{project.title}</h3>
                    <p class="text-secondary mb-6">{project.long_description}</p>

                    <div class="mb-6">
                        <h4 class="font-semibold mb-2">"Key Features:"</h4>
                        <ul class="space-y-2">
                            {project
                                .highlights
                                .iter()
                                .enumerate()
                                .map(|(i, highlight)| {
                                    view! {
                                        <li
                                            class="entrance-slide flex items-start"
                                            style=format!("animation-delay: {}ms", i * 100)
                                        >
                                            <span class="text-accent mr-2">"•"</span>
                                            {*highlight}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="flex flex-wrap gap-2 mb-6">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-3 py-1 bg-accent/10 text-accent rounded-full text-sm">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex space-x-4">
                        <a
                            href=project.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center space-x-2 px-4 py-2 bg-accent text-white rounded-lg hover:bg-accent/90 transition-colors"
                        >
                            <i class=Icon::Github.class() />
                            <span>"View Code"</span>
                        </a>
                        <a
                            href=project.live
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center space-x-2 px-4 py-2 border border-accent text-accent rounded-lg hover:bg-accent hover:text-white transition-all"
                        >
                            <i class=Icon::ExternalLink.class() />
                            <span>"Live Demo"</span>
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
