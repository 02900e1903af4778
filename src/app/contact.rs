use leptos::prelude::*;

use super::reveal::{Entrance, Reveal};
use crate::content::{profile, SOCIAL_LINKS};
use crate::state::{ConsoleSink, ContactForm, FormField, HoverIndex};

const FIELD_CLASS: &str = "focus-grow w-full px-4 py-2 rounded-lg border border-gray-300 focus:border-accent focus:ring-2 focus:ring-accent/20 transition-all";

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    // every control reports through the form; its `name` says which field
    let on_input = move |ev: leptos::ev::Event| {
        let Some(name) = event_target::<leptos::web_sys::Element>(&ev).get_attribute("name") else {
            return;
        };
        match name.parse::<FormField>() {
            Ok(field) => form.update(|f| f.update_field(field, event_target_value(&ev))),
            Err(e) => log::warn!("{e}"),
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // the browser's `required` check has already run; never navigate
        ev.prevent_default();
        if let Err(e) = form.with_untracked(|f| f.submit(&ConsoleSink)) {
            log::warn!("{e}");
        }
    };

    view! {
        <section id="contact" class="py-20 px-4 bg-gradient-to-b from-background to-gray-50">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">"Get In Touch"</h2>
                    <div class="h-1 w-24 bg-accent mx-auto mb-6 rounded-full" />
                    <p class="text-secondary max-w-2xl mx-auto">{profile::CONTACT_BLURB}</p>
                </Reveal>

                <div class="grid md:grid-cols-2 gap-12 items-start">
                    <Reveal entrance=Entrance::FromLeft delay_ms=200>
                        <form on:submit=on_submit on:input=on_input class="space-y-6">
                            <TextField form field=FormField::Name kind="text" />
                            <TextField form field=FormField::Email kind="email" />
                            <div>
                                <label
                                    for=FormField::Message.as_str()
                                    class="block text-sm font-medium text-gray-700 mb-1"
                                >
                                    {FormField::Message.label()}
                                </label>
                                <textarea
                                    id=FormField::Message.as_str()
                                    name=FormField::Message.as_str()
                                    rows=5
                                    required=true
                                    class=FIELD_CLASS
                                    prop:value=move || {
                                        form.with(|f| f.value(FormField::Message).to_string())
                                    }
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                class="press-scale w-full py-3 px-6 bg-accent text-white rounded-lg hover:bg-accent/90 transition-colors"
                            >
                                "Send Message"
                            </button>
                        </form>
                    </Reveal>

                    <Reveal
                        entrance=Entrance::FromRight
                        delay_ms=400
                        class="bg-white rounded-xl shadow-lg p-8"
                    >
                        <h3 class="text-2xl font-semibold mb-6">"Connect With Me"</h3>
                        <div class="space-y-8">
                            <p class="text-secondary">{profile::CONNECT_BLURB}</p>
                            <SocialGrid />
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TextField(form: RwSignal<ContactForm>, field: FormField, kind: &'static str) -> impl IntoView {
    view! {
        <div>
            <label for=field.as_str() class="block text-sm font-medium text-gray-700 mb-1">
                {field.label()}
            </label>
            <input
                type=kind
                id=field.as_str()
                name=field.as_str()
                required=true
                class=FIELD_CLASS
                prop:value=move || form.with(|f| f.value(field).to_string())
            />
        </div>
    }
}

#[component]
fn SocialGrid() -> impl IntoView {
    let (hovered, set_hovered) = signal(HoverIndex::new(SOCIAL_LINKS.len()));

    view! {
        <div class="grid grid-cols-3 gap-4">
            {SOCIAL_LINKS
                .iter()
                .enumerate()
                .map(|(index, link)| {
                    view! {
                        <a
                            href=link.url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group flex flex-col items-center justify-center p-4 rounded-lg hover:bg-gray-50 hover:-translate-y-1 transition-all"
                            on:mouseenter=move |_| set_hovered.update(|h| h.enter(index))
                            on:mouseleave=move |_| set_hovered.update(HoverIndex::leave)
                        >
                            <div class=move || {
                                if hovered.with(|h| h.is_hovered(index)) {
                                    "spin-icon spin-icon-active text-2xl text-accent mb-2"
                                } else {
                                    "spin-icon text-2xl text-accent mb-2"
                                }
                            }>
                                <i class=link.icon.class() />
                            </div>
                            <span class="text-sm text-secondary group-hover:text-accent transition-colors">
                                {link.label}
                            </span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
