use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::state::RevealOnce;

/// Starting pose of an element before it scrolls into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    Rise,
    FromLeft,
    FromRight,
}

impl Entrance {
    fn class(self) -> &'static str {
        match self {
            Entrance::Rise => "reveal reveal-rise",
            Entrance::FromLeft => "reveal reveal-left",
            Entrance::FromRight => "reveal reveal-right",
        }
    }
}

/// Plays its entrance transition the first time it intersects the viewport,
/// then stops observing.
#[component]
pub fn Reveal(
    #[prop(into, optional)] class: String,
    #[prop(optional)] entrance: Entrance,
    #[prop(optional)] delay_ms: u64,
    #[prop(default = 0.0)] threshold: f64,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let (reveal, set_reveal) = signal(RevealOnce::with_threshold(threshold));

    let observer = use_intersection_observer_with_options(
        node,
        move |entries, _| {
            set_reveal.maybe_update(|r| {
                entries
                    .iter()
                    .any(|e| r.observe(e.is_intersecting(), e.intersection_ratio()))
            });
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );
    let stop = observer.stop;
    Effect::new(move |_| {
        if reveal.with(|r| r.is_revealed()) {
            stop();
        }
    });

    let classes = move || {
        let state = if reveal.with(|r| r.is_revealed()) {
            "revealed"
        } else {
            ""
        };
        format!("{} {state} {class}", entrance.class())
    };

    view! {
        <div node_ref=node class=classes style=format!("transition-delay: {delay_ms}ms")>
            {children()}
        </div>
    }
}
