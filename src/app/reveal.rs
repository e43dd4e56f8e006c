use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{delay_style, reveal_class, Entrance, RevealLatch};

/// Watches `target` and returns a signal that turns `true` the first time at
/// least `threshold` of it is visible, and stays `true`.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: f64) -> Signal<bool> {
    let revealed = RwSignal::new(false);
    use_reveal_into(target, threshold, revealed);
    revealed.into()
}

/// Like [`use_reveal`], but latches into a signal owned by the caller so the
/// state outlives the observed element.
pub fn use_reveal_into(target: NodeRef<html::Section>, threshold: f64, revealed: RwSignal<bool>) {
    let latch = StoredValue::new(if revealed.get_untracked() {
        RevealLatch::revealed(threshold)
    } else {
        RevealLatch::new(threshold)
    });

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let mut flipped = None;
            latch.update_value(|latch| {
                if entries
                    .iter()
                    .any(|entry| latch.observe(entry.intersection_ratio(), entry.is_intersecting()))
                {
                    flipped = Some(latch.threshold());
                }
            });
            if let Some(threshold) = flipped {
                log::debug!("section revealed at threshold {threshold}");
                revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });
}

/// Wraps `children` in an element that slides in once `shown` turns true.
#[component]
pub fn Reveal(
    #[prop(into)] shown: Signal<bool>,
    #[prop(optional)] entrance: Entrance,
    #[prop(optional)] delay: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=move || reveal_class(&class, entrance, shown.get())
            style=delay_style(delay)
        >
            {children()}
        </div>
    }
}

/// Section heading shared by every portfolio section: a title with a
/// gradient-highlighted word and a one-line subtitle.
#[component]
pub fn SectionHeading(
    #[prop(into)] shown: Signal<bool>,
    lead: &'static str,
    highlight: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <Reveal shown class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold mb-4">
                {lead}
                {(!lead.is_empty()).then_some(" ")}
                <span class="gradient-text">{highlight}</span>
            </h2>
            <p class="text-muted text-lg max-w-2xl mx-auto">{subtitle}</p>
        </Reveal>
    }
}
