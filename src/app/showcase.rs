use leptos::{html, prelude::*};

use super::reveal::{use_reveal, Reveal, SectionHeading};
use crate::{
    catalog::{Catalog, ShowcaseCard},
    reveal::{stagger, Entrance, SECTION_THRESHOLD},
};

#[component]
pub fn Showcase() -> impl IntoView {
    let cards = expect_context::<&'static Catalog>().showcase();
    let section = NodeRef::<html::Section>::new();
    let shown = use_reveal(section, SECTION_THRESHOLD);
    let hovered = RwSignal::new(None::<&'static str>);

    view! {
        <section node_ref=section class="py-20 bg-card/30">
            <div class="container mx-auto px-4">
                <SectionHeading
                    shown
                    lead="What I"
                    highlight="Do"
                    subtitle="The areas I bring to every project"
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6" on:mouseleave=move |_| hovered.set(None)>
                    {cards
                        .iter()
                        .enumerate()
                        .map(|(i, card)| {
                            view! {
                                <Reveal shown entrance=Entrance::Grow delay=stagger(0.1, i, 0.1)>
                                    <Card card hovered />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Card(card: &'static ShowcaseCard, hovered: RwSignal<Option<&'static str>>) -> impl IntoView {
    let is_hovered = move || hovered.get() == Some(card.id);

    view! {
        <div
            class=move || {
                if is_hovered() { "card showcase-card p-6 h-full is-hovered" } else { "card showcase-card p-6 h-full" }
            }
            style=move || format!("transform: translateX({:.0}px)", card.shift(hovered.get()))
            on:mouseenter=move |_| hovered.set(Some(card.id))
            on:mouseleave=move |_| hovered.set(None)
        >
            <div class="text-4xl mb-4">{card.icon}</div>
            <h3 class="text-xl font-semibold mb-1">{card.title}</h3>
            <p class="text-sm text-primary mb-3">{card.subtitle}</p>
            <p class="text-muted text-sm">{card.description}</p>
        </div>
    }
}
