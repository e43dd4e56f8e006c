use leptos::{html, prelude::*};

use super::reveal::{use_reveal, Reveal, SectionHeading};
use crate::{
    catalog::Catalog,
    nav::Section,
    reveal::{stagger, Entrance, SECTION_THRESHOLD},
};

#[component]
pub fn About() -> impl IntoView {
    let about = expect_context::<&'static Catalog>().about();
    let section = NodeRef::<html::Section>::new();
    let shown = use_reveal(section, SECTION_THRESHOLD);

    let paragraphs = about
        .paragraphs
        .iter()
        .map(|p| view! { <p class="text-muted leading-relaxed mb-4">{*p}</p> })
        .collect_view();

    let features = about
        .features
        .iter()
        .enumerate()
        .map(|(i, feature)| {
            view! {
                <Reveal shown entrance=Entrance::FromRight delay=stagger(0.2, i, 0.1)>
                    <div class="card p-6 flex gap-4">
                        <span class="text-2xl text-primary">{feature.icon}</span>
                        <div>
                            <h4 class="font-semibold mb-1">{feature.title}</h4>
                            <p class="text-sm text-muted">{feature.description}</p>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section node_ref=section id=Section::About.anchor() class="py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    shown
                    lead="About"
                    highlight="Me"
                    subtitle="A little about who I am and how I like to work"
                />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <Reveal shown entrance=Entrance::FromLeft>
                        <h3 class="text-2xl font-semibold mb-6">{about.headline}</h3>
                        {paragraphs}
                    </Reveal>
                    <div class="grid gap-4">{features}</div>
                </div>
            </div>
        </section>
    }
}
