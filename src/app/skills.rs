use leptos::{html, prelude::*};

use super::reveal::{use_reveal, Reveal, SectionHeading};
use crate::{
    catalog::{Catalog, SkillCategory},
    nav::Section,
    reveal::{delay_style, stagger, Entrance, SECTION_THRESHOLD},
};

#[component]
pub fn Skills() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();
    let section = NodeRef::<html::Section>::new();
    let shown = use_reveal(section, SECTION_THRESHOLD);

    let categories = catalog
        .skill_categories()
        .iter()
        .enumerate()
        .map(|(i, category)| {
            view! {
                <Reveal shown delay=stagger(0.1, i, 0.2)>
                    <Category category index=i shown />
                </Reveal>
            }
        })
        .collect_view();

    let others = catalog
        .other_technologies()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            view! {
                <Reveal shown entrance=Entrance::Grow delay=stagger(1.0, i, 0.1)>
                    <span class="tag">{*t}</span>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section node_ref=section id=Section::Skills.anchor() class="py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    shown
                    lead="Technical"
                    highlight="Skills"
                    subtitle="Technologies and tools I use to bring ideas to life"
                />
                <div class="grid md:grid-cols-3 gap-8 mb-12">{categories}</div>
                <Reveal shown entrance=Entrance::Grow delay=0.8 class="card p-8 text-center">
                    <h3 class="text-xl font-semibold mb-6">"Other Technologies"</h3>
                    <div class="flex flex-wrap justify-center gap-3">{others}</div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Category(
    category: &'static SkillCategory,
    index: usize,
    shown: Signal<bool>,
) -> impl IntoView {
    let bars = category
        .skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let delay = stagger(index as f64 * 0.2, i, 0.1);
            view! {
                <div class="mb-4">
                    <div class="flex justify-between text-sm mb-1">
                        <span class="font-medium">{skill.name}</span>
                        <span class="text-muted">{skill.label()}</span>
                    </div>
                    <div class="h-2 rounded-full bg-border overflow-hidden">
                        <div
                            class=format!("skill-bar h-full rounded-full bg-gradient-to-r {}", category.gradient)
                            style=move || {
                                format!("width: {}; {}", skill.bar_width(shown.get()), delay_style(delay))
                            }
                        />
                    </div>
                    {skill.detail.map(|d| view! { <p class="text-xs text-muted mt-1">{d}</p> })}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card p-6 h-full">
            <h3 class=format!(
                "text-xl font-semibold mb-6 bg-gradient-to-r {} bg-clip-text text-transparent",
                category.gradient,
            )>{category.title}</h3>
            {bars}
        </div>
    }
}
