use leptos::{html, prelude::*};

use super::reveal::{use_reveal, Reveal, SectionHeading};
use crate::{
    catalog::{Catalog, EducationRecord},
    nav::Section,
    reveal::{stagger, SECTION_THRESHOLD},
};

#[component]
pub fn Education() -> impl IntoView {
    let records = expect_context::<&'static Catalog>().education();
    let section = NodeRef::<html::Section>::new();
    let shown = use_reveal(section, SECTION_THRESHOLD);

    view! {
        <section node_ref=section id=Section::Education.anchor() class="py-20 bg-card/30">
            <div class="container mx-auto px-4 max-w-4xl">
                <SectionHeading
                    shown
                    lead="My"
                    highlight="Education"
                    subtitle="The academic foundation behind my work"
                />
                {records
                    .iter()
                    .enumerate()
                    .map(|(i, record)| {
                        view! {
                            <Reveal shown delay=stagger(0.1, i, 0.15)>
                                <Record record />
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Record(record: &'static EducationRecord) -> impl IntoView {
    let coursework = record
        .coursework
        .iter()
        .map(|c| view! { <span class="tag">{*c}</span> })
        .collect_view();
    let achievements = record
        .achievements
        .iter()
        .map(|a| view! { <li class="text-muted">{*a}</li> })
        .collect_view();

    view! {
        <article class="card p-8 mb-8">
            <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-2 mb-4">
                <div>
                    <h3 class="text-2xl font-semibold">{record.institution}</h3>
                    <p class="text-primary font-medium">{record.degree}</p>
                </div>
                <span class="text-sm text-muted whitespace-nowrap">{record.dates}</span>
            </div>
            <p class="text-muted leading-relaxed mb-6">{record.summary}</p>
            <h4 class="font-semibold mb-3">"Key Coursework"</h4>
            <div class="flex flex-wrap gap-2 mb-6">{coursework}</div>
            <h4 class="font-semibold mb-3">"Achievements"</h4>
            <ul class="list-disc list-inside space-y-1">{achievements}</ul>
        </article>
    }
}
