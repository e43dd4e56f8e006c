use leptos::{html, prelude::*};

use super::{
    nav::go_to,
    reveal::{use_reveal, Reveal, SectionHeading},
};
use crate::{
    catalog::{Catalog, Project},
    nav::Section,
    reveal::{stagger, Entrance, LIST_THRESHOLD},
};

#[component]
pub fn Projects() -> impl IntoView {
    let projects = expect_context::<&'static Catalog>().projects();
    let section = NodeRef::<html::Section>::new();
    let shown = use_reveal(section, LIST_THRESHOLD);

    view! {
        <section node_ref=section id=Section::Projects.anchor() class="py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    shown
                    lead="Featured"
                    highlight="Projects"
                    subtitle="Some of the things I have built recently"
                />
                <div class="grid lg:grid-cols-2 gap-8">
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal shown delay=stagger(0.1, i, 0.2)>
                                    <ProjectCard project />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal shown entrance=Entrance::Grow delay=0.6 class="text-center mt-12">
                    <p class="text-muted mb-4">"Interested in working together?"</p>
                    <button
                        class="px-8 py-3 rounded-lg bg-primary text-background font-semibold hover:opacity-90 transition-opacity"
                        on:click=move |_| go_to(Section::Contact)
                    >
                        "Let's Work Together"
                    </button>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="card overflow-hidden h-full flex flex-col">
            <div class=format!("h-2 bg-gradient-to-r {}", project.gradient) />
            <div class="p-8 flex flex-col flex-1">
                <h3 class="text-2xl font-semibold mb-3">{project.title}</h3>
                <p class="text-muted mb-6">{project.description}</p>
                <h4 class="font-semibold mb-2">"Key Features"</h4>
                <ul class="list-disc list-inside text-sm text-muted space-y-1 mb-6">
                    {project.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|t| view! { <span class="tag">{*t}</span> })
                        .collect_view()}
                </div>
                <div class="flex gap-4 mt-auto">
                    <a
                        href=project.live_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 rounded-md bg-primary text-background text-sm font-medium"
                    >
                        "Live Demo"
                    </a>
                    <a
                        href=project.source_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 rounded-md border border-border text-sm font-medium"
                    >
                        "Source Code"
                    </a>
                </div>
            </div>
        </article>
    }
}
