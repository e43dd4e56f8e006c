use leptos::{either::Either, html, prelude::*};
use leptos_router::components::A;

use super::reveal::{use_reveal, Reveal, SectionHeading};
use crate::{
    catalog::{Catalog, ContactLink},
    nav::Section,
    reveal::{stagger, SECTION_THRESHOLD},
};

#[component]
pub fn Contact() -> impl IntoView {
    let contact = expect_context::<&'static Catalog>().contact();
    let section = NodeRef::<html::Section>::new();
    let shown = use_reveal(section, SECTION_THRESHOLD);

    view! {
        <section node_ref=section id=Section::Contact.anchor() class="py-20 bg-card/30">
            <div class="container mx-auto px-4 max-w-3xl text-center">
                <SectionHeading shown lead="Get In" highlight="Touch" subtitle=contact.blurb />
                <Reveal shown delay=0.2>
                    <h3 class="text-2xl font-semibold mb-8">{contact.headline}</h3>
                </Reveal>
                <div class="flex flex-wrap justify-center gap-4">
                    {contact
                        .links
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            view! {
                                <Reveal shown delay=stagger(0.3, i, 0.1)>
                                    <LinkButton link />
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
fn LinkButton(link: &'static ContactLink) -> impl IntoView {
    let class = "inline-flex items-center gap-2 px-6 py-3 rounded-lg border border-border hover:border-primary hover:text-primary transition-colors";
    let body = move || {
        view! {
            <span aria-hidden="true">{link.icon}</span>
            <span>{link.label}</span>
        }
    };

    if link.external {
        Either::Left(view! {
            <a href=link.href target="_blank" rel="noopener noreferrer" class=class>
                {body()}
            </a>
        })
    } else {
        Either::Right(view! {
            <A href=link.href attr:class=class>
                {body()}
            </A>
        })
    }
}
