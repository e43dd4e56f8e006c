use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use super::{
    about::About, contact::Contact, education::Education, footer::Footer, hero::Hero,
    nav::{BrowserSurface, NavBar},
    projects::Projects, showcase::Showcase, skills::Skills,
};
use crate::nav::scroll_to_deep_link;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let location = use_location();

    // Deep links such as `/#contact` from the blog land on their section once
    // the page is mounted.
    Effect::new(move |_| {
        scroll_to_deep_link(&BrowserSurface, &location.hash.get());
    });

    view! {
        <Title text="Portfolio" />
        <NavBar />
        <main>
            <Hero />
            <About />
            <Education />
            <Skills />
            <Showcase />
            <Projects />
            <Contact />
        </main>
        <Footer />
    }
}
