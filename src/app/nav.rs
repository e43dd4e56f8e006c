use leptos::prelude::*;
use leptos_router::components::A;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::nav::{scroll_to_section, ScrollSurface, Section};

/// The live browser document.
pub struct BrowserSurface;

impl ScrollSurface for BrowserSurface {
    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(element) = document().get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

pub fn go_to(section: Section) {
    scroll_to_section(&BrowserSurface, section.anchor());
}

pub fn go_to_top() {
    BrowserSurface.scroll_to_top();
}

#[component]
pub fn NavBar() -> impl IntoView {
    let (open, set_open) = signal(false);
    let name = expect_context::<&'static crate::catalog::Catalog>()
        .hero()
        .name;

    let links = move || {
        Section::ALL
            .into_iter()
            .filter(|s| *s != Section::Hero)
            .map(|section| {
                view! {
                    <a
                        href=section.href()
                        class="block px-3 py-2 rounded-md text-muted hover:text-foreground transition-colors"
                        on:click=move |ev| {
                            ev.prevent_default();
                            set_open.set(false);
                            go_to(section);
                        }
                    >
                        {section.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 inset-x-0 z-20 border-b border-border bg-card/70 backdrop-blur-sm">
            <div class="container mx-auto px-4 py-3 flex items-center justify-between">
                <a
                    href=Section::Hero.href()
                    class="text-xl font-bold gradient-text"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to(Section::Hero);
                    }
                >
                    {name}
                </a>
                <div class="hidden md:flex items-center gap-2">
                    {links}
                    <A href="/blog" attr:class="ml-2 px-4 py-2 rounded-md border border-primary/40 text-primary hover:bg-primary/10 transition-colors">
                        "Blog"
                    </A>
                </div>
                <button
                    class="md:hidden px-3 py-2 rounded-md border border-border"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_open.update(|o| *o = !*o)
                >
                    {move || if open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || open.get()>
                <div class="md:hidden container mx-auto px-4 pb-3">
                    {links}
                    <A href="/blog" attr:class="block px-3 py-2 text-primary">
                        "Blog"
                    </A>
                </div>
            </Show>
        </nav>
    }
}
