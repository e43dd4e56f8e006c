use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::nav::go_to;
use crate::{
    catalog::Catalog,
    nav::Section,
    reveal::stagger,
    typing::{Typewriter, TICK_MS},
};

const PARTICLES: usize = 24;

#[derive(Debug, Clone, Copy)]
struct Particle {
    left: u32,
    top: u32,
    size: u32,
    delay: f64,
}

// Scatter is derived from the index so server and client render the same
// markup.
fn particle(index: usize) -> Particle {
    let i = index as u32;
    Particle {
        left: (i * 37 + 11) % 100,
        top: (i * 53 + 7) % 100,
        size: 2 + i % 3,
        delay: stagger(0.0, index % 6, 0.75),
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let hero = expect_context::<&'static Catalog>().hero();

    let typer = StoredValue::new(Typewriter::new(hero.roles));
    let (role, set_role) = signal(typer.with_value(|t| t.text()));
    use_interval_fn(
        move || {
            typer.update_value(|t| t.tick());
            set_role.set(typer.with_value(|t| t.text()));
        },
        TICK_MS,
    );

    let particles = (0..PARTICLES)
        .map(particle)
        .map(|p| {
            view! {
                <span
                    class="particle"
                    style=format!(
                        "left: {}%; top: {}%; width: {size}px; height: {size}px; animation-delay: {:.2}s",
                        p.left,
                        p.top,
                        p.delay,
                        size = p.size,
                    )
                />
            }
        })
        .collect_view();

    view! {
        <section id=Section::Hero.anchor() class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                {particles}
            </div>
            <div class="relative z-10 container mx-auto px-4 text-center">
                <div class="reveal revealed reveal-rise">
                    <p class="text-lg text-muted mb-4">{hero.greeting}</p>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6">
                        "I'm " <span class="gradient-text">{hero.name}</span>
                    </h1>
                    <p class="text-2xl md:text-3xl font-semibold mb-6 h-10">
                        <span aria-label=move || {
                            role.track();
                            typer.with_value(|t| t.phrase())
                        }>{role}</span>
                        <span class="typing-caret" aria-hidden="true">"|"</span>
                    </p>
                    <p class="text-lg text-muted max-w-2xl mx-auto mb-10">{hero.tagline}</p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href=Section::Projects.href()
                            class="px-8 py-3 rounded-lg bg-primary text-background font-semibold hover:opacity-90 transition-opacity"
                            on:click=move |ev| {
                                ev.prevent_default();
                                go_to(Section::Projects);
                            }
                        >
                            "View My Projects"
                        </a>
                        <a
                            href=Section::Contact.href()
                            class="px-8 py-3 rounded-lg border border-primary text-primary font-semibold hover:bg-primary/10 transition-colors"
                            on:click=move |ev| {
                                ev.prevent_default();
                                go_to(Section::Contact);
                            }
                        >
                            "Get In Touch"
                        </a>
                    </div>
                </div>
            </div>
            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-muted animate-bounce"
                aria-label="Scroll to about"
                on:click=move |_| go_to(Section::About)
            >
                "↓"
            </button>
        </section>
    }
}
