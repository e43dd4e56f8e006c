mod about;
mod blog;
mod contact;
mod education;
mod footer;
mod hero;
mod nav;
mod portfolio;
mod projects;
mod reveal;
mod showcase;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::catalog::{catalog, Catalog};

use blog::BlogPage;
use portfolio::PortfolioPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="alternate" type="application/rss+xml" title="Blog" href="/rss.xml" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context::<&'static Catalog>(catalog());

    let name = catalog().hero().name;

    view! {
        <Title formatter=move |title| format!("{title} | {name}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
                <Route path=path!("/blog") view=BlogPage />
            </Routes>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use hero::Hero;
    use projects::Projects;
    use skills::Skills;

    fn render_sections() -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context::<&'static Catalog>(catalog());
            view! {
                <Projects />
                <Skills />
            }
            .to_html()
        })
    }

    #[test]
    fn test_projects_render_in_catalog_order() {
        let html = render_sections();
        assert!(html.contains(r#"id="projects""#));
        let mebius = html.find("Mebius - Digital Shopping Ecosystem");
        let parknet = html.find("ParkNet - Smart Parking Management");
        assert!(mebius.is_some() && parknet.is_some());
        assert!(mebius < parknet);
    }

    #[test]
    fn test_skill_bars_render_label_and_hidden_width() {
        let html = render_sections();
        let label = r#">MongoDB</span><span class="text-muted">82%</span>"#;
        let bar = html.find(label).expect("MongoDB bar should render at 82%");
        // bars stay empty until the section is revealed in the browser
        assert!(html[bar..].contains("width: 0%"));
        assert!(!html.contains("width: 82%"));
    }

    #[test]
    fn test_other_technology_tags_are_staggered() {
        let html = render_sections();
        assert!(html.contains(">Clerk Auth<"));
        assert!(html.contains("transition-delay: 1.00s"));
        assert!(html.contains("transition-delay: 1.90s"));
    }

    #[test]
    fn test_hero_copy() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_context::<&'static Catalog>(catalog());
            view! { <Hero /> }.to_html()
        });
        let intro = html.find("I'm ").expect("hero should introduce the name");
        let name = html.find(">Ravisha Abeysekara</span>").expect("hero should show the name");
        assert!(intro < name);
        assert!(html.contains("View My Projects"));
        assert!(html.contains("Get In Touch"));
    }
}
