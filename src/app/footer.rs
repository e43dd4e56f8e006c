use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use super::nav::go_to_top;
use crate::catalog::Catalog;

/// Year the site was built, from the timestamp baked in by `build.rs`.
fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let name = expect_context::<&'static Catalog>().hero().name;
    let copyright = match build_year() {
        Some(year) => format!("© {year} {name}. All rights reserved."),
        None => format!("© {name}. All rights reserved."),
    };

    view! {
        <footer class="border-t border-border py-10">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-4">
                <div class="text-center md:text-left">
                    <p class="text-lg font-semibold gradient-text">{name}</p>
                    <p class="text-sm text-muted">{copyright}</p>
                </div>
                <button
                    class="px-4 py-2 rounded-md border border-border text-sm hover:border-primary hover:text-primary transition-colors"
                    on:click=move |_| go_to_top()
                >
                    "↑ Back to Top"
                </button>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year_is_baked_in() {
        assert!(build_year().is_some_and(|y| y >= 2024));
    }
}
