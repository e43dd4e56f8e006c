use chrono::NaiveDate;
use dashmap::DashMap;
use gray_matter::{engine::YAML, Matter};
use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;

#[cfg(any(feature = "ssr", feature = "rss"))]
use pulldown_cmark::{Options, Parser};

use crate::catalog::{Catalog, CatalogError};
#[cfg(any(feature = "ssr", feature = "rss"))]
use crate::highlight::highlight;

pub type PostId = u32;

/// Rendered post bodies keyed by post id. Filled on the server as posts are
/// rendered and in the browser as bodies come back from the server.
pub static GLOBAL_BODY_CACHE: LazyLock<DashMap<PostId, String>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "blog"]
pub struct Assets;

#[derive(Deserialize, Debug)]
struct FrontMatter {
    id: PostId,
    title: String,
    excerpt: String,
    author: String,
    date: NaiveDate,
    read_time: String,
    tags: Vec<String>,
    gradient: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    /// Markdown source of the post body, front matter stripped.
    pub body: String,
    pub author: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub tags: Vec<String>,
    pub gradient: String,
}

impl BlogPost {
    /// Tags shown on the list card; the detail view shows all of them.
    pub fn card_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(3)]
    }

    /// e.g. "January 15, 2024"
    pub fn long_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

/// Parses every embedded post. Display order is file name order.
pub fn load_posts() -> Result<Vec<BlogPost>, CatalogError> {
    let matter = Matter::<YAML>::new();
    let mut names = Assets::iter()
        .filter(|name| name.ends_with(".md"))
        .collect::<Vec<_>>();
    names.sort();
    names
        .into_iter()
        .map(|name| {
            let parse_err = || CatalogError::Parse {
                file: name.to_string(),
            };
            let file = Assets::get(&name).ok_or_else(parse_err)?;
            let content = std::str::from_utf8(&file.data).map_err(|_| parse_err())?;
            let fm = matter
                .parse_with_struct::<FrontMatter>(content)
                .ok_or_else(parse_err)?;
            Ok(BlogPost {
                id: fm.data.id,
                title: fm.data.title,
                excerpt: fm.data.excerpt,
                body: fm.content.trim().to_string(),
                author: fm.data.author,
                date: fm.data.date,
                read_time: fm.data.read_time,
                tags: fm.data.tags,
                gradient: fm.data.gradient,
            })
        })
        .collect()
}

/// What the blog page is showing. Starts on the listing and is never
/// persisted, so a reload always lands back on the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlogView {
    #[default]
    Listing,
    Reading(PostId),
}

/// A [`BlogView`] resolved against the catalog, ready to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogScreen<'a> {
    List(&'a [BlogPost]),
    Detail(&'a BlogPost),
    Empty,
}

impl BlogView {
    /// Opens post `id`. Ids missing from the catalog never reach `Reading`;
    /// they drop back to the listing instead of leaving a stale post open.
    pub fn select(self, catalog: &Catalog, id: PostId) -> Self {
        if catalog.post(id).is_some() {
            Self::Reading(id)
        } else {
            Self::Listing
        }
    }

    pub fn back(self) -> Self {
        Self::Listing
    }

    pub fn resolve(self, catalog: &Catalog) -> BlogScreen<'_> {
        match self {
            Self::Listing => BlogScreen::List(catalog.posts()),
            Self::Reading(id) => catalog
                .post(id)
                .map(BlogScreen::Detail)
                .unwrap_or(BlogScreen::Empty),
        }
    }
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn render_body(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::all());
    let parser = highlight(parser);

    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);
    html_output
}

/// HTML for the body of post `id`, rendered on first request and cached.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn rendered_body(catalog: &Catalog, id: PostId) -> Option<String> {
    let post = catalog.post(id)?;
    let html = GLOBAL_BODY_CACHE
        .entry(id)
        .or_insert_with(|| render_body(&post.body))
        .value()
        .clone();
    Some(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    #[test]
    fn test_front_matter_parsed() {
        let posts = load_posts().expect("posts should parse");
        let first = &posts[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.title, "How I Built My Full-Stack E-Commerce App");
        assert_eq!(first.author, "Ravisha Abeysekara");
        assert_eq!(first.read_time, "8 min read");
        assert_eq!(
            first.tags,
            vec!["Full-Stack", "React", "Node.js", "E-Commerce", "MongoDB"]
        );
        assert!(first.body.starts_with("Building a full-stack"));
        assert!(!first.body.contains("read_time:"));
    }

    #[test]
    fn test_card_tags_are_first_three() {
        let post = catalog().post(3).expect("post 3 should exist");
        assert_eq!(post.card_tags(), &["React", "JavaScript", "TypeScript"]);
        assert_eq!(post.tags.len(), 5);
    }

    #[test]
    fn test_long_date() {
        let post = catalog().post(1).expect("post 1 should exist");
        assert_eq!(post.long_date(), "January 15, 2024");
        let post = catalog().post(3).expect("post 3 should exist");
        assert_eq!(post.long_date(), "January 5, 2024");
    }

    #[test]
    fn test_starts_on_listing() {
        let catalog = catalog();
        let view = BlogView::default();
        assert_eq!(view, BlogView::Listing);
        assert_eq!(view.resolve(catalog), BlogScreen::List(catalog.posts()));
    }

    #[test]
    fn test_select_every_post() {
        let catalog = catalog();
        for post in catalog.posts() {
            let view = BlogView::Listing.select(catalog, post.id);
            assert_eq!(view, BlogView::Reading(post.id));
            match view.resolve(catalog) {
                BlogScreen::Detail(shown) => {
                    assert_eq!(shown.title, post.title);
                    assert_eq!(shown.date, post.date);
                    assert_eq!(shown.tags, post.tags);
                }
                other => panic!("expected detail view, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_select_unknown_post() {
        let catalog = catalog();
        assert_eq!(BlogView::Listing.select(catalog, 999), BlogView::Listing);
        // no stale post left open either
        assert_eq!(BlogView::Reading(2).select(catalog, 999), BlogView::Listing);
    }

    #[test]
    fn test_missing_post_renders_empty() {
        assert_eq!(BlogView::Reading(999).resolve(catalog()), BlogScreen::Empty);
    }

    #[test]
    fn test_back_always_lists() {
        let catalog = catalog();
        for post in catalog.posts() {
            let view = BlogView::Listing.select(catalog, post.id).back();
            assert_eq!(view, BlogView::Listing);
        }
        assert_eq!(BlogView::Reading(999).back(), BlogView::Listing);
        assert_eq!(BlogView::Listing.back(), BlogView::Listing);
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_rendered_body_is_cached_html() {
        let catalog = catalog();
        let html = rendered_body(catalog, 1).expect("post 1 should render");
        assert!(html.contains("<h2>Planning &amp; Architecture</h2>"));
        assert!(GLOBAL_BODY_CACHE.contains_key(&1));
        assert!(rendered_body(catalog, 999).is_none());
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_code_blocks_highlighted() {
        let html = render_body("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre style="));
        assert!(!html.contains("<code class=\"language-rust\">"));
    }
}
