use chrono::NaiveTime;
use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::blog::{render_body, BlogPost};

pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

pub fn build_channel(site_url: &str, posts: &[BlogPost]) -> Channel {
    let site_url = site_url.trim_end_matches('/');
    let blog_url = format!("{site_url}/blog");
    let items = posts
        .iter()
        .map(|p| {
            // posts open in place, so the guid is not a fetchable permalink
            let guid = GuidBuilder::default()
                .value(format!("{blog_url}#post-{}", p.id))
                .permalink(false)
                .build();
            let published = p.date.and_time(NaiveTime::default()).and_utc();
            ItemBuilder::default()
                .title(p.title.clone())
                .description(p.excerpt.clone())
                .content(render_body(&p.body))
                .author(p.author.clone())
                .categories(
                    p.tags
                        .iter()
                        .map(|t| rss::CategoryBuilder::default().name(t.clone()).build())
                        .collect::<Vec<_>>(),
                )
                .pub_date(published.to_rfc2822())
                .link(blog_url.clone())
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{site_url}/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title("Thoughts on Development")
        .description("Sharing insights, lessons learned, and best practices from my journey in software development")
        .link(blog_url)
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    #[test]
    fn test_one_item_per_post() {
        let channel = build_channel("https://example.com/", catalog().posts());
        assert_eq!(channel.link(), "https://example.com/blog");
        assert_eq!(channel.items().len(), catalog().posts().len());

        let first = &channel.items()[0];
        assert_eq!(first.title(), Some("How I Built My Full-Stack E-Commerce App"));
        assert_eq!(first.pub_date(), Some("Mon, 15 Jan 2024 00:00:00 +0000"));
        assert_eq!(
            first.guid().map(|g| g.value()),
            Some("https://example.com/blog#post-1")
        );
        assert_eq!(first.categories().len(), 5);
        assert!(first.content().is_some_and(|c| c.contains("<h2>")));
    }
}
