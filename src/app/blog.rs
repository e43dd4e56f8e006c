use leptos::{either::EitherOf3, html, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::components::A;

use super::{
    nav::go_to_top,
    reveal::{use_reveal_into, Reveal},
};
#[cfg(feature = "ssr")]
use crate::{blog::rendered_body, catalog::catalog};
use crate::{
    blog::{BlogPost, BlogScreen, BlogView, PostId, GLOBAL_BODY_CACHE},
    catalog::Catalog,
    reveal::{stagger, Entrance, LIST_THRESHOLD},
};

#[server(input = GetUrl)]
pub async fn get_post_body_server(id: PostId) -> Result<String, ServerFnError> {
    rendered_body(catalog(), id).ok_or(ServerFnError::new(format!("no blog post with id {id}")))
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();
    let screen = RwSignal::new(BlogView::default());
    // Outlives the list so coming back from a post does not replay the entrance.
    let list_revealed = RwSignal::new(false);

    let on_select = Callback::new(move |id: PostId| {
        screen.update(|v| *v = v.select(catalog, id));
        go_to_top();
    });
    let on_back = Callback::new(move |_: ()| {
        screen.update(|v| *v = v.back());
        go_to_top();
    });

    view! {
        <Title text="Blog" />
        <div class="min-h-screen pt-16 pb-20">
            {move || match screen.get().resolve(catalog) {
                BlogScreen::List(posts) => {
                    EitherOf3::A(view! { <BlogList posts on_select revealed=list_revealed /> })
                }
                BlogScreen::Detail(post) => EitherOf3::B(view! { <PostDetail post on_back /> }),
                BlogScreen::Empty => EitherOf3::C(()),
            }}
        </div>
    }
}

#[component]
fn BlogList(
    posts: &'static [BlogPost],
    on_select: Callback<PostId>,
    revealed: RwSignal<bool>,
) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    use_reveal_into(section, LIST_THRESHOLD, revealed);
    let shown = Signal::from(revealed);

    view! {
        <section node_ref=section class="container mx-auto px-4 max-w-5xl">
            <div class="flex items-center justify-between mb-12">
                <A href="/" attr:class="text-muted hover:text-primary transition-colors">
                    "← Back to Portfolio"
                </A>
                <a href="/rss.xml" target="_blank" class="text-muted hover:text-primary" aria-label="RSS Feed">
                    "RSS"
                </a>
            </div>
            <Reveal shown class="text-center mb-12">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">
                    "Thoughts on " <span class="gradient-text">"Development"</span>
                </h1>
                <p class="text-lg text-muted max-w-2xl mx-auto">
                    "Sharing insights, lessons learned, and best practices from my journey in software development"
                </p>
            </Reveal>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {posts
                    .iter()
                    .enumerate()
                    .map(|(i, post)| {
                        view! {
                            <Reveal shown delay=stagger(0.1, i, 0.1)>
                                <PostCard post on_select />
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PostCard(post: &'static BlogPost, on_select: Callback<PostId>) -> impl IntoView {
    let id = post.id;

    view! {
        <article
            class="card overflow-hidden h-full flex flex-col cursor-pointer hover:border-primary/60 transition-colors"
            on:click=move |_| on_select.run(id)
        >
            <div class=format!("h-32 bg-gradient-to-br {} flex items-end p-4", post.gradient)>
                <div class="flex flex-wrap gap-2">
                    {post
                        .card_tags()
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="px-2 py-1 rounded bg-background/70 text-xs">
                                    {t.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="p-6 flex flex-col flex-1">
                <h2 class="text-xl font-semibold mb-2">{post.title.as_str()}</h2>
                <div class="flex gap-4 text-sm text-muted mb-3">
                    <span>{post.long_date()}</span>
                    <span>{post.read_time.as_str()}</span>
                </div>
                <p class="text-muted text-sm mb-6 flex-1">{post.excerpt.as_str()}</p>
                <button class="self-start text-primary font-medium hover:underline">
                    "Read More →"
                </button>
            </div>
        </article>
    }
}

#[component]
fn PostDetail(post: &'static BlogPost, on_back: Callback<()>) -> impl IntoView {
    let id = post.id;
    let body = Resource::new(
        move || id,
        |id| async move {
            let cache = &*GLOBAL_BODY_CACHE;
            if let Some(html) = cache.get(&id) {
                return Some(html.value().clone());
            }
            match get_post_body_server(id).await {
                Ok(html) => {
                    // the server fills its own cache while rendering
                    #[cfg(feature = "hydrate")]
                    cache.insert(id, html.clone());
                    Some(html)
                }
                Err(e) => {
                    log::warn!("failed to load body of post {id}: {e}");
                    None
                }
            }
        },
    );

    view! {
        <Title text=post.title.clone() />
        <article class="container mx-auto px-4 max-w-3xl">
            <div class="flex items-center justify-between mb-10">
                <button
                    class="text-muted hover:text-primary transition-colors"
                    on:click=move |_| on_back.run(())
                >
                    "← Back to Blog"
                </button>
                <A href="/" attr:class="text-muted hover:text-primary transition-colors">
                    "Portfolio"
                </A>
            </div>
            <Reveal shown=true entrance=Entrance::Rise>
                <h1 class="text-3xl md:text-5xl font-bold mb-4">{post.title.as_str()}</h1>
                <div class="flex flex-wrap gap-4 text-muted mb-6">
                    <span>{post.author.as_str()}</span>
                    <span>{post.long_date()}</span>
                    <span>{post.read_time.as_str()}</span>
                </div>
                <div class="flex flex-wrap gap-2 mb-10">
                    {post
                        .tags
                        .iter()
                        .map(|t| view! { <span class="tag">{t.as_str()}</span> })
                        .collect_view()}
                </div>
            </Reveal>
            <Suspense fallback=|| view! { <div class="loading-skeleton h-64 rounded"></div> }>
                {move || Suspend::new(async move {
                    body.await.map(|html| view! { <div class="prose prose-invert max-w-none" inner_html=html></div> })
                })}
            </Suspense>
            <div class="card p-8 mt-16 text-center">
                <h3 class="text-2xl font-semibold mb-3">"Enjoyed this post?"</h3>
                <p class="text-muted mb-6">
                    "I'm always happy to talk about development, projects and new opportunities."
                </p>
                <A href="/#contact" attr:class="inline-block px-8 py-3 rounded-lg bg-primary text-background font-semibold">
                    "Get In Touch"
                </A>
            </div>
        </article>
    }
}
