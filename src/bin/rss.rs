use portfolio_site::{
    catalog::catalog,
    rss::{build_channel, DEFAULT_SITE_URL},
};
use std::{env, fs, path::Path};
use tracing_subscriber::EnvFilter;

const FEED_PATH: &str = "public/rss.xml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let site_url = env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());
    let posts = catalog().posts();
    let channel = build_channel(&site_url, posts);

    let path = Path::new(FEED_PATH);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::File::create(path)?;
    channel.pretty_write_to(file, b' ', 2)?;
    log::info!("wrote {} posts to {FEED_PATH} for {site_url}", posts.len());
    Ok(())
}
