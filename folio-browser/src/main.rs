use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Target};
use folio_browser::app::{self, AppConfig};
use folio_browser::domains::catalog::{
    CatalogMessage, ScrollSentinel, StaleResponsePolicy, ViewportMetrics,
};
use folio_browser::infra::Config;
use folio_browser::view;
use folio_model::{Language, QueryParameters};
use log::LevelFilter;
use tokio::sync::mpsc;

/// Simulated geometry used to turn the list length into scroll positions
const ROW_HEIGHT: f32 = 40.0;
const VIEWPORT_HEIGHT: f32 = 800.0;

/// Browse a generated book catalog, loading more books as you "scroll"
#[derive(Debug, Parser)]
#[command(name = "folio", version)]
struct Cli {
    /// Book provider base URL (overrides config file and FOLIO_SERVER_URL)
    #[arg(long)]
    server_url: Option<String>,

    /// Locale of the generated data: en_US, de_DE or fr_FR
    #[arg(long, default_value_t = Language::EnUs)]
    language: Language,

    /// Seed for the generated catalog
    #[arg(long, allow_negative_numbers = true, conflicts_with = "random_seed")]
    seed: Option<i64>,

    /// Pick a random seed instead
    #[arg(long)]
    random_seed: bool,

    /// Average likes per book (0 to 10)
    #[arg(long, value_parser = parse_likes)]
    likes: Option<f32>,

    /// Average reviews per book
    #[arg(long, value_parser = parse_reviews)]
    reviews: Option<f32>,

    /// Number of times to scroll to the bottom after the first page
    #[arg(long, default_value_t = 1)]
    scrolls: usize,

    /// Expand the book with this index
    #[arg(long)]
    expand: Option<u64>,

    /// Apply responses that arrive after the parameters changed
    #[arg(long)]
    keep_stale_responses: bool,

    /// Persist the effective settings (file, environment and flags) to the
    /// config file before browsing
    #[arg(long)]
    save_config: bool,
}

fn parse_likes(raw: &str) -> Result<f32, String> {
    let likes: f32 = raw.parse().map_err(|err| format!("{err}"))?;
    if (0.0..=10.0).contains(&likes) {
        Ok(likes)
    } else {
        Err(format!("likes must be between 0 and 10, got {likes}"))
    }
}

fn parse_reviews(raw: &str) -> Result<f32, String> {
    let reviews: f32 = raw.parse().map_err(|err| format!("{err}"))?;
    if reviews >= 0.0 {
        Ok(reviews)
    } else {
        Err(format!("reviews cannot be negative, got {reviews}"))
    }
}

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("folio_browser", LevelFilter::Info)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(server_url) = cli.server_url.clone() {
        config.server_url = server_url;
    }
    if cli.keep_stale_responses {
        config.stale_responses = StaleResponsePolicy::Apply;
    }

    if cli.save_config
        && let Some(path) =
            config.save().context("failed to save the config file")?
    {
        log::info!("[Config] Saved settings to {}", path.display());
    }

    let defaults = QueryParameters::default();
    let parameters = QueryParameters {
        language: cli.language,
        seed: cli.seed.unwrap_or(defaults.seed),
        likes: cli.likes.unwrap_or(defaults.likes),
        reviews: cli.reviews.unwrap_or(defaults.reviews),
    };
    let app_config = AppConfig::new(config, parameters);

    let mut runtime = app::bootstrap::boot(&app_config)
        .context("failed to start the catalog client")?;

    if cli.random_seed {
        runtime.dispatch(CatalogMessage::RandomizeSeed);
    }
    if runtime.pending() == 0 {
        runtime.dispatch(CatalogMessage::Initialize);
    }
    runtime.run_until_idle().await;

    let sentinel = ScrollSentinel::new(app_config.config.near_bottom_threshold);
    let (viewport_tx, viewport_rx) = mpsc::unbounded_channel();
    let sentinel_handle = sentinel.attach(viewport_rx, runtime.sender());

    for _ in 0..cli.scrolls {
        let document_height =
            runtime.state().results().len() as f32 * ROW_HEIGHT;
        viewport_tx.send(ViewportMetrics::scrolled_to_end(
            document_height,
            VIEWPORT_HEIGHT,
        ))?;
        runtime.run_until_idle().await;
    }
    sentinel_handle.detach().await;

    if let Some(index) = cli.expand {
        runtime.dispatch(CatalogMessage::ToggleExpanded(index));
    }

    print!("{}", view::render_table(runtime.state()));
    Ok(())
}
