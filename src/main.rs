use anyhow::Result;
use book_fetcher::config::{find_config_file, load_config};
use book_fetcher::BookFetcher;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_QUERY: &str = "python programming";
const DEMO_LIMIT: usize = 50;
const DEMO_TITLE_CONTAINS: &str = "python";
const DEMO_MIN_YEAR: i32 = 2010;

/// Book Fetcher - Fetch Python programming books from Open Library, filter them and save as JSON
#[derive(Parser, Debug)]
#[command(name = "book-fetcher")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetch, filter and save books from the Open Library search API", long_about = None)]
struct Cli {
    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(find_config_file);
    let config = load_config(config_path.as_deref())?;

    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => config.logging.level.as_str(),
            1 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("book_fetcher={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Using search endpoint {}", config.api.base_url);

    let fetcher = BookFetcher::from_config(&config)?;

    println!("Fetching books from Open Library API...");
    let books = fetcher.fetch_books(DEMO_QUERY, DEMO_LIMIT).await?;
    println!("Found {} books", books.len());

    let filtered = fetcher.filter_books(&books, Some(DEMO_TITLE_CONTAINS), Some(DEMO_MIN_YEAR));
    println!("After filtering: {} books", filtered.len());

    let output_file = &config.output.path;
    fetcher.save_books(&filtered, output_file)?;
    println!("Results written to {}", output_file.display());

    Ok(())
}
