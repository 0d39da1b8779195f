//! dbnav - headless driver for the SQL view.
//!
//! Loads the configuration, runs one query against a server page the way the
//! browser view would, and prints the results area.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dbnav_core::ClientConfig;
use dbnav_http::{HttpClient, Url};
use dbnav_ui::{Completion, HttpBackend, MemoryPage, Page, QueryExecutor};

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "dbnav", version, about = "Run a query against a db_navigator SQL page")]
struct Args {
    /// Query to execute. Defaults to the `query` parameter of the page URL.
    query: Option<String>,

    /// SQL page URL, e.g. http://localhost:5000/admin/sql
    #[arg(long)]
    url: Option<String>,

    /// Treat the session as read-only.
    #[arg(long)]
    readonly: bool,

    /// Print the results area as HTML instead of text.
    #[arg(long)]
    html: bool,

    /// Config file (default: ~/.config/dbnav/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<ClientConfig, String> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load_from(path),
        None => ClientConfig::load(),
    }
    .map_err(|e| format!("Failed to load config: {}", e))?;

    if args.readonly {
        config.readonly = true;
    }
    if let Some(url) = &args.url {
        config.page_url = Some(url.clone());
    }
    Ok(config)
}

// =============================================================================
// Entry Point
// =============================================================================

fn run(args: Args) -> Result<ExitCode, String> {
    let config = load_config(&args)?;
    let page_url = config
        .page_url
        .as_deref()
        .ok_or("No page URL given (use --url or set page_url in the config)")?;
    let page_url = Url::parse(page_url).map_err(|e| format!("Invalid page URL: {}", e))?;

    let mut page = MemoryPage::new(page_url);
    let mut executor = QueryExecutor::new(config.readonly);
    executor.initialize(&page);
    if let Some(query) = args.query {
        executor.set_input(query);
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

    let backend = HttpBackend::new(HttpClient::new());
    let completion = rt.block_on(executor.execute(&backend, &mut page));

    match completion {
        Completion::Skipped => {
            tracing::info!("Empty query, nothing to do");
            Ok(ExitCode::SUCCESS)
        }
        Completion::Discarded => Ok(ExitCode::SUCCESS),
        Completion::Alerted(err) => {
            eprintln!("{}", err);
            Ok(ExitCode::FAILURE)
        }
        Completion::Applied(outcome) => {
            let results = executor.results();
            if args.html {
                println!("{}", results.to_html());
            } else {
                println!("{}", results.to_text());
            }

            if outcome.is_success() {
                tracing::info!("Shareable URL: {}", page.location());
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
