//! # Naver News Monitor
//!
//! Fetches the latest Naver news titles and one thumbnail image for a keyword
//! and stores them in the working directory.
//!
//! ## Usage
//!
//! ```sh
//! KEYWORD=rust NAVER_CLIENT_ID=... NAVER_CLIENT_SECRET=... naver_news_monitor
//! ```
//!
//! ## Architecture
//!
//! A single sequential run:
//! 1. **News**: search news by date, extract titles, write `<keyword>.txt`
//! 2. **Image**: search images by similarity, pick the first png/jpg link,
//!    download it to `image_<keyword>.<ext>`
//!
//! Every error ends up at one boundary in [`main`], is logged, and the
//! process still exits successfully.

use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod api;
mod cli;
mod error;
mod extract;
mod models;
mod monitor;
mod outputs;
mod utils;

use api::{Credentials, NaverClient};
use cli::Cli;
use error::MonitorError;
use models::RunSummary;
use monitor::Monitoring;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    // Rejected arguments are logged and end the run; the exit status stays 0
    let Some(args) = cli::parse_or_log(std::env::args_os()) else {
        return;
    };
    debug!(
        keyword = %args.keyword,
        output_dir = %args.output_dir.display(),
        parse_mode = ?args.parse_mode,
        strict_status = args.strict_status,
        "Parsed CLI arguments"
    );

    match run(args).await {
        Ok(summary) => info!(
            titles = summary.title_count,
            titles_path = %summary.titles_path.display(),
            image_path = ?summary.image_path,
            "Monitoring finished"
        ),
        Err(e) => error!(error = %e, "Monitoring failed"),
    }
}

async fn run(args: Cli) -> Result<RunSummary, MonitorError> {
    let credentials = Credentials {
        client_id: args.client_id,
        client_secret: args.client_secret,
    };
    let client = NaverClient::new(&args.api_base_url, credentials)?
        .with_strict_status(args.strict_status);

    Monitoring::new(client, args.output_dir)
        .with_paging(args.display, args.start)
        .with_parse_mode(args.parse_mode)
        .run(&args.keyword)
        .await
}
