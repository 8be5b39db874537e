mod analytics;
mod fetch;
mod invariants;
mod models;
mod parser;
mod pattern;
mod report;

use std::process::ExitCode;

use analytics::Analytics;
use clap::Parser;
use fetch::fetch_log_with_retries;
use report::print_report;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

const LOG_URL: &str = "https://gist.githubusercontent.com/kamranahmedse/e66c3b9ea89a1a030d3b739eeeef22d0/raw/77fb3ac837a73c4f0206e78a236d885590b7ae35/nginx-access.log";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Access log to download and analyze
    #[arg(long, default_value = LOG_URL)]
    url: String,

    /// Entries shown per report
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Extra download attempts after a failed fetch
    #[arg(long, default_value_t = 0)]
    retries: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let client = reqwest::Client::new();
    let content = match fetch_log_with_retries(&client, &args.url, args.retries).await {
        Ok(content) => content,
        Err(e) => {
            error!(error = %e, url = %args.url, "log download failed");
            eprintln!("Fatal Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Processing {} log lines...", content.split('\n').count());
    let mut analytics = Analytics::default();
    analytics.analyze_text(&content);
    info!(
        seen = analytics.lines_seen(),
        matched = analytics.lines_matched(),
        distinct_ips = analytics.ips().len(),
        distinct_paths = analytics.paths().len(),
        distinct_statuses = analytics.statuses().len(),
        distinct_agents = analytics.user_agents().len(),
        "log analyzed"
    );
    for total in [
        analytics.ips().total(),
        analytics.paths().total(),
        analytics.statuses().total(),
        analytics.user_agents().total(),
    ] {
        debug_assert_eq!(total, analytics.lines_matched());
    }

    let top = args.top;
    print_report(
        &format!("Top {top} IP addresses with the most requests"),
        &analytics.top_ips(top),
    );
    print_report(
        &format!("Top {top} most requested paths"),
        &analytics.top_paths(top),
    );
    print_report(
        &format!("Top {top} response status codes"),
        &analytics.top_statuses(top),
    );
    print_report(
        &format!("Top {top} user agents"),
        &analytics.top_user_agents(top),
    );

    println!("\nAnalysis complete.");
    ExitCode::SUCCESS
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
