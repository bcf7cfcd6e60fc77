// src/main.rs
// =============================================================================
// This is the entry point of the link-sentry CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Crawl the site, painting a spinner and one status line per page
// 3. Print the summary and export broken links to CSV
// 4. Exit with the proper code (0 = scan completed, 1 = error,
//    130 = cancelled with Ctrl-C)
//
// All presentation lives in this file. The library underneath never prints;
// it reports progress through the on_result callback instead.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cli::Cli;
use link_sentry::{export_csv, CrawlResult, Crawler, ScanReport};

const BANNER: &str = r"
==========================================
    LINK SENTRY - Broken Link Scanner
==========================================
";

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    init_tracing();

    // Ctrl-C flips this flag; the engine notices it before the next fetch
    // and hands back whatever it has collected so far.
    let cancelled = Arc::new(AtomicBool::new(false));
    let signal_flag = Arc::clone(&cancelled);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_flag.store(true, Ordering::Relaxed);
        }
    });

    // Validate the seed before printing anything, so a bad URL fails
    // cleanly without a banner or spinner.
    let mut crawler = Crawler::new(&cli.url, Duration::from_secs(cli.timeout))?
        .cancel_flag(Arc::clone(&cancelled));

    let chatty = !cli.quiet && !cli.json;

    if chatty {
        println!("{}", BANNER.green());
    }

    let spinner = if chatty { Some(start_spinner()) } else { None };
    if let Some(pb) = spinner.clone() {
        crawler = crawler.on_result(Box::new(move |result| print_result_line(&pb, result)));
    }

    let report = crawler.scan().await;

    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report, cli.quiet);
    }

    export_csv(&report, &cli.output)
        .with_context(|| format!("Failed to export report to {}", cli.output))?;

    if !cli.json {
        println!("{}", format!("\nReport exported: {}", cli.output).green());
    }

    if cancelled.load(Ordering::Relaxed) {
        eprintln!("\nScan cancelled.");
        return Ok(130);
    }

    Ok(0)
}

// Prints one colored status line per crawled page, above the spinner
fn print_result_line(pb: &ProgressBar, result: &CrawlResult) {
    let line = if let Some(error) = &result.error {
        format!("{} {} -> {}", "[ERROR]".yellow(), result.url, error)
    } else if result.is_broken() {
        format!("{} {}", "[404 DETECTED]".red(), result.url)
    } else {
        let tag = format!("[OK {}]", result.status_code);
        format!("{} {}", tag.green(), result.url)
    };

    pb.println(line);
}

// Prints the closing summary; --quiet drops the header but keeps the counts
fn print_summary(report: &ScanReport, quiet: bool) {
    if !quiet {
        println!("{}", "\n========= SCAN SUMMARY =========".magenta());
    }
    println!(
        "{}",
        format!("Total Pages Scanned: {}", report.total_scanned()).cyan()
    );
    println!(
        "{}",
        format!("Total 404 Found: {}", report.broken_links().len()).red()
    );
}

fn start_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("Invalid progress template"),
    );
    spinner.set_message("Scanning...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

// Diagnostics are silent unless RUST_LOG asks for them, keeping stdout
// reserved for scan output
fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
