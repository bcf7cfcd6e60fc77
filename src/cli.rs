// src/cli.rs
// =============================================================================
// This file defines the command-line interface using the `clap` crate.
//
// link-sentry has a single job, so there are no subcommands: one positional
// URL plus a few flags controlling the report location, the request timeout,
// and how chatty the run is. The "derive" API turns this struct into the
// full parser, including --help and --version.
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "link-sentry",
    version,
    about = "Scan a website for broken (404) links",
    long_about = "link-sentry crawls a website starting from URL, following only links on \
                  the same domain, and records the HTTP outcome of every page it visits. \
                  Broken links are exported as a CSV report for follow-up."
)]
pub struct Cli {
    /// The starting page to crawl, e.g. https://example.com
    pub url: String,

    /// Output CSV filename
    #[arg(short, long, default_value = "404_report.csv")]
    pub output: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    pub timeout: u64,

    /// Suppress output except errors and summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the full report as JSON to stdout instead of the summary
    #[arg(long)]
    pub json: bool,
}
