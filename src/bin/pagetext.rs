//! Fetch a web page and print its plain text to stdout.
//!
//! Logs go to stderr so stdout carries nothing but the extracted text.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgAction, Parser};
use pagetext::{fetch_and_extract, Options};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pagetext")]
#[command(about = "Fetch a web page and print its block-structured plain text")]
#[command(version)]
struct Cli {
    /// Page to fetch (http, https or file URL)
    url: String,

    /// User-Agent header to send
    #[arg(long, value_name = "UA", default_value = pagetext::DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Give up on the request after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = Options {
        user_agent: cli.user_agent,
        timeout: cli.timeout.map(Duration::from_secs),
        ..Options::default()
    };

    let text = match fetch_and_extract(&cli.url, &options) {
        Ok(text) => text,
        Err(err) => {
            error!(error = %err, "extraction failed");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        error!(error = %err, "failed to write output");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
