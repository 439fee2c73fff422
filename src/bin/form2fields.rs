//! CLI binary for form2fields.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ExtractionConfig`, shows a spinner while the request is in flight,
//! and prints the extracted record.

use anyhow::{Context, Result};
use clap::Parser;
use form2fields::{
    BusyCallback, ExtractError, ExtractionConfig, ExtractedFields, FieldExtractor, LABELS,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── CLI definition ───────────────────────────────────────────────────────────

/// Upload a PDF form to a forms-recognition endpoint and print the
/// extracted contact fields.
#[derive(Parser, Debug)]
#[command(name = "form2fields", version, about)]
struct Cli {
    /// Path to the PDF document to analyse
    input: PathBuf,

    /// Analysis endpoint URL
    #[arg(long, env = "FORM2FIELDS_ENDPOINT")]
    endpoint: String,

    /// API subscription key
    #[arg(long, env = "FORM2FIELDS_KEY", hide_env_values = true)]
    key: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    /// Emit the extracted record as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Verbose logging (equivalent to RUST_LOG=form2fields=debug)
    #[arg(short, long)]
    verbose: bool,
}

// ── Spinner busy callback ────────────────────────────────────────────────────

/// Drives the terminal spinner from the library's busy-state events,
/// the same hook a GUI host would use to disable its upload button.
struct SpinnerCallback {
    bar: ProgressBar,
}

impl SpinnerCallback {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Arc::new(Self { bar })
    }
}

impl BusyCallback for SpinnerCallback {
    fn on_busy_start(&self) {
        self.bar.set_message("Analysing document…");
        self.bar.enable_steady_tick(Duration::from_millis(80));
    }

    fn on_busy_end(&self) {
        self.bar.finish_and_clear();
    }
}

// ── Output rendering ─────────────────────────────────────────────────────────

fn print_table(fields: &ExtractedFields) {
    for (label, kind) in LABELS {
        // Strip the trailing colon from the form label for display.
        let name = label.trim_end_matches(':');
        match fields.get(kind) {
            Some(value) => println!("  {:<12} {}", bold(name), value),
            None => println!("  {:<12} {}", bold(name), dim("—")),
        }
    }
}

/// Map each error kind to the message a user should see; the kinds are
/// the library's contract, the wording is ours.
fn describe(err: &ExtractError) -> String {
    match err {
        ExtractError::UnsupportedMedia => {
            "The service does not support this document type. Please upload a PDF.".into()
        }
        ExtractError::EmptyExtraction => {
            "No recognisable fields were found. Please check the PDF and try again.".into()
        }
        ExtractError::RemoteFailure { .. } | ExtractError::MalformedResponse { .. } => {
            format!("The analysis service could not process the document. ({err})")
        }
        other => other.to_string(),
    }
}

// ── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("form2fields=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("form2fields=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let spinner = SpinnerCallback::new();
    let config = ExtractionConfig::builder()
        .endpoint_url(&cli.endpoint)
        .subscription_key(&cli.key)
        .api_timeout_secs(cli.timeout)
        .busy_callback(spinner as Arc<dyn BusyCallback>)
        .build()
        .context("invalid configuration")?;

    let extractor = FieldExtractor::new();
    let fields = match extractor.submit_file(&cli.input, &config).await {
        Ok(fields) => fields,
        Err(e) => {
            eprintln!("{} {}", red("✘"), describe(&e));
            std::process::exit(1);
        }
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&fields).context("serialising record")?
        );
    } else {
        println!("{} Extracted fields:", green("✔"));
        print_table(&fields);
    }

    // Exercised mostly as documentation: the extractor is reusable once
    // the submission has resolved.
    debug_assert!(!extractor.is_busy());

    Ok(())
}
