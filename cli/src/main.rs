//! prefill CLI - sign-up survey export to user records
//!
//! Reads a survey `.xlsx` export and writes the normalized user profiles as
//! a JSON array plus a JSON Lines file.

use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use signup_prefill::mapper::{HeaderMap, RecordMapper, REQUIRED_HEADERS};
use signup_prefill::render::write_outputs;
use signup_prefill::xlsx::column_letters;
use signup_prefill::{Error, PrefillOptions, TableExtractor};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

/// Convert a sign-up survey export into user-profile records
#[derive(Parser, Debug)]
#[command(
    name = "prefill",
    version,
    about = "Convert a sign-up survey export (.xlsx) into user-profile records",
    long_about = "prefill - Convert a sign-up survey export into user-profile records.\n\n\
                  Reads the first worksheet of an .xlsx file and writes a JSON array plus a\n\
                  JSON Lines file next to it. Set RUST_LOG=info to see skipped-row counts."
)]
struct Cli {
    /// Input .xlsx path
    #[arg(short, long)]
    input: PathBuf,

    /// JSON array output path; the .jsonl file is written beside it
    #[arg(short, long, default_value = "prefill_users.json")]
    output: PathBuf,

    /// Print the header row and which survey columns it provides, then exit
    #[arg(long)]
    list_headers: bool,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_spinner("Reading workbook...");
    let table = TableExtractor::open(&cli.input).and_then(TableExtractor::into_table);
    pb.finish_and_clear();
    let table = table?;

    if table.is_empty() {
        return Err(Error::NoDataRows.into());
    }

    if cli.list_headers {
        print_headers(table.header().unwrap_or_default());
        return Ok(());
    }

    let mapper = RecordMapper::new(PrefillOptions::default());
    let outcome = mapper.map_table(&table)?;
    let paths = write_outputs(&cli.output, &outcome.records)?;

    println!("{} rows: {}", "✓".green().bold(), outcome.records.len());
    println!("{}: {}", "output".bold(), paths.json.display());
    println!("{}: {}", "output".bold(), paths.jsonl.display());

    let report = outcome.report;
    if report.skipped_blank + report.skipped_duplicate > 0 {
        tracing::info!(
            blank = report.skipped_blank,
            duplicate = report.skipped_duplicate,
            "rows skipped"
        );
    }

    Ok(())
}

fn print_headers(header: &[String]) {
    let columns = HeaderMap::from_header(header);
    println!("{}", "Header Row".cyan().bold());
    println!("{}", "─".repeat(40));
    for (idx, name) in header.iter().enumerate() {
        let required = REQUIRED_HEADERS.iter().any(|h| h == name);
        let marker = if required && columns.get(name) == Some(idx) {
            "✓".green().bold()
        } else {
            " ".normal()
        };
        println!("{} {:>3}  {}", marker, column_letters(idx + 1), name);
    }

    let missing = missing_columns(&columns);
    if !missing.is_empty() {
        println!("\n{}", "Missing Columns".yellow().bold());
        println!("{}", "─".repeat(40));
        for name in missing {
            println!("{} {}", "!".yellow().bold(), name);
        }
    }
}

/// Required survey headers the header row does not carry, in resolution order.
fn missing_columns(columns: &HeaderMap) -> Vec<&'static str> {
    REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|required| !columns.contains(required))
        .collect()
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
