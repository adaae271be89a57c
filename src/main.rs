use anyhow::Result;
use clap::Parser;
use csv2json::convert;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_SOURCE: &str = "references/national_curriculum_framework_excel.csv";
const DEFAULT_DEST: &str = "references/national_curriculum_framework_excel.json";

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert a CSV file with a header row into a JSON array of records"
)]
struct Args {
    /// CSV file to read.
    #[arg(default_value = DEFAULT_SOURCE)]
    source: PathBuf,
    /// JSON file to write (created or overwritten).
    #[arg(default_value = DEFAULT_DEST)]
    dest: PathBuf,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) convert ──────────────────────────────────────────────────
    let args = Args::parse();
    let rows = convert::convert(&args.source, &args.dest)?;
    info!(rows, "conversion complete");

    println!(
        "Successfully converted {} to {}",
        args.source.display(),
        args.dest.display()
    );
    Ok(())
}
