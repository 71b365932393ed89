//! aseprite-tags - list animation tags stored in Aseprite documents
//!
//! # Usage
//!
//! ```bash
//! # Human-readable summary of every document in a folder
//! aseprite-tags art/characters
//!
//! # JSON for tooling pipelines
//! aseprite-tags --format json hero.aseprite enemy.aseprite
//! ```

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rayon::prelude::*;

use aseprite_tags::{
    discover, extract_file, render_json, render_summary, Extraction, ReportMode, Result,
    ScanOptions, TagReport,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One section per document, one line per tag (default)
    Summary,
    /// Pretty-printed JSON array
    Json,
}

impl From<OutputFormat> for ReportMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Summary => ReportMode::Summary,
            OutputFormat::Json => ReportMode::Structured,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "aseprite-tags")]
#[command(about = "Extract Aseprite tag metadata.", long_about = None)]
struct Args {
    /// Files or folders to scan (folders are not searched recursively; glob
    /// patterns are expanded by the shell, not by this tool)
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Output JSON (same as --format json)
    #[arg(long)]
    json: bool,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// File extension collected from folders, matched case-insensitively (repeatable)
    #[arg(long = "ext", value_name = "EXT", default_value = "aseprite")]
    extensions: Vec<String>,

    /// Report bytes decoded per document on stderr
    #[arg(long)]
    diagnostics: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mode = if args.json { ReportMode::Structured } else { ReportMode::from(args.format) };
    let options = ScanOptions {
        extensions: args.extensions.clone(),
    };

    let files = discover(&args.paths, &options)?;

    // Documents are independent; decode them in parallel and keep discovery order.
    let extractions: Vec<Extraction> = files
        .par_iter()
        .map(|file| extract_file(file))
        .collect::<Result<_>>()?;

    if args.diagnostics {
        for (file, extraction) in files.iter().zip(&extractions) {
            print_diagnostics(file, extraction);
        }
    }

    let reports: Vec<TagReport> = files
        .into_iter()
        .zip(extractions)
        .map(|(file, extraction)| TagReport::new(file, extraction.tags, mode))
        .collect();

    match mode {
        ReportMode::Structured => println!("{}", render_json(&reports, !args.compact)?),
        ReportMode::Summary => print!("{}", render_summary(&reports)),
    }
    Ok(())
}

fn print_diagnostics(file: &Path, extraction: &Extraction) {
    match extraction.stop {
        Some(reason) => eprintln!(
            "{}: {}/{} bytes, stopped: {}",
            file.display(),
            extraction.bytes_consumed,
            extraction.total_bytes,
            reason
        ),
        None => eprintln!(
            "{}: {}/{} bytes{}",
            file.display(),
            extraction.bytes_consumed,
            extraction.total_bytes,
            if extraction.is_complete() { "" } else { " (trailing data)" }
        ),
    }
}
