#![cfg(not(tarpaulin_include))]

use clap::{Parser, ValueEnum};
use sheetboard::{Extractor, SheetSource, config::init_logger, downloader};
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

/// Download the sheet once and print the records, newest first
#[derive(Parser)]
#[command(author, version, long_about = None)]
struct Cli {
    #[command(flatten)]
    source: SheetSource,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    init_logger();
    let cli = Cli::parse();

    let extractor = Extractor::new(&cli.source.sheet_url, cli.source.timeout())?;
    let records = match extractor.try_fetch_and_transform().await {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{} error: {}", e.kind(), e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let output = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&records)? + "\n",
        OutputFormat::Csv => downloader::to_csv(extractor.mapping(), &records),
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
