//! csvcompare - Key-based comparison of delimited text tables

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use csvcompare::{Comparator, Config, OutputFormat};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Csv,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Csv => OutputFormat::Csv,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Compare a shared column across two delimited text files by key
#[derive(Parser, Debug)]
#[command(name = "csvcompare")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First file to compare (indexed in full)
    file1: PathBuf,

    /// Second file to compare (streamed against the index)
    file2: PathBuf,

    /// 1-based column position of the join key
    #[arg(short, long)]
    key_column: usize,

    /// 1-based column position of the value to compare
    #[arg(short, long)]
    comparable_column: usize,

    /// Single-character field delimiter for both inputs
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Also report keys present in only one file
    #[arg(short, long)]
    unmatched: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: CliOutputFormat,

    /// Write results to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(has_differences) => {
            if has_differences {
                ExitCode::from(1) // Differences found
            } else {
                ExitCode::SUCCESS // No differences
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    let config = Config::new()
        .with_delimiter(cli.delimiter)
        .with_report_unmatched(cli.unmatched)
        .with_output_format(cli.format.into());
    let comparator = Comparator::new(config);

    let file1 = read_lines(&cli.file1)?;
    let file2 = read_lines(&cli.file2)?;

    let rows_written = match cli.output {
        Some(ref path) => {
            let mut sink = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            comparator.write_results(
                &mut sink,
                &file1,
                &file2,
                cli.key_column,
                cli.comparable_column,
            )?
        }
        None => comparator.write_results(
            &mut std::io::stdout(),
            &file1,
            &file2,
            cli.key_column,
            cli.comparable_column,
        )?,
    };

    Ok(rows_written > 0)
}
