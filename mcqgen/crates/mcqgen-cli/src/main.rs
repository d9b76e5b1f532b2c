use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use mcqgen::document_processing::{extract_text, find_documents, NamedReader};
use mcqgen::quiz::{build_table, render};
use tracing_subscriber::EnvFilter;

/// Document text extraction and quiz tables for MCQ generation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the text of a .pdf or .txt file, or of every such file under a directory.
    Extract {
        #[arg(long)]
        path: PathBuf,
    },
    /// Flatten quiz JSON into rows of question, choices and correct answer.
    Table {
        /// Quiz JSON file, or `-` to read stdin.
        #[arg(long)]
        path: PathBuf,

        #[arg(long, value_enum, default_value_t = TableFormat::Text)]
        format: TableFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum TableFormat {
    Text,
    Json,
    Jsonl,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Extract { path } if path.is_dir() => extract_dir(&path),
        Command::Extract { path } => {
            print!("{}", extract_file(&path)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Table { path, format } => table(&path, format),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn extract_file(path: &Path) -> Result<String> {
    let mut upload = NamedReader::open(path)
        .with_context(|| format!("failed to open file: {}", path.display()))?;

    extract_text(&mut upload)
        .with_context(|| format!("failed to extract text from: {}", path.display()))
}

fn extract_dir(dir: &Path) -> Result<ExitCode> {
    let mut failed = 0;

    for path in find_documents(dir)? {
        match extract_file(&path) {
            Ok(text) => {
                println!("==> {} <==", path.display());
                println!("{}", text);
            }
            Err(e) => {
                eprintln!("{} {:#}", "✗".red(), e);
                failed += 1;
            }
        }
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn table(path: &Path, format: TableFormat) -> Result<ExitCode> {
    let quiz_json = read_input(path)?;

    let rows = match build_table(&quiz_json) {
        Ok(rows) => rows,
        Err(failure) => {
            eprintln!("{} no table for {}: {}", "✗".red(), path.display(), failure);
            return Ok(ExitCode::from(2));
        }
    };

    let output = match format {
        TableFormat::Text => render::to_text_table(&rows),
        TableFormat::Json => render::to_json(&rows)? + "\n",
        TableFormat::Jsonl => render::to_jsonl(&rows)?,
    };
    print!("{}", output);

    Ok(ExitCode::SUCCESS)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut contents = String::new();
        io::stdin()
            .read_to_string(&mut contents)
            .context("failed to read quiz JSON from stdin")?;
        return Ok(contents);
    }

    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}
