//! flatsheet: convert JSON documents into flat CSV or Excel tables
//!
//! Usage:
//!   # Convert one file, writing data.csv next to it
//!   flatsheet data.json
//!
//!   # Convert a batch to xlsx into a chosen directory
//!   flatsheet -f xlsx -o ./out a.json b.json c.json
//!
//!   # Read from stdin, write CSV to stdout
//!   echo '{"id": 1, "items": [{"a": 10}]}' | flatsheet
//!
//! Each document converts independently: a file that fails to read or parse
//! is reported and skipped, and the remaining files still convert. The exit
//! status is nonzero if any document failed.

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use flatsheet::{flatten_table, parse_document, write_csv, write_xlsx};
use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "flatsheet")]
#[command(about = "Convert JSON documents into flat CSV or Excel tables", long_about = None)]
struct Args {
    /// Input JSON files (use stdin/stdout if omitted)
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "csv")]
    format: Format,

    /// Output directory for converted files (default: alongside each input)
    #[arg(long, short = 'o')]
    output_dir: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum Format {
    Csv,
    Xlsx,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Xlsx => "xlsx",
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.inputs.is_empty() {
        return convert_stdin(args.format);
    }

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    let failures = convert_batch(&args.inputs, args.output_dir.as_deref(), args.format);

    eprintln!(
        "converted {} of {} document(s)",
        args.inputs.len() - failures,
        args.inputs.len()
    );
    if failures > 0 {
        bail!("{failures} document(s) failed");
    }
    Ok(())
}

/// Convert each input independently: a document that fails to read or parse
/// is reported on stderr and skipped, and the rest of the batch still
/// converts. Returns the number of failed documents.
fn convert_batch(inputs: &[PathBuf], output_dir: Option<&Path>, format: Format) -> usize {
    let mut failures = 0;
    for input in inputs {
        if let Err(err) = convert_file(input, output_dir, format) {
            eprintln!("{}: {:#}", input.display(), err);
            failures += 1;
        }
    }
    failures
}

/// Convert a single JSON file, writing `<stem>.<ext>` to the output directory
/// or next to the input when no directory was given.
fn convert_file(input: &Path, output_dir: Option<&Path>, format: Format) -> Result<()> {
    let bytes = std::fs::read(input).context("failed to read file")?;
    let value = parse_document(&bytes)?;
    let table = flatten_table(&value);

    let out_path = output_path(input, output_dir, format.extension());
    let file = File::create(&out_path)
        .with_context(|| format!("failed to create {}", out_path.display()))?;
    match format {
        Format::Csv => write_csv(&table, file)?,
        Format::Xlsx => write_xlsx(&table, file)?,
    }
    Ok(())
}

fn convert_stdin(format: Format) -> Result<()> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("failed to read stdin")?;
    let value = parse_document(&bytes)?;
    let table = flatten_table(&value);

    let stdout = std::io::stdout().lock();
    match format {
        Format::Csv => write_csv(&table, stdout)?,
        Format::Xlsx => write_xlsx(&table, stdout)?,
    }
    Ok(())
}

fn output_path(input: &Path, output_dir: Option<&Path>, extension: &str) -> PathBuf {
    let renamed = input.with_extension(extension);
    match output_dir {
        Some(dir) => dir.join(renamed.file_name().unwrap_or_else(|| OsStr::new("output"))),
        None => renamed,
    }
}
