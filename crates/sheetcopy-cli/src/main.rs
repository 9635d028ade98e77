//! sheetcopy CLI - spreadsheet links, A1 ranges and CSV export

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sheetcopy::prelude::*;
use sheetcopy::LineTerminator;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetcopy")]
#[command(
    author,
    version,
    about = "Spreadsheet link, range and CSV export tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the spreadsheet id from a sharing link
    Id {
        /// Spreadsheet link
        link: String,
    },

    /// Normalize a range, show its size, and optionally move it
    Range {
        /// Range in A1:B2 notation
        range: String,

        /// Rows to move down (negative moves up)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        down: i32,

        /// Columns to move right (negative moves left)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        right: i32,

        /// Fail instead of clamping when the move leaves the sheet
        #[arg(long)]
        strict: bool,
    },

    /// Copy spreadsheet values to CSV and output to stdout or file
    #[command(alias = "csv")]
    Copy {
        /// Spreadsheet link or id
        spreadsheet: String,

        /// Directory holding `<id>.json` value documents
        #[arg(long)]
        source_dir: PathBuf,

        /// Range to copy (default: everything)
        #[arg(short, long, default_value = "")]
        range: String,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// End lines with LF instead of CRLF
        #[arg(long)]
        lf: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Id { link } => print_id(&link),
        Commands::Range {
            range,
            down,
            right,
            strict,
        } => show_range(&range, down, right, strict),
        Commands::Copy {
            spreadsheet,
            source_dir,
            range,
            output,
            delimiter,
            lf,
        } => copy_to_csv(
            &spreadsheet,
            &source_dir,
            &range,
            output.as_deref(),
            delimiter,
            lf,
        ),
    }
}

fn print_id(link: &str) -> Result<()> {
    let id = spreadsheet_id(link).with_context(|| format!("Failed to read link '{}'", link))?;
    println!("{}", id);
    Ok(())
}

fn show_range(text: &str, down: i32, right: i32, strict: bool) -> Result<()> {
    let range = CellRange::parse(text).with_context(|| format!("Failed to parse '{}'", text))?;

    println!("Range: {}", range);
    println!(
        "Size: {} rows x {} columns ({} cells)",
        range.row_count(),
        range.col_count(),
        range.square()
    );

    if down != 0 || right != 0 {
        let moved = if strict {
            range
                .try_offset(down, right)
                .with_context(|| format!("Failed to move '{}'", range))?
        } else {
            range.offset(down, right)
        };
        println!("Moved: {}", moved);
    }

    Ok(())
}

/// Accept either a sharing link or a bare id
fn resolve_id(spreadsheet: &str) -> Result<String> {
    if spreadsheet.contains("://") {
        spreadsheet_id(spreadsheet)
            .with_context(|| format!("Failed to read link '{}'", spreadsheet))
    } else if spreadsheet.is_empty() {
        bail!("Spreadsheet id is empty")
    } else {
        Ok(spreadsheet.to_string())
    }
}

fn write_options(delimiter: char, lf: bool) -> Result<CsvWriteOptions> {
    if !delimiter.is_ascii() {
        bail!("Delimiter '{}' is not a single ASCII character", delimiter);
    }

    Ok(CsvWriteOptions {
        delimiter: delimiter as u8,
        line_terminator: if lf {
            LineTerminator::LF
        } else {
            LineTerminator::CRLF
        },
        ..Default::default()
    })
}

fn copy_to_csv(
    spreadsheet: &str,
    source_dir: &Path,
    range: &str,
    output: Option<&Path>,
    delimiter: char,
    lf: bool,
) -> Result<()> {
    let id = resolve_id(spreadsheet)?;
    log::debug!("copying spreadsheet {} range '{}'", id, range);
    let options = write_options(delimiter, lf)?;
    let source = JsonValueSource::new(source_dir);

    if let Some(output_path) = output {
        let mut sink = CsvSink::create(output_path, &options)
            .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
        let stats = copy(&mut sink, &source, &id, range)
            .with_context(|| format!("Failed to copy spreadsheet '{}'", id))?;
        eprintln!(
            "Wrote {} rows to '{}'",
            stats.rows,
            output_path.display()
        );
    } else {
        let stdout = io::stdout();
        let mut sink = CsvSink::new(stdout.lock(), &options);
        copy(&mut sink, &source, &id, range)
            .with_context(|| format!("Failed to copy spreadsheet '{}'", id))?;
        sink.into_inner()
            .context("Failed to write to stdout")?
            .flush()
            .context("Failed to write to stdout")?;
    }

    Ok(())
}
