//! Command-line interface for scaffold-stats.
//!
//! Reads a FASTA assembly (plain, gzip-compressed, or from standard input),
//! splits every scaffold into contigs at `N` runs, and writes cumulative size
//! tables for scaffolds and contigs.
//!
//! ## Usage
//!
//! ```text
//! # Read from a file, write to standard output
//! scaffold-stats -i assembly.fa
//!
//! # Pipe through standard input
//! zcat assembly.fa.gz | scaffold-stats > stats.txt
//!
//! # Gzip in, gzip out
//! scaffold-stats --iz assembly.fa.gz --oz stats.txt.gz
//!
//! # JSON with a per-scaffold breakdown, thresholds every 10%
//! scaffold-stats -i assembly.fa --format json --step 10 --per-scaffold
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::cli::io::{InputSource, OutputSink};
use crate::stats::percentile::{Thresholds, DEFAULT_STEP_PERCENT};

pub mod io;
pub mod render;

#[derive(Parser, Debug)]
#[command(name = "scaffold-stats")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Count scaffolds and contigs in a FASTA file and calculate N50 and L50")]
#[command(
    long_about = "scaffold-stats splits every FASTA record (scaffold) into contigs at runs of N/n and reports, for scaffolds and contigs separately, the cumulative size breakpoints at 5%, 10%, ..., 100% of the total when sequences are taken from largest to smallest.\n\nEach row gives the threshold, the accumulated size, the number of sequences before the one crossing the threshold, and that sequence's length (the critical size)."
)]
pub struct Cli {
    /// Input FASTA file (default: standard input)
    #[arg(short = 'i', long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Gzip-compressed input FASTA file, instead of '-i'
    #[arg(long = "iz", visible_alias = "ingz", value_name = "FILE", conflicts_with = "input")]
    pub input_gz: Option<PathBuf>,

    /// Output file (default: standard output)
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Gzip-compressed output file, instead of '-o'
    #[arg(long = "oz", visible_alias = "outgz", value_name = "FILE", conflicts_with = "output")]
    pub output_gz: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Spacing between percentile thresholds, in percent (the last one is always 100)
    #[arg(long, value_name = "PERCENT", default_value_t = DEFAULT_STEP_PERCENT,
          value_parser = clap::value_parser!(u32).range(1..=100))]
    pub step: u32,

    /// Also report name, length, contig count and gap size for every scaffold
    #[arg(long)]
    pub per_scaffold: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn input_source(&self) -> InputSource {
        InputSource::from_paths(self.input.clone(), self.input_gz.clone())
    }

    #[must_use]
    pub fn output_sink(&self) -> OutputSink {
        OutputSink::from_paths(self.output.clone(), self.output_gz.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Commented tab-separated tables
    Text,
    /// A single JSON document
    Json,
}

/// Execute the full pipeline: read, split, summarize, write.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, or the output
/// cannot be created or written.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let thresholds = Thresholds::with_step(cli.step)?;

    let source = cli.input_source();
    let assembly = io::read_assembly(&source)?;

    let report = assembly.report(&thresholds, cli.per_scaffold);

    let sink = cli.output_sink();
    let mut output = sink.create()?;
    let written = match cli.format {
        OutputFormat::Text => render::write_text(&mut output, &report),
        OutputFormat::Json => render::write_json(&mut output, &report),
    };
    written.with_context(|| format!("Can't write output to {sink}"))?;
    output
        .finish()
        .with_context(|| format!("Can't write output to {sink}"))?;

    Ok(())
}
