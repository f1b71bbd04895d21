//! Command-line interface for msa-classify.
//!
//! ## Usage
//!
//! ```text
//! # Classify every column of an alignment
//! msa-classify paralogs.fa positions.tsv
//!
//! # Report only fully conserved columns and columns where the last of
//! # three rows differs from the first two
//! msa-classify paralogs.fa positions.tsv --types 000 001
//!
//! # Read FASTA from stdin, write the table to stdout
//! cat paralogs.fa | msa-classify - -
//!
//! # JSON output for scripting
//! msa-classify paralogs.fa positions.json --format json
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod classify;

#[derive(Parser)]
#[command(name = "msa-classify")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Classify multiple sequence alignment columns by base equality patterns")]
#[command(
    long_about = "msa-classify reduces every column of a multiple sequence alignment to a signature of small integers describing which rows agree and which differ, then enumerates the distinct signatures across the alignment into global column types.\n\nThe per-position table of column types can be used to localize breakpoints between paralogous sequences."
)]
pub struct Cli {
    /// Multiple sequence alignment input in FASTA format
    /// (plain or gzip compressed; use '-' for stdin)
    #[arg(required = true)]
    pub alignment: PathBuf,

    /// Output file reporting alignment position, type of column per
    /// position, and column bases per position (use '-' for stdout)
    #[arg(required = true)]
    pub classified_alignment_positions: PathBuf,

    /// Space-delimited list of column bases to report in the output table
    /// (e.g., '--types 000 001' reports positions where all rows have the
    /// same base and where the last row differs from the first two rows)
    #[arg(long, num_args = 0..)]
    pub types: Option<Vec<String>>,

    /// Output format
    #[arg(short, long, default_value = "tsv")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Json,
}
