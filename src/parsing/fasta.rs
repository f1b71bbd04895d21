//! Reader for FASTA multiple sequence alignments using noodles.
//!
//! Loads every record, validates that all sequences share one length, and
//! returns an [`Alignment`] with rows sorted by record name.
//! Supports both uncompressed and gzip/bgzip compressed files.

use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;
use thiserror::Error;

use crate::core::alignment::{Alignment, AlignmentError, AlignmentRow};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA input: {0}")]
    Fasta(String),

    #[error(transparent)]
    Alignment(#[from] AlignmentError),
}

/// Check if the path is a gzipped file
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read a multiple sequence alignment from a FASTA file.
///
/// Pass `-` to read FASTA text from stdin. Rows are sorted by record name
/// ascending, and every record must have the same sequence length.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Fasta`
/// if a record cannot be parsed, or `ParseError::Alignment` if the file
/// holds no records or the records have unequal lengths.
pub fn read_alignment(path: &Path) -> Result<Alignment, ParseError> {
    if path.as_os_str() == "-" {
        let mut reader = fasta::io::Reader::new(io::stdin().lock());
        return read_alignment_records(&mut reader);
    }

    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        let mut reader = fasta::io::Reader::new(BufReader::new(GzDecoder::new(file)));
        read_alignment_records(&mut reader)
    } else {
        let mut reader = fasta::io::Reader::new(BufReader::new(file));
        read_alignment_records(&mut reader)
    }
}

/// Collect rows from a noodles FASTA reader into a validated alignment
fn read_alignment_records<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Alignment, ParseError> {
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Fasta(format!("failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = record.sequence().as_ref().to_vec();

        rows.push(AlignmentRow::new(name, sequence));
    }

    Ok(Alignment::new(rows)?)
}
