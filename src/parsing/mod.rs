//! Readers for loading a multiple sequence alignment from disk.
//!
//! The classifier itself never touches files; it consumes a validated
//! [`crate::core::alignment::Alignment`]. This module produces one from a
//! FASTA file with equal-length records:
//!
//! - **Plain FASTA**: `.fa`, `.fasta`, `.fna`, or any other extension
//! - **Compressed FASTA**: gzip or bgzip, detected by a `.gz`/`.bgz` suffix
//! - **Stdin**: pass `-` to read FASTA text from standard input
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use msa_classify::parsing::fasta::read_alignment;
//!
//! let alignment = read_alignment(Path::new("paralogs.fa")).unwrap();
//! println!("{} rows x {} positions", alignment.row_count(), alignment.len());
//! ```

pub mod fasta;
