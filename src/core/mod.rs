//! Core data types for alignment column classification.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`alignment::Alignment`]: a validated multiple sequence alignment with
//!   rows held in a fixed, name-sorted order
//! - [`alignment::AlignmentRow`]: a single named, aligned sequence
//! - [`signature::Signature`]: the canonical label sequence describing one
//!   column's equality pattern
//!
//! ## Row order
//!
//! Signatures are positional: the label at index `i` belongs to row `i` of
//! the alignment. [`alignment::Alignment::new`] therefore sorts rows by name
//! ascending once, up front, and that order is fixed for the rest of the run
//! so identical inputs always produce identical reports.

pub mod alignment;
pub mod signature;
