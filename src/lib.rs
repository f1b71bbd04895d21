//! # msa-classify
//!
//! A library for classifying multiple sequence alignment columns by the
//! relative contents of each row.
//!
//! Given an MSA, every column is reduced to a *signature*: each row's base is
//! replaced by a small integer assigned in order of first occurrence while
//! scanning the column top to bottom. Two columns with the same
//! equality pattern among rows get the same signature no matter which literal
//! bases produced it. Distinct signatures are then enumerated across the whole
//! alignment, giving every position a global column type index.
//!
//! The per-position table of (position, column type, signature) can be used to
//! resolve breakpoints between paralogous sequences, as in Antonacci and
//! Dennis et al. 2014.
//!
//! ## Features
//!
//! - **Relabeling-invariant signatures**: columns are compared by equality
//!   pattern, not by base identity
//! - **First-appearance type indices**: column types are numbered 0, 1, 2, …
//!   in discovery order across the scan
//! - **Signature filtering**: restrict the report to an allow-list of
//!   signatures without disturbing the global type numbering
//! - **FASTA input**: plain or gzip/bgzip compressed, rows sorted by name
//!
//! ## Example
//!
//! ```rust
//! use msa_classify::{canonicalize, ColumnTypeRegistry};
//!
//! // Both columns have the same equality pattern, so they share a signature
//! let first = canonicalize(b"AACC");
//! let second = canonicalize(b"GGTT");
//! assert_eq!(first.labels(), &[0, 0, 1, 1]);
//! assert_eq!(first, second);
//!
//! // Distinct signatures are numbered in order of first appearance
//! let mut registry = ColumnTypeRegistry::new();
//! assert_eq!(registry.register(&first), 0);
//! assert_eq!(registry.register(&canonicalize(b"ACGT")), 1);
//! assert_eq!(registry.register(&second), 0);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alignment and signature data types
//! - [`classify`]: Canonicalization, the type registry, and the scan engine
//! - [`parsing`]: FASTA alignment reader
//! - [`cli`]: Command-line interface implementation

pub mod classify;
pub mod cli;
pub mod core;
pub mod parsing;

// Re-export commonly used items for convenience
pub use classify::canonicalize::canonicalize;
pub use classify::engine::{ClassifiedColumn, ColumnClassifier};
pub use classify::registry::ColumnTypeRegistry;
pub use core::alignment::{Alignment, AlignmentRow};
pub use core::signature::Signature;
