use std::collections::HashMap;

use crate::core::signature::Signature;

/// Convert one column's bases into its canonical label sequence.
///
/// Scans the bases left to right, assigning a new integer label (0, 1, 2, …)
/// the first time each base value is seen; repeated base values reuse the
/// label from their first occurrence. The result depends only on the equality
/// pattern among the bases, so any bijective relabeling of the alphabet
/// yields the same signature. Every byte value is accepted, including gap
/// (`-`) and ambiguity codes.
///
/// ```
/// use msa_classify::canonicalize;
///
/// assert_eq!(canonicalize(b"AACC").labels(), &[0, 0, 1, 1]);
/// assert_eq!(canonicalize(b"CCAA").labels(), &[0, 0, 1, 1]);
/// assert_eq!(canonicalize(b"C-TC").labels(), &[0, 1, 2, 0]);
/// ```
#[must_use]
pub fn canonicalize(bases: &[u8]) -> Signature {
    let mut label_by_base: HashMap<u8, u32> = HashMap::new();
    let mut next_label = 0;
    let mut labels = Vec::with_capacity(bases.len());

    for &base in bases {
        let label = *label_by_base.entry(base).or_insert_with(|| {
            let assigned = next_label;
            next_label += 1;
            assigned
        });
        labels.push(label);
    }

    Signature(labels)
}
