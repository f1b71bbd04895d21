use std::collections::HashMap;

use crate::core::signature::Signature;

/// Enumerates distinct column signatures in order of first appearance.
///
/// The registry grows monotonically over one scan and is discarded at the end
/// of the run; indices are never persisted or reused across runs.
#[derive(Debug, Default)]
pub struct ColumnTypeRegistry {
    index_by_signature: HashMap<Signature, u32>,
    next_index: u32,
}

impl ColumnTypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the type index for `signature`, assigning the next free index
    /// (0, 1, 2, …) if it has not been seen before.
    ///
    /// Index assignment order is exactly the first-appearance order of the
    /// call sequence: callers must register columns strictly in position
    /// order, or the numbering will not be reproducible across runs. Index 0
    /// means "whatever signature the first registered column had", not any
    /// fixed pattern.
    pub fn register(&mut self, signature: &Signature) -> u32 {
        if let Some(&index) = self.index_by_signature.get(signature) {
            return index;
        }

        let index = self.next_index;
        self.index_by_signature.insert(signature.clone(), index);
        self.next_index += 1;
        index
    }

    /// Number of distinct signatures registered so far
    #[must_use]
    pub fn distinct_types(&self) -> usize {
        self.index_by_signature.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_assigned_in_first_appearance_order() {
        let mut registry = ColumnTypeRegistry::new();

        assert_eq!(registry.register(&Signature(vec![0, 0])), 0);
        assert_eq!(registry.register(&Signature(vec![0, 1])), 1);
        assert_eq!(registry.register(&Signature(vec![0, 2])), 2);
        assert_eq!(registry.distinct_types(), 3);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = ColumnTypeRegistry::new();
        let signature = Signature(vec![0, 1, 1]);

        let first = registry.register(&signature);
        let second = registry.register(&signature);

        assert_eq!(first, second);
        assert_eq!(registry.distinct_types(), 1);
    }

    #[test]
    fn test_repeats_do_not_advance_the_counter() {
        let mut registry = ColumnTypeRegistry::new();

        registry.register(&Signature(vec![0, 0]));
        registry.register(&Signature(vec![0, 0]));
        registry.register(&Signature(vec![0, 0]));

        assert_eq!(registry.register(&Signature(vec![0, 1])), 1);
    }

    #[test]
    fn test_index_zero_is_not_a_fixed_pattern() {
        // Whichever signature arrives first gets index 0
        let mut registry = ColumnTypeRegistry::new();
        assert_eq!(registry.register(&Signature(vec![0, 1, 2])), 0);
        assert_eq!(registry.register(&Signature(vec![0, 0, 0])), 1);
    }
}
