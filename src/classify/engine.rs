use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::classify::canonicalize::canonicalize;
use crate::classify::registry::ColumnTypeRegistry;
use crate::core::alignment::Alignment;
use crate::core::signature::Signature;

/// One classified alignment position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedColumn {
    /// Zero-based alignment position
    pub position: usize,

    /// Global type index assigned to this column's signature
    pub column_type: u32,

    /// Canonical label sequence for the column's bases
    #[serde(rename = "bases")]
    pub signature: Signature,
}

/// Scans an alignment column by column, assigning each position a global
/// column type.
#[derive(Debug, Default)]
pub struct ColumnClassifier {
    registry: ColumnTypeRegistry,
}

impl ColumnClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify every column of `alignment` in position order.
    ///
    /// Type indices are assigned in order of first appearance across the
    /// scan. When `accepted` is given, only columns whose signature is a
    /// member of the set are returned; filtered-out columns still register
    /// their signature, so the numbering does not depend on the filter.
    pub fn classify(
        &mut self,
        alignment: &Alignment,
        accepted: Option<&HashSet<Signature>>,
    ) -> Vec<ClassifiedColumn> {
        let mut columns = Vec::new();

        for position in 0..alignment.len() {
            let signature = canonicalize(&alignment.column(position));
            let column_type = self.registry.register(&signature);

            if accepted.map_or(true, |set| set.contains(&signature)) {
                columns.push(ClassifiedColumn {
                    position,
                    column_type,
                    signature,
                });
            }
        }

        debug!(
            "classified {} positions into {} column types, reporting {}",
            alignment.len(),
            self.registry.distinct_types(),
            columns.len()
        );

        columns
    }
}
