use std::fmt;

use serde::Serialize;

/// Canonical label sequence for one alignment column.
///
/// Each row's base is replaced by a small integer assigned in order of first
/// occurrence while scanning the column, so the first label is always 0 and
/// two columns with the same equality pattern among rows compare equal. See
/// [`crate::classify::canonicalize::canonicalize`].
///
/// The `Display` form is the tuple notation used in the output table, e.g.
/// `(0, 0, 1, 1)`, with a trailing comma for the single-row form `(0,)` so
/// the rendered text matches the shape downstream consumers key on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Signature(pub Vec<u32>);

impl Signature {
    /// The labels, one per alignment row
    #[must_use]
    pub fn labels(&self) -> &[u32] {
        &self.0
    }

    /// Number of labels (= number of alignment rows)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u32>> for Signature {
    fn from(labels: Vec<u32>) -> Self {
        Self(labels)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{label}")?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
