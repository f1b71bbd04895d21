use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlignmentError {
    #[error("No sequences found in alignment input")]
    Empty,

    #[error("Row '{name}' has length {actual}, expected {expected} (all alignment rows must have equal length)")]
    UnequalRowLength {
        name: String,
        expected: usize,
        actual: usize,
    },
}

/// A single row of a multiple sequence alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRow {
    /// Record name from the FASTA header
    pub name: String,

    /// Aligned sequence bytes, gap characters included
    pub sequence: Vec<u8>,
}

impl AlignmentRow {
    pub fn new(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}

/// A multiple sequence alignment with rows in a fixed, name-sorted order.
///
/// Construction validates that every row has the same length and sorts rows
/// by name ascending. The sorted order is the canonical row order for the
/// rest of the run: column signatures are positional, so the label at index
/// `i` always refers to the `i`-th row in this order.
#[derive(Debug, Clone)]
pub struct Alignment {
    rows: Vec<AlignmentRow>,
    length: usize,
}

impl Alignment {
    /// Build an alignment from rows, sorting them by name ascending.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::Empty` if `rows` is empty, or
    /// `AlignmentError::UnequalRowLength` if any row's length differs from
    /// the first row's.
    pub fn new(mut rows: Vec<AlignmentRow>) -> Result<Self, AlignmentError> {
        let Some(first) = rows.first() else {
            return Err(AlignmentError::Empty);
        };

        let length = first.sequence.len();
        for row in &rows {
            if row.sequence.len() != length {
                return Err(AlignmentError::UnequalRowLength {
                    name: row.name.clone(),
                    expected: length,
                    actual: row.sequence.len(),
                });
            }
        }

        rows.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self { rows, length })
    }

    /// Alignment length (number of columns)
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// True for a zero-column alignment (rows present, all of length 0)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows in the canonical (name-sorted) order
    #[must_use]
    pub fn rows(&self) -> &[AlignmentRow] {
        &self.rows
    }

    /// The bases at one position, one per row, in the canonical row order.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    #[must_use]
    pub fn column(&self, position: usize) -> Vec<u8> {
        assert!(position < self.length, "column {position} out of range");
        self.rows.iter().map(|row| row.sequence[position]).collect()
    }
}
