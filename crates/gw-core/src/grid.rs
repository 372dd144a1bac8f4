//! Grid dimensions and symbol snapshots

use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbol type identifier. Matching compares these for equality only;
/// what a symbol *is* belongs to the symbol-generation system.
pub type SymbolId = u32;

/// Net grid dimensions (rows × cols)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub cols: u32,
}

impl GridDims {
    /// Create dimensions
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// The smaller of the two extents (a diagonal of length L needs L of both)
    pub fn min_extent(&self) -> u32 {
        self.rows.min(self.cols)
    }

    /// Total cell count
    pub fn total_cells(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Snapshot construction errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SnapshotError {
    #[error("ragged snapshot: row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Read-only grid of symbols, row-major. Input to the matcher; the engine
/// never mutates or retains one beyond a single evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSnapshot {
    rows: Vec<Vec<SymbolId>>,
}

impl GridSnapshot {
    /// Build from ordered rows. All rows must have the same width.
    pub fn from_rows(rows: Vec<Vec<SymbolId>>) -> Result<Self, SnapshotError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            for (row, cells) in rows.iter().enumerate().skip(1) {
                if cells.len() != expected {
                    return Err(SnapshotError::RaggedRow {
                        row,
                        expected,
                        got: cells.len(),
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// A grid filled with a single symbol
    pub fn uniform(dims: GridDims, symbol: SymbolId) -> Self {
        Self {
            rows: vec![vec![symbol; dims.cols as usize]; dims.rows as usize],
        }
    }

    /// Dimensions of this snapshot
    pub fn dims(&self) -> GridDims {
        GridDims {
            rows: self.rows.len() as u32,
            cols: self.rows.first().map_or(0, Vec::len) as u32,
        }
    }

    /// Symbol at a signed coordinate. Negative or out-of-range coordinates
    /// return `None` — they are out of bounds, never wrapped.
    pub fn symbol_at(&self, row: i64, col: i64) -> Option<SymbolId> {
        if row < 0 || col < 0 {
            return None;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }
}
