//! Grid-size modifier ledger
//!
//! External effects never set the grid size directly; they push signed
//! row/col deltas onto a ledger. The net size is the base plus the sum of
//! every live entry. Temporary entries carry a remaining-turn count and
//! are dropped only at turn boundaries, never mid-evaluation.

use serde::{Deserialize, Serialize};

use gw_core::GridDims;

/// How long a modifier stays on the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierKind {
    /// Stays until the session ends
    Permanent,
    /// Expires after the given number of turns
    Temporary {
        /// Turns the modifier remains active
        turns: u32,
    },
}

/// A signed grid-size delta from an external effect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridModifier {
    /// Row delta
    pub d_rows: i32,
    /// Column delta
    pub d_cols: i32,
    /// Lifetime
    pub kind: ModifierKind,
    /// Optional source tag for logs ("lucky_charm", "phone_call", ...)
    #[serde(default)]
    pub label: Option<String>,
}

impl GridModifier {
    /// A modifier that never expires
    pub fn permanent(d_rows: i32, d_cols: i32) -> Self {
        Self {
            d_rows,
            d_cols,
            kind: ModifierKind::Permanent,
            label: None,
        }
    }

    /// A modifier that expires after `turns` turns
    pub fn temporary(d_rows: i32, d_cols: i32, turns: u32) -> Self {
        Self {
            d_rows,
            d_cols,
            kind: ModifierKind::Temporary { turns },
            label: None,
        }
    }

    /// Attach a source tag
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Resize errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResizeError {
    /// The modifier would leave a dimension below the configured floor.
    /// The ledger is unchanged when this is returned.
    #[error("resize rejected: net grid {rows}x{cols} falls below floor {floor}")]
    InvalidResize { rows: i64, cols: i64, floor: u32 },
}

/// One live ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LedgerEntry {
    d_rows: i32,
    d_cols: i32,
    /// `None` for permanent entries
    remaining: Option<u32>,
    label: Option<String>,
}

/// Running ledger of active grid modifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResizeLedger {
    base: GridDims,
    floor: u32,
    entries: Vec<LedgerEntry>,
}

impl ResizeLedger {
    /// Start an empty ledger over a base size
    pub fn new(base: GridDims, floor: u32) -> Self {
        Self {
            base,
            floor,
            entries: Vec::new(),
        }
    }

    fn net(&self) -> (i64, i64) {
        let rows = i64::from(self.base.rows)
            + self.entries.iter().map(|e| i64::from(e.d_rows)).sum::<i64>();
        let cols = i64::from(self.base.cols)
            + self.entries.iter().map(|e| i64::from(e.d_cols)).sum::<i64>();
        (rows, cols)
    }

    /// Net dimensions right now. Expiry is never validated against the
    /// floor (it must succeed), so the net is clamped at the floor.
    pub fn current(&self) -> GridDims {
        let (rows, cols) = self.net();
        GridDims::new(
            rows.max(i64::from(self.floor)) as u32,
            cols.max(i64::from(self.floor)) as u32,
        )
    }

    /// Apply a modifier. Rejects, leaving the ledger untouched, when the
    /// resulting net size would drop below the floor on either axis.
    pub fn apply(&mut self, modifier: GridModifier) -> Result<GridDims, ResizeError> {
        let (net_rows, net_cols) = self.net();
        let rows = net_rows + i64::from(modifier.d_rows);
        let cols = net_cols + i64::from(modifier.d_cols);
        if rows < i64::from(self.floor) || cols < i64::from(self.floor) {
            return Err(ResizeError::InvalidResize {
                rows,
                cols,
                floor: self.floor,
            });
        }

        log::debug!(
            "grid modifier {:+}r/{:+}c ({:?}) from {}",
            modifier.d_rows,
            modifier.d_cols,
            modifier.kind,
            modifier.label.as_deref().unwrap_or("unlabeled"),
        );

        self.entries.push(LedgerEntry {
            d_rows: modifier.d_rows,
            d_cols: modifier.d_cols,
            remaining: match modifier.kind {
                ModifierKind::Permanent => None,
                ModifierKind::Temporary { turns } => Some(turns),
            },
            label: modifier.label,
        });
        Ok(self.current())
    }

    /// Advance one turn: decrement temporary entries and drop any that
    /// just expired. Returns the new net dimensions.
    pub fn advance_turn(&mut self) -> GridDims {
        self.entries.retain_mut(|entry| match entry.remaining.as_mut() {
            None => true,
            Some(remaining) => {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    log::debug!(
                        "grid modifier {:+}r/{:+}c expired ({})",
                        entry.d_rows,
                        entry.d_cols,
                        entry.label.as_deref().unwrap_or("unlabeled"),
                    );
                    false
                } else {
                    true
                }
            }
        });
        self.current()
    }

    /// Number of live entries
    pub fn active_modifiers(&self) -> usize {
        self.entries.len()
    }
}
