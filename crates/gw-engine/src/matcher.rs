//! Pattern matching over grid snapshots
//!
//! [`evaluate`] is pure and total: it borrows a snapshot and the active
//! set, and returns the matched instances. Out-of-bounds coordinates and
//! symbol mismatches are ordinary negative outcomes, never errors.

use serde::{Deserialize, Serialize};

use gw_core::{GridSnapshot, ShapeKind};

use crate::catalog::ActivePattern;

/// One matched pattern instance. Produced fresh per evaluation and never
/// retained by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternMatch {
    /// Shape category
    pub kind: ShapeKind,
    /// Instance length at match time
    pub length: u32,
    /// Payout multiplier
    pub multiplier: f64,
    /// Coin award
    pub coin_value: u64,
    /// Origin cell (row, col) the template was anchored at
    pub origin: (u32, u32),
    /// Every matched cell, in template order — for UI highlighting
    pub cells: Vec<(u32, u32)>,
}

/// Scan `grid` for each active instance. An instance counts once per
/// evaluation: the scan stops at the first succeeding origin (row-major),
/// so a shape matching at several positions still yields one entry.
pub fn evaluate(grid: &GridSnapshot, active: &[ActivePattern]) -> Vec<PatternMatch> {
    active
        .iter()
        .filter_map(|instance| find_match(grid, instance))
        .collect()
}

fn find_match(grid: &GridSnapshot, instance: &ActivePattern) -> Option<PatternMatch> {
    let offsets = instance.kind.offsets(instance.length);
    let dims = grid.dims();
    for row in 0..dims.rows {
        for col in 0..dims.cols {
            if let Some(cells) = match_at(grid, row, col, &offsets) {
                return Some(PatternMatch {
                    kind: instance.kind,
                    length: instance.length,
                    multiplier: instance.multiplier,
                    coin_value: instance.coin_value,
                    origin: (row, col),
                    cells,
                });
            }
        }
    }
    None
}

/// Try one origin: every offset cell must be in bounds and carry the same
/// symbol as the origin. First failure short-circuits.
fn match_at(
    grid: &GridSnapshot,
    row: u32,
    col: u32,
    offsets: &[(i32, i32)],
) -> Option<Vec<(u32, u32)>> {
    let anchor = grid.symbol_at(i64::from(row), i64::from(col))?;
    let mut cells = Vec::with_capacity(offsets.len());
    for &(d_row, d_col) in offsets {
        let r = i64::from(row) + i64::from(d_row);
        let c = i64::from(col) + i64::from(d_col);
        if grid.symbol_at(r, c)? != anchor {
            return None;
        }
        cells.push((r as u32, c as u32));
    }
    Some(cells)
}
