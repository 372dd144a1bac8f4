//! Shape kinds, coordinate templates, and base pattern definitions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::GridDims;

/// The closed set of winning shape categories.
///
/// The first four kinds are *extendable* lines that grow and shrink with
/// the grid; `LShape` and `TShape` are fixed polyomino templates (3 and 5
/// cells) that never change size once instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Left-to-right run on one row
    Horizontal,
    /// Top-to-bottom run on one column
    Vertical,
    /// Down-right run
    Diagonal,
    /// Down-left run
    AntiDiagonal,
    /// Fixed 3-cell corner template
    LShape,
    /// Fixed 5-cell T template
    TShape,
}

impl ShapeKind {
    /// All kinds, in definition declaration order (this order doubles as
    /// the feasibility-sweep insertion priority)
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Horizontal,
        ShapeKind::Vertical,
        ShapeKind::Diagonal,
        ShapeKind::AntiDiagonal,
        ShapeKind::LShape,
        ShapeKind::TShape,
    ];

    /// Does this kind grow and shrink with the grid?
    pub fn is_extendable(self) -> bool {
        matches!(
            self,
            ShapeKind::Horizontal
                | ShapeKind::Vertical
                | ShapeKind::Diagonal
                | ShapeKind::AntiDiagonal
        )
    }

    /// Cell count for the fixed polyomino kinds, `None` for lines
    pub fn fixed_len(self) -> Option<u32> {
        match self {
            ShapeKind::LShape => Some(3),
            ShapeKind::TShape => Some(5),
            _ => None,
        }
    }

    /// Base payout multiplier for this kind
    pub fn base_multiplier(self) -> f64 {
        match self {
            ShapeKind::Horizontal | ShapeKind::Vertical => 1.0,
            ShapeKind::Diagonal | ShapeKind::AntiDiagonal => 1.2,
            ShapeKind::LShape | ShapeKind::TShape => 1.5,
        }
    }

    /// Ordered (row, col) offsets from the origin cell for an instance of
    /// the given length. Fixed kinds ignore `length` — their template is
    /// constant. Anti-diagonal column offsets go negative; the matcher
    /// treats negative coordinates as out of bounds.
    pub fn offsets(self, length: u32) -> Vec<(i32, i32)> {
        match self {
            ShapeKind::Horizontal => (0..length as i32).map(|i| (0, i)).collect(),
            ShapeKind::Vertical => (0..length as i32).map(|i| (i, 0)).collect(),
            ShapeKind::Diagonal => (0..length as i32).map(|i| (i, i)).collect(),
            ShapeKind::AntiDiagonal => (0..length as i32).map(|i| (i, -i)).collect(),
            ShapeKind::LShape => vec![(0, 0), (1, 0), (1, 1)],
            ShapeKind::TShape => vec![(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)],
        }
    }

    /// Largest instance length `dims` can host for this kind
    /// (0 when the kind cannot fit at all).
    ///
    /// Horizontal lines are bounded by columns, vertical by rows, both
    /// diagonal families by the smaller extent. The fixed templates need
    /// a 2×2 (L) or 3×3 (T) area.
    pub fn max_len_for(self, dims: GridDims) -> u32 {
        match self {
            ShapeKind::Horizontal => dims.cols,
            ShapeKind::Vertical => dims.rows,
            ShapeKind::Diagonal | ShapeKind::AntiDiagonal => dims.min_extent(),
            ShapeKind::LShape => {
                if dims.rows >= 2 && dims.cols >= 2 {
                    3
                } else {
                    0
                }
            }
            ShapeKind::TShape => {
                if dims.rows >= 3 && dims.cols >= 3 {
                    5
                } else {
                    0
                }
            }
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Horizontal => "horizontal",
            ShapeKind::Vertical => "vertical",
            ShapeKind::Diagonal => "diagonal",
            ShapeKind::AntiDiagonal => "anti-diagonal",
            ShapeKind::LShape => "L-shape",
            ShapeKind::TShape => "T-shape",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pattern definition errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum PatternDefError {
    #[error("{kind} is a fixed shape and must have min and max length {expected}")]
    FixedLengthMismatch { kind: ShapeKind, expected: u32 },

    #[error("{kind} minimum length {min_len} is below 2")]
    MinLengthTooShort { kind: ShapeKind, min_len: u32 },

    #[error("{kind} maximum length {max_len} is below minimum {min_len}")]
    InvertedBounds {
        kind: ShapeKind,
        min_len: u32,
        max_len: u32,
    },
}

/// Immutable base pattern definition: one per shape kind, loaded once at
/// session initialization and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    /// Shape category
    pub kind: ShapeKind,
    /// Smallest instantiable length
    pub min_len: u32,
    /// Largest allowed length; `None` = bounded only by the grid
    pub max_len: Option<u32>,
}

impl PatternDef {
    /// Create a definition
    pub fn new(kind: ShapeKind, min_len: u32, max_len: Option<u32>) -> Self {
        Self {
            kind,
            min_len,
            max_len,
        }
    }

    /// The built-in definition table, in sweep priority order
    pub fn builtin() -> Vec<PatternDef> {
        vec![
            PatternDef::new(ShapeKind::Horizontal, 3, None),
            PatternDef::new(ShapeKind::Vertical, 3, None),
            PatternDef::new(ShapeKind::Diagonal, 3, None),
            PatternDef::new(ShapeKind::AntiDiagonal, 3, None),
            PatternDef::new(ShapeKind::LShape, 3, Some(3)),
            PatternDef::new(ShapeKind::TShape, 5, Some(5)),
        ]
    }

    /// Base payout multiplier (a constant of the kind)
    pub fn base_multiplier(&self) -> f64 {
        self.kind.base_multiplier()
    }

    /// Largest length an instance of this definition may take on `dims`
    pub fn cap_len(&self, dims: GridDims) -> u32 {
        let host = self.kind.max_len_for(dims);
        self.max_len.map_or(host, |m| m.min(host))
    }

    /// Can `dims` host an instance at all?
    pub fn feasible(&self, dims: GridDims) -> bool {
        self.cap_len(dims) >= self.min_len
    }

    /// Check internal consistency (used when loading external tables)
    pub fn validate(&self) -> Result<(), PatternDefError> {
        if let Some(expected) = self.kind.fixed_len() {
            if self.min_len != expected || self.max_len != Some(expected) {
                return Err(PatternDefError::FixedLengthMismatch {
                    kind: self.kind,
                    expected,
                });
            }
            return Ok(());
        }
        if self.min_len < 2 {
            return Err(PatternDefError::MinLengthTooShort {
                kind: self.kind,
                min_len: self.min_len,
            });
        }
        if let Some(max_len) = self.max_len {
            if max_len < self.min_len {
                return Err(PatternDefError::InvertedBounds {
                    kind: self.kind,
                    min_len: self.min_len,
                    max_len,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_horizontal() {
        assert_eq!(
            ShapeKind::Horizontal.offsets(4),
            vec![(0, 0), (0, 1), (0, 2), (0, 3)]
        );
    }

    #[test]
    fn test_offsets_anti_diagonal_go_negative() {
        assert_eq!(
            ShapeKind::AntiDiagonal.offsets(3),
            vec![(0, 0), (1, -1), (2, -2)]
        );
    }

    #[test]
    fn test_fixed_templates() {
        assert_eq!(ShapeKind::LShape.offsets(99).len(), 3);
        assert_eq!(ShapeKind::TShape.offsets(99).len(), 5);
        assert_eq!(ShapeKind::LShape.fixed_len(), Some(3));
        assert_eq!(ShapeKind::TShape.fixed_len(), Some(5));
    }

    #[test]
    fn test_max_len_is_axis_specific() {
        // Horizontal lines only need one row, so columns alone bound them.
        let dims = GridDims::new(3, 4);
        assert_eq!(ShapeKind::Horizontal.max_len_for(dims), 4);
        assert_eq!(ShapeKind::Vertical.max_len_for(dims), 3);
        assert_eq!(ShapeKind::Diagonal.max_len_for(dims), 3);
        assert_eq!(ShapeKind::AntiDiagonal.max_len_for(dims), 3);
    }

    #[test]
    fn test_fixed_shape_feasibility() {
        let defs = PatternDef::builtin();
        let t_shape = defs.iter().find(|d| d.kind == ShapeKind::TShape).unwrap();
        let l_shape = defs.iter().find(|d| d.kind == ShapeKind::LShape).unwrap();

        assert!(!t_shape.feasible(GridDims::new(2, 5)));
        assert!(!t_shape.feasible(GridDims::new(5, 2)));
        assert!(t_shape.feasible(GridDims::new(3, 3)));

        assert!(l_shape.feasible(GridDims::new(2, 2)));
        assert!(!l_shape.feasible(GridDims::new(1, 9)));
    }

    #[test]
    fn test_builtin_validates() {
        for def in PatternDef::builtin() {
            def.validate().unwrap();
        }
    }

    #[test]
    fn test_validate_rejects_bad_defs() {
        let bad_fixed = PatternDef::new(ShapeKind::TShape, 4, Some(4));
        assert!(matches!(
            bad_fixed.validate(),
            Err(PatternDefError::FixedLengthMismatch { expected: 5, .. })
        ));

        let too_short = PatternDef::new(ShapeKind::Horizontal, 1, None);
        assert!(matches!(
            too_short.validate(),
            Err(PatternDefError::MinLengthTooShort { .. })
        ));

        let inverted = PatternDef::new(ShapeKind::Vertical, 4, Some(3));
        assert!(matches!(
            inverted.validate(),
            Err(PatternDefError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn test_cap_len_honors_definition_max() {
        let capped = PatternDef::new(ShapeKind::Horizontal, 3, Some(5));
        assert_eq!(capped.cap_len(GridDims::new(3, 9)), 5);
        assert_eq!(capped.cap_len(GridDims::new(3, 4)), 4);
    }
}
