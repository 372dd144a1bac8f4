//! Active pattern catalog and resize-driven extension
//!
//! The catalog owns the live pattern instances — at most one per shape
//! kind — and rewrites them whenever the grid dimensions change:
//!
//! - extendable instances track their bounding extent (columns for
//!   horizontal, rows for vertical, the smaller extent for both diagonal
//!   families), clamped between the definition's minimum and what the
//!   grid can host;
//! - an instance is retired when the grid can no longer host even its
//!   minimum length;
//! - after every resize a feasibility sweep instantiates, in definition
//!   declaration order, any definition that newly fits — until the
//!   active-set cap is reached, after which candidates are counted in
//!   `skipped_by_cap` instead of being added.

use serde::{Deserialize, Serialize};

use gw_core::{GridDims, PatternDef, ShapeKind, value};

/// A live, length-specific realization of a shape kind.
///
/// `multiplier` and `coin_value` are always exactly what
/// [`gw_core::value`] produces for (`kind`, `length`); the catalog
/// recomputes them on every length change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivePattern {
    /// Shape category
    pub kind: ShapeKind,
    /// Current cell count along the shape's template
    pub length: u32,
    /// Current payout multiplier
    pub multiplier: f64,
    /// Coin award when this instance matches
    pub coin_value: u64,
}

impl ActivePattern {
    /// Instantiate at a length, deriving multiplier and coins
    pub fn for_length(kind: ShapeKind, length: u32, coin_unit: u32) -> Self {
        let multiplier = value::multiplier(kind, length);
        Self {
            kind,
            length,
            multiplier,
            coin_value: value::coin_value(multiplier, coin_unit),
        }
    }
}

/// The active pattern set for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternCatalog {
    definitions: Vec<PatternDef>,
    cap: usize,
    coin_unit: u32,
    active: Vec<ActivePattern>,
    skipped_by_cap: u64,
}

impl PatternCatalog {
    /// Build a catalog and run the initial feasibility sweep at `dims`
    pub fn new(definitions: Vec<PatternDef>, cap: usize, coin_unit: u32, dims: GridDims) -> Self {
        let mut catalog = Self {
            definitions,
            cap,
            coin_unit,
            active: Vec::new(),
            skipped_by_cap: 0,
        };
        catalog.sweep(dims);
        catalog
    }

    /// The live instances, in the order they were instantiated
    pub fn active(&self) -> &[ActivePattern] {
        &self.active
    }

    /// Live instance for a kind, if any
    pub fn get(&self, kind: ShapeKind) -> Option<&ActivePattern> {
        self.active.iter().find(|p| p.kind == kind)
    }

    /// Diagnostic: candidates the feasibility sweep skipped because the
    /// active set was already at the cap
    pub fn skipped_by_cap(&self) -> u64 {
        self.skipped_by_cap
    }

    /// React to a dimension change: re-extend or retire live instances,
    /// then sweep for newly feasible definitions.
    pub fn resize(&mut self, old: GridDims, new: GridDims) {
        if old == new {
            return;
        }
        self.reextend(old, new);
        self.sweep(new);
    }

    fn reextend(&mut self, old: GridDims, new: GridDims) {
        let definitions = &self.definitions;
        let coin_unit = self.coin_unit;
        self.active.retain_mut(|instance| {
            let Some(def) = definitions.iter().find(|d| d.kind == instance.kind) else {
                // No definition left for this kind; nothing can own it.
                log::warn!("retiring {}: no definition in table", instance.kind);
                return false;
            };

            if !instance.kind.is_extendable() {
                let fits = instance.kind.max_len_for(new) >= instance.length;
                if !fits {
                    log::debug!("retiring fixed {} on shrink to {new}", instance.kind);
                }
                return fits;
            }

            let cap = def.cap_len(new);
            if cap < def.min_len {
                log::debug!(
                    "retiring {}: grid {new} hosts at most {cap}, minimum is {}",
                    instance.kind,
                    def.min_len,
                );
                return false;
            }

            let delta =
                i64::from(instance.kind.max_len_for(new)) - i64::from(instance.kind.max_len_for(old));
            let target = (i64::from(instance.length) + delta)
                .clamp(i64::from(def.min_len), i64::from(cap)) as u32;
            if target != instance.length {
                log::debug!(
                    "{} length {} -> {target} (grid {old} -> {new})",
                    instance.kind,
                    instance.length,
                );
                *instance = ActivePattern::for_length(instance.kind, target, coin_unit);
            }
            true
        });
    }

    fn sweep(&mut self, dims: GridDims) {
        // Declaration order doubles as insertion priority.
        for i in 0..self.definitions.len() {
            let def = &self.definitions[i];
            if self.active.iter().any(|p| p.kind == def.kind) {
                continue;
            }
            if !def.feasible(dims) {
                continue;
            }
            if self.active.len() >= self.cap {
                self.skipped_by_cap += 1;
                log::debug!("skipping feasible {} at cap {}", def.kind, self.cap);
                continue;
            }
            let instance = ActivePattern::for_length(def.kind, def.min_len, self.coin_unit);
            log::debug!("instantiating {} at length {} on {dims}", def.kind, def.min_len);
            self.active.push(instance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_at(dims: GridDims) -> PatternCatalog {
        PatternCatalog::new(PatternDef::builtin(), 20, 10, dims)
    }

    #[test]
    fn test_initial_sweep_on_3x3() {
        let catalog = catalog_at(GridDims::new(3, 3));
        // Every builtin shape fits a 3x3 grid.
        assert_eq!(catalog.active().len(), 6);
        for pattern in catalog.active() {
            assert_eq!(pattern.multiplier, value::multiplier(pattern.kind, pattern.length));
        }
    }

    #[test]
    fn test_small_grid_excludes_infeasible_shapes() {
        let catalog = catalog_at(GridDims::new(1, 5));
        // Only horizontal fits one row.
        assert_eq!(catalog.active().len(), 1);
        assert_eq!(catalog.active()[0].kind, ShapeKind::Horizontal);
        assert_eq!(catalog.active()[0].length, 3);
    }

    #[test]
    fn test_growth_extends_affected_axes_only() {
        let mut catalog = catalog_at(GridDims::new(3, 3));
        catalog.resize(GridDims::new(3, 3), GridDims::new(3, 5));

        assert_eq!(catalog.get(ShapeKind::Horizontal).unwrap().length, 5);
        assert_eq!(catalog.get(ShapeKind::Vertical).unwrap().length, 3);
        // Diagonals are bounded by the smaller extent, still 3.
        assert_eq!(catalog.get(ShapeKind::Diagonal).unwrap().length, 3);
        assert_eq!(catalog.get(ShapeKind::AntiDiagonal).unwrap().length, 3);
        // Fixed shapes never change.
        assert_eq!(catalog.get(ShapeKind::LShape).unwrap().length, 3);
        assert_eq!(catalog.get(ShapeKind::TShape).unwrap().length, 5);
    }

    #[test]
    fn test_grow_then_shrink_round_trips() {
        let mut catalog = catalog_at(GridDims::new(3, 3));
        let before = catalog.active().to_vec();

        catalog.resize(GridDims::new(3, 3), GridDims::new(3, 4));
        assert_eq!(catalog.get(ShapeKind::Horizontal).unwrap().length, 4);

        catalog.resize(GridDims::new(3, 4), GridDims::new(3, 3));
        let after = catalog.active().to_vec();
        assert_eq!(after, before);
    }

    #[test]
    fn test_shrink_clamps_at_min_while_feasible() {
        let mut catalog = catalog_at(GridDims::new(3, 6));
        assert_eq!(catalog.get(ShapeKind::Horizontal).unwrap().length, 3);

        catalog.resize(GridDims::new(3, 6), GridDims::new(3, 4));
        // Columns shrank by 2 but the instance sat at the minimum already.
        assert_eq!(catalog.get(ShapeKind::Horizontal).unwrap().length, 3);
    }

    #[test]
    fn test_shrink_below_min_retires() {
        let mut catalog = catalog_at(GridDims::new(3, 3));
        catalog.resize(GridDims::new(3, 3), GridDims::new(2, 3));

        // Vertical and both diagonals need 3 rows; T needs a 3x3 area.
        assert!(catalog.get(ShapeKind::Vertical).is_none());
        assert!(catalog.get(ShapeKind::Diagonal).is_none());
        assert!(catalog.get(ShapeKind::AntiDiagonal).is_none());
        assert!(catalog.get(ShapeKind::TShape).is_none());
        assert!(catalog.get(ShapeKind::Horizontal).is_some());
        assert!(catalog.get(ShapeKind::LShape).is_some());
    }

    #[test]
    fn test_retired_shapes_return_after_regrow() {
        let mut catalog = catalog_at(GridDims::new(3, 3));
        catalog.resize(GridDims::new(3, 3), GridDims::new(2, 3));
        catalog.resize(GridDims::new(2, 3), GridDims::new(3, 3));

        assert_eq!(catalog.active().len(), 6);
        assert_eq!(catalog.get(ShapeKind::Vertical).unwrap().length, 3);
        assert_eq!(catalog.get(ShapeKind::TShape).unwrap().length, 5);
    }

    #[test]
    fn test_cap_skips_and_counts() {
        let catalog = PatternCatalog::new(PatternDef::builtin(), 3, 10, GridDims::new(3, 3));
        assert_eq!(catalog.active().len(), 3);
        // Sweep priority is declaration order.
        assert_eq!(catalog.active()[0].kind, ShapeKind::Horizontal);
        assert_eq!(catalog.active()[1].kind, ShapeKind::Vertical);
        assert_eq!(catalog.active()[2].kind, ShapeKind::Diagonal);
        assert_eq!(catalog.skipped_by_cap(), 3);
    }

    #[test]
    fn test_definition_max_len_caps_growth() {
        let defs = vec![PatternDef::new(ShapeKind::Horizontal, 3, Some(4))];
        let mut catalog = PatternCatalog::new(defs, 20, 10, GridDims::new(3, 3));

        catalog.resize(GridDims::new(3, 3), GridDims::new(3, 8));
        assert_eq!(catalog.get(ShapeKind::Horizontal).unwrap().length, 4);
    }

    #[test]
    fn test_multiplier_recomputed_on_extension() {
        let mut catalog = catalog_at(GridDims::new(3, 3));
        catalog.resize(GridDims::new(3, 3), GridDims::new(3, 4));

        let horizontal = catalog.get(ShapeKind::Horizontal).unwrap();
        assert_eq!(horizontal.multiplier, value::multiplier(ShapeKind::Horizontal, 4));
        assert_eq!(horizontal.coin_value, 12);
    }
}
