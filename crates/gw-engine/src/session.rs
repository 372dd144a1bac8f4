//! Session facade tying ledger, catalog, and matcher together
//!
//! A [`PatternSession`] is the single owner of all per-session state. It
//! processes each game turn as one atomic pipeline: apply or expire
//! modifiers, re-extend the catalog, evaluate the grid. Hosts that run
//! several games in parallel hold one session per game; nothing is
//! shared between them.

use serde::{Deserialize, Serialize};

use gw_core::{GridDims, GridSnapshot};

use crate::catalog::{ActivePattern, PatternCatalog};
use crate::config::EngineConfig;
use crate::matcher::{self, PatternMatch};
use crate::resize::{GridModifier, ResizeError, ResizeLedger};

/// Result of one grid evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Matched instances, one entry per matching pattern
    pub matches: Vec<PatternMatch>,
    /// Sum of every match's coin award
    pub total_coins: u64,
}

impl EvaluationResult {
    /// Did anything match?
    pub fn is_win(&self) -> bool {
        self.total_coins > 0
    }

    /// Number of matched patterns
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

/// Per-session statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Turns advanced
    pub turns: u64,
    /// Evaluations run
    pub evaluations: u64,
    /// Evaluations that paid out
    pub winning_evaluations: u64,
    /// Coins awarded across the session
    pub total_coins: u64,
    /// Largest single-evaluation award
    pub best_coins: u64,
}

impl SessionStats {
    /// Fraction of evaluations that paid out
    pub fn hit_rate(&self) -> f64 {
        if self.evaluations > 0 {
            self.winning_evaluations as f64 / self.evaluations as f64
        } else {
            0.0
        }
    }
}

/// One game session's pattern engine state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSession {
    config: EngineConfig,
    ledger: ResizeLedger,
    catalog: PatternCatalog,
    stats: SessionStats,
}

impl PatternSession {
    /// Create a session with the default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create with a specific configuration
    pub fn with_config(config: EngineConfig) -> Self {
        let ledger = ResizeLedger::new(config.base_dims, config.dim_floor);
        let catalog = PatternCatalog::new(
            config.definitions.clone(),
            config.active_cap,
            config.coin_unit,
            ledger.current(),
        );
        Self {
            config,
            ledger,
            catalog,
            stats: SessionStats::default(),
        }
    }

    /// Apply an external grid modifier and re-extend the catalog.
    /// On rejection neither the ledger nor the catalog changes.
    pub fn on_grid_resize(&mut self, modifier: GridModifier) -> Result<GridDims, ResizeError> {
        let old = self.ledger.current();
        let new = self.ledger.apply(modifier)?;
        self.catalog.resize(old, new);
        log::info!("grid resized {old} -> {new}");
        Ok(new)
    }

    /// Advance one turn: expire temporary modifiers and re-extend the
    /// catalog if the net dimensions changed.
    pub fn advance_turn(&mut self) {
        let old = self.ledger.current();
        let new = self.ledger.advance_turn();
        if new != old {
            log::info!("grid resized {old} -> {new} on modifier expiry");
            self.catalog.resize(old, new);
        }
        self.stats.turns += 1;
    }

    /// Evaluate a grid snapshot against the active set
    pub fn evaluate(&mut self, grid: &GridSnapshot) -> EvaluationResult {
        let matches = matcher::evaluate(grid, self.catalog.active());
        let total_coins: u64 = matches.iter().map(|m| m.coin_value).sum();

        self.stats.evaluations += 1;
        if total_coins > 0 {
            self.stats.winning_evaluations += 1;
            self.stats.total_coins += total_coins;
            self.stats.best_coins = self.stats.best_coins.max(total_coins);
        }

        EvaluationResult {
            matches,
            total_coins,
        }
    }

    /// Current net grid dimensions
    pub fn dims(&self) -> GridDims {
        self.ledger.current()
    }

    /// Live pattern instances, read-only (for UI display)
    pub fn active_patterns(&self) -> &[ActivePattern] {
        self.catalog.active()
    }

    /// Diagnostic: sweep candidates skipped at the active-set cap
    pub fn skipped_by_cap(&self) -> u64 {
        self.catalog.skipped_by_cap()
    }

    /// Session statistics
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// The configuration this session was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for PatternSession {
    fn default() -> Self {
        Self::new()
    }
}
