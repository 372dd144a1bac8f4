//! Engine configuration
//!
//! Charm/effect tables and pattern definition tables are static data, not
//! logic: hosts may ship them as JSON and load them at session start via
//! [`EngineConfig::from_json_str`]. Missing fields fall back to defaults,
//! so a config file only needs to name what it changes.

use serde::{Deserialize, Serialize};

use gw_core::{GridDims, PatternDef, PatternDefError, ShapeKind, value};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid pattern definition: {0}")]
    Definition(#[from] PatternDefError),

    #[error("duplicate pattern definition for {0}")]
    DuplicateKind(ShapeKind),

    #[error("pattern definition table is empty")]
    EmptyDefinitions,

    #[error("base dimensions {base} fall below the floor {floor}")]
    BaseBelowFloor { base: GridDims, floor: u32 },

    #[error("active-pattern cap must be at least 1")]
    ZeroCap,

    #[error("coin unit must be at least 1")]
    ZeroCoinUnit,
}

/// Complete engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid size before any modifier is applied
    #[serde(default = "default_base_dims")]
    pub base_dims: GridDims,

    /// Smallest dimension a modifier may leave the grid with
    #[serde(default = "default_dim_floor")]
    pub dim_floor: u32,

    /// Hard cap on the active pattern set
    #[serde(default = "default_active_cap")]
    pub active_cap: usize,

    /// Coins paid per 1.0 of multiplier
    #[serde(default = "default_coin_unit")]
    pub coin_unit: u32,

    /// Base pattern definitions; declaration order is the feasibility-sweep
    /// insertion priority
    #[serde(default = "PatternDef::builtin")]
    pub definitions: Vec<PatternDef>,
}

fn default_base_dims() -> GridDims {
    GridDims::new(3, 3)
}

fn default_dim_floor() -> u32 {
    1
}

fn default_active_cap() -> usize {
    20
}

fn default_coin_unit() -> u32 {
    value::DEFAULT_COIN_UNIT
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_dims: default_base_dims(),
            dim_floor: default_dim_floor(),
            active_cap: default_active_cap(),
            coin_unit: default_coin_unit(),
            definitions: PatternDef::builtin(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.active_cap == 0 {
            return Err(ConfigError::ZeroCap);
        }
        if self.coin_unit == 0 {
            return Err(ConfigError::ZeroCoinUnit);
        }
        if self.base_dims.rows < self.dim_floor || self.base_dims.cols < self.dim_floor {
            return Err(ConfigError::BaseBelowFloor {
                base: self.base_dims,
                floor: self.dim_floor,
            });
        }
        if self.definitions.is_empty() {
            return Err(ConfigError::EmptyDefinitions);
        }
        for (i, def) in self.definitions.iter().enumerate() {
            def.validate()?;
            if self.definitions[..i].iter().any(|d| d.kind == def.kind) {
                return Err(ConfigError::DuplicateKind(def.kind));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        EngineConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "active_cap": 4 }"#).unwrap();
        assert_eq!(config.active_cap, 4);
        assert_eq!(config.base_dims, GridDims::new(3, 3));
        assert_eq!(config.coin_unit, 10);
        assert_eq!(config.definitions.len(), 6);
    }

    #[test]
    fn test_full_json_round_trip() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back = EngineConfig::from_json_str(&json).unwrap();
        assert_eq!(back.definitions, config.definitions);
        assert_eq!(back.base_dims, config.base_dims);
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            EngineConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let json = r#"{
            "definitions": [
                { "kind": "Horizontal", "min_len": 3, "max_len": null },
                { "kind": "Horizontal", "min_len": 4, "max_len": null }
            ]
        }"#;
        assert!(matches!(
            EngineConfig::from_json_str(json),
            Err(ConfigError::DuplicateKind(ShapeKind::Horizontal))
        ));
    }

    #[test]
    fn test_base_below_floor_rejected() {
        let json = r#"{ "base_dims": { "rows": 1, "cols": 3 }, "dim_floor": 2 }"#;
        assert!(matches!(
            EngineConfig::from_json_str(json),
            Err(ConfigError::BaseBelowFloor { .. })
        ));
    }

    #[test]
    fn test_invalid_definition_rejected() {
        let json = r#"{
            "definitions": [
                { "kind": "TShape", "min_len": 4, "max_len": 4 }
            ]
        }"#;
        assert!(matches!(
            EngineConfig::from_json_str(json),
            Err(ConfigError::Definition(_))
        ));
    }
}
