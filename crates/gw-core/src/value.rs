//! Payout valuation
//!
//! Both functions are pure: an active pattern instance stores the values
//! they produce, and recomputing from the stored (kind, length) must
//! reproduce the stored fields bit-for-bit. The catalog relies on this
//! when re-deriving multipliers after a resize.

use crate::shapes::ShapeKind;

/// Growth factor applied per cell above the 3-cell baseline
pub const LENGTH_GROWTH: f64 = 1.2;

/// Default coin unit (coins paid per 1.0 of multiplier)
pub const DEFAULT_COIN_UNIT: u32 = 10;

/// Payout multiplier for a pattern instance:
/// `base(kind) * 1.2^(length - 3)`
pub fn multiplier(kind: ShapeKind, length: u32) -> f64 {
    kind.base_multiplier() * LENGTH_GROWTH.powi(length as i32 - 3)
}

/// Coin award for a multiplier, floored to whole coins
pub fn coin_value(multiplier: f64, coin_unit: u32) -> u64 {
    (multiplier * f64::from(coin_unit)).floor() as u64
}
