//! # gw-core — Shape kinds, pattern definitions, and payout valuation
//!
//! Foundation types for the gridwin pattern engine: the closed set of
//! winning shape kinds, their coordinate offset templates, the immutable
//! base pattern definitions, grid dimension/snapshot types, and the pure
//! valuation math that turns (shape, length) into a multiplier and a
//! coin value.
//!
//! Everything here is pure data and pure functions; session state and
//! matching live in `gw-engine`.

pub mod grid;
pub mod shapes;
pub mod value;

pub use grid::*;
pub use shapes::*;
pub use value::*;
