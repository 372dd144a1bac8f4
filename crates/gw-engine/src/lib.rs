//! # gw-engine — Dynamic pattern catalog and win evaluation
//!
//! Evaluates a rectangular symbol grid against a small catalog of winning
//! shapes whose sizes track the grid: external game modifiers (charms,
//! timed phone-call effects) grow or shrink the grid at runtime, and the
//! catalog re-extends, retires, and re-instantiates pattern instances to
//! fit.
//!
//! ## Architecture
//!
//! ```text
//! PatternSession
//!     │
//!     ├── EngineConfig (base dims, floor, cap, coin unit, definitions)
//!     ├── ResizeLedger (modifier ledger → net GridDims)
//!     └── PatternCatalog (active instances, resize-driven extension)
//!           │
//!           v
//!     evaluate(GridSnapshot) → EvaluationResult
//! ```
//!
//! Each game turn is one atomic pipeline: apply/expire modifiers, extend
//! the catalog, evaluate the grid. A session is a plain owned value with
//! no shared state, so running independent sessions in parallel needs no
//! synchronization.

pub mod catalog;
pub mod config;
pub mod matcher;
pub mod resize;
pub mod session;

pub use catalog::*;
pub use config::*;
pub use matcher::*;
pub use resize::*;
pub use session::*;
