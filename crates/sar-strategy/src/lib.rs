//! `sar-strategy` — the extension points for user code.
//!
//! The framework core orchestrates and scores strategies but never depends on
//! a concrete implementation: region segmentation goes through
//! [`ClusterFinder`] and per-step movement through [`PathFinder`].  Strategy
//! errors are opaque to the core and propagate uncaught to the orchestrator.

pub mod error;
pub mod traits;


pub use error::{StrategyError, StrategyResult};
pub use traits::{ClusterFinder, PathFinder, PathFinderFactory};
