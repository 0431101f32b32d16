//! `sar-mission` — the run-level orchestrator.
//!
//! Ties the framework together: generates a scenario from a seed, asks the
//! registered `ClusterFinder` to segment the hotspots, then for each cluster
//! builds a probability field, runs the search simulator with a path finder
//! from the registered factory, and collects the metrics.
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`config`]   | `MissionConfig` — every knob of a run            |
//! | [`scenario`] | `Scenario` — hotspot and casualty placement      |
//! | [`mission`]  | `Mission`, `MissionReport` — the orchestrator    |
//! | [`error`]    | `MissionError`, `MissionResult<T>`               |

pub mod config;
pub mod error;
pub mod mission;
pub mod scenario;


pub use config::MissionConfig;
pub use error::{MissionError, MissionResult};
pub use mission::{Mission, MissionReport};
pub use scenario::{CASUALTY_SCATTER_DEG, Casualty, Scenario};
