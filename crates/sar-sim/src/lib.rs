//! `sar-sim` — the search-simulation loop.
//!
//! # Crate layout
//!
//! | Module        | Contents                                      |
//! |---------------|-----------------------------------------------|
//! | [`detection`] | `DetectionModel` — per-visit stochastic draw  |
//! | [`ledger`]    | `DetectionLedger` — monotone confirmation map |
//! | [`simulator`] | `SearchSimulator`, `SimulatorConfig`          |
//! | [`output`]    | `SimulationStep`, `SearchOutput`              |
//! | [`error`]     | `SimError`, `SimResult<T>`                    |

pub mod detection;
pub mod error;
pub mod ledger;
pub mod output;
pub mod simulator;


pub use detection::{DEFAULT_FAILURE_ONE_IN, DetectionModel};
pub use error::{SimError, SimResult};
pub use ledger::DetectionLedger;
pub use output::{SearchOutput, SimulationStep};
pub use simulator::{SearchSimulator, SimulatorConfig};
