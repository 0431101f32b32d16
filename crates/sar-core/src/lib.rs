//! `sar-core` — foundational types for the `hexsar` search-and-rescue
//! evaluation framework.
//!
//! This crate is a dependency of every other `sar-*` crate.  It intentionally
//! has no `sar-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `ClusterId`, `HotspotId`                              |
//! | [`geo`]      | `GeoPoint`, haversine distance, bearings, `GeoBounds` |
//! | [`centroid`] | Great-circle centroid of a point set                  |
//! | [`point`]    | `Point` — an identified hotspot coordinate            |
//! | [`rng`]      | `SarRng` — seeded, reproducible randomness            |
//! | [`error`]    | `SarError`, `SarResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod centroid;
pub mod error;
pub mod geo;
pub mod ids;
pub mod point;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use centroid::spherical_centroid;
pub use error::{SarError, SarResult};
pub use geo::{GeoBounds, GeoPoint};
pub use ids::{ClusterId, HotspotId};
pub use point::Point;
pub use rng::SarRng;
