//! `sar-grid` — hexagonal spatial index.
//!
//! # Crate layout
//!
//! | Module    | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | [`cell`]  | `CellId` — opaque hexagonal cell token               |
//! | [`index`] | `SpatialIndex` trait, `HexGrid` axial implementation |
//! | [`error`] | `GridError`, `GridResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod cell;
pub mod error;
pub mod index;

#[cfg(test)]
mod tests;

pub use cell::CellId;
pub use error::{GridError, GridResult};
pub use index::{HexGrid, SpatialIndex};
