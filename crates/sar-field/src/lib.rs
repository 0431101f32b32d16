//! `sar-field` — probability-of-presence surface over a hexagonal
//! neighborhood.
//!
//! | Module    | Contents                          |
//! |-----------|-----------------------------------|
//! | [`field`] | `ProbabilityField`                |
//! | [`error`] | `FieldError`, `FieldResult<T>`    |

pub mod error;
pub mod field;

#[cfg(test)]
mod tests;

pub use error::{FieldError, FieldResult};
pub use field::ProbabilityField;
