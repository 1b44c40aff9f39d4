//! # Heatview Core
//!
//! Core types for the heatview false-color rendering engine.
//!
//! This crate provides:
//! - `Field<T>`: Generic 2-D sample grid type
//! - `FieldElement`: Trait bounding usable cell value types
//! - Shared error type for construction and rendering failures

pub mod error;
pub mod field;

pub use error::{Error, Result};
pub use field::{Field, FieldElement};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::{Field, FieldElement};
}
