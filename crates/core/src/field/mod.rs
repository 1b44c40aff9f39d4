//! 2-D sample grid types

mod element;
mod grid;

pub use element::FieldElement;
pub use grid::Field;
