//! Error types for heatview

use thiserror::Error;

/// Main error type for heatview operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid field dimensions: {rows}x{cols} does not match data length {len}")]
    InvalidDimensions { rows: usize, cols: usize, len: usize },

    #[error("Index out of bounds: ({row}, {col}) in field of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid color table: {reason}")]
    InvalidColorTable { reason: &'static str },

    #[error("Degenerate value range: zmin = zmax = {zmin}")]
    DegenerateRange { zmin: f32, zmax: f32 },

    #[error("Output buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },
}

/// Result type alias for heatview operations
pub type Result<T> = std::result::Result<T, Error>;
