//! # Heatview Colormap
//!
//! Color lookup tables and field-to-RGBA rasterization for heatview.
//!
//! Provides piecewise-linear colormaps defined by (position, RGBA)
//! breakpoints, the named presets shipped with the plotting GUI, value
//! scale transforms (linear / log / symlog), and the rasterizer that turns
//! a `Field` into a dense RGBA pixel buffer. The main entry point is
//! [`render`], or [`render_into`] for a caller-owned buffer.
//!
//! ## Usage
//!
//! ```ignore
//! use heatview_colormap::{ColorTable, Preset, RenderParams, render};
//!
//! let table = ColorTable::from_preset(Preset::Seismic);
//! let params = RenderParams::auto_range(&field);
//! let rgba = render(&field, &table, &params)?;
//! ```

mod lut;
mod maybe_rayon;
mod preset;
mod render;
mod scale;

pub use lut::{Breakpoint, ColorTable, Rgba};
pub use preset::Preset;
pub use render::{render, render_into, RenderParams};
pub use scale::{transform, ScaleType, LOG_FLOOR};
