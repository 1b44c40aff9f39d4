//! Field-to-RGBA rasterization.

use crate::lut::ColorTable;
use crate::maybe_rayon::*;
use crate::scale::{transform, ScaleType};
use heatview_core::{Error, Field, FieldElement, Result};

/// Parameters for a render call.
#[derive(Debug, Clone)]
pub struct RenderParams {
    /// Lower bound of the colorbar range.
    pub zmin: f32,
    /// Upper bound of the colorbar range. Must differ from `zmin`.
    pub zmax: f32,
    /// Whether the x axis is inverted.
    pub x_inverted: bool,
    /// Whether the y axis is inverted.
    ///
    /// Plotting coordinates place row 0 at the bottom while the field and
    /// the destination image are top-to-bottom; with `y_inverted = false`
    /// the renderer flips rows to reconcile the two conventions.
    pub y_inverted: bool,
    /// Scale applied to samples before normalization.
    pub scale: ScaleType,
    /// Half-width of the symlog linear region. Must be > 0 for SymLog.
    pub linthresh: f32,
    /// Symlog log-compression factor (decades per linear unit). Must be > 0.
    pub linscale: f32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            zmin: 0.0,
            zmax: 1.0,
            x_inverted: false,
            y_inverted: false,
            scale: ScaleType::Linear,
            linthresh: 1.0,
            linscale: 1.0,
        }
    }
}

impl RenderParams {
    /// Create params with an explicit colorbar range.
    pub fn with_range(zmin: f32, zmax: f32) -> Self {
        Self {
            zmin,
            zmax,
            ..Default::default()
        }
    }

    /// Derive the colorbar range from the data, as the host does when the
    /// user has not pinned one.
    ///
    /// Falls back to [0, 1] for empty or all-invalid fields and widens a
    /// constant field by +1 so the range never degenerates.
    pub fn auto_range<T: FieldElement>(field: &Field<T>) -> Self {
        let (zmin, zmax) = match field.value_range() {
            Some((min, max)) if max > min => (min, max),
            Some((min, _)) => (min, min + 1.0),
            None => (0.0, 1.0),
        };
        Self::with_range(zmin, zmax)
    }

    fn validate(&self) -> Result<()> {
        if self.zmax == self.zmin {
            return Err(Error::DegenerateRange {
                zmin: self.zmin,
                zmax: self.zmax,
            });
        }
        if self.scale == ScaleType::SymLog {
            if self.linthresh <= 0.0 {
                return Err(Error::InvalidParameter {
                    name: "linthresh",
                    value: self.linthresh,
                    reason: "must be positive",
                });
            }
            if self.linscale <= 0.0 {
                return Err(Error::InvalidParameter {
                    name: "linscale",
                    value: self.linscale,
                    reason: "must be positive",
                });
            }
        }
        Ok(())
    }
}

/// Render a field into a caller-owned RGBA buffer.
///
/// `out` must be exactly `rows * cols * 4` bytes; it is written in
/// row-major destination order and nothing is written when an error is
/// returned. Rows are independent, so the row loop runs in parallel when
/// the `parallel` feature is enabled.
pub fn render_into<T: FieldElement>(
    field: &Field<T>,
    table: &ColorTable,
    params: &RenderParams,
    out: &mut [u8],
) -> Result<()> {
    let rows = field.rows();
    let cols = field.cols();

    let expected = rows * cols * 4;
    if out.len() != expected {
        return Err(Error::BufferSizeMismatch {
            expected,
            actual: out.len(),
        });
    }
    params.validate()?;

    if rows == 0 || cols == 0 {
        return Ok(());
    }

    let zdiff = params.zmax - params.zmin;

    out.par_chunks_mut(cols * 4)
        .enumerate()
        .for_each(|(row, row_out)| {
            let r = if params.y_inverted { row } else { rows - row - 1 };
            for col in 0..cols {
                let c = if params.x_inverted { cols - col - 1 } else { col };

                // r < rows and c < cols by construction
                let z = unsafe { field.get_unchecked(r, c) }
                    .to_f32()
                    .unwrap_or(f32::NAN);

                let zt = transform(z, params.scale, params.linthresh, params.linscale);
                let zrel = (zt - params.zmin) / zdiff;

                let offset = col * 4;
                row_out[offset..offset + 4].copy_from_slice(&table.sample(zrel).to_array());
            }
        });

    Ok(())
}

/// Render a field into a freshly allocated RGBA buffer.
///
/// Returns a `Vec<u8>` of length `rows * cols * 4` in row-major order,
/// suitable for uploading as an `ImageData`/texture.
pub fn render<T: FieldElement>(
    field: &Field<T>,
    table: &ColorTable,
    params: &RenderParams,
) -> Result<Vec<u8>> {
    let mut out = vec![0u8; field.rows() * field.cols() * 4];
    render_into(field, table, params, &mut out)?;
    Ok(out)
}
