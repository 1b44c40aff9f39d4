//! WebAssembly bindings for the heatview rendering engine.
//!
//! Exposes the field rasterizer to JavaScript. The LUT crosses the
//! boundary as parallel arrays (`positions[i]` pairs with
//! `colors[4*i .. 4*i+4]`), the field as a flat row-major `f32` buffer,
//! and the result comes back as an RGBA byte buffer sized
//! `rows * cols * 4`, ready for `ImageData`.
//!
//! Besides the wasm-bindgen entry point there is a raw `extern "C"` ABI
//! (plus an `alloc`/`dealloc` staging pair) for hosts that address linear
//! memory directly instead of going through the generated glue.

use wasm_bindgen::prelude::*;

use heatview_colormap::{render_into, ColorTable, RenderParams, ScaleType};
use heatview_core::Field;

#[allow(clippy::too_many_arguments)]
fn build_and_render(
    matrix: &[f32],
    rows: usize,
    cols: usize,
    lut_positions: &[f32],
    lut_colors: &[u8],
    lut_inverted: bool,
    zmin: f32,
    zmax: f32,
    x_inverted: bool,
    y_inverted: bool,
    scale: u8,
    linthresh: f32,
    linscale: f32,
    out: &mut [u8],
) -> Result<(), String> {
    let field = Field::from_vec(matrix.to_vec(), rows, cols).map_err(|e| e.to_string())?;
    let table = ColorTable::from_raw(lut_positions, lut_colors)
        .map_err(|e| e.to_string())?
        .with_inverted(lut_inverted);
    let scale = ScaleType::from_code(scale).ok_or_else(|| format!("unknown scale code {scale}"))?;

    let params = RenderParams {
        zmin,
        zmax,
        x_inverted,
        y_inverted,
        scale,
        linthresh,
        linscale,
    };

    render_into(&field, &table, &params, out).map_err(|e| e.to_string())
}

/// Render a row-major `f32` field into a fresh RGBA buffer.
///
/// `scale`: 0 = linear, 1 = log, 2 = symlog (`linthresh`/`linscale` apply
/// to symlog only).
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn render_rgba(
    matrix: &[f32],
    rows: usize,
    cols: usize,
    lut_positions: &[f32],
    lut_colors: &[u8],
    lut_inverted: bool,
    zmin: f32,
    zmax: f32,
    x_inverted: bool,
    y_inverted: bool,
    scale: u8,
    linthresh: f32,
    linscale: f32,
) -> Result<Vec<u8>, JsValue> {
    let mut out = vec![0u8; rows * cols * 4];
    build_and_render(
        matrix,
        rows,
        cols,
        lut_positions,
        lut_colors,
        lut_inverted,
        zmin,
        zmax,
        x_inverted,
        y_inverted,
        scale,
        linthresh,
        linscale,
        &mut out,
    )
    .map_err(|e| JsValue::from_str(&e))?;
    Ok(out)
}

// ===========================================================================
// Raw ABI
// ===========================================================================

/// Render through raw pointers into a caller-owned output buffer.
///
/// Returns `false` when validation fails; the output buffer is untouched
/// in that case.
///
/// # Safety
/// `matrix` must point to `rows * cols` readable `f32`s, `lut_positions`
/// to `lut_count` `f32`s, `lut_colors` to `4 * lut_count` bytes, and `out`
/// to `rows * cols * 4` writable bytes, all valid for the duration of the
/// call.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn render_rgba_raw(
    matrix: *const f32,
    rows: usize,
    cols: usize,
    lut_positions: *const f32,
    lut_colors: *const u8,
    lut_count: usize,
    lut_inverted: bool,
    zmin: f32,
    zmax: f32,
    x_inverted: bool,
    y_inverted: bool,
    scale: u8,
    linthresh: f32,
    linscale: f32,
    out: *mut u8,
) -> bool {
    let matrix = unsafe { std::slice::from_raw_parts(matrix, rows * cols) };
    let positions = unsafe { std::slice::from_raw_parts(lut_positions, lut_count) };
    let colors = unsafe { std::slice::from_raw_parts(lut_colors, 4 * lut_count) };
    let out = unsafe { std::slice::from_raw_parts_mut(out, rows * cols * 4) };

    build_and_render(
        matrix,
        rows,
        cols,
        positions,
        colors,
        lut_inverted,
        zmin,
        zmax,
        x_inverted,
        y_inverted,
        scale,
        linthresh,
        linscale,
        out,
    )
    .is_ok()
}

/// Reserve `len` bytes of linear memory for staging buffers across the
/// boundary. Pair every call with [`dealloc`].
#[no_mangle]
pub extern "C" fn alloc(len: usize) -> *mut u8 {
    let mut buf = Vec::<u8>::with_capacity(len);
    let ptr = buf.as_mut_ptr();
    std::mem::forget(buf);
    ptr
}

/// Release memory obtained from [`alloc`].
///
/// # Safety
/// `ptr` must come from an `alloc(len)` call with the same `len`, and must
/// not be released twice.
#[no_mangle]
pub unsafe extern "C" fn dealloc(ptr: *mut u8, len: usize) {
    drop(unsafe { Vec::from_raw_parts(ptr, 0, len) });
}

#[cfg(test)]
mod tests {
    use super::*;

    const BW_POSITIONS: [f32; 2] = [0.0, 1.0];
    const BW_COLORS: [u8; 8] = [0, 0, 0, 255, 255, 255, 255, 255];

    // `render_rgba` itself only adds JsValue conversion, which cannot run
    // outside a wasm host; the logic underneath is what gets tested here.
    #[test]
    fn renders_through_flat_arguments() {
        let matrix = [0.0f32, 1.0, 2.0, 3.0];
        let mut img = [0u8; 16];
        build_and_render(
            &matrix,
            2,
            2,
            &BW_POSITIONS,
            &BW_COLORS,
            false,
            0.0,
            3.0,
            false,
            false,
            0,
            1.0,
            1.0,
            &mut img,
        )
        .unwrap();
        // Default y-flip: field value 0 lands on the bottom image row.
        assert_eq!(&img[8..12], &[0, 0, 0, 255]);
    }

    #[test]
    fn rejects_unknown_scale_code() {
        let matrix = [0.0f32, 1.0];
        let mut img = [0u8; 8];
        let result = build_and_render(
            &matrix,
            1,
            2,
            &BW_POSITIONS,
            &BW_COLORS,
            false,
            0.0,
            1.0,
            false,
            false,
            9,
            1.0,
            1.0,
            &mut img,
        );
        assert!(result.is_err());
    }

    #[test]
    fn raw_abi_round_trip() {
        let matrix = [0.0f32, 3.0];
        let mut out = [1u8; 8];
        let ok = unsafe {
            render_rgba_raw(
                matrix.as_ptr(),
                1,
                2,
                BW_POSITIONS.as_ptr(),
                BW_COLORS.as_ptr(),
                2,
                false,
                0.0,
                3.0,
                false,
                false,
                0,
                1.0,
                1.0,
                out.as_mut_ptr(),
            )
        };
        assert!(ok);
        assert_eq!(&out[0..4], &[0, 0, 0, 255]);
        assert_eq!(&out[4..8], &[255, 255, 255, 255]);
    }

    #[test]
    fn raw_abi_reports_failure() {
        let matrix = [0.0f32, 3.0];
        let mut out = [9u8; 8];
        let ok = unsafe {
            render_rgba_raw(
                matrix.as_ptr(),
                1,
                2,
                BW_POSITIONS.as_ptr(),
                BW_COLORS.as_ptr(),
                2,
                false,
                2.0,
                2.0, // degenerate range
                false,
                false,
                0,
                1.0,
                1.0,
                out.as_mut_ptr(),
            )
        };
        assert!(!ok);
        assert_eq!(out, [9u8; 8]);
    }

    #[test]
    fn alloc_dealloc_round_trip() {
        let ptr = alloc(64);
        assert!(!ptr.is_null());
        unsafe { dealloc(ptr, 64) };
    }
}
