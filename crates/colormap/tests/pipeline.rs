//! End-to-end rendering pipeline tests.

use heatview_colormap::{render, render_into, ColorTable, Preset, RenderParams, ScaleType};
use heatview_core::Field;

#[test]
fn preset_render_round_trip() {
    let rows = 16;
    let cols = 24;
    let data: Vec<f32> = (0..rows * cols).map(|i| (i % 37) as f32).collect();
    let field = Field::from_vec(data, rows, cols).unwrap();

    let table = ColorTable::from_preset(Preset::SymGradTurquoise);
    let params = RenderParams::auto_range(&field);

    let img = render(&field, &table, &params).unwrap();
    assert_eq!(img.len(), rows * cols * 4);

    // Preset colors are fully opaque, so every alpha byte is 255.
    assert!(img.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn render_into_matches_allocating_render() {
    let field = Field::from_vec((0..64).map(|i| i as f32).collect(), 8, 8).unwrap();
    let table = ColorTable::from_preset(Preset::Seismic).invert();
    let mut params = RenderParams::with_range(0.0, 63.0);
    params.x_inverted = true;
    params.scale = ScaleType::SymLog;
    params.linthresh = 10.0;
    params.linscale = 2.0;

    let allocated = render(&field, &table, &params).unwrap();

    let mut staged = vec![0u8; 8 * 8 * 4];
    render_into(&field, &table, &params, &mut staged).unwrap();

    assert_eq!(allocated, staged);
}

#[test]
fn inverted_table_mirrors_image() {
    // Inverting the table must equal sampling the mirrored position, so a
    // symmetric range over a symmetric field swaps the two end colors.
    let field = Field::from_vec(vec![0.0f32, 1.0], 1, 2).unwrap();
    let table = ColorTable::from_preset(Preset::Seismic);
    let params = RenderParams::with_range(0.0, 1.0);

    let plain = render(&field, &table, &params).unwrap();
    let flipped = render(&field, &table.clone().invert(), &params).unwrap();

    assert_eq!(&plain[0..4], &flipped[4..8]);
    assert_eq!(&plain[4..8], &flipped[0..4]);
}
