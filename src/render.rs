use crate::constants::*;
use detector_core::{CoverageGrid, FrameReport, HeatMapConfig, HeatMapGrid};
use instant::Instant;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
fn rgba(rgb: [u8; 3], alpha: f32) -> JsValue {
    JsValue::from_str(&format!(
        "rgba({},{},{},{:.3})",
        rgb[0],
        rgb[1],
        rgb[2],
        alpha.clamp(0.0, 1.0)
    ))
}

#[allow(deprecated)]
pub fn clear(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&JsValue::from_str(GROUND_COLOR));
    ctx.fill_rect(0.0, 0.0, width, height);
}

#[allow(deprecated)]
pub fn paint_coverage(ctx: &web::CanvasRenderingContext2d, grid: &CoverageGrid, now: Instant) {
    let size = grid.cell_size() as f64;
    for cy in 0..grid.rows() {
        for cx in 0..grid.cols() {
            let opacity = grid.opacity_at(cx, cy, now);
            if opacity <= 0.0 {
                continue;
            }
            ctx.set_fill_style(&rgba(COVERAGE_RGB, opacity * COVERAGE_MAX_ALPHA));
            ctx.fill_rect(cx as f64 * size, cy as f64 * size, size, size);
        }
    }
}

#[allow(deprecated)]
pub fn paint_heat(ctx: &web::CanvasRenderingContext2d, grid: &HeatMapGrid, config: &HeatMapConfig) {
    let size = grid.cell_size() as f64;
    for (cx, cy, paint) in grid.visible_cells(config) {
        ctx.set_fill_style(&rgba(paint.rgb, paint.alpha));
        ctx.fill_rect(cx as f64 * size, cy as f64 * size, size, size);
    }
}

#[allow(deprecated)]
pub fn paint_coil(ctx: &web::CanvasRenderingContext2d, report: &FrameReport, radius: f32) {
    let stroke = if report.analysis.target_locked {
        COIL_LOCKED_STROKE
    } else {
        COIL_STROKE
    };
    ctx.set_stroke_style(&JsValue::from_str(stroke));
    ctx.set_line_width(COIL_LINE_WIDTH);
    ctx.begin_path();
    _ = ctx.arc(
        report.position.x as f64,
        report.position.y as f64,
        radius as f64,
        0.0,
        TAU,
    );
    ctx.stroke();
}
