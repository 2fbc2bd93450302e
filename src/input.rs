use glam::Vec2;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    /// Pointer is currently over the canvas.
    pub inside: bool,
}

// Pointer position in canvas backing-store pixels, clamped to the canvas.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let w_css = rect.width() as f32;
    let h_css = rect.height() as f32;
    if w_css <= 0.0 || h_css <= 0.0 {
        return Vec2::ZERO;
    }
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / w_css) * canvas.width() as f32;
    let sy = (y_css / h_css) * canvas.height() as f32;
    detector_core::clamp_to_canvas(
        Vec2::new(sx, sy),
        canvas.width() as f32,
        canvas.height() as f32,
    )
}
