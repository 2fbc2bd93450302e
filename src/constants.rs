//! Front-end drawing and audio tuning constants.
//!
//! Model calibration lives in `detector_core::constants`; these only shape
//! how the model's output is shown and heard.

// Canvas element the app attaches to when no id is given
pub const DEFAULT_CANVAS_ID: &str = "detector-canvas";

// Status elements (optional; missing ids are skipped)
pub const STATUS_STRENGTH_ID: &str = "status-strength";
pub const STATUS_VDI_ID: &str = "status-vdi";
pub const STATUS_METAL_ID: &str = "status-metal";
pub const STATUS_COVERAGE_ID: &str = "status-coverage";
pub const STATUS_QUALITY_ID: &str = "status-quality";
pub const STATUS_LOCK_ID: &str = "status-lock";

// Background and coverage tint
pub const GROUND_COLOR: &str = "#3b2f22";
pub const COVERAGE_RGB: [u8; 3] = [120, 170, 255];
pub const COVERAGE_MAX_ALPHA: f32 = 0.18;

// Coil marker
pub const COIL_STROKE: &str = "rgba(255,255,255,0.8)";
pub const COIL_LOCKED_STROKE: &str = "rgba(120,255,140,0.95)";
pub const COIL_LINE_WIDTH: f64 = 2.0;

// Audio envelope
pub const TONE_RAMP_SEC: f64 = 0.015; // gain ramp per frame to avoid clicks
