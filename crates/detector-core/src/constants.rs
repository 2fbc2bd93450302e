// Default calibration values for the detector model. These seed the
// `*Config` structs; the model itself only ever reads the config it was
// constructed with.

// Signal model
pub const DETECTION_RANGE: f32 = 150.0; // canvas px beyond which an object is silent
pub const FALLOFF_EXPONENT: i32 = 4; // sharp hot spot rather than a gentle gradient
pub const MAX_STRENGTH: f32 = 100.0;
pub const DEFAULT_SEED: u64 = 0x5EED_D37E_C70B;

// Heat map
pub const PAINT_THRESHOLD: f32 = 30.0; // updates below this never reach the grid
pub const HEAT_CELL_SIZE: f32 = 10.0; // px per heat cell
pub const HEAT_DECAY_RATE: f32 = 0.98; // multiplicative, once per frame
pub const HEAT_EPSILON: f32 = 0.5; // values below this snap to exactly zero
pub const HEAT_VISIBLE_THRESHOLD: f32 = 5.0; // painter skips cells below this
pub const HEAT_MAX_ALPHA: f32 = 0.85;
pub const SPREAD_BASE_RADIUS: f32 = 2.0; // cells, at zero strength
pub const SPREAD_RADIUS_SPAN: f32 = 3.0; // extra cells at full strength

// Coverage
pub const COVERAGE_CELL_SIZE: f32 = 20.0; // px per coverage cell
pub const SWEEP_RADIUS: f32 = 40.0; // px marked around the coil per frame
pub const COVERAGE_FADE_SECS: f32 = 8.0; // linear fade window for rendering

// Signal quality analyzer
pub const ANALYSIS_WINDOW: usize = 20;
pub const ANALYSIS_MIN_SAMPLES: usize = 5;
pub const NOISE_FLOOR: f32 = 10.0;
pub const STABILITY_MIN_READINGS: usize = 3;
pub const STABILITY_SD_WEIGHT: f32 = 5.0;
pub const TREND_MIN_SAMPLES: usize = 10;
pub const TREND_BAND: f32 = 5.0;
pub const LOCK_STABILITY: f32 = 70.0;
pub const LOCK_STRENGTH: f32 = 40.0;

// Quality ladder, checked top-down
pub const EXCELLENT_CONFIDENCE: f32 = 80.0;
pub const EXCELLENT_STABILITY: f32 = 75.0;
pub const EXCELLENT_STRENGTH: f32 = 60.0;
pub const GOOD_CONFIDENCE: f32 = 60.0;
pub const GOOD_STABILITY: f32 = 60.0;
pub const FAIR_CONFIDENCE: f32 = 40.0;
pub const FAIR_STABILITY: f32 = 40.0;
pub const POOR_FLOOR: f32 = 20.0; // confidence or stability above this is at least POOR

// Repeatability
pub const ERRATIC_BAND: (f32, f32) = (0.3, 0.7); // presence ratios scored as erratic
pub const REPEATABLE_BASE: f32 = 80.0;
pub const REPEATABLE_GAIN: f32 = 40.0; // per unit distance of the ratio from 0.5
pub const ERRATIC_SCORE: f32 = 40.0;

// Confidence blend weights
pub const CONFIDENCE_STABILITY_WEIGHT: f32 = 0.4;
pub const CONFIDENCE_REPEATABILITY_WEIGHT: f32 = 0.3;
pub const CONFIDENCE_STRENGTH_WEIGHT: f32 = 0.3;
pub const CONFIDENCE_STRENGTH_GAIN: f32 = 1.2;

// Audio feedback
pub const AUDIO_THRESHOLD: f32 = 30.0;
pub const TONE_GAIN_BASE: f32 = 0.15;
pub const TONE_GAIN_SPAN: f32 = 0.45;
pub const BEEP_PERIOD_SLOW_MS: f32 = 600.0;
pub const BEEP_PERIOD_FAST_MS: f32 = 120.0;
pub const BEEP_DUTY: f32 = 0.4; // fraction of each beep period that sounds

// Canvas
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
pub const MAX_GRID_CELLS: usize = 1 << 22; // per grid; larger canvases are rejected
