use crate::constants::*;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SignalConfig {
    pub detection_range: f32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            detection_range: DETECTION_RANGE,
        }
    }
}

/// Heat-map resolution, paint gate and per-frame decay.
#[derive(Clone, Debug)]
pub struct HeatMapConfig {
    pub cell_size: f32,
    pub paint_threshold: f32,
    pub decay_rate: f32,
    pub decay_enabled: bool,
    pub epsilon: f32,
    pub visible_threshold: f32,
}

impl Default for HeatMapConfig {
    fn default() -> Self {
        Self {
            cell_size: HEAT_CELL_SIZE,
            paint_threshold: PAINT_THRESHOLD,
            decay_rate: HEAT_DECAY_RATE,
            decay_enabled: true,
            epsilon: HEAT_EPSILON,
            visible_threshold: HEAT_VISIBLE_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CoverageConfig {
    pub cell_size: f32,
    pub sweep_radius: f32,
    pub fade_window: Duration,
    pub fade_enabled: bool,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            cell_size: COVERAGE_CELL_SIZE,
            sweep_radius: SWEEP_RADIUS,
            fade_window: Duration::from_secs_f32(COVERAGE_FADE_SECS),
            fade_enabled: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AnalyzerConfig {
    pub capacity: usize,
    pub min_samples: usize,
    pub noise_floor: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            capacity: ANALYSIS_WINDOW,
            min_samples: ANALYSIS_MIN_SAMPLES,
            noise_floor: NOISE_FLOOR,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ToneConfig {
    pub threshold: f32,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            threshold: AUDIO_THRESHOLD,
        }
    }
}

/// Full configuration of a detector session.
#[derive(Clone, Debug)]
pub struct DetectorConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Seed for the VDI/phase noise source.
    pub seed: u64,
    pub signal: SignalConfig,
    pub heat: HeatMapConfig,
    pub coverage: CoverageConfig,
    pub analyzer: AnalyzerConfig,
    pub tone: ToneConfig,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            seed: DEFAULT_SEED,
            signal: SignalConfig::default(),
            heat: HeatMapConfig::default(),
            coverage: CoverageConfig::default(),
            analyzer: AnalyzerConfig::default(),
            tone: ToneConfig::default(),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("canvas must have a positive size, got {0}x{1}")]
    Canvas(f32, f32),
    #[error("detection range must be positive, got {0}")]
    DetectionRange(f32),
    #[error("{0} cell size must be positive, got {1}")]
    CellSize(&'static str, f32),
    #[error("{0} grid would need {1} cells, above the per-grid limit")]
    GridTooLarge(&'static str, f64),
    #[error("heat decay rate must lie in (0, 1), got {0}")]
    DecayRate(f32),
    #[error("analyzer capacity {capacity} is below its minimum sample count {min_samples}")]
    AnalyzerWindow { capacity: usize, min_samples: usize },
}

// Cell count of a grid covering the canvas, in f64 so huge canvases cannot overflow.
fn grid_cells(width: f32, height: f32, cell_size: f32) -> f64 {
    let cols = (width as f64 / cell_size as f64).ceil().max(1.0);
    let rows = (height as f64 / cell_size as f64).ceil().max(1.0);
    cols * rows
}

impl DetectorConfig {
    /// Build a default config for a canvas of the given size.
    pub fn for_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(ConfigError::Canvas(self.canvas_width, self.canvas_height));
        }
        if !(self.signal.detection_range > 0.0) {
            return Err(ConfigError::DetectionRange(self.signal.detection_range));
        }
        if !(self.heat.cell_size > 0.0) {
            return Err(ConfigError::CellSize("heat", self.heat.cell_size));
        }
        if !(self.coverage.cell_size > 0.0) {
            return Err(ConfigError::CellSize("coverage", self.coverage.cell_size));
        }
        let grids = [
            ("heat", self.heat.cell_size),
            ("coverage", self.coverage.cell_size),
        ];
        for (label, size) in grids {
            let cells = grid_cells(self.canvas_width, self.canvas_height, size);
            if !(cells <= MAX_GRID_CELLS as f64) {
                return Err(ConfigError::GridTooLarge(label, cells));
            }
        }
        if !(self.heat.decay_rate > 0.0 && self.heat.decay_rate < 1.0) {
            return Err(ConfigError::DecayRate(self.heat.decay_rate));
        }
        if self.analyzer.capacity < self.analyzer.min_samples {
            return Err(ConfigError::AnalyzerWindow {
                capacity: self.analyzer.capacity,
                min_samples: self.analyzer.min_samples,
            });
        }
        Ok(())
    }
}
