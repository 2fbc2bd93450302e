//! A frame fades the heat map by one step, then runs query → heat map →
//! coverage → analyzer.

use crate::analysis::{AnalysisResult, SignalQualityAnalyzer};
use crate::config::{ConfigError, DetectorConfig};
use crate::coverage::CoverageGrid;
use crate::heatmap::HeatMapGrid;
use crate::signal::{BuriedObject, SignalModel, SignalSample};
use crate::tone::{AudioMode, ToneCue, ToneMapper};
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct FrameReport {
    pub position: Vec2,
    pub sample: SignalSample,
    pub analysis: AnalysisResult,
    pub tone: Option<ToneCue>,
    pub coverage_pct: f32,
}

#[inline]
pub fn clamp_to_canvas(pos: Vec2, width: f32, height: f32) -> Vec2 {
    pos.clamp(Vec2::ZERO, Vec2::new(width.max(0.0), height.max(0.0)))
}

pub struct DetectorSession<R: Rng = StdRng> {
    config: DetectorConfig,
    model: SignalModel<R>,
    heat: HeatMapGrid,
    coverage: CoverageGrid,
    analyzer: SignalQualityAnalyzer,
    tone: ToneMapper,
}

impl DetectorSession<StdRng> {
    pub fn new(config: DetectorConfig) -> Result<Self, ConfigError> {
        let model = SignalModel::new(config.signal.clone(), config.seed);
        Self::with_model(config, model)
    }
}

impl<R: Rng> DetectorSession<R> {
    /// Build a session around an existing model (e.g. one with a test RNG).
    pub fn with_model(config: DetectorConfig, model: SignalModel<R>) -> Result<Self, ConfigError> {
        config.validate()?;
        let (w, h) = (config.canvas_width, config.canvas_height);
        let heat = HeatMapGrid::new(w, h, &config.heat);
        let coverage = CoverageGrid::new(w, h, &config.coverage);
        log::info!(
            "[session] canvas={}x{} heat={}x{} coverage={}x{}",
            w,
            h,
            heat.cols(),
            heat.rows(),
            coverage.cols(),
            coverage.rows()
        );
        Ok(Self {
            analyzer: SignalQualityAnalyzer::new(&config.analyzer),
            tone: ToneMapper::new(&config.tone),
            config,
            model,
            heat,
            coverage,
        })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn model(&self) -> &SignalModel<R> {
        &self.model
    }

    pub fn heat_map(&self) -> &HeatMapGrid {
        &self.heat
    }

    pub fn coverage(&self) -> &CoverageGrid {
        &self.coverage
    }

    pub fn analyzer(&self) -> &SignalQualityAnalyzer {
        &self.analyzer
    }

    pub fn audio_mode(&self) -> AudioMode {
        self.tone.mode()
    }

    pub fn set_audio_mode(&mut self, mode: AudioMode) {
        self.tone.set_mode(mode);
    }

    pub fn set_heat_decay(&mut self, enabled: bool) {
        self.heat.set_decay_enabled(enabled);
    }

    pub fn set_coverage_fade(&mut self, enabled: bool) {
        self.coverage.set_fade_enabled(enabled);
    }

    /// Swap in a new scenario's objects and start over.
    pub fn load_objects(&mut self, objects: Vec<BuriedObject>) {
        self.model.set_objects(objects);
        self.reset();
    }

    pub fn clear_objects(&mut self) {
        self.model.clear_objects();
        self.reset();
    }

    pub fn push_object(&mut self, object: BuriedObject) {
        self.model.push_object(object);
    }

    pub fn reset(&mut self) {
        self.heat.clear();
        self.coverage.reset();
        self.analyzer.reset();
        log::debug!("[session] reset");
    }

    /// Frame without a pointer on the canvas: heat keeps fading, nothing is read.
    pub fn idle(&mut self) {
        self.heat.decay();
    }

    pub fn tick(&mut self, pointer: Vec2) -> FrameReport {
        self.tick_at(pointer, Instant::now())
    }

    pub fn tick_at(&mut self, pointer: Vec2, now: Instant) -> FrameReport {
        let pos = clamp_to_canvas(pointer, self.config.canvas_width, self.config.canvas_height);
        self.heat.decay();
        let sample = self.model.query(pos);

        self.heat.update(pos, sample.strength, sample.metal);
        self.coverage.update_at(pos, self.config.coverage.sweep_radius, now);
        let analysis = self.analyzer.update_at(&sample, now);

        FrameReport {
            position: pos,
            tone: self.tone.tone_for(&sample),
            coverage_pct: self.coverage.percentage_covered(),
            sample,
            analysis,
        }
    }
}
