//! Running-window statistics over recent detector readings.
//!
//! Every result is a pure function of the window. Until the window holds
//! `min_samples` readings the analyzer reports [`AnalysisResult::default`]
//! (quality `Unknown`, everything zeroed, no lock, stable trend).

use crate::config::AnalyzerConfig;
use crate::constants::*;
use crate::decay::elapsed_between;
use crate::signal::SignalSample;
use instant::Instant;
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignalQuality {
    #[default]
    Unknown,
    Junk,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SignalQuality {
    /// Priority ladder, evaluated top-down; the first matching rung wins.
    pub fn classify(confidence: f32, stability: f32, avg_strength: f32) -> Self {
        if confidence > EXCELLENT_CONFIDENCE
            && stability > EXCELLENT_STABILITY
            && avg_strength > EXCELLENT_STRENGTH
        {
            SignalQuality::Excellent
        } else if confidence > GOOD_CONFIDENCE && stability > GOOD_STABILITY {
            SignalQuality::Good
        } else if confidence > FAIR_CONFIDENCE && stability > FAIR_STABILITY {
            SignalQuality::Fair
        } else if confidence > POOR_FLOOR || stability > POOR_FLOOR {
            SignalQuality::Poor
        } else {
            SignalQuality::Junk
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SignalQuality::Unknown => "UNKNOWN",
            SignalQuality::Junk => "JUNK",
            SignalQuality::Poor => "POOR",
            SignalQuality::Fair => "FAIR",
            SignalQuality::Good => "GOOD",
            SignalQuality::Excellent => "EXCELLENT",
        }
    }
}

impl fmt::Display for SignalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Trend {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Increasing => "INCREASING",
            Trend::Decreasing => "DECREASING",
            Trend::Stable => "STABLE",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisResult {
    pub stability: f32,
    pub repeatability: f32,
    pub confidence: f32,
    pub avg_strength: f32,
    pub quality: SignalQuality,
    pub target_locked: bool,
    pub locked_vdi: Option<f32>,
    pub trend: Trend,
}

#[derive(Clone, Copy, Debug)]
struct WindowEntry {
    strength: f32,
    vdi: Option<f32>,
    at: Instant,
}

pub struct SignalQualityAnalyzer {
    config: AnalyzerConfig,
    window: VecDeque<WindowEntry>,
    locked: bool,
    last: AnalysisResult,
}

fn mean(values: impl Iterator<Item = f32>) -> Option<f32> {
    let (sum, n) = values.fold((0.0f32, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f32)
}

impl SignalQualityAnalyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            config: config.clone(),
            window: VecDeque::with_capacity(config.capacity + 1),
            locked: false,
            last: AnalysisResult::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Most recent result.
    pub fn last(&self) -> &AnalysisResult {
        &self.last
    }

    /// Time covered by the window, oldest to newest reading.
    pub fn window_span(&self) -> Duration {
        match (self.window.front(), self.window.back()) {
            (Some(first), Some(last)) => elapsed_between(first.at, last.at),
            _ => Duration::ZERO,
        }
    }

    pub fn update(&mut self, sample: &SignalSample) -> AnalysisResult {
        self.update_at(sample, Instant::now())
    }

    pub fn update_at(&mut self, sample: &SignalSample, now: Instant) -> AnalysisResult {
        self.window.push_back(WindowEntry {
            strength: sample.strength,
            vdi: sample.vdi,
            at: now,
        });
        while self.window.len() > self.config.capacity {
            self.window.pop_front();
        }

        let result = if self.window.len() < self.config.min_samples {
            AnalysisResult::default()
        } else {
            self.analyze()
        };

        if result.target_locked != self.locked {
            if result.target_locked {
                log::info!(
                    "[analysis] target lock acquired vdi={:.1}",
                    result.locked_vdi.unwrap_or_default()
                );
            } else {
                log::info!("[analysis] target lock lost");
            }
            self.locked = result.target_locked;
        }
        self.last = result.clone();
        result
    }

    pub fn reset(&mut self) {
        self.window.clear();
        self.locked = false;
        self.last = AnalysisResult::default();
    }

    fn analyze(&self) -> AnalysisResult {
        let stability = self.stability();
        let repeatability = self.repeatability();
        let avg_strength = mean(self.window.iter().map(|e| e.strength)).unwrap_or(0.0);
        let confidence = CONFIDENCE_STABILITY_WEIGHT * stability
            + CONFIDENCE_REPEATABILITY_WEIGHT * repeatability
            + CONFIDENCE_STRENGTH_WEIGHT * (avg_strength * CONFIDENCE_STRENGTH_GAIN).min(100.0);
        let quality = SignalQuality::classify(confidence, stability, avg_strength);

        let target_locked = stability > LOCK_STABILITY && avg_strength > LOCK_STRENGTH;
        let locked_vdi = if target_locked {
            mean(self.window.iter().filter_map(|e| e.vdi))
        } else {
            None
        };

        AnalysisResult {
            stability,
            repeatability,
            confidence,
            avg_strength,
            quality,
            target_locked,
            locked_vdi,
            trend: self.trend(),
        }
    }

    /// Spread of VDI readings among entries above the noise floor.
    fn stability(&self) -> f32 {
        let floor = self.config.noise_floor;
        let readings: Vec<f32> = self
            .window
            .iter()
            .filter(|e| e.strength > floor)
            .filter_map(|e| e.vdi)
            .collect();
        if readings.len() < STABILITY_MIN_READINGS {
            return 0.0;
        }
        let n = readings.len() as f32;
        let mu = readings.iter().sum::<f32>() / n;
        let var = readings.iter().map(|v| (v - mu) * (v - mu)).sum::<f32>() / n;
        (100.0 - var.sqrt() * STABILITY_SD_WEIGHT).clamp(0.0, 100.0)
    }

    /// Rewards a signal that is consistently present or consistently absent.
    fn repeatability(&self) -> f32 {
        if self.window.is_empty() {
            return 0.0;
        }
        let floor = self.config.noise_floor;
        let present = self.window.iter().filter(|e| e.strength > floor).count();
        let p = present as f32 / self.window.len() as f32;
        let (lo, hi) = ERRATIC_BAND;
        if !(lo..=hi).contains(&p) {
            (REPEATABLE_BASE + (p - 0.5).abs() * REPEATABLE_GAIN).min(100.0)
        } else {
            ERRATIC_SCORE
        }
    }

    fn trend(&self) -> Trend {
        let n = self.window.len();
        if n < TREND_MIN_SAMPLES {
            return Trend::Stable;
        }
        let half = n / 2;
        let first = mean(self.window.iter().take(half).map(|e| e.strength)).unwrap_or(0.0);
        let second = mean(self.window.iter().skip(half).map(|e| e.strength)).unwrap_or(0.0);
        let diff = second - first;
        if diff > TREND_BAND {
            Trend::Increasing
        } else if diff < -TREND_BAND {
            Trend::Decreasing
        } else {
            Trend::Stable
        }
    }
}
