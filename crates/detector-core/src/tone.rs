use crate::config::ToneConfig;
use crate::constants::*;
use crate::signal::SignalSample;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudioMode {
    #[default]
    Threshold,
    Beep,
}

impl FromStr for AudioMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "threshold" | "hum" => Ok(AudioMode::Threshold),
            "beep" => Ok(AudioMode::Beep),
            _ => Err(()),
        }
    }
}

// In beep mode the tone sounds for the first BEEP_DUTY of every period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneCue {
    pub frequency_hz: f32,
    pub gain: f32,
    pub beep_period: Option<Duration>,
}

impl ToneCue {
    /// Instantaneous gain `elapsed` after the beep train started.
    pub fn gain_at(&self, elapsed: Duration) -> f32 {
        match self.beep_period {
            None => self.gain,
            Some(period) => {
                let p = period.as_secs_f32();
                if p <= 0.0 {
                    return self.gain;
                }
                let phase = (elapsed.as_secs_f32() % p) / p;
                if phase < BEEP_DUTY {
                    self.gain
                } else {
                    0.0
                }
            }
        }
    }
}

pub struct ToneMapper {
    threshold: f32,
    mode: AudioMode,
}

impl ToneMapper {
    pub fn new(config: &ToneConfig) -> Self {
        Self {
            threshold: config.threshold,
            mode: AudioMode::default(),
        }
    }

    pub fn mode(&self) -> AudioMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: AudioMode) {
        self.mode = mode;
    }

    /// Cue for a reading, or `None` for silence.
    pub fn tone_for(&self, sample: &SignalSample) -> Option<ToneCue> {
        let frequency_hz = sample.frequency_hz?;
        if sample.strength < self.threshold {
            return None;
        }
        let t = ((sample.strength - self.threshold) / (MAX_STRENGTH - self.threshold).max(1.0))
            .clamp(0.0, 1.0);
        let gain = TONE_GAIN_BASE + TONE_GAIN_SPAN * t;
        let beep_period = match self.mode {
            AudioMode::Threshold => None,
            AudioMode::Beep => {
                let ms = BEEP_PERIOD_SLOW_MS + (BEEP_PERIOD_FAST_MS - BEEP_PERIOD_SLOW_MS) * t;
                Some(Duration::from_micros((ms * 1000.0).round() as u64))
            }
        };
        Some(ToneCue {
            frequency_hz,
            gain,
            beep_period,
        })
    }
}
