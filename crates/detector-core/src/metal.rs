//! Classification scans [`REGISTRY`] in table order and takes the first
//! inclusive match, falling back to [`DEFAULT_METAL`].

use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Conductivity {
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetalKind {
    Iron,
    Aluminum,
    Gold,
    Copper,
    Silver,
}

// Ranges are inclusive; `audio_freq_range` spans strength 0 to 100.
#[derive(Clone, Debug)]
pub struct MetalType {
    pub kind: MetalKind,
    pub name: &'static str,
    pub vdi_range: [f32; 2],
    pub phase_range: [f32; 2],
    pub audio_freq_range: [f32; 2],
    pub color_rgb: [u8; 3],
    pub conductivity: Conductivity,
}

pub static REGISTRY: [MetalType; 5] = [
    MetalType {
        kind: MetalKind::Iron,
        name: "Iron",
        vdi_range: [0.0, 30.0],
        phase_range: [0.0, 45.0],
        audio_freq_range: [150.0, 250.0],
        color_rgb: [139, 69, 19],
        conductivity: Conductivity::Low,
    },
    MetalType {
        kind: MetalKind::Aluminum,
        name: "Aluminum",
        vdi_range: [31.0, 50.0],
        phase_range: [46.0, 80.0],
        audio_freq_range: [250.0, 400.0],
        color_rgb: [192, 192, 192],
        conductivity: Conductivity::Medium,
    },
    MetalType {
        kind: MetalKind::Gold,
        name: "Gold",
        vdi_range: [51.0, 70.0],
        phase_range: [81.0, 120.0],
        audio_freq_range: [400.0, 600.0],
        color_rgb: [255, 215, 0],
        conductivity: Conductivity::High,
    },
    MetalType {
        kind: MetalKind::Copper,
        name: "Copper",
        vdi_range: [71.0, 85.0],
        phase_range: [121.0, 150.0],
        audio_freq_range: [600.0, 800.0],
        color_rgb: [184, 115, 51],
        conductivity: Conductivity::High,
    },
    MetalType {
        kind: MetalKind::Silver,
        name: "Silver",
        vdi_range: [86.0, 99.0],
        phase_range: [151.0, 180.0],
        audio_freq_range: [800.0, 1000.0],
        color_rgb: [220, 220, 235],
        conductivity: Conductivity::VeryHigh,
    },
];

pub const DEFAULT_METAL: MetalKind = MetalKind::Iron;

impl MetalKind {
    pub const ALL: [MetalKind; 5] = [
        MetalKind::Iron,
        MetalKind::Aluminum,
        MetalKind::Gold,
        MetalKind::Copper,
        MetalKind::Silver,
    ];

    #[inline]
    pub fn info(self) -> &'static MetalType {
        lookup(self)
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }
}

impl fmt::Display for MetalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown metal type: {0:?}")]
pub struct UnknownMetal(pub String);

impl FromStr for MetalKind {
    type Err = UnknownMetal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(s.trim()))
            .map(|m| m.kind)
            .ok_or_else(|| UnknownMetal(s.to_string()))
    }
}

#[inline]
pub fn lookup(kind: MetalKind) -> &'static MetalType {
    match kind {
        MetalKind::Iron => &REGISTRY[0],
        MetalKind::Aluminum => &REGISTRY[1],
        MetalKind::Gold => &REGISTRY[2],
        MetalKind::Copper => &REGISTRY[3],
        MetalKind::Silver => &REGISTRY[4],
    }
}

#[inline]
fn in_range(range: [f32; 2], value: f32) -> bool {
    value >= range[0] && value <= range[1]
}

fn classify_by(value: f32, range_of: impl Fn(&MetalType) -> [f32; 2]) -> MetalKind {
    REGISTRY
        .iter()
        .find(|m| in_range(range_of(m), value))
        .map(|m| m.kind)
        .unwrap_or(DEFAULT_METAL)
}

pub fn classify_by_vdi(vdi: f32) -> MetalKind {
    classify_by(vdi, |m| m.vdi_range)
}

pub fn classify_by_phase(phase: f32) -> MetalKind {
    classify_by(phase, |m| m.phase_range)
}

/// Blend the metal's base color toward white as strength falls.
pub fn color_for(kind: MetalKind, strength: f32) -> [u8; 3] {
    let t = (strength / 100.0).clamp(0.0, 1.0);
    let base = kind.info().color_rgb;
    base.map(|c| (255.0 + (c as f32 - 255.0) * t).round() as u8)
}

/// Uniform whole-number draw from an inclusive `[lo, hi]` range.
pub fn random_value_in_range<R: Rng + ?Sized>(range: [f32; 2], rng: &mut R) -> f32 {
    let [lo, hi] = range;
    if hi <= lo {
        return lo;
    }
    rng.gen_range(lo..=hi).round()
}

/// Tone frequency for a given strength: linear across the metal's range.
pub fn frequency_for(kind: MetalKind, strength: f32) -> f32 {
    let [lo, hi] = kind.info().audio_freq_range;
    let t = (strength / 100.0).clamp(0.0, 1.0);
    lo + (hi - lo) * t
}
