use crate::config::SignalConfig;
use crate::constants::{FALLOFF_EXPONENT, MAX_STRENGTH};
use crate::metal::{frequency_for, random_value_in_range, MetalKind};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Debug)]
pub struct BuriedObject {
    pub position: Vec2,
    pub strength: f32,
    pub metal: MetalKind,
    pub name: String,
}

impl BuriedObject {
    pub fn new(position: Vec2, strength: f32, metal: MetalKind, name: impl Into<String>) -> Self {
        Self {
            position,
            strength,
            metal,
            name: name.into(),
        }
    }
}

// `object` indexes the model's object list; a silent sample has infinite distance.
#[derive(Clone, Debug, PartialEq)]
pub struct SignalSample {
    pub strength: f32,
    pub distance: f32,
    pub object: Option<usize>,
    pub vdi: Option<f32>,
    pub phase: Option<f32>,
    pub frequency_hz: Option<f32>,
    pub metal: Option<MetalKind>,
}

impl SignalSample {
    pub fn silent() -> Self {
        Self {
            strength: 0.0,
            distance: f32::INFINITY,
            object: None,
            vdi: None,
            phase: None,
            frequency_hz: None,
            metal: None,
        }
    }

    #[inline]
    pub fn has_target(&self) -> bool {
        self.object.is_some()
    }
}

impl Default for SignalSample {
    fn default() -> Self {
        Self::silent()
    }
}

/// Fourth-power falloff to zero at `range`, clamped to 0..100.
#[inline]
pub fn falloff_strength(base: f32, distance: f32, range: f32) -> f32 {
    if !(distance < range) {
        return 0.0;
    }
    let t = 1.0 - distance / range;
    (base * t.powi(FALLOFF_EXPONENT)).clamp(0.0, MAX_STRENGTH)
}

/// VDI and phase are redrawn inside the winning object's metal bands on
/// every query.
pub struct SignalModel<R: Rng = StdRng> {
    config: SignalConfig,
    objects: Vec<BuriedObject>,
    rng: R,
}

impl SignalModel<StdRng> {
    pub fn new(config: SignalConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SignalModel<R> {
    pub fn with_rng(config: SignalConfig, rng: R) -> Self {
        Self {
            config,
            objects: Vec::new(),
            rng,
        }
    }

    pub fn objects(&self) -> &[BuriedObject] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> Option<&BuriedObject> {
        self.objects.get(index)
    }

    pub fn set_objects(&mut self, objects: Vec<BuriedObject>) {
        log::debug!("[signal] loaded {} buried objects", objects.len());
        self.objects = objects;
    }

    pub fn push_object(&mut self, object: BuriedObject) {
        self.objects.push(object);
    }

    pub fn clear_objects(&mut self) {
        self.objects.clear();
    }

    /// Strongest in-range object as `(index, strength, distance)`.
    ///
    /// Ranks by computed strength, not by distance: a strong far object can
    /// beat a weak near one. Exact ties keep the earlier object.
    pub fn strongest(&self, pos: Vec2) -> Option<(usize, f32, f32)> {
        let range = self.config.detection_range;
        let mut best: Option<(usize, f32, f32)> = None;
        for (i, obj) in self.objects.iter().enumerate() {
            let distance = obj.position.distance(pos);
            if distance >= range {
                continue;
            }
            let strength = falloff_strength(obj.strength, distance, range);
            match best {
                Some((_, s, _)) if strength <= s => {}
                _ => best = Some((i, strength, distance)),
            }
        }
        best
    }

    // Weak readings are returned as-is.
    pub fn query(&mut self, pos: Vec2) -> SignalSample {
        let Some((index, strength, distance)) = self.strongest(pos) else {
            return SignalSample::silent();
        };
        let metal = self.objects[index].metal;
        let info = metal.info();
        // Two independent draws: VDI first, then phase.
        let vdi = random_value_in_range(info.vdi_range, &mut self.rng);
        let phase = random_value_in_range(info.phase_range, &mut self.rng);
        SignalSample {
            strength,
            distance,
            object: Some(index),
            vdi: Some(vdi),
            phase: Some(phase),
            frequency_hz: Some(frequency_for(metal, strength)),
            metal: Some(metal),
        }
    }
}
