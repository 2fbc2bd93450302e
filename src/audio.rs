use crate::constants::TONE_RAMP_SEC;
use detector_core::ToneCue;
use std::time::Duration;
use web_sys as web;

/// Single oscillator -> gain -> destination chain driven by `ToneCue`s.
pub struct DetectorVoice {
    audio_ctx: web::AudioContext,
    osc: web::OscillatorNode,
    gain: web::GainNode,
}

fn js_err(label: &str, e: wasm_bindgen::JsValue) -> anyhow::Error {
    log::error!("{} error: {:?}", label, e);
    anyhow::anyhow!("{} error: {:?}", label, e)
}

impl DetectorVoice {
    /// Build the graph; must run inside a user gesture for audio to start.
    pub fn new() -> anyhow::Result<Self> {
        let audio_ctx = web::AudioContext::new().map_err(|e| js_err("AudioContext", e))?;
        _ = audio_ctx.resume();

        let gain = web::GainNode::new(&audio_ctx).map_err(|e| js_err("GainNode", e))?;
        gain.gain().set_value(0.0);
        let osc = web::OscillatorNode::new(&audio_ctx).map_err(|e| js_err("OscillatorNode", e))?;
        osc.set_type(web::OscillatorType::Sine);

        osc.connect_with_audio_node(&gain)
            .map_err(|e| js_err("osc connect", e))?;
        gain.connect_with_audio_node(&audio_ctx.destination())
            .map_err(|e| js_err("gain connect", e))?;
        osc.start_with_when(audio_ctx.current_time())
            .map_err(|e| js_err("osc start", e))?;

        log::info!("[audio] detector voice ready");
        Ok(Self {
            audio_ctx,
            osc,
            gain,
        })
    }

    /// Follow this frame's cue; `elapsed` drives the beep gate.
    pub fn apply(&self, cue: Option<&ToneCue>, elapsed: Duration) {
        let t = self.audio_ctx.current_time();
        let target = match cue {
            Some(c) => {
                self.osc.frequency().set_value(c.frequency_hz);
                c.gain_at(elapsed)
            }
            None => 0.0,
        };
        _ = self
            .gain
            .gain()
            .linear_ramp_to_value_at_time(target, t + TONE_RAMP_SEC);
    }

    pub fn silence(&self) {
        self.apply(None, Duration::ZERO);
    }
}
