#![cfg(target_arch = "wasm32")]
use detector_core::{AudioMode, BuriedObject, DetectorConfig, DetectorSession, MetalKind};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("detector-web starting");
    Ok(())
}

#[inline]
fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

fn init(canvas_id: &str) -> anyhow::Result<Rc<RefCell<frame::FrameContext>>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let ctx2d = dom::context_2d(&canvas)?;

    let config = DetectorConfig::for_canvas(canvas.width() as f32, canvas.height() as f32);
    let session = DetectorSession::new(config)?;

    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_input_handlers(&canvas, &mouse);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        canvas,
        ctx2d,
        document,
        mouse,
        voice: None,
        started: Instant::now(),
        last_report: None,
    }));
    frame::start_loop(frame_ctx.clone());
    Ok(frame_ctx)
}

/// Handle the page script keeps to drive one detector canvas.
///
/// Scenario loading and scoring stay in the page: it pushes buried objects
/// in and reads the latest reading back out.
#[wasm_bindgen]
pub struct DetectorApp {
    ctx: Rc<RefCell<frame::FrameContext>>,
}

#[wasm_bindgen]
impl DetectorApp {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: Option<String>) -> Result<DetectorApp, JsValue> {
        let id = canvas_id.unwrap_or_else(|| constants::DEFAULT_CANVAS_ID.to_string());
        let ctx = init(&id).map_err(to_js)?;
        Ok(DetectorApp { ctx })
    }

    /// Add one buried object; `metal` is a registry name such as "gold".
    pub fn add_object(
        &self,
        x: f32,
        y: f32,
        strength: f32,
        metal: &str,
        name: &str,
    ) -> Result<(), JsValue> {
        let metal: MetalKind = metal
            .parse()
            .map_err(|e: detector_core::UnknownMetal| JsValue::from_str(&e.to_string()))?;
        self.ctx.borrow_mut().session.push_object(BuriedObject::new(
            Vec2::new(x, y),
            strength.clamp(0.0, 100.0),
            metal,
            name,
        ));
        Ok(())
    }

    /// Drop every object and start the search over.
    pub fn clear_objects(&self) {
        self.ctx.borrow_mut().session.clear_objects();
    }

    pub fn reset(&self) {
        self.ctx.borrow_mut().session.reset();
    }

    pub fn set_heat_decay(&self, enabled: bool) {
        self.ctx.borrow_mut().session.set_heat_decay(enabled);
    }

    pub fn set_coverage_fade(&self, enabled: bool) {
        self.ctx.borrow_mut().session.set_coverage_fade(enabled);
    }

    /// "threshold" (continuous hum) or "beep".
    pub fn set_audio_mode(&self, mode: &str) -> Result<(), JsValue> {
        let mode: AudioMode = mode
            .parse()
            .map_err(|_| JsValue::from_str(&format!("unknown audio mode: {:?}", mode)))?;
        self.ctx.borrow_mut().session.set_audio_mode(mode);
        Ok(())
    }

    /// Start sound; call from a click handler so the browser allows it.
    pub fn enable_audio(&self) -> Result<(), JsValue> {
        let mut ctx = self.ctx.borrow_mut();
        if ctx.voice.is_none() {
            ctx.voice = Some(audio::DetectorVoice::new().map_err(to_js)?);
        }
        Ok(())
    }

    pub fn disable_audio(&self) {
        let mut ctx = self.ctx.borrow_mut();
        if let Some(voice) = ctx.voice.take() {
            voice.silence();
        }
    }

    pub fn strength(&self) -> f32 {
        self.ctx
            .borrow()
            .last_report
            .as_ref()
            .map_or(0.0, |r| r.sample.strength)
    }

    pub fn vdi(&self) -> Option<f32> {
        self.ctx.borrow().last_report.as_ref().and_then(|r| r.sample.vdi)
    }

    pub fn phase(&self) -> Option<f32> {
        self.ctx
            .borrow()
            .last_report
            .as_ref()
            .and_then(|r| r.sample.phase)
    }

    /// Name of the object under the coil, if any.
    pub fn target_name(&self) -> Option<String> {
        let ctx = self.ctx.borrow();
        let index = ctx.last_report.as_ref()?.sample.object?;
        ctx.session.model().object(index).map(|o| o.name.clone())
    }

    pub fn coverage_percent(&self) -> f32 {
        self.ctx.borrow().session.coverage().percentage_covered()
    }

    pub fn stability(&self) -> f32 {
        self.ctx.borrow().session.analyzer().last().stability
    }

    pub fn repeatability(&self) -> f32 {
        self.ctx.borrow().session.analyzer().last().repeatability
    }

    pub fn confidence(&self) -> f32 {
        self.ctx.borrow().session.analyzer().last().confidence
    }

    pub fn quality(&self) -> String {
        self.ctx.borrow().session.analyzer().last().quality.label().to_string()
    }

    pub fn trend(&self) -> String {
        self.ctx.borrow().session.analyzer().last().trend.label().to_string()
    }

    pub fn target_locked(&self) -> bool {
        self.ctx.borrow().session.analyzer().last().target_locked
    }

    pub fn locked_vdi(&self) -> Option<f32> {
        self.ctx.borrow().session.analyzer().last().locked_vdi
    }
}
