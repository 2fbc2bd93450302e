use crate::audio::DetectorVoice;
use crate::constants::*;
use crate::dom;
use crate::input;
use crate::render;
use detector_core::{elapsed_between, DetectorSession, FrameReport};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: DetectorSession,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub document: web::Document,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub voice: Option<DetectorVoice>,
    pub started: Instant,
    pub last_report: Option<FrameReport>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let ms = *self.mouse.borrow();

        let report = if ms.inside {
            Some(self.session.tick_at(Vec2::new(ms.x, ms.y), now))
        } else {
            self.session.idle();
            None
        };

        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        render::clear(&self.ctx2d, w, h);
        render::paint_coverage(&self.ctx2d, self.session.coverage(), now);
        render::paint_heat(
            &self.ctx2d,
            self.session.heat_map(),
            &self.session.config().heat,
        );

        if let Some(voice) = &self.voice {
            match &report {
                Some(r) => voice.apply(r.tone.as_ref(), elapsed_between(self.started, now)),
                None => voice.silence(),
            }
        }

        if let Some(r) = &report {
            render::paint_coil(&self.ctx2d, r, self.session.config().coverage.sweep_radius);
            self.update_status(r);
        }
        self.last_report = report;
    }

    fn update_status(&self, r: &FrameReport) {
        let doc = &self.document;
        dom::set_text(doc, STATUS_STRENGTH_ID, &format!("{:.0}", r.sample.strength));
        let vdi = r
            .sample
            .vdi
            .map(|v| format!("{:.0}", v))
            .unwrap_or_else(|| "--".to_string());
        dom::set_text(doc, STATUS_VDI_ID, &vdi);
        let metal = r.sample.metal.map(|m| m.name()).unwrap_or("--");
        dom::set_text(doc, STATUS_METAL_ID, metal);
        dom::set_text(doc, STATUS_COVERAGE_ID, &format!("{:.1}%", r.coverage_pct));
        dom::set_text(doc, STATUS_QUALITY_ID, r.analysis.quality.label());
        let lock = match r.analysis.locked_vdi {
            Some(v) if r.analysis.target_locked => format!("LOCKED {:.0}", v),
            _ => "--".to_string(),
        };
        dom::set_text(doc, STATUS_LOCK_ID, &lock);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    let first = tick.borrow();
    if let Some(cb) = first.as_ref() {
        request_frame(cb);
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
