use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(canvas: &web::HtmlCanvasElement, mouse: &Rc<RefCell<input::MouseState>>) {
    wire_pointermove(canvas, mouse);
    wire_pointerleave(canvas, mouse);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, mouse: &Rc<RefCell<input::MouseState>>) {
    let canvas_ev = canvas.clone();
    let mouse = mouse.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_ev);
        let mut ms = mouse.borrow_mut();
        ms.x = pos.x;
        ms.y = pos.y;
        ms.inside = true;
    }) as Box<dyn FnMut(web::PointerEvent)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(canvas: &web::HtmlCanvasElement, mouse: &Rc<RefCell<input::MouseState>>) {
    let mouse = mouse.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        mouse.borrow_mut().inside = false;
    }) as Box<dyn FnMut(web::PointerEvent)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
