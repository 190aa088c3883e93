use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{ROTATE_SPEED, ZOOM_WHEEL_COEFF};
use crate::input::{wheel_zoom_factor, PointerState};
use crate::stage::Stage;

/// Wire orbit interaction: drag on the canvas rotates, wheel zooms. The move
/// and up handlers live on the window so a drag that leaves the canvas keeps
/// tracking, matching the usual orbit-controls feel.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, stage: Rc<Stage>) {
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    wire_pointerdown(canvas, pointer.clone());
    wire_pointermove(stage.clone(), pointer.clone());
    wire_pointerup(pointer);
    wire_wheel(canvas, stage);
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let canvas_capture = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut ps = pointer.borrow_mut();
        ps.down = true;
        ps.last_x = ev.client_x() as f32;
        ps.last_y = ev.client_y() as f32;
        let _ = canvas_capture.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ =
        canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(stage: Rc<Stage>, pointer: Rc<RefCell<PointerState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut ps = pointer.borrow_mut();
        if !ps.down {
            return;
        }
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let dx = x - ps.last_x;
        let dy = y - ps.last_y;
        ps.last_x = x;
        ps.last_y = y;
        drop(ps);
        stage
            .orbit
            .borrow_mut()
            .rotate(-dx * ROTATE_SPEED, dy * ROTATE_SPEED);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ =
            wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(pointer: Rc<RefCell<PointerState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        pointer.borrow_mut().down = false;
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(canvas: &web::HtmlCanvasElement, stage: Rc<Stage>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let factor = wheel_zoom_factor(ev.delta_y() as f32, ZOOM_WHEEL_COEFF);
        stage.orbit.borrow_mut().zoom(factor);
    }) as Box<dyn FnMut(_)>);
    let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
