use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{CAMERA_PRESETS, SLOT_COUNT};
use crate::stage::Stage;
use crate::ui;

/// Wire the preset labels as drag sources (and click-to-apply shortcuts) and
/// the playlist slots as drop targets. Must run after `ui::build_panel`.
pub fn wire_drag_and_drop(document: &web::Document, stage: Rc<Stage>) {
    for preset in &CAMERA_PRESETS {
        wire_drag_source(document, preset.name, stage.clone());
    }
    for index in 0..SLOT_COUNT {
        wire_drop_slot(document, index, stage.clone());
    }
}

fn wire_drag_source(document: &web::Document, name: &'static str, stage: Rc<Stage>) {
    let Some(el) = document.get_element_by_id(&ui::angle_id(name)) else {
        return;
    };

    let dragstart = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", name);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = el.add_event_listener_with_callback("dragstart", dragstart.as_ref().unchecked_ref());
    dragstart.forget();

    // Clicking a label jumps the camera there directly.
    let click = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        stage.apply_preset(name);
    }) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget();
}

fn wire_drop_slot(document: &web::Document, index: usize, stage: Rc<Stage>) {
    let Some(el) = document.get_element_by_id(&ui::slot_id(index)) else {
        return;
    };

    // Slots only accept drops if dragover is cancelled.
    let dragover = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::DragEvent| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = el.add_event_listener_with_callback("dragover", dragover.as_ref().unchecked_ref());
    dragover.forget();

    let document = document.clone();
    let drop = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::DragEvent| {
        ev.prevent_default();
        let Some(payload) = ev.data_transfer().and_then(|dt| dt.get_data("text/plain").ok())
        else {
            return;
        };
        if stage.assign_slot(index, payload.trim()) {
            ui::render_slots(&document, &stage.playlist.borrow());
        }
    }) as Box<dyn FnMut(_)>);
    let _ = el.add_event_listener_with_callback("drop", drop.as_ref().unchecked_ref());
    drop.forget();
}
