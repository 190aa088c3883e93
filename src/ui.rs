//! DOM construction and refresh for the playlist panel, controls bar, toast
//! stack, and progress bar. Element IDs are the contract with www/index.html.

use web_sys as web;

use crate::core::{Playlist, ToastStore, CAMERA_PRESETS, SLOT_COUNT};

pub fn angle_id(name: &str) -> String {
    format!("angle-{}", name)
}

pub fn slot_id(index: usize) -> String {
    format!("slot-{}", index)
}

/// Populate the angle list and slot list at startup.
pub fn build_panel(document: &web::Document) {
    if let Some(list) = document.get_element_by_id("angle-list") {
        for preset in &CAMERA_PRESETS {
            if let Ok(el) = document.create_element("div") {
                let _ = el.set_attribute("id", &angle_id(preset.name));
                let _ = el.set_attribute("class", "angle");
                let _ = el.set_attribute("draggable", "true");
                el.set_text_content(Some(preset.name));
                let _ = list.append_child(&el);
            }
        }
    }
    if let Some(list) = document.get_element_by_id("slot-list") {
        for index in 0..SLOT_COUNT {
            if let Ok(el) = document.create_element("div") {
                let _ = el.set_attribute("id", &slot_id(index));
                let _ = el.set_attribute("class", "slot");
                el.set_text_content(Some(&format!("Slot {}", index + 1)));
                let _ = list.append_child(&el);
            }
        }
    }
}

/// Mirror the playlist slots into their DOM elements.
pub fn render_slots(document: &web::Document, playlist: &Playlist) {
    for (index, slot) in playlist.slots().iter().enumerate() {
        let Some(el) = document.get_element_by_id(&slot_id(index)) else {
            continue;
        };
        match slot {
            Some(stop) => {
                el.set_text_content(Some(&stop.name));
                let _ = el.set_attribute("class", "slot filled");
            }
            None => {
                el.set_text_content(Some(&format!("Slot {}", index + 1)));
                let _ = el.set_attribute("class", "slot");
            }
        }
    }
}

/// Rebuild the toast stack from the store.
pub fn render_toasts(document: &web::Document, toasts: &ToastStore) {
    let Some(stack) = document.get_element_by_id("toast-stack") else {
        return;
    };
    let html: String = toasts
        .iter()
        .map(|t| format!("<div class='toast'>{}</div>", t.message))
        .collect();
    stack.set_inner_html(&html);
}

pub fn set_progress(document: &web::Document, fraction: f32) {
    if let Some(el) = document.get_element_by_id("progress-fill") {
        let pct = (fraction.clamp(0.0, 1.0) * 100.0) as u32;
        let _ = el.set_attribute("style", &format!("width:{}%", pct));
    }
}

pub fn set_play_button(document: &web::Document, playing: bool) {
    if let Some(el) = document.get_element_by_id("btn-play") {
        if playing {
            el.set_text_content(Some("Playing..."));
            let _ = el.set_attribute("disabled", "");
        } else {
            el.set_text_content(Some("Play Camera Playlist"));
            let _ = el.remove_attribute("disabled");
        }
    }
}

pub fn set_audio_button(document: &web::Document, on: bool) {
    if let Some(el) = document.get_element_by_id("btn-audio") {
        el.set_text_content(Some(if on { "Stop Sound" } else { "Play Sound" }));
    }
}
