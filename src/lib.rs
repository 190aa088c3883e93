#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod stage;
mod ui;

use constants::{CANVAS_ID, MODEL_URL};
use stage::Stage;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_control_buttons(document: &web::Document, stage: &Rc<Stage>) {
    let stage_audio = stage.clone();
    let doc_audio = document.clone();
    dom::add_click_listener(document, "btn-audio", move || {
        let on = stage_audio.toggle_audio();
        ui::set_audio_button(&doc_audio, on);
    });

    // The frame loop mirrors playback state into the button label and the
    // progress bar; the click only needs to kick the playback off.
    let stage_play = stage.clone();
    dom::add_click_listener(document, "btn-play", move || {
        stage_play.start_playback();
    });
}

/// Fetch and decode the model; failures are logged and the viewer keeps
/// running without it.
async fn load_model() -> Option<core::ModelData> {
    let bytes = match dom::fetch_bytes(MODEL_URL).await {
        Ok(b) => b,
        Err(e) => {
            log::error!("model fetch error: {:?}", e);
            return None;
        }
    };
    match core::decode_glb(&bytes) {
        Ok(model) => {
            log::info!(
                "[model] meshes={} nodes={} animated={}",
                model.meshes.len(),
                model.nodes.len(),
                model.clip.is_some()
            );
            Some(model)
        }
        Err(e) => {
            log::error!("model decode error: {}", e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stage-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let stage = Rc::new(Stage::new());

    ui::build_panel(&document);
    ui::render_slots(&document, &stage.playlist.borrow());
    ui::set_progress(&document, 0.0);
    ui::set_play_button(&document, false);
    ui::set_audio_button(&document, false);

    wire_control_buttons(&document, &stage);
    events::wire_drag_and_drop(&document, stage.clone());
    events::wire_pointer_handlers(&canvas, stage.clone());

    let model = load_model().await;
    let gpu = frame::init_gpu(&canvas, model.as_ref()).await;
    let model_state = model.map(|m| frame::ModelState {
        nodes: m.nodes,
        clip: m.clip,
        time: 0.0,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        stage,
        document,
        canvas,
        gpu,
        model: model_state,
        driver: core::PlaybackDriver::new(),
        last_instant: Instant::now(),
        rendered_toast_gen: 0,
        last_progress: -1.0,
        was_playing: false,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
