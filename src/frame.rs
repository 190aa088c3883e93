use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CAMERA_EYE, CAMERA_TARGET};
use crate::core::{self, Clip, NodeTransform};
use crate::render;
use crate::stage::Stage;
use crate::ui;

/// Animated model state carried between frames: the mutable node pose plus
/// the clip sampled into it.
pub struct ModelState {
    pub nodes: Vec<NodeTransform>,
    pub clip: Option<Clip>,
    pub time: f32,
}

pub struct FrameContext<'a> {
    pub stage: Rc<Stage>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,

    pub gpu: Option<render::GpuState<'a>>,
    pub model: Option<ModelState>,
    pub driver: core::PlaybackDriver,

    pub last_instant: Instant,
    pub rendered_toast_gen: u64,
    pub last_progress: f32,
    pub was_playing: bool,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let now_ms = self.stage.now_ms();

        // Model pose: loop the clip over its duration.
        if let Some(model) = &mut self.model {
            if let Some(clip) = &model.clip {
                if clip.duration > 0.0 {
                    model.time = (model.time + dt_sec) % clip.duration;
                    clip.sample(model.time, &mut model.nodes);
                }
            }
        }

        self.drive_camera(now_ms);
        self.sync_ui(now_ms);

        if let Some(gpu) = &mut self.gpu {
            {
                let orbit = self.stage.orbit.borrow();
                gpu.set_camera(orbit.eye(), orbit.target());
            }
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            let node_world = self
                .model
                .as_ref()
                .map(|m| core::global_transforms(&m.nodes))
                .unwrap_or_default();
            if let Err(e) = gpu.render(&node_world) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Playback chaining: the driver starts the next stop's tween only after
    /// the previous one reports `done`, and only credits a completion to the
    /// playlist when it dispatched that move itself, so a preset jump already
    /// in flight never swallows the first queued stop.
    fn drive_camera(&mut self, now_ms: f64) {
        let stage = &self.stage;
        let out = {
            let mut tween = stage.tween.borrow_mut();
            let mut playback = stage.playback.borrow_mut();
            let eye = stage.orbit.borrow().eye();
            self.driver.frame(&mut tween, &mut playback, eye, now_ms)
        };

        if let Some(stop) = out.started {
            stage
                .toasts
                .borrow_mut()
                .push(format!("Moving to {}", stop.name), now_ms);
        }
        if let Some(position) = out.position {
            stage.orbit.borrow_mut().set_eye(position);
        }
    }

    fn sync_ui(&mut self, now_ms: f64) {
        let (playing, progress) = {
            let pb = self.stage.playback.borrow();
            (pb.is_playing(), pb.progress())
        };
        if playing != self.was_playing {
            ui::set_play_button(&self.document, playing);
            self.was_playing = playing;
        }
        if progress != self.last_progress {
            ui::set_progress(&self.document, progress);
            self.last_progress = progress;
        }

        let mut toasts = self.stage.toasts.borrow_mut();
        toasts.prune(now_ms);
        if toasts.generation() != self.rendered_toast_gen {
            ui::render_toasts(&self.document, &toasts);
            self.rendered_toast_gen = toasts.generation();
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    model: Option<&core::ModelData>,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let meshes: &[core::MeshPrimitive] = model.map(|m| m.meshes.as_slice()).unwrap_or(&[]);
    match render::GpuState::new(leaked_canvas, meshes, CAMERA_EYE, CAMERA_TARGET).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
