use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{NOTE_CYCLE_HZ, NOTE_INTERVAL_MS, TONE_GAIN};

/// A running 4-note tone loop: one oscillator retuned by an interval timer.
///
/// Construction starts the sound; `stop` consumes the value and releases the
/// whole audio graph, so a dropped-and-stopped cycle leaves nothing behind and
/// the next toggle starts from a clean slate.
pub struct ToneCycle {
    ctx: web::AudioContext,
    osc: web::OscillatorNode,
    interval_id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl ToneCycle {
    pub fn start() -> Result<Self, ()> {
        let ctx = web::AudioContext::new().map_err(|e| {
            log::error!("AudioContext error: {:?}", e);
        })?;
        let _ = ctx.resume();

        match wire_graph(&ctx) {
            Ok((osc, interval_id, tick)) => Ok(Self {
                ctx,
                osc,
                interval_id,
                _tick: tick,
            }),
            Err(()) => {
                // Release the device handle when the graph never came up.
                let _ = ctx.close();
                Err(())
            }
        }
    }

    /// Stop the timer and oscillator and close the context.
    pub fn stop(self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.interval_id);
        }
        let _ = self.osc.stop();
        let _ = self.ctx.close();
    }
}

fn wire_graph(
    ctx: &web::AudioContext,
) -> Result<(web::OscillatorNode, i32, Closure<dyn FnMut()>), ()> {
    let gain = web::GainNode::new(ctx).map_err(|e| {
        log::error!("GainNode error: {:?}", e);
    })?;
    gain.gain().set_value(TONE_GAIN);
    let _ = gain.connect_with_audio_node(&ctx.destination());

    let osc = web::OscillatorNode::new(ctx).map_err(|e| {
        log::error!("OscillatorNode error: {:?}", e);
    })?;
    osc.set_type(web::OscillatorType::Sine);
    osc.frequency().set_value(NOTE_CYCLE_HZ[0]);
    let _ = osc.connect_with_audio_node(&gain);
    let _ = osc.start();

    let step = Rc::new(Cell::new(0_usize));
    let osc_tick = osc.clone();
    let tick = Closure::wrap(Box::new(move || {
        let next = (step.get() + 1) % NOTE_CYCLE_HZ.len();
        step.set(next);
        osc_tick.frequency().set_value(NOTE_CYCLE_HZ[next]);
    }) as Box<dyn FnMut()>);

    let window = web::window().ok_or(())?;
    let interval_id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            NOTE_INTERVAL_MS,
        )
        .map_err(|e| {
            log::error!("setInterval error: {:?}", e);
        })?;

    Ok((osc, interval_id, tick))
}
