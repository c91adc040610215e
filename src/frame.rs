use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::FRAME_MIN_INTERVAL_MS;
use crate::core::ParticleField;
use crate::render;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub last_instant: Instant,
}

impl FrameContext {
    /// One animation tick: advance every particle and repaint. The loop is
    /// driven by `requestAnimationFrame` but self-throttles to roughly 33 fps;
    /// frames arriving sooner than the minimum interval are skipped whole.
    pub fn frame(&mut self) {
        let now = Instant::now();
        if now - self.last_instant < Duration::from_millis(FRAME_MIN_INTERVAL_MS) {
            return;
        }
        self.last_instant = now;

        self.field.borrow_mut().update();
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        render::draw_field(&self.ctx, &self.field.borrow(), width, height);
    }
}

/// Handle for the animation-frame loop. `stop` cancels the pending frame
/// request and keeps the closure from re-arming.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.stopped.set(true);
        if let (Some(window), Some(id)) = (web::window(), self.raf_id.take()) {
            _ = window.cancel_animation_frame(id);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let stopped = Rc::new(Cell::new(false));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    let raf_for_tick = raf_id.clone();
    let stopped_for_tick = stopped.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if stopped_for_tick.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                raf_for_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(Some(id));
        }
    }
    FrameLoop { raf_id, stopped }
}
