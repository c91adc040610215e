use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::PhraseTyper;

/// Handle for the self-re-arming typing timer. `stop` clears the pending
/// callback so a hosting environment can tear the page down cleanly.
pub struct TypingLoop {
    timer_id: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl TypingLoop {
    pub fn stop(&self) {
        self.stopped.set(true);
        if let (Some(window), Some(id)) = (web::window(), self.timer_id.take()) {
            window.clear_timeout_with_handle(id);
        }
    }
}

/// Drive `typer` against the hero text element with a one-shot timeout that
/// re-arms itself from within its own callback, using each step's delay.
/// Every step replaces the element's full text content.
pub fn start_typing(target: web::Element, mut typer: PhraseTyper) -> TypingLoop {
    let timer_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let stopped = Rc::new(Cell::new(false));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let timer_for_tick = timer_id.clone();
    let stopped_for_tick = stopped.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if stopped_for_tick.get() {
            return;
        }
        let step = typer.step();
        target.set_text_content(Some(&step.text));
        if let Some(window) = web::window() {
            if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                step.delay_ms as i32,
            ) {
                timer_for_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));

    // Arm the first step right away; every step after that re-arms with its
    // own delay.
    if let Some(window) = web::window() {
        if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            0,
        ) {
            timer_id.set(Some(id));
        }
    }

    TypingLoop { timer_id, stopped }
}
