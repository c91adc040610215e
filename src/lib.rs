#![cfg(target_arch = "wasm32")]
//! Client-side interactivity for a static portfolio page: the typing-text
//! animation, smooth navigation, mobile menu, scroll effects, project modal,
//! and the animated particle background on the `#background-canvas` element.

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
pub mod frame;
mod modal;
mod render;
mod scroll;
pub mod typing;

use crate::constants::{PARTICLE_COUNT, PHRASES};
use crate::core::{ParticleField, PhraseTyper, TyperTiming};

fn wire_viewport_resize(canvas: &web::HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_to_window(&canvas_resize);
        field.borrow_mut().resize(w as f32, h as f32);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Typing animation in the hero section
    let typing_el = document
        .get_element_by_id("typingText")
        .ok_or_else(|| anyhow::anyhow!("missing #typingText"))?;
    let phrases = PHRASES.iter().map(|p| p.to_string()).collect();
    let typer = PhraseTyper::new(phrases, TyperTiming::default());
    _ = typing::start_typing(typing_el, typer);

    // Particle background canvas, sized to the window and re-seeded on resize
    let canvas_el = document
        .get_element_by_id("background-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #background-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let (width, height) = dom::sync_canvas_to_window(&canvas);

    let seed = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(PARTICLE_COUNT, seed)));
    field.borrow_mut().initialize(width as f32, height as f32);
    log::info!(
        "[particles] count={} viewport={}x{}",
        PARTICLE_COUNT,
        width,
        height
    );

    wire_viewport_resize(&canvas, field.clone());

    let ctx = render::context_2d(&canvas)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        canvas,
        ctx,
        last_instant: Instant::now(),
    }));
    _ = frame::start_loop(frame_ctx);

    // Navigation, menu, scroll effects, and the project modal
    events::wire_nav_links(&document);
    events::wire_menu(&document);
    events::wire_scroll_effects(&document);
    events::wire_back_to_top(&document);
    events::wire_modal(&document);
    events::wire_modal_escape(&document);

    // Scroll-triggered observers
    scroll::observe_reveals(&document);
    scroll::observe_progress_bars(&document);
    scroll::observe_lazy_images(&document);

    // Everything is wired: reveal the page and enable smooth anchor scrolling
    if let Some(root) = document.document_element() {
        if let Ok(root) = root.dyn_into::<web::HtmlElement>() {
            _ = root.style().set_property("visibility", "visible");
            _ = root.style().set_property("scroll-behavior", "smooth");
        }
    }

    Ok(())
}
