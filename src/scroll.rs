//! Scroll-triggered effects wired through `IntersectionObserver`: reveal
//! animations, skill-bar progress fills, and lazy image loading.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{PROGRESS_THRESHOLD, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom;

/// Build an observer whose handler sees one entry at a time. The callback
/// closure is leaked; the browser keeps the observer alive while it still
/// has observed targets.
fn new_observer(
    init: &web::IntersectionObserverInit,
    mut handler: impl FnMut(web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
) -> Option<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    handler(entry, &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), init).ok();
    closure.forget();
    observer
}

/// Elements marked `animate-on-scroll` gain `visible` once they enter the
/// viewport; they stay revealed afterwards.
pub fn observe_reveals(document: &web::Document) {
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    if let Some(observer) = new_observer(&init, |entry, _| {
        if entry.is_intersecting() {
            _ = entry.target().class_list().add_1("visible");
        }
    }) {
        dom::for_each_selected(document, ".animate-on-scroll", |el| observer.observe(&el));
    }
}

/// Skill bars animate to their `data-width` percentage the first time they
/// become visible, then stop being observed.
pub fn observe_progress_bars(document: &web::Document) {
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from(PROGRESS_THRESHOLD));
    if let Some(observer) = new_observer(&init, |entry, observer| {
        if entry.is_intersecting() {
            let el = entry.target();
            if let Some(width) = el.get_attribute("data-width") {
                if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                    _ = el.style().set_property("width", &format!("{width}%"));
                    observer.unobserve(&el);
                }
            }
        }
    }) {
        dom::for_each_selected(document, ".progress-fill", |el| observer.observe(&el));
    }
}

/// Images carrying `data-src` get their real source the first time they come
/// into view.
pub fn observe_lazy_images(document: &web::Document) {
    let init = web::IntersectionObserverInit::new();
    if let Some(observer) = new_observer(&init, |entry, observer| {
        if entry.is_intersecting() {
            if let Ok(img) = entry.target().dyn_into::<web::HtmlImageElement>() {
                if let Some(src) = img.get_attribute("data-src") {
                    img.set_src(&src);
                    _ = img.remove_attribute("data-src");
                    observer.unobserve(&img);
                }
            }
        }
    }) {
        dom::for_each_selected(document, "img[data-src]", |el| observer.observe(&el));
    }
}
