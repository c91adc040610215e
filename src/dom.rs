use wasm_bindgen::JsCast;
use web_sys as web;

/// Current window inner size in CSS pixels.
pub fn window_inner_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Size the canvas backing store to the full window. Returns the dimensions
/// that were applied.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    if let Some(window) = web::window() {
        let (w, h) = window_inner_size(&window);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
        (w, h)
    } else {
        (0.0, 0.0)
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Like `add_click_listener`, but hands the handler the mouse event so it can
/// call `prevent_default` or inspect the target.
pub fn add_click_listener_event(
    el: &web::Element,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>,
    );
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` over every element matching `selector`.
pub fn for_each_selected(document: &web::Document, selector: &str, mut f: impl FnMut(web::Element)) {
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    f(el);
                }
            }
        }
    }
}
