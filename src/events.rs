use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{BACK_TO_TOP_SHOW_Y, NAVBAR_SCROLLED_Y, NAV_OFFSET_PX};
use crate::core::find_project;
use crate::dom;
use crate::modal;

/// Smooth-scroll the window to a vertical offset.
pub fn scroll_to_y(window: &web::Window, y: f64) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(y);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

#[inline]
fn close_mobile_menu(document: &web::Document) {
    if let Some(menu) = document.get_element_by_id("navMenu") {
        _ = menu.class_list().remove_1("active");
    }
    if let Some(burger) = document.get_element_by_id("hamburger") {
        _ = burger.class_list().remove_1("active");
    }
}

/// In-page anchors scroll smoothly to their target, compensating for the
/// fixed navbar, and close the mobile menu first.
pub fn wire_nav_links(document: &web::Document) {
    let doc = document.clone();
    dom::for_each_selected(document, "a[href^='#']", |anchor| {
        let doc = doc.clone();
        let anchor_href = anchor.clone();
        dom::add_click_listener_event(&anchor, move |ev: web::MouseEvent| {
            ev.prevent_default();
            close_mobile_menu(&doc);
            if let Some(href) = anchor_href.get_attribute("href") {
                if let Some(target) = doc.query_selector(&href).ok().flatten() {
                    if let Ok(target) = target.dyn_into::<web::HtmlElement>() {
                        let top = f64::from(target.offset_top()) - NAV_OFFSET_PX;
                        if let Some(window) = web::window() {
                            scroll_to_y(&window, top);
                        }
                    }
                }
            }
        });
    });
}

/// Hamburger toggles the mobile menu; picking a nav link collapses it.
pub fn wire_menu(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, "hamburger", move || {
        if let Some(menu) = doc.get_element_by_id("navMenu") {
            _ = menu.class_list().toggle("active");
        }
        if let Some(burger) = doc.get_element_by_id("hamburger") {
            _ = burger.class_list().toggle("active");
        }
    });

    let doc = document.clone();
    dom::for_each_selected(document, ".nav-link", |link| {
        let doc = doc.clone();
        dom::add_click_listener_event(&link, move |_| close_mobile_menu(&doc));
    });
}

/// One scroll listener drives both the navbar backdrop and the back-to-top
/// button visibility.
pub fn wire_scroll_effects(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let y = web::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            if let Some(nav) = doc.query_selector(".navbar").ok().flatten() {
                let cl = nav.class_list();
                if y > NAVBAR_SCROLLED_Y {
                    _ = cl.add_1("scrolled");
                } else {
                    _ = cl.remove_1("scrolled");
                }
            }
            if let Some(btn) = doc.get_element_by_id("backToTop") {
                let cl = btn.class_list();
                if y > BACK_TO_TOP_SHOW_Y {
                    _ = cl.add_1("show");
                } else {
                    _ = cl.remove_1("show");
                }
            }
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_back_to_top(document: &web::Document) {
    dom::add_click_listener(document, "backToTop", move || {
        if let Some(window) = web::window() {
            scroll_to_y(&window, 0.0);
        }
    });
}

/// Project buttons open the modal for their `data-project` id; the close
/// button and a click on the backdrop dismiss it.
pub fn wire_modal(document: &web::Document) {
    let doc = document.clone();
    dom::for_each_selected(document, ".project-btn", |btn| {
        let doc = doc.clone();
        let btn_attr = btn.clone();
        dom::add_click_listener_event(&btn, move |ev: web::MouseEvent| {
            ev.prevent_default();
            let id = btn_attr
                .get_attribute("data-project")
                .and_then(|s| s.parse::<u32>().ok());
            if let Some(project) = id.and_then(find_project) {
                modal::show(&doc, project);
            } else {
                log::warn!("[modal] unknown project id {:?}", id);
            }
        });
    });

    let doc = document.clone();
    dom::for_each_selected(document, ".modal-close", |btn| {
        let doc = doc.clone();
        dom::add_click_listener_event(&btn, move |_| modal::hide(&doc));
    });

    // Backdrop click: only when the modal element itself is the target.
    if let Some(modal_el) = document.get_element_by_id("projectModal") {
        let doc = document.clone();
        dom::add_click_listener_event(&modal_el, move |ev: web::MouseEvent| {
            let hit_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .map(|el| el.id() == "projectModal")
                .unwrap_or(false);
            if hit_backdrop {
                modal::hide(&doc);
            }
        });
    }
}

/// Escape dismisses the modal while it is open.
pub fn wire_modal_escape(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(
            move |ev: web::KeyboardEvent| {
                if ev.key() == "Escape" && modal::is_open(&doc) {
                    modal::hide(&doc);
                }
            },
        ) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
