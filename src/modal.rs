use web_sys as web;

use crate::core::{render_project_html, ProjectDetails};

/// Populate the modal body for `project` and reveal the dialog.
pub fn show(document: &web::Document, project: &ProjectDetails) {
    if let Some(body) = document.get_element_by_id("modalBody") {
        body.set_inner_html(&render_project_html(project));
    }
    if let Some(el) = document.get_element_by_id("projectModal") {
        _ = el.class_list().add_1("active");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("projectModal") {
        _ = el.class_list().remove_1("active");
    }
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id("projectModal")
        .map(|el| el.class_list().contains("active"))
        .unwrap_or(false)
}
