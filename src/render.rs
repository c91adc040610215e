use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::PARTICLE_FILL;
use crate::core::ParticleField;

/// Acquire the 2D drawing context of the background canvas.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Repaint the whole field: full clear, then one translucent disk per
/// particle. No dirty-rectangle tracking; the field is small.
pub fn draw_field(
    ctx: &web::CanvasRenderingContext2d,
    field: &ParticleField,
    width: f64,
    height: f64,
) {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(PARTICLE_FILL);
    for p in field.particles() {
        ctx.begin_path();
        _ = ctx.arc(
            p.position.x as f64,
            p.position.y as f64,
            p.radius as f64,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }
}
