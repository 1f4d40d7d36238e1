use crate::constants::{
    CONNECT_GRADIENT_FROM, CONNECT_GRADIENT_TO, CONNECT_LINE_WIDTH, PARTICLE_FILL, PARTICLE_RADIUS,
};
use site_core::{ParticleField, SiteError};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Immediate-mode 2D painter for the particle background.
pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Grabs the canvas' `2d` context. Failure here disables the background
    /// for the whole session; nothing else on the page depends on it.
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> Result<Self, SiteError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(SiteError::DrawingSurfaceUnavailable)?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    /// Clears the surface, draws each particle as a translucent disk, then
    /// strokes a gradient line for every pair closer than the connection
    /// radius. The pair pass is quadratic by design at the default count.
    pub fn draw(&self, field: &ParticleField) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);

        for p in &field.particles {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                p.pos.x as f64,
                p.pos.y as f64,
                PARTICLE_RADIUS,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.set_fill_style_str(PARTICLE_FILL);
            self.ctx.fill();
        }

        for (a, b) in field.connections() {
            let gradient = self.ctx.create_linear_gradient(
                a.x as f64,
                a.y as f64,
                b.x as f64,
                b.y as f64,
            );
            let _ = gradient.add_color_stop(0.0, CONNECT_GRADIENT_FROM);
            let _ = gradient.add_color_stop(1.0, CONNECT_GRADIENT_TO);
            self.ctx.begin_path();
            self.ctx.move_to(a.x as f64, a.y as f64);
            self.ctx.line_to(b.x as f64, b.y as f64);
            self.ctx.set_stroke_style_canvas_gradient(&gradient);
            self.ctx.set_line_width(CONNECT_LINE_WIDTH);
            self.ctx.stroke();
        }
    }
}
